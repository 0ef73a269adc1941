//! Pilot-friendly summaries of aviation weather reports
//!
//! [`SummaryGenerator`] templates a prompt per report kind, sends it to a
//! [`CompletionClient`] and returns the model's text. Remote failures are
//! answered with a canned fallback; a missing credential or an empty answer
//! yields no summary at all.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::completion::{
    ChatCompletionRequest, ChatMessage, CompletionClient, CompletionError, OpenAiClient,
};
use crate::config::{DEFAULT_MODEL, OpenAiConfig, WxBriefConfig};
use crate::models::{Report, ReportData};

pub mod credentials;
pub mod fallback;
pub mod prompts;

pub use credentials::{API_KEY_ENV, PLACEHOLDER_PREFIX, resolve_api_key};
pub use fallback::fallback_summary;
pub use prompts::{system_instruction, user_instruction};

/// Sampling temperature; low for factual, repeatable phrasing
pub const TEMPERATURE: f32 = 0.3;
/// Upper bound on generated tokens
pub const MAX_TOKENS: u32 = 600;

/// Why a summary attempt produced nothing
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("No OpenAI API key configured")]
    MissingCredential,

    #[error("Completion returned no usable text")]
    EmptyResponse,

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    MissingCredential,
    EmptyResponse,
}

/// Result of a summary request. Callers get text, canned text or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// Text written by the model, trimmed
    Generated(String),
    /// Canned text substituted after a remote failure
    Fallback(String),
    Unavailable(UnavailableReason),
}

impl SummaryOutcome {
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Generated(text) | Self::Fallback(text) => Some(text),
            Self::Unavailable(_) => None,
        }
    }

    /// Short status label used in API responses
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            Self::Generated(_) => "generated",
            Self::Fallback(_) => "fallback",
            Self::Unavailable(_) => "unavailable",
        }
    }
}

/// Request parameters fixed for the generator lifetime
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub model: String,
    /// Upper bound on one remote call, enforced on top of the transport timeout
    pub request_timeout: Duration,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&OpenAiConfig> for GeneratorSettings {
    fn from(config: &OpenAiConfig) -> Self {
        Self {
            model: config.model.clone(),
            request_timeout: config.timeout(),
        }
    }
}

/// Writes summaries through a shared completion client. Holds no per-call
/// state, so one instance can serve any number of concurrent callers.
pub struct SummaryGenerator {
    client: Arc<dyn CompletionClient>,
    settings: GeneratorSettings,
}

impl SummaryGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, settings: GeneratorSettings) -> Self {
        Self { client, settings }
    }

    /// Build a generator backed by [`OpenAiClient`].
    ///
    /// The key is resolved from `api_key`, then `OPENAI_API_KEY`, then the
    /// config file. Without a usable key the client is still created but no
    /// request is ever sent.
    pub fn from_config(api_key: Option<String>, config: &WxBriefConfig) -> crate::Result<Self> {
        let api_key = resolve_api_key(api_key, config.openai.api_key.as_deref());
        if api_key.is_none() {
            warn!("OpenAI API key not configured, summaries are disabled");
        }

        let client = OpenAiClient::new(api_key, &config.openai)?;
        Ok(Self::new(
            Arc::new(client),
            GeneratorSettings::from(&config.openai),
        ))
    }

    /// Whether summaries can be requested at all
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.client.has_credential()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// The completion request sent for `report`
    #[must_use]
    pub fn build_request(&self, report: &Report) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(system_instruction(&report.kind())),
                ChatMessage::user(user_instruction(report)),
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    /// One summary attempt with every failure kept apart.
    pub async fn try_generate(&self, report: &Report) -> Result<String, SummaryError> {
        if !self.client.has_credential() {
            return Err(SummaryError::MissingCredential);
        }

        let request = self.build_request(report);
        info!(
            "Generating summary for {} using model {}",
            report.kind().as_str(),
            self.settings.model
        );

        let timeout = self.settings.request_timeout;
        let response = tokio::time::timeout(timeout, self.client.create_chat_completion(&request))
            .await
            .map_err(|_| CompletionError::Timeout(timeout))??;

        response
            .first_text()
            .map(str::to_string)
            .ok_or(SummaryError::EmptyResponse)
    }

    /// Summarize `report`, recovering from remote failures with canned text.
    #[instrument(skip_all, fields(kind = %report.kind()))]
    pub async fn summarize(&self, report: &Report) -> SummaryOutcome {
        let kind = report.kind();
        match self.try_generate(report).await {
            Ok(text) => {
                info!("Generated {} summary successfully", kind);
                SummaryOutcome::Generated(text)
            }
            Err(SummaryError::MissingCredential) => {
                warn!("OpenAI API key not configured, cannot generate summary");
                SummaryOutcome::Unavailable(UnavailableReason::MissingCredential)
            }
            Err(SummaryError::EmptyResponse) => {
                warn!("No content returned from OpenAI for {} summary", kind);
                SummaryOutcome::Unavailable(UnavailableReason::EmptyResponse)
            }
            Err(SummaryError::Completion(e)) => {
                error!("Error generating {} summary: {}", kind, e);
                SummaryOutcome::Fallback(fallback_summary(report))
            }
        }
    }

    /// Summary text for `report_kind` and its fields, or `None` when no
    /// summary could be produced.
    pub async fn generate_summary(
        &self,
        report_kind: &str,
        report_data: &ReportData,
    ) -> Option<String> {
        let report = Report::from_parts(report_kind, report_data);
        self.summarize(&report).await.into_text()
    }
}
