//! OpenAI-compatible chat-completion client
//!
//! Uses a `reqwest` client with an explicit timeout, wrapped in retry
//! middleware for transient failures (connection errors, 5xx, 429).

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

use super::{ChatCompletionRequest, ChatCompletionResponse, CompletionClient, CompletionError};
use crate::WxBriefError;
use crate::config::OpenAiConfig;

const USER_AGENT: &str = concat!("WxBrief/", env!("CARGO_PKG_VERSION"));

/// Client for `POST {base_url}/chat/completions`
pub struct OpenAiClient {
    http: ClientWithMiddleware,
    api_key: Option<String>,
    endpoint: String,
    timeout: Duration,
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("endpoint", &self.endpoint)
            .field("has_credential", &self.api_key.is_some())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create a client. `api_key` must already be resolved; `None` yields a
    /// client that refuses to send requests.
    pub fn new(api_key: Option<String>, config: &OpenAiConfig) -> crate::Result<Self> {
        let timeout = config.timeout();

        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WxBriefError::client(format!("Failed to create HTTP client: {e}")))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let http = ClientBuilder::new(inner)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            http,
            api_key,
            endpoint: chat_completions_url(&config.base_url),
            timeout,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn chat_completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip_all, fields(model = %request.model))]
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingCredential)?;

        let body =
            serde_json::to_vec(request).map_err(|e| CompletionError::Encode(e.to_string()))?;

        let start_time = Instant::now();
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| match e {
                reqwest_middleware::Error::Reqwest(err) if err.is_timeout() => {
                    CompletionError::Timeout(self.timeout)
                }
                other => CompletionError::Transport(other.to_string()),
            })?;

        let status = response.status();
        debug!(
            "Completion API responded {} in {:.3}s",
            status,
            start_time.elapsed().as_secs_f64()
        );

        let text = response
            .text()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!("Completion API request failed with HTTP {}", status.as_u16());
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| CompletionError::Decode(e.to_string()))
    }
}
