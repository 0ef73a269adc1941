//! Chat-completion capability used to write summaries
//!
//! The summary core only depends on [`CompletionClient`]; the OpenAI
//! implementation lives in [`openai`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub mod openai;

pub use openai::OpenAiClient;

/// Failures of a single completion call
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("No API credential configured")]
    MissingCredential,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Completion API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to encode completion request: {0}")]
    Encode(String),

    #[error("Invalid completion response: {0}")]
    Decode(String),

    #[error("Completion request timed out after {0:?}")]
    Timeout(Duration),
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body of `POST /chat/completions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Response body of `POST /chat/completions`, reduced to what summaries need
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, trimmed. `None` when there is no usable text.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Response with a single choice carrying `content`
    pub fn from_text<S: Into<String>>(content: S) -> Self {
        Self {
            choices: vec![Choice {
                message: ChoiceMessage {
                    content: Some(content.into()),
                },
            }],
        }
    }
}

/// Remote text-completion capability
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Whether a usable credential is configured. Without one callers must not
    /// issue requests.
    fn has_credential(&self) -> bool;

    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError>;
}
