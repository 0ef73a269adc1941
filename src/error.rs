//! Error types and handling for the `WxBrief` application

use thiserror::Error;

/// Main error type for the `WxBrief` application
#[derive(Error, Debug)]
pub enum WxBriefError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Completion backend setup errors
    #[error("Completion client error: {message}")]
    Client { message: String },
}

impl WxBriefError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new completion client error
    pub fn client<S: Into<String>>(message: S) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WxBriefError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            WxBriefError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WxBriefError::Client { .. } => {
                "Unable to set up the summary backend. Please check the OpenAI settings."
                    .to_string()
            }
        }
    }
}
