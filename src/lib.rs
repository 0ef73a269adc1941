//! `WxBrief` - pilot-friendly aviation weather summaries
//!
//! This library turns METAR, TAF, PIREP and SIGMET data into plain-language
//! briefings using a chat-completion model, with canned fallbacks when the
//! model cannot be reached.

pub mod api;
pub mod completion;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod summary;
pub mod web;

// Re-export core types for public API
pub use completion::{CompletionClient, CompletionError, OpenAiClient};
pub use config::WxBriefConfig;
pub use error::WxBriefError;
pub use models::{Report, ReportData, ReportKind};
pub use summary::{SummaryError, SummaryGenerator, SummaryOutcome, UnavailableReason};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WxBriefError>;
