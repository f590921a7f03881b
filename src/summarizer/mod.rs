//! Transcript summarization.
//!
//! Defines the model selection, the request shape, and the `Summarizer`
//! trait implemented by the Claude client.

mod claude;
mod payload;

pub use claude::ClaudeClient;
pub use payload::SummaryPayload;

use crate::error::Result;
use async_trait::async_trait;

/// Claude model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    #[default]
    Haiku,
    Sonnet,
    Opus,
}

impl Model {
    /// The upstream API model identifier.
    pub fn api_id(&self) -> &'static str {
        match self {
            Model::Haiku => "claude-3-haiku-20240307",
            Model::Sonnet => "claude-3-sonnet-20240229",
            Model::Opus => "claude-3-opus-20240229",
        }
    }
}

impl std::str::FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "haiku" => Ok(Model::Haiku),
            "sonnet" => Ok(Model::Sonnet),
            "opus" => Ok(Model::Opus),
            _ => Err(format!("Unknown model: {}", s)),
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Model::Haiku => write!(f, "haiku"),
            Model::Sonnet => write!(f, "sonnet"),
            Model::Opus => write!(f, "opus"),
        }
    }
}

/// Everything needed to summarize one transcript.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    /// Plain-text transcript.
    pub transcript: String,
    /// Video title, embedded in the user message.
    pub title: String,
    /// Model to use.
    pub model: Model,
    /// Custom instruction. None means the default structured prompt.
    pub instruction: Option<String>,
}

/// Trait for summary providers.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize a transcript, returning the text destined for the output file.
    async fn summarize(&self, request: &SummaryRequest) -> Result<String>;
}
