//! Error types for tldw.

use thiserror::Error;

/// Library-level error type for tldw operations.
#[derive(Error, Debug)]
pub enum TldwError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid video reference: {0}")]
    InvalidReference(String),

    #[error("Transcript unavailable for {0}")]
    TranscriptUnavailable(String),

    #[error("Metadata lookup failed: {0}")]
    Metadata(String),

    #[error("Claude API error: {0}")]
    Api(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Credential encryption error: {0}")]
    Crypto(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for tldw operations.
pub type Result<T> = std::result::Result<T, TldwError>;
