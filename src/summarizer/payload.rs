//! Structured summary payload validation and rendering.

use crate::error::{Result, TldwError};
use serde::{Deserialize, Serialize};

/// The JSON object the default prompt asks the model to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryPayload {
    /// Short descriptive title (2-4 words).
    pub title: String,
    /// Bullet-point summary lines.
    pub summary: Vec<String>,
}

impl SummaryPayload {
    /// Parse model output strictly. No repair is attempted; anything that is
    /// not the expected object is a [`TldwError::MalformedResponse`].
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text.trim())
            .map_err(|e| TldwError::MalformedResponse(e.to_string()))
    }

    /// Parse output produced behind an assistant `{` prefill.
    ///
    /// The API returns only the continuation, so the opening brace is
    /// restored before parsing unless the model echoed one anyway.
    pub fn parse_prefilled(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.starts_with('{') {
            Self::parse(trimmed)
        } else {
            Self::parse(&format!("{{{}", trimmed))
        }
    }

    /// Render the payload as the plain text written to the summary file.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push_str("\n\n");
        for line in &self.summary {
            let line = line.trim();
            if !line.starts_with('-') {
                out.push_str("- ");
            }
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
