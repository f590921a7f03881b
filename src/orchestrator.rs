//! Batch pipeline orchestrator.
//!
//! Processes a list of video URLs strictly sequentially: resolve the video
//! id, fetch transcript and title, summarize, and collect the result under
//! its output file name. One bad URL never aborts the batch.

use crate::config::Settings;
use crate::error::{Result, TldwError};
use crate::output::sanitize_title;
use crate::pacing::Pacer;
use crate::summarizer::{ClaudeClient, Model, Summarizer, SummaryRequest};
use crate::youtube::{extract_video_id, TranscriptSource, YoutubeFetcher};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// The main orchestrator for the summarization pipeline.
pub struct Orchestrator {
    source: Arc<dyn TranscriptSource>,
    summarizer: Arc<dyn Summarizer>,
    pacer: Pacer,
    model: Model,
    instruction: Option<String>,
}

impl Orchestrator {
    /// Create an orchestrator from settings plus a resolved API key.
    pub fn new(settings: &Settings, api_key: &str) -> Result<Self> {
        if api_key.is_empty() {
            return Err(TldwError::InvalidInput("No API key provided".to_string()));
        }

        let model = settings.model.parse().unwrap_or(Model::Haiku);
        let instruction = if settings.prompt.trim().is_empty() {
            None
        } else {
            Some(settings.prompt.clone())
        };

        Ok(Self {
            source: Arc::new(YoutubeFetcher::new()),
            summarizer: Arc::new(ClaudeClient::new(api_key)),
            pacer: Pacer::from_secs(settings.delay_seconds),
            model,
            instruction,
        })
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        source: Arc<dyn TranscriptSource>,
        summarizer: Arc<dyn Summarizer>,
        pacer: Pacer,
        model: Model,
        instruction: Option<String>,
    ) -> Self {
        Self {
            source,
            summarizer,
            pacer,
            model,
            instruction,
        }
    }

    /// Process every URL in order, isolating per-URL failures.
    ///
    /// Invalid references and missing transcripts are logged and skipped;
    /// so is any other per-URL error. The batch always completes with
    /// whatever succeeded.
    #[instrument(skip(self, urls), fields(count = urls.len()))]
    pub async fn process(&self, urls: &[String]) -> Result<BatchResult> {
        let mut batch = BatchResult::default();

        for url in urls {
            let url = url.trim();
            if url.is_empty() {
                continue;
            }

            match self.process_url(url).await {
                Ok(entry) => {
                    info!("Summarized {} -> {}", url, entry.file_name);
                    batch.entries.push(entry);
                    self.pacer.pause().await;
                }
                Err(e @ (TldwError::InvalidReference(_) | TldwError::TranscriptUnavailable(_))) => {
                    warn!("Skipping {}: {}", url, e);
                }
                Err(e) => {
                    error!("Error processing {}: {}", url, e);
                }
            }
        }

        Ok(batch)
    }

    /// Run the full pipeline for a single URL.
    async fn process_url(&self, url: &str) -> Result<SummaryEntry> {
        let video_id = extract_video_id(url)
            .ok_or_else(|| TldwError::InvalidReference(url.to_string()))?;

        let transcript = self.source.fetch_transcript(&video_id).await?;
        let title = self.source.fetch_title(&video_id).await?;

        let request = SummaryRequest {
            transcript,
            title: title.clone(),
            model: self.model,
            instruction: self.instruction.clone(),
        };
        let content = self.summarizer.summarize(&request).await?;

        Ok(SummaryEntry {
            file_name: format!("{}-summary.txt", sanitize_title(&title)),
            content,
        })
    }
}

/// One summarized video: output file name plus content.
#[derive(Debug, Clone)]
pub struct SummaryEntry {
    pub file_name: String,
    pub content: String,
}

/// Results of a batch run, in input URL order.
///
/// File names are not deduplicated here; the writer resolves collisions on
/// disk and the archive keeps duplicates as-is.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub entries: Vec<SummaryEntry>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SummaryEntry> {
        self.entries.iter()
    }
}
