//! YouTube transcript and title retrieval over HTTP.

use super::{watch_url, TranscriptSource};
use crate::error::{Result, TldwError};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default timeout for YouTube requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches transcripts via the timedtext endpoint and titles via oEmbed.
pub struct YoutubeFetcher {
    client: reqwest::Client,
    base_url: String,
    language: String,
}

impl YoutubeFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: "https://www.youtube.com".to_string(),
            language: "en".to_string(),
        }
    }

    /// Override the caption language (default: en).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Override the endpoint base URL (tests, mirrors).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for YoutubeFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptSource for YoutubeFetcher {
    #[instrument(skip(self))]
    async fn fetch_transcript(&self, video_id: &str) -> Result<String> {
        let url = format!(
            "{}/api/timedtext?v={}&lang={}&fmt=json3",
            self.base_url, video_id, self.language
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TldwError::TranscriptUnavailable(format!("{}: {}", video_id, e)))?;

        // The endpoint answers 200 with an empty body when no captions
        // exist, so every parse failure means "unavailable" too.
        let body: Value = response
            .json()
            .await
            .map_err(|e| TldwError::TranscriptUnavailable(format!("{}: {}", video_id, e)))?;

        let text = body["events"]
            .as_array()
            .map(|events| {
                events
                    .iter()
                    .filter_map(|event| {
                        event["segs"].as_array().map(|segs| {
                            segs.iter()
                                .filter_map(|seg| seg["utf8"].as_str())
                                .collect::<Vec<_>>()
                                .join("")
                        })
                    })
                    .filter(|s| !s.trim().is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(TldwError::TranscriptUnavailable(format!(
                "{}: no captions",
                video_id
            )));
        }

        debug!("Fetched transcript for {} ({} chars)", video_id, text.len());
        Ok(text)
    }

    #[instrument(skip(self))]
    async fn fetch_title(&self, video_id: &str) -> Result<String> {
        let url = format!(
            "{}/oembed?url={}&format=json",
            self.base_url,
            watch_url(video_id)
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(TldwError::Metadata(format!(
                "oEmbed returned {} for {}",
                response.status(),
                video_id
            )));
        }

        let body: Value = response.json().await?;
        body["title"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| TldwError::Metadata(format!("No title in oEmbed response for {}", video_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_transcript_joins_segments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/timedtext"))
            .and(query_param("v", "abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "events": [
                    {"segs": [{"utf8": "Hello"}, {"utf8": " world"}]},
                    {"tStartMs": 1200},
                    {"segs": [{"utf8": "second line"}]}
                ]
            })))
            .mount(&server)
            .await;

        let fetcher = YoutubeFetcher::new().with_base_url(server.uri());
        let transcript = fetcher.fetch_transcript("abc123").await.unwrap();
        assert_eq!(transcript, "Hello world second line");
    }

    #[tokio::test]
    async fn test_fetch_transcript_no_captions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/timedtext"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&server)
            .await;

        let fetcher = YoutubeFetcher::new().with_base_url(server.uri());
        let result = fetcher.fetch_transcript("abc123").await;
        assert!(matches!(result, Err(TldwError::TranscriptUnavailable(_))));
    }

    #[tokio::test]
    async fn test_fetch_transcript_empty_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/timedtext"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"events": []})))
            .mount(&server)
            .await;

        let fetcher = YoutubeFetcher::new().with_base_url(server.uri());
        let result = fetcher.fetch_transcript("abc123").await;
        assert!(matches!(result, Err(TldwError::TranscriptUnavailable(_))));
    }

    #[tokio::test]
    async fn test_fetch_title() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oembed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "title": "Intro to Rust",
                "author_name": "Some Channel"
            })))
            .mount(&server)
            .await;

        let fetcher = YoutubeFetcher::new().with_base_url(server.uri());
        let title = fetcher.fetch_title("abc123").await.unwrap();
        assert_eq!(title, "Intro to Rust");
    }

    #[tokio::test]
    async fn test_fetch_title_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oembed"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = YoutubeFetcher::new().with_base_url(server.uri());
        let result = fetcher.fetch_title("gone").await;
        assert!(matches!(result, Err(TldwError::Metadata(_))));
    }
}
