//! Video reference parsing and transcript retrieval.
//!
//! Provides a trait-based interface so the orchestrator can be tested
//! against fake sources.

mod fetcher;

pub use fetcher::YoutubeFetcher;

use crate::error::Result;
use async_trait::async_trait;

/// Extract a video ID from a YouTube watch URL.
///
/// Returns the value of the `v` query parameter, or `None` for URLs that
/// cannot be parsed or carry no `v` parameter.
pub fn extract_video_id(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url.trim()).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

/// Canonical watch URL for a video ID.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Trait for transcript and title providers.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the plain-text transcript for a video.
    ///
    /// Every failure (network, no captions, private video) maps to
    /// [`crate::TldwError::TranscriptUnavailable`].
    async fn fetch_transcript(&self, video_id: &str) -> Result<String>;

    /// Fetch the video title. Failures propagate to the caller.
    async fn fetch_title(&self, video_id: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=abc123"),
            Some("abc123".to_string())
        );
        // Extra parameters don't matter, only `v` does.
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?t=42s&v=abc123&list=PL1"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_invalid() {
        assert_eq!(extract_video_id("https://youtube.com/not-a-video"), None);
        assert_eq!(extract_video_id("https://youtube.com/watch?v="), None);
        assert_eq!(extract_video_id("not a url at all"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }
}
