//! Inter-request pacing.
//!
//! The upstream API is rate limited, so the orchestrator pauses after each
//! successful summarization. The delay comes from configuration; tests run
//! under a paused tokio clock.

use std::time::Duration;

/// Fixed-delay pacer.
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    /// Disabled pacer for tests and dry runs.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the configured delay.
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_pause_waits_configured_delay() {
        let pacer = Pacer::from_secs(15);
        let start = tokio::time::Instant::now();
        pacer.pause().await;
        assert_eq!(start.elapsed(), Duration::from_secs(15));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_pacer_returns_immediately() {
        let pacer = Pacer::disabled();
        let start = tokio::time::Instant::now();
        pacer.pause().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
