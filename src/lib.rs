//! tldw - YouTube Video Summarization
//!
//! A CLI tool for turning YouTube videos into short, readable summaries.
//!
//! The name comes from "too long; didn't watch."
//!
//! # Overview
//!
//! tldw allows you to:
//! - Fetch transcripts for a batch of YouTube videos
//! - Summarize each transcript with Claude
//! - Write one summary file per video, or bundle them into a ZIP archive
//! - Keep your API key encrypted at rest alongside persisted settings
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Settings persistence and prompt templates
//! - `youtube` - Video reference parsing and transcript retrieval
//! - `summarizer` - Claude summarization client
//! - `orchestrator` - Batch pipeline coordination
//! - `pacing` - Inter-request rate limiting
//! - `output` - Summary files and ZIP archives
//! - `secrets` - API key encryption at rest
//!
//! # Example
//!
//! ```rust,no_run
//! use tldw::config::Settings;
//! use tldw::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(&settings, "sk-ant-...")?;
//!
//!     let urls = vec!["https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()];
//!     let batch = orchestrator.process(&urls).await?;
//!     println!("Summarized {} videos", batch.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod pacing;
pub mod secrets;
pub mod summarizer;
pub mod youtube;

pub use error::{Result, TldwError};
