//! CLI module for tldw.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// tldw - YouTube Video Summarization
///
/// Fetches transcripts for a batch of YouTube videos and summarizes each
/// one with Claude. The name comes from "too long; didn't watch."
#[derive(Parser, Debug)]
#[command(name = "tldw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to settings file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a batch of YouTube videos
    Summarize {
        /// Video URLs (reads --input file when omitted)
        urls: Vec<String>,

        /// Text file with one URL per line
        #[arg(short, long)]
        input: Option<String>,

        /// Directory for summary files
        #[arg(short, long)]
        output: Option<String>,

        /// Model to use (haiku, sonnet, opus)
        #[arg(short, long)]
        model: Option<String>,

        /// Custom summarization instruction (replaces the default prompt)
        #[arg(short, long)]
        prompt: Option<String>,

        /// Claude API key
        #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Write a single ZIP archive to this path instead of summary files
        #[arg(long)]
        zip: Option<String>,

        /// Seconds to pause between summarizations
        #[arg(long)]
        delay: Option<u64>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current settings (API key redacted)
    Show,

    /// Set a settings value
    Set {
        /// Settings key (input_file_path, output_path, api_key, prompt, model, delay_seconds)
        key: String,
        /// Value to store
        value: String,
    },

    /// Show the settings file path
    Path,
}
