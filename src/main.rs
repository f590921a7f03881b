//! tldw CLI entry point.

use anyhow::Result;
use clap::Parser;
use tldw::cli::commands::{self, SummarizeArgs};
use tldw::cli::{Cli, Commands};
use tldw::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("tldw={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load settings
    let config_path = cli.config.as_ref().map(std::path::PathBuf::from);
    let settings = Settings::load_from(config_path.as_ref())?;

    // Execute command
    match cli.command {
        Commands::Summarize {
            urls,
            input,
            output,
            model,
            prompt,
            api_key,
            zip,
            delay,
        } => {
            let args = SummarizeArgs {
                urls,
                input,
                output,
                model,
                prompt,
                api_key,
                zip,
                delay,
            };
            commands::run_summarize(args, settings, config_path).await?;
        }

        Commands::Config { action } => {
            commands::run_config(&action, settings, config_path)?;
        }
    }

    Ok(())
}
