//! Summarize command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use crate::output::{write_summary, zip_batch};
use anyhow::Result;
use std::path::PathBuf;

/// Flags accepted by the summarize command.
#[derive(Debug, Default)]
pub struct SummarizeArgs {
    pub urls: Vec<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub model: Option<String>,
    pub prompt: Option<String>,
    pub api_key: Option<String>,
    pub zip: Option<String>,
    pub delay: Option<u64>,
}

/// Run the summarize command.
pub async fn run_summarize(
    args: SummarizeArgs,
    mut settings: Settings,
    config_path: Option<PathBuf>,
) -> Result<()> {
    // Fold command-line overrides into the settings so this run uses them
    // and they persist as the last-used values afterwards.
    if let Some(input) = &args.input {
        settings.input_file_path = input.clone();
    }
    if let Some(output) = &args.output {
        settings.output_path = output.clone();
    }
    if let Some(model) = &args.model {
        settings.model = model.clone();
    }
    if let Some(prompt) = &args.prompt {
        settings.prompt = prompt.clone();
    }
    if let Some(api_key) = &args.api_key {
        settings.api_key = api_key.clone();
    }
    if let Some(delay) = args.delay {
        settings.delay_seconds = delay;
    }

    let urls = resolve_urls(&args.urls, &settings)?;
    if urls.is_empty() {
        Output::error("No video URLs provided.");
        Output::info("Pass URLs as arguments or a file via --input.");
        anyhow::bail!("no URLs to process");
    }

    if settings.api_key.is_empty() {
        Output::error("No API key provided.");
        Output::info("Use --api-key, ANTHROPIC_API_KEY, or 'tldw config set api_key <key>'.");
        anyhow::bail!("missing API key");
    }

    let orchestrator = Orchestrator::new(&settings, &settings.api_key)?;

    Output::info(&format!(
        "Summarizing {} video(s) with {}...",
        urls.len(),
        settings.model
    ));
    let spinner = Output::spinner("Processing batch...");
    let batch = orchestrator.process(&urls).await?;
    spinner.finish_and_clear();

    let failed = urls.len() - batch.len();
    if batch.is_empty() {
        Output::warning("No summaries produced.");
    } else if let Some(zip_path) = &args.zip {
        let bytes = zip_batch(&batch)?;
        std::fs::write(zip_path, &bytes)?;
        Output::success(&format!(
            "Wrote {} summaries to archive {}",
            batch.len(),
            zip_path
        ));
    } else {
        let dir = settings.output_dir();
        for entry in batch.iter() {
            let base = entry
                .file_name
                .strip_suffix(".txt")
                .unwrap_or(&entry.file_name);
            let path = write_summary(&entry.content, base, &dir)?;
            Output::success(&format!("Wrote {}", path.display()));
        }
    }

    if failed > 0 {
        Output::warning(&format!("{} video(s) skipped or failed; see log.", failed));
    }

    // Persist last-used values; a failure here shouldn't fail the run.
    let save_result = match &config_path {
        Some(path) => settings.save_to(path),
        None => settings.save(),
    };
    if let Err(e) = save_result {
        tracing::warn!("Failed to persist settings: {}", e);
    }

    Ok(())
}

/// URLs from the command line, or from the configured input file.
fn resolve_urls(inline: &[String], settings: &Settings) -> Result<Vec<String>> {
    if !inline.is_empty() {
        return Ok(inline.to_vec());
    }

    if settings.input_file_path.is_empty() {
        return Ok(Vec::new());
    }

    let path = Settings::expand_path(&settings.input_file_path);
    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;

    Ok(content
        .split_whitespace()
        .map(|s| s.to_string())
        .collect())
}
