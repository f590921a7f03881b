//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;
use std::path::PathBuf;

/// Run the config command.
pub fn run_config(
    action: &ConfigAction,
    mut settings: Settings,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let path = config_path.unwrap_or_else(Settings::default_config_path);

    match action {
        ConfigAction::Show => {
            let mut display = settings.clone();
            if !display.api_key.is_empty() {
                display.api_key = "[set]".to_string();
            }
            println!("{}", serde_json::to_string_pretty(&display)?);
        }

        ConfigAction::Set { key, value } => {
            match key.as_str() {
                "input_file_path" => settings.input_file_path = value.clone(),
                "output_path" => settings.output_path = value.clone(),
                "api_key" => settings.api_key = value.clone(),
                "prompt" => settings.prompt = value.clone(),
                "model" => settings.model = value.clone(),
                "delay_seconds" => {
                    settings.delay_seconds = value
                        .parse()
                        .map_err(|_| anyhow::anyhow!("delay_seconds must be a number"))?;
                }
                _ => {
                    Output::error(&format!("Unknown settings key: {}", key));
                    anyhow::bail!("unknown settings key");
                }
            }
            settings.save_to(&path)?;
            if key == "api_key" {
                Output::success("Set api_key (stored encrypted).");
            } else {
                Output::success(&format!("Set {} = {}", key, value));
            }
        }

        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }

    Ok(())
}
