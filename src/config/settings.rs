//! Persisted settings for tldw.
//!
//! Settings live in a JSON file under the per-application config directory.
//! The API key is encrypted before it touches disk and decrypted on load;
//! everything else is stored as-is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::secrets;

/// Fixed delay between summarization requests, in seconds.
const DEFAULT_DELAY_SECONDS: u64 = 15;

/// Persisted application settings.
///
/// Mirrors the last-used values of a run: input file, output directory,
/// API key, custom prompt, and model choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the text file containing video URLs.
    pub input_file_path: String,
    /// Directory where summary files are written.
    pub output_path: String,
    /// Claude API key. Plaintext in memory, encrypted at rest.
    pub api_key: String,
    /// Custom summarization instruction. Empty means the default prompt.
    pub prompt: String,
    /// Model name (haiku, sonnet, opus).
    pub model: String,
    /// Pause between successful summarizations, in seconds.
    pub delay_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_file_path: String::new(),
            output_path: String::new(),
            api_key: String::new(),
            prompt: String::new(),
            model: "haiku".to_string(),
            delay_seconds: DEFAULT_DELAY_SECONDS,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or the default location if None.
    ///
    /// A missing file yields default settings. The stored API key is
    /// decrypted with the key file kept beside the settings file.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if !config_path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let mut settings: Settings = serde_json::from_str(&content)?;

        if !settings.api_key.is_empty() {
            let key = secrets::load_or_generate_key(&Self::key_path_for(&config_path))?;
            settings.api_key = secrets::decrypt(&settings.api_key, &key).map_err(|e| {
                crate::error::TldwError::Config(format!("Stored API key unreadable: {}", e))
            })?;
        }

        Ok(settings)
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path, encrypting the API key.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut on_disk = self.clone();
        if !on_disk.api_key.is_empty() {
            let key = secrets::load_or_generate_key(&Self::key_path_for(path))?;
            on_disk.api_key = secrets::encrypt(&on_disk.api_key, &key)?;
        }

        let content = serde_json::to_string_pretty(&on_disk)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tldw")
            .join("settings.json")
    }

    /// The encryption key file lives beside the settings file.
    fn key_path_for(config_path: &Path) -> PathBuf {
        config_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("key")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded output directory, defaulting to ./summaries.
    pub fn output_dir(&self) -> PathBuf {
        if self.output_path.is_empty() {
            PathBuf::from("summaries")
        } else {
            Self::expand_path(&self.output_path)
        }
    }
}
