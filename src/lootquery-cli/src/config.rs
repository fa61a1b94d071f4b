//! Settings file handling for the lootquery CLI

use anyhow::{Context, Result};
use lootquery::EvaluateSettings;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the user's evaluate settings file
pub fn settings_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("lootquery");

    Ok(config_dir.join("evaluate.toml"))
}

/// Load settings from the given file, or from the user settings file, or
/// fall back to defaults if neither exists
pub fn load(path: Option<&Path>) -> Result<EvaluateSettings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => settings_path()?,
    };

    if !path.exists() {
        return Ok(EvaluateSettings::default());
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;

    toml::from_str(&contents).context("Failed to parse settings file")
}
