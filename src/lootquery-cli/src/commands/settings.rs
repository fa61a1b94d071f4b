//! Settings command - show the active evaluate settings

use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(show_path: bool, settings_path: Option<&Path>) -> Result<()> {
    if show_path {
        let path = match settings_path {
            Some(path) => path.to_path_buf(),
            None => crate::config::settings_path()?,
        };
        println!("{}", path.display());
        return Ok(());
    }

    let settings = crate::config::load(settings_path)?;
    let toml = toml::to_string_pretty(&settings).context("Failed to serialize settings")?;
    print!("{}", toml);

    Ok(())
}
