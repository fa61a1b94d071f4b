//! Command handlers for the lootquery CLI

pub mod evaluate;
pub mod links;
pub mod settings;

use anyhow::{Context, Result};
use lootquery::Item;
use std::fs;
use std::path::Path;

/// Read an item record from a JSON file
pub(crate) fn read_item(path: &Path) -> Result<Item> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read item from {}", path.display()))?;

    serde_json::from_str(&contents).context("Failed to parse item record")
}
