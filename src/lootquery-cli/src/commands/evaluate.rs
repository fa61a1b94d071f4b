//! Evaluate command - derive default and query items from an item record

use anyhow::{Context, Result};
use lootquery::QuerySynthesizer;
use std::path::Path;

pub fn handle(
    item_path: &Path,
    settings_path: Option<&Path>,
    default_item: bool,
    pretty: bool,
) -> Result<()> {
    let item = super::read_item(item_path)?;
    let settings = crate::config::load(settings_path)?;

    let result = QuerySynthesizer::default()
        .synthesize(&item, &settings)
        .context("Failed to derive query item")?;

    let output = if default_item {
        &result.default_item
    } else {
        &result.query_item
    };

    let json = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    println!("{}", json);

    Ok(())
}
