//! CLI argument definitions for lootquery
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lootquery")]
#[command(about = "Derive trade queries from extracted item records", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the default and query items from an item record
    Evaluate {
        /// Path to the item record (JSON)
        #[arg(short, long)]
        item: PathBuf,

        /// Evaluate settings file (TOML); defaults to the user settings file
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Print the default item instead of the query item
        #[arg(long)]
        default_item: bool,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the largest contiguous linked socket group of an item
    Links {
        /// Path to the item record (JSON)
        #[arg(short, long)]
        item: PathBuf,
    },

    /// Print the active evaluate settings as TOML
    Settings {
        /// Print the settings file path instead of the contents
        #[arg(long)]
        path: bool,

        /// Evaluate settings file (TOML); defaults to the user settings file
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
}
