mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            item,
            settings,
            default_item,
            pretty,
        } => {
            commands::evaluate::handle(&item, settings.as_deref(), default_item, pretty)?;
        }

        Commands::Links { item } => {
            commands::links::handle(&item)?;
        }

        Commands::Settings { path, settings } => {
            commands::settings::handle(path, settings.as_deref())?;
        }
    }

    Ok(())
}
