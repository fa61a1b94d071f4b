//! Links command - report the largest contiguous linked socket group

use anyhow::Result;
use lootquery::{LinkCounter, SocketLinkService};
use std::path::Path;

pub fn handle(item_path: &Path) -> Result<()> {
    let item = super::read_item(item_path)?;
    let count = SocketLinkService.link_count(&item.sockets);

    println!("Sockets: {}", item.sockets.len());
    println!("Largest link group: {}", count);

    Ok(())
}
