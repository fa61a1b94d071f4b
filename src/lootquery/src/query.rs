//! Query-item synthesis.
//!
//! Derives two fresh item records from a source item and the user's
//! evaluate settings: a *default item* carrying only the baseline identity
//! and classification, and a *query item* enriched with exactly the fields
//! the user wants to search by. The source item is never mutated; both
//! outputs are owned by the caller and share nothing with engine state.

mod properties;
mod sockets;
mod stats;

pub use self::sockets::SOCKET_RELATED_STAT_IDS;

use thiserror::Error;

use crate::icons::{IconLookup, ModIconRegistry};
use crate::item::{HeistProperties, Item, ItemProperties, ItemSocket, UltimatumProperties};
use crate::settings::EvaluateSettings;
use crate::sockets::{LinkCounter, SocketLinkService};

/// Errors surfaced by query synthesis.
///
/// All inputs are assumed to come out of the item-parsing stage structurally
/// valid; the one malformation the typed model can still express is a stat
/// back-reference pointing outside the stats sequence.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("stat {stat_id} references related stat index {index} outside the stats sequence (len {len})")]
    DanglingStatRef {
        stat_id: String,
        index: usize,
        len: usize,
    },
}

/// The two items produced by one synthesis call.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedQuery {
    /// Minimal baseline item.
    pub default_item: Item,
    /// Baseline enriched with the user's search criteria.
    pub query_item: Item,
}

/// Rules-driven derivation of default and query items.
///
/// The two collaborators are narrow read-only services; the bundled
/// implementations are available through [`QuerySynthesizer::default`].
pub struct QuerySynthesizer<'a> {
    links: &'a dyn LinkCounter,
    icons: &'a dyn IconLookup,
}

impl<'a> QuerySynthesizer<'a> {
    pub fn new(links: &'a dyn LinkCounter, icons: &'a dyn IconLookup) -> Self {
        Self { links, icons }
    }

    /// Derive the default and query items for `item` under `settings`.
    ///
    /// Either returns both complete items or fails on structurally malformed
    /// input; no partial result is ever produced.
    pub fn synthesize(
        &self,
        item: &Item,
        settings: &EvaluateSettings,
    ) -> Result<SynthesizedQuery, SynthesisError> {
        validate_stat_refs(item)?;

        let default_item = build_default_item(item);
        let mut query_item = default_item.clone();

        // Fractured and synthesised would narrow the query too much.
        query_item.influences.fractured = false;
        query_item.influences.synthesised = false;

        properties::select_item_level(item, &mut query_item, settings);
        sockets::derive_sockets(item, &mut query_item, self.links, settings);
        properties::select_properties(item, &mut query_item, settings);
        stats::select_stats(item, &mut query_item, self.icons, settings);

        Ok(SynthesizedQuery {
            default_item,
            query_item,
        })
    }
}

impl Default for QuerySynthesizer<'static> {
    fn default() -> Self {
        Self::new(&SocketLinkService, &ModIconRegistry)
    }
}

/// Baseline whitelist copy of the source item.
///
/// `mirrored` stays unset: copying it would auto-select the flag and narrow
/// the search too much. Sockets keep their count but lose color and links;
/// stats, damage, and requirements start empty.
fn build_default_item(item: &Item) -> Item {
    Item {
        name_id: item.name_id.clone(),
        type_id: item.type_id.clone(),
        category: item.category.clone(),
        rarity: item.rarity,
        corrupted: item.corrupted,
        mirrored: false,
        unmodifiable: item.unmodifiable,
        unidentified: item.unidentified,
        veiled: item.veiled,
        blighted: item.blighted,
        blight_ravaged: item.blight_ravaged,
        relic: item.relic,
        influences: item.influences,
        level: None,
        damage: None,
        requirements: None,
        sockets: vec![ItemSocket::default(); item.sockets.len()],
        properties: ItemProperties {
            quality_type: item.properties.quality_type,
            ultimatum: Some(UltimatumProperties::default()),
            heist: Some(HeistProperties::default()),
            ..ItemProperties::default()
        },
        stats: Vec::new(),
    }
}

fn validate_stat_refs(item: &Item) -> Result<(), SynthesisError> {
    let len = item.stats.len();
    for stat in item.stats.iter().flatten() {
        for &index in &stat.related {
            if index >= len {
                return Err(SynthesisError::DanglingStatRef {
                    stat_id: stat.id.clone(),
                    index,
                    len,
                });
            }
        }
    }
    Ok(())
}
