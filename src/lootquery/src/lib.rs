//! # lootquery
//!
//! Trade query derivation for extracted game items.
//!
//! This library provides functionality to:
//! - Model fully described item records (sockets, stats, typed property domains)
//! - Hold the user's evaluate settings, including the per-stat selection map
//! - Derive a minimal *default item* and an enriched *query item* from a
//!   source item, for use against a trading service
//! - Count socket link groups and look up trade-UI mod icons
//!
//! ## Example
//!
//! ```
//! use lootquery::{
//!     EvaluateSettings, Item, ItemCategory, ItemRarity, ItemSocket, QuerySynthesizer,
//!     SocketColor,
//! };
//!
//! # fn main() -> Result<(), lootquery::SynthesisError> {
//! let item = Item {
//!     type_id: Some("vaal-regalia".into()),
//!     category: ItemCategory::new("armour.chest"),
//!     rarity: ItemRarity::Rare,
//!     sockets: vec![
//!         ItemSocket { color: Some(SocketColor::Blue), linked: Some(0) },
//!         ItemSocket { color: Some(SocketColor::Blue), linked: Some(0) },
//!     ],
//!     ..Item::default()
//! };
//!
//! let result = QuerySynthesizer::default().synthesize(&item, &EvaluateSettings::default())?;
//!
//! // The query item keeps the socket count but narrows nothing else here.
//! assert_eq!(result.query_item.sockets.len(), 2);
//! // Rare gear is queried by stats, so the exact base type is dropped.
//! assert!(result.query_item.type_id.is_none());
//! # Ok(())
//! # }
//! ```

pub mod icons;
pub mod item;
pub mod query;
pub mod settings;
pub mod sockets;

// Re-export commonly used items
#[doc(inline)]
pub use icons::{IconLookup, ModIcon, ModIconRegistry};
#[doc(inline)]
pub use item::{
    Influences, Item, ItemCategory, ItemProperties, ItemRarity, ItemSocket, ItemStat, SocketColor,
    StatType,
};
#[doc(inline)]
pub use query::{QuerySynthesizer, SynthesisError, SynthesizedQuery, SOCKET_RELATED_STAT_IDS};
#[doc(inline)]
pub use settings::EvaluateSettings;
#[doc(inline)]
pub use sockets::{LinkCounter, SocketLinkService};
