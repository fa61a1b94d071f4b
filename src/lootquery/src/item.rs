//! Item data model
//!
//! Value records describing a fully parsed game item: identity,
//! classification, flags, influences, sockets, typed property domains, and
//! the stat sequence with its back-reference graph. Everything is owned and
//! `Clone`, so copies are structurally independent by construction.

pub mod properties;
pub mod socket;
pub mod stat;

use serde::{Deserialize, Serialize};

pub use properties::{
    ArmourProperties, GemProperties, HeistProperties, HeistSkill, IncursionProperties,
    IncursionRoom, ItemProperties, MapProperties, QualityType, UltimatumProperties,
    WeaponProperties,
};
pub use socket::{ItemSocket, SocketColor};
pub use stat::{ItemStat, StatType};

// ============================================================================
// Category
// ============================================================================

/// Hierarchical item category path, e.g. `weapon.sword` or `armour.helmet`.
///
/// Categories form a dotted hierarchy; rules only ever test whether a
/// category sits under one of the top-level branches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCategory(String);

impl ItemCategory {
    /// Top-level weapon branch
    pub const WEAPON: &'static str = "weapon";
    /// Top-level armour branch
    pub const ARMOUR: &'static str = "armour";
    /// Top-level accessory branch
    pub const ACCESSORY: &'static str = "accessory";
    /// Top-level gem branch
    pub const GEM: &'static str = "gem";
    /// Top-level map branch
    pub const MAP: &'static str = "map";

    /// Create a category from a dotted path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The raw dotted path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this category sits under the given branch prefix.
    pub fn starts_with(&self, branch: &str) -> bool {
        self.0.starts_with(branch)
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Rarity
// ============================================================================

/// Item rarity classes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemRarity {
    #[default]
    Normal,
    Magic,
    Rare,
    Unique,
    UniqueRelic,
    Gem,
    Currency,
    DivinationCard,
}

impl ItemRarity {
    /// Unique and relic-unique items are found by name, so several query
    /// rules skip them entirely.
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique | Self::UniqueRelic)
    }
}

impl std::fmt::Display for ItemRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Magic => write!(f, "magic"),
            Self::Rare => write!(f, "rare"),
            Self::Unique => write!(f, "unique"),
            Self::UniqueRelic => write!(f, "unique_relic"),
            Self::Gem => write!(f, "gem"),
            Self::Currency => write!(f, "currency"),
            Self::DivinationCard => write!(f, "divination_card"),
        }
    }
}

impl std::str::FromStr for ItemRarity {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "magic" => Ok(Self::Magic),
            "rare" => Ok(Self::Rare),
            "unique" => Ok(Self::Unique),
            "unique_relic" => Ok(Self::UniqueRelic),
            "gem" => Ok(Self::Gem),
            "currency" => Ok(Self::Currency),
            "divination_card" => Ok(Self::DivinationCard),
            _ => Err(format!("Unknown item rarity: {}", s)),
        }
    }
}

// ============================================================================
// Influences
// ============================================================================

/// Influence presence flags.
///
/// `fractured` and `synthesised` are carried here as well; the query engine
/// clears them on derived items because they narrow a search too much.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Influences {
    pub shaper: bool,
    pub elder: bool,
    pub crusader: bool,
    pub hunter: bool,
    pub redeemer: bool,
    pub warlord: bool,
    pub fractured: bool,
    pub synthesised: bool,
}

// ============================================================================
// Damage and requirements
// ============================================================================

/// Inclusive numeric range, e.g. a damage-per-second spread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: f64,
    pub max: f64,
}

/// Weapon damage summary, present only for weapon-like items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDamage {
    pub physical_dps: Option<DamageRange>,
    pub elemental_dps: Option<DamageRange>,
    pub total_dps: Option<DamageRange>,
}

/// Attribute and level requirements to equip the item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRequirements {
    pub level: Option<u8>,
    pub strength: Option<u16>,
    pub dexterity: Option<u16>,
    pub intelligence: Option<u16>,
}

// ============================================================================
// Item
// ============================================================================

/// A fully described item record.
///
/// Source items come out of the upstream parsing stage with every stat slot
/// populated; items derived by the query engine reuse the same type and mark
/// deselected stats as `None` at their original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Unique name identifier; absent means "unrestricted" in a query item.
    pub name_id: Option<String>,
    /// Base type identifier; absent means "unrestricted" in a query item.
    pub type_id: Option<String>,
    pub category: ItemCategory,
    pub rarity: ItemRarity,
    pub corrupted: bool,
    pub mirrored: bool,
    pub unmodifiable: bool,
    pub unidentified: bool,
    pub veiled: bool,
    pub blighted: bool,
    pub blight_ravaged: bool,
    pub relic: bool,
    pub influences: Influences,
    /// Item level.
    pub level: Option<u8>,
    pub damage: Option<ItemDamage>,
    pub requirements: Option<ItemRequirements>,
    pub sockets: Vec<ItemSocket>,
    pub properties: ItemProperties,
    /// Ordered stat slots; `None` is the absence marker used by derived items.
    pub stats: Vec<Option<ItemStat>>,
}
