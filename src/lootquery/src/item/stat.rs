//! Item stats and the stat back-reference graph.

use serde::{Deserialize, Serialize};

/// Where a stat line comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatType {
    Pseudo,
    Explicit,
    Implicit,
    Crafted,
    Fractured,
    Enchant,
    Veiled,
    Ultimatum,
    Scourge,
}

impl std::fmt::Display for StatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pseudo => write!(f, "pseudo"),
            Self::Explicit => write!(f, "explicit"),
            Self::Implicit => write!(f, "implicit"),
            Self::Crafted => write!(f, "crafted"),
            Self::Fractured => write!(f, "fractured"),
            Self::Enchant => write!(f, "enchant"),
            Self::Veiled => write!(f, "veiled"),
            Self::Ultimatum => write!(f, "ultimatum"),
            Self::Scourge => write!(f, "scourge"),
        }
    }
}

impl std::str::FromStr for StatType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pseudo" => Ok(Self::Pseudo),
            "explicit" => Ok(Self::Explicit),
            "implicit" => Ok(Self::Implicit),
            "crafted" => Ok(Self::Crafted),
            "fractured" => Ok(Self::Fractured),
            "enchant" => Ok(Self::Enchant),
            "veiled" => Ok(Self::Veiled),
            "ultimatum" => Ok(Self::Ultimatum),
            "scourge" => Ok(Self::Scourge),
            _ => Err(format!("Unknown stat type: {}", s)),
        }
    }
}

/// One stat line on an item.
///
/// `related` holds positions of other stats in the owning item's `stats`
/// sequence that this stat derives from or is linked to. The edges form a
/// graph, not a tree; cycles are legal input and the ancestry traversal in
/// the query engine guards against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStat {
    /// Stable stat identifier, e.g. `stat_3299347043`.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: StatType,
    /// Identifier used by the trading service, e.g. `explicit.stat_3299347043`.
    pub trade_id: String,
    /// Display name of the generating mod, if known.
    #[serde(default)]
    pub mod_name: Option<String>,
    /// Indices into the owning item's `stats` sequence.
    #[serde(default)]
    pub related: Vec<usize>,
}

impl ItemStat {
    /// The `"<type>.<trade_id>"` signature used to key per-stat settings.
    pub fn trade_key(&self) -> String {
        format!("{}.{}", self.kind, self.trade_id)
    }
}
