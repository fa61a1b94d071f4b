//! Typed item property domains.
//!
//! The game client reports item properties as one loose bag of unrelated
//! fields. Here every domain (gem, map, weapon, armour, ultimatum, heist,
//! incursion) is its own optional sub-record, so "is this domain present"
//! is an explicit question and each query rule takes a narrow input.

use serde::{Deserialize, Serialize};

use super::stat::ItemStat;

/// Quality kind of an item or gem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityType {
    #[default]
    Default,
    Anomalous,
    Divergent,
    Phantasmal,
}

/// Gem-specific properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GemProperties {
    pub level: Option<u8>,
    pub quality_type: Option<QualityType>,
    pub stored_experience: Option<u64>,
}

/// Map-specific properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapProperties {
    pub tier: Option<u8>,
    pub area_level: Option<u8>,
}

/// Weapon attack properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponProperties {
    pub attacks_per_second: Option<f64>,
    pub critical_strike_chance: Option<f64>,
}

/// Armour defence properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmourProperties {
    pub armour: Option<u32>,
    pub evasion_rating: Option<u32>,
    pub energy_shield: Option<u32>,
    pub ward: Option<u32>,
    pub block_chance: Option<u8>,
}

/// Ultimatum trial properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UltimatumProperties {
    pub challenge_type: Option<String>,
    pub reward_type: Option<String>,
    pub required_item: Option<String>,
    pub reward_unique: Option<String>,
}

/// A skill requirement on a heist contract or blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeistSkill {
    pub job: String,
    #[serde(default)]
    pub level: Option<u8>,
}

/// Heist contract / blueprint properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeistProperties {
    pub required_skills: Vec<HeistSkill>,
    pub objective_value: Option<String>,
    pub wings_revealed: Option<u8>,
    pub escape_routes: Option<u8>,
    pub reward_rooms: Option<u8>,
}

/// One room on an incursion temple item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncursionRoom {
    pub name: Option<String>,
    pub stat: Option<ItemStat>,
}

/// Incursion temple properties.
///
/// Room sequences keep their positions; a derived item marks filtered-out
/// rooms as `None` instead of shrinking the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncursionProperties {
    pub open_rooms: Vec<Option<IncursionRoom>>,
    pub closed_rooms: Vec<Option<IncursionRoom>>,
}

/// All property domains of an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemProperties {
    /// Quality percentage.
    pub quality: Option<u8>,
    pub quality_type: QualityType,
    pub gem: Option<GemProperties>,
    pub map: Option<MapProperties>,
    pub durability: Option<u16>,
    pub weapon: Option<WeaponProperties>,
    pub armour: Option<ArmourProperties>,
    pub ultimatum: Option<UltimatumProperties>,
    pub heist: Option<HeistProperties>,
    pub incursion: Option<IncursionProperties>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains_default_to_absent() {
        let properties = ItemProperties::default();
        assert!(properties.gem.is_none());
        assert!(properties.ultimatum.is_none());
        assert!(properties.incursion.is_none());
        assert_eq!(properties.quality_type, QualityType::Default);
    }

    #[test]
    fn test_heist_json_shape() {
        let heist: HeistProperties = serde_json::from_str(
            r#"{
                "required_skills": [{"job": "lockpicking", "level": 3}],
                "objective_value": "moderate",
                "wings_revealed": 2
            }"#,
        )
        .unwrap();
        assert_eq!(heist.required_skills.len(), 1);
        assert_eq!(heist.required_skills[0].job, "lockpicking");
        assert_eq!(heist.wings_revealed, Some(2));
        assert!(heist.escape_routes.is_none());
    }
}
