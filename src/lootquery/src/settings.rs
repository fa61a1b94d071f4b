//! Evaluate settings
//!
//! The flat record of user-configured toggles that steers query-item
//! derivation, plus the per-stat-signature selection map. The record
//! round-trips through serde so it can live in a TOML settings file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-configured inclusion toggles for query-item derivation.
///
/// Field names follow the settings keys of the overlay that produces them;
/// the whole record is read-only input to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateSettings {
    /// Carry the source item level into the query (non-unique items only).
    pub evaluate_query_default_item_level: bool,
    /// Minimum size of the largest link group before links are preserved.
    pub evaluate_query_default_links: usize,
    /// Minimum socket count before socket colors are preserved.
    pub evaluate_query_default_colors: usize,
    pub evaluate_query_default_ultimatum: bool,
    pub evaluate_query_default_heist_required_levels: bool,
    pub evaluate_query_default_heist_contracts: bool,
    pub evaluate_query_default_heist_blueprints: bool,
    pub evaluate_query_default_miscs: bool,
    pub evaluate_query_default_attack: bool,
    pub evaluate_query_default_defense: bool,
    /// Keep the exact base type on normal/magic/rare gear instead of
    /// narrowing the query to stats only.
    pub evaluate_query_default_type: bool,
    pub evaluate_query_default_stats_unique: bool,
    pub evaluate_query_default_stats_enchants: bool,
    pub evaluate_query_default_stats_mod_icon: bool,
    /// Per-stat-signature selection, keyed `"<type>.<trade_id>"`.
    pub evaluate_query_default_stats: HashMap<String, bool>,
}

impl EvaluateSettings {
    /// Whether the per-stat map enables the given `"<type>.<trade_id>"` key.
    pub fn stat_enabled(&self, key: &str) -> bool {
        self.evaluate_query_default_stats
            .get(key)
            .copied()
            .unwrap_or(false)
    }
}

impl Default for EvaluateSettings {
    fn default() -> Self {
        Self {
            evaluate_query_default_item_level: false,
            evaluate_query_default_links: 5,
            evaluate_query_default_colors: 6,
            evaluate_query_default_ultimatum: false,
            evaluate_query_default_heist_required_levels: false,
            evaluate_query_default_heist_contracts: false,
            evaluate_query_default_heist_blueprints: false,
            evaluate_query_default_miscs: true,
            evaluate_query_default_attack: true,
            evaluate_query_default_defense: true,
            evaluate_query_default_type: false,
            evaluate_query_default_stats_unique: true,
            evaluate_query_default_stats_enchants: true,
            evaluate_query_default_stats_mod_icon: true,
            evaluate_query_default_stats: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EvaluateSettings::default();
        assert_eq!(settings.evaluate_query_default_links, 5);
        assert_eq!(settings.evaluate_query_default_colors, 6);
        assert!(settings.evaluate_query_default_miscs);
        assert!(!settings.evaluate_query_default_type);
        assert!(settings.evaluate_query_default_stats.is_empty());
    }

    #[test]
    fn test_stat_enabled() {
        let mut settings = EvaluateSettings::default();
        settings
            .evaluate_query_default_stats
            .insert("explicit.stat_3299347043".into(), true);
        settings
            .evaluate_query_default_stats
            .insert("explicit.stat_1050105434".into(), false);

        assert!(settings.stat_enabled("explicit.stat_3299347043"));
        assert!(!settings.stat_enabled("explicit.stat_1050105434"));
        assert!(!settings.stat_enabled("implicit.stat_3299347043"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut settings = EvaluateSettings::default();
        settings.evaluate_query_default_links = 6;
        settings.evaluate_query_default_item_level = true;
        settings
            .evaluate_query_default_stats
            .insert("enchant.stat_2954116742".into(), true);

        let text = toml::to_string(&settings).unwrap();
        let parsed: EvaluateSettings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: EvaluateSettings =
            toml::from_str("evaluate_query_default_links = 3\n").unwrap();
        assert_eq!(parsed.evaluate_query_default_links, 3);
        assert_eq!(parsed.evaluate_query_default_colors, 6);
        assert!(parsed.evaluate_query_default_attack);
    }
}
