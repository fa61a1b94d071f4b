//! Stat selection rule.
//!
//! Decides, per stat slot, whether the stat is retained in the query item.
//! Deselected slots become `None` at their original position so indices stay
//! aligned with the surrounding UI.

use std::collections::HashSet;

use crate::icons::IconLookup;
use crate::item::{Item, ItemStat, StatType};
use crate::settings::EvaluateSettings;

pub(super) fn select_stats(
    source: &Item,
    query: &mut Item,
    icons: &dyn IconLookup,
    settings: &EvaluateSettings,
) {
    if source.rarity.is_unique() && settings.evaluate_query_default_stats_unique {
        // Corrupted, mirrored, and unmodifiable uniques cannot be re-rolled,
        // so every stat is part of what the user is searching for. Otherwise
        // implicit-derived stats are dropped: the base type already covers
        // them.
        let select_all = source.corrupted || source.mirrored || source.unmodifiable;
        query.stats = source
            .stats
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.as_ref().and_then(|stat| {
                    (select_all || !is_related_to_an_implicit_stat(&source.stats, index))
                        .then(|| stat.clone())
                })
            })
            .collect();
    } else {
        query.stats = source
            .stats
            .iter()
            .map(|slot| {
                slot.as_ref().and_then(|stat| {
                    let selected = auto_selected(stat, icons, settings)
                        || settings.stat_enabled(&stat.trade_key());
                    selected.then(|| stat.clone())
                })
            })
            .collect();
    }
}

/// Enchants and mods with a trade-UI icon are selected without consulting
/// the per-stat map.
fn auto_selected(stat: &ItemStat, icons: &dyn IconLookup, settings: &EvaluateSettings) -> bool {
    (stat.kind == StatType::Enchant && settings.evaluate_query_default_stats_enchants)
        || (settings.evaluate_query_default_stats_mod_icon
            && icons.get(stat.mod_name.as_deref()).is_some())
}

/// Whether the stat at `index` is an implicit or derives from one through
/// the `related` graph.
///
/// The graph may contain cycles; each index is visited at most once per
/// top-level call and a revisit terminates that branch as non-implicit.
pub(crate) fn is_related_to_an_implicit_stat(stats: &[Option<ItemStat>], index: usize) -> bool {
    let mut visited = HashSet::new();
    related_to_implicit(stats, index, &mut visited)
}

fn related_to_implicit(
    stats: &[Option<ItemStat>],
    index: usize,
    visited: &mut HashSet<usize>,
) -> bool {
    if !visited.insert(index) {
        return false;
    }
    let Some(Some(stat)) = stats.get(index) else {
        return false;
    };
    if stat.kind == StatType::Implicit {
        return true;
    }
    stat.related
        .iter()
        .any(|&related| related_to_implicit(stats, related, visited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemRarity;
    use crate::query::QuerySynthesizer;

    fn stat(id: &str, kind: StatType, related: Vec<usize>) -> Option<ItemStat> {
        Some(ItemStat {
            id: id.to_string(),
            kind,
            trade_id: id.to_string(),
            mod_name: None,
            related,
        })
    }

    fn synthesize(item: &Item, settings: &EvaluateSettings) -> Item {
        QuerySynthesizer::default()
            .synthesize(item, settings)
            .unwrap()
            .query_item
    }

    #[test]
    fn test_implicit_ancestry_direct() {
        let stats = vec![stat("a", StatType::Implicit, vec![])];
        assert!(is_related_to_an_implicit_stat(&stats, 0));
    }

    #[test]
    fn test_implicit_ancestry_transitive() {
        let stats = vec![
            stat("a", StatType::Explicit, vec![1]),
            stat("b", StatType::Crafted, vec![2]),
            stat("c", StatType::Implicit, vec![]),
        ];
        assert!(is_related_to_an_implicit_stat(&stats, 0));
        assert!(is_related_to_an_implicit_stat(&stats, 1));
    }

    #[test]
    fn test_implicit_ancestry_cycle_terminates_false() {
        // a <-> b, neither implicit: must resolve false, not recurse forever.
        let stats = vec![
            stat("a", StatType::Explicit, vec![1]),
            stat("b", StatType::Explicit, vec![0]),
        ];
        assert!(!is_related_to_an_implicit_stat(&stats, 0));
        assert!(!is_related_to_an_implicit_stat(&stats, 1));
    }

    #[test]
    fn test_implicit_ancestry_cycle_with_implicit_branch() {
        // a -> b -> a (cycle) and b -> c (implicit): the implicit wins.
        let stats = vec![
            stat("a", StatType::Explicit, vec![1]),
            stat("b", StatType::Explicit, vec![0, 2]),
            stat("c", StatType::Implicit, vec![]),
        ];
        assert!(is_related_to_an_implicit_stat(&stats, 0));
    }

    #[test]
    fn test_self_cycle_terminates() {
        let stats = vec![stat("a", StatType::Explicit, vec![0])];
        assert!(!is_related_to_an_implicit_stat(&stats, 0));
    }

    #[test]
    fn test_unique_drops_implicit_related_stats() {
        let item = Item {
            rarity: ItemRarity::Unique,
            stats: vec![
                stat("a", StatType::Implicit, vec![]),
                stat("b", StatType::Explicit, vec![0]),
                stat("c", StatType::Explicit, vec![]),
            ],
            ..Item::default()
        };
        let query = synthesize(&item, &EvaluateSettings::default());
        assert_eq!(query.stats.len(), 3);
        assert!(query.stats[0].is_none());
        assert!(query.stats[1].is_none());
        assert_eq!(query.stats[2].as_ref().unwrap().id, "c");
    }

    #[test]
    fn test_corrupted_unique_selects_all_stats() {
        let item = Item {
            rarity: ItemRarity::Unique,
            corrupted: true,
            stats: vec![
                stat("a", StatType::Implicit, vec![]),
                stat("b", StatType::Explicit, vec![0]),
            ],
            ..Item::default()
        };
        // The per-stat map is empty, yet everything is selected.
        let query = synthesize(&item, &EvaluateSettings::default());
        assert!(query.stats.iter().all(|slot| slot.is_some()));
    }

    #[test]
    fn test_mirrored_and_unmodifiable_also_bypass() {
        for (mirrored, unmodifiable) in [(true, false), (false, true)] {
            let item = Item {
                rarity: ItemRarity::UniqueRelic,
                mirrored,
                unmodifiable,
                stats: vec![stat("a", StatType::Implicit, vec![])],
                ..Item::default()
            };
            let query = synthesize(&item, &EvaluateSettings::default());
            assert!(query.stats[0].is_some());
        }
    }

    #[test]
    fn test_unique_without_flag_falls_back_to_stat_map() {
        let item = Item {
            rarity: ItemRarity::Unique,
            stats: vec![stat("a", StatType::Explicit, vec![])],
            ..Item::default()
        };
        let mut settings = EvaluateSettings::default();
        settings.evaluate_query_default_stats_unique = false;

        let query = synthesize(&item, &settings);
        assert!(query.stats[0].is_none());

        settings
            .evaluate_query_default_stats
            .insert("explicit.a".into(), true);
        let query = synthesize(&item, &settings);
        assert!(query.stats[0].is_some());
    }

    #[test]
    fn test_enchant_auto_selected() {
        let item = Item {
            rarity: ItemRarity::Rare,
            stats: vec![
                stat("a", StatType::Enchant, vec![]),
                stat("b", StatType::Explicit, vec![]),
            ],
            ..Item::default()
        };
        let mut settings = EvaluateSettings::default();

        let query = synthesize(&item, &settings);
        assert!(query.stats[0].is_some());
        assert!(query.stats[1].is_none());

        settings.evaluate_query_default_stats_enchants = false;
        let query = synthesize(&item, &settings);
        assert!(query.stats[0].is_none());
    }

    #[test]
    fn test_mod_icon_auto_selected() {
        let mut veiled = stat("a", StatType::Explicit, vec![]).unwrap();
        veiled.mod_name = Some("Veiled".into());
        let item = Item {
            rarity: ItemRarity::Rare,
            stats: vec![Some(veiled), stat("b", StatType::Explicit, vec![])],
            ..Item::default()
        };
        let mut settings = EvaluateSettings::default();

        let query = synthesize(&item, &settings);
        assert!(query.stats[0].is_some());
        assert!(query.stats[1].is_none());

        settings.evaluate_query_default_stats_mod_icon = false;
        let query = synthesize(&item, &settings);
        assert!(query.stats[0].is_none());
    }

    #[test]
    fn test_deselected_slot_keeps_position() {
        let item = Item {
            rarity: ItemRarity::Rare,
            stats: vec![
                stat("a", StatType::Explicit, vec![]),
                stat("b", StatType::Explicit, vec![]),
            ],
            ..Item::default()
        };
        let mut settings = EvaluateSettings::default();
        settings
            .evaluate_query_default_stats
            .insert("explicit.b".into(), true);

        let query = synthesize(&item, &settings);
        assert_eq!(query.stats.len(), 2);
        assert!(query.stats[0].is_none());
        assert_eq!(query.stats[1].as_ref().unwrap().id, "b");
    }

    #[test]
    fn test_absent_source_slot_stays_absent() {
        let item = Item {
            rarity: ItemRarity::Rare,
            stats: vec![None, stat("b", StatType::Enchant, vec![])],
            ..Item::default()
        };
        let query = synthesize(&item, &EvaluateSettings::default());
        assert!(query.stats[0].is_none());
        assert!(query.stats[1].is_some());
    }
}
