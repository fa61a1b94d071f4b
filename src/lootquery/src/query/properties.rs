//! Property selection rules.
//!
//! A family of independent per-domain policies, each gated by one settings
//! flag, deciding which property sub-fields survive into the query item.
//! Missing source sub-records are legitimate absence; every rule checks for
//! presence and no-ops otherwise.

use crate::item::{IncursionProperties, IncursionRoom, Item, ItemCategory, ItemRarity, QualityType};
use crate::settings::EvaluateSettings;

pub(super) fn select_item_level(source: &Item, query: &mut Item, settings: &EvaluateSettings) {
    if settings.evaluate_query_default_item_level && !query.rarity.is_unique() {
        query.level = source.level;
    }
}

pub(super) fn select_properties(source: &Item, query: &mut Item, settings: &EvaluateSettings) {
    select_ultimatum(source, query, settings);
    select_heist(source, query, settings);
    select_misc(source, query, settings);
    select_attack(source, query, settings);
    select_defense(source, query, settings);
    narrow_type(source, query, settings);
    select_incursion_rooms(source, query, settings);
}

fn select_ultimatum(source: &Item, query: &mut Item, settings: &EvaluateSettings) {
    if !settings.evaluate_query_default_ultimatum {
        return;
    }
    if let Some(ultimatum) = &source.properties.ultimatum {
        query.properties.ultimatum = Some(ultimatum.clone());
    }
}

/// Three independently-flagged slices of the heist sub-record.
fn select_heist(source: &Item, query: &mut Item, settings: &EvaluateSettings) {
    let Some(heist) = &source.properties.heist else {
        return;
    };
    let query_heist = query.properties.heist.get_or_insert_with(Default::default);

    if settings.evaluate_query_default_heist_required_levels {
        query_heist
            .required_skills
            .extend(heist.required_skills.iter().cloned());
    }

    if settings.evaluate_query_default_heist_contracts {
        query_heist.objective_value = heist.objective_value.clone();
    }

    if settings.evaluate_query_default_heist_blueprints {
        query_heist.wings_revealed = heist.wings_revealed;
        query_heist.escape_routes = heist.escape_routes;
        query_heist.reward_rooms = heist.reward_rooms;
    }
}

fn select_misc(source: &Item, query: &mut Item, settings: &EvaluateSettings) {
    if !settings.evaluate_query_default_miscs {
        return;
    }
    let prop = &source.properties;
    query.properties.gem = prop.gem;
    query.properties.map = prop.map;
    query.properties.durability = prop.durability;
    // Quality on anything but gems and alternate-quality items is noise.
    if source.rarity == ItemRarity::Gem || prop.quality_type != QualityType::Default {
        query.properties.quality = prop.quality;
    }
}

fn select_attack(source: &Item, query: &mut Item, settings: &EvaluateSettings) {
    if !settings.evaluate_query_default_attack || query.rarity.is_unique() {
        return;
    }
    query.damage = source.damage.clone();
    if source.category.starts_with(ItemCategory::WEAPON) {
        query.properties.weapon = source.properties.weapon;
    }
}

fn select_defense(source: &Item, query: &mut Item, settings: &EvaluateSettings) {
    if !settings.evaluate_query_default_defense || query.rarity.is_unique() {
        return;
    }
    if source.category.starts_with(ItemCategory::ARMOUR) {
        query.properties.armour = source.properties.armour;
    }
}

/// Normal/magic/rare gear is queried by stats, not by exact base type,
/// unless the user opts out of the narrowing.
fn narrow_type(source: &Item, query: &mut Item, settings: &EvaluateSettings) {
    if settings.evaluate_query_default_type {
        return;
    }
    if !matches!(
        source.rarity,
        ItemRarity::Normal | ItemRarity::Magic | ItemRarity::Rare
    ) {
        return;
    }
    if source.category.starts_with(ItemCategory::WEAPON)
        || source.category.starts_with(ItemCategory::ARMOUR)
        || source.category.starts_with(ItemCategory::ACCESSORY)
    {
        query.type_id = None;
        query.name_id = None;
    }
}

fn select_incursion_rooms(source: &Item, query: &mut Item, settings: &EvaluateSettings) {
    let Some(incursion) = &source.properties.incursion else {
        return;
    };
    query.properties.incursion = Some(IncursionProperties {
        open_rooms: filter_rooms(&incursion.open_rooms, settings),
        closed_rooms: filter_rooms(&incursion.closed_rooms, settings),
    });
}

fn filter_rooms(
    rooms: &[Option<IncursionRoom>],
    settings: &EvaluateSettings,
) -> Vec<Option<IncursionRoom>> {
    rooms
        .iter()
        .map(|slot| {
            slot.as_ref().and_then(|room| {
                let stat = room.stat.as_ref()?;
                settings
                    .stat_enabled(&stat.trade_key())
                    .then(|| room.clone())
            })
        })
        .collect()
}
