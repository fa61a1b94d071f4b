//! Socket derivation rule.
//!
//! Decides, per socket, whether link-group membership and color survive into
//! the query item, based on the configured thresholds.

use crate::item::{Item, SocketColor};
use crate::settings::EvaluateSettings;
use crate::sockets::LinkCounter;

/// Stat ids that make socket color meaningful even on non-white sockets.
/// An item carrying any of these keeps its exact colors in the query.
pub const SOCKET_RELATED_STAT_IDS: &[&str] = &[
    "stat_899329924",  // Gems can be Socketed in this Item ignoring Socket Colour
    "stat_3192592092", // Sockets cannot be modified
    "stat_2112615899", // #% increased Global Physical Damage with Weapons per Red Socket
    "stat_2139569643", // Minions convert #% of Physical Damage to Fire Damage per Red Socket
    "stat_3025389409", // #% of Physical Attack Damage Leeched as Life per Red Socket
    "stat_4210076836", // # to Maximum Life per Red Socket
    "stat_1666896662", // You and Nearby Allies have # to # added Fire Damage per Red Socket
];

pub(super) fn derive_sockets(
    source: &Item,
    query: &mut Item,
    links: &dyn LinkCounter,
    settings: &EvaluateSettings,
) {
    if source.sockets.is_empty() {
        return;
    }

    let count = links.link_count(&source.sockets);
    if count >= settings.evaluate_query_default_links {
        for (slot, socket) in query.sockets.iter_mut().zip(&source.sockets) {
            slot.linked = socket.linked;
        }
    }

    if source.sockets.len() >= settings.evaluate_query_default_colors {
        let force_colors = source.corrupted || has_socket_related_stat(source);
        for (slot, socket) in query.sockets.iter_mut().zip(&source.sockets) {
            slot.color = if force_colors || socket.color == Some(SocketColor::White) {
                socket.color
            } else {
                Some(SocketColor::Any)
            };
        }
    }
}

fn has_socket_related_stat(item: &Item) -> bool {
    item.stats
        .iter()
        .flatten()
        .any(|stat| SOCKET_RELATED_STAT_IDS.contains(&stat.id.as_str()))
}
