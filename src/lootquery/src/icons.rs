//! Mod icon registry.
//!
//! Some mods are shown with an icon in the trade UI (influence and league
//! mods, mostly); the stat selection rule can auto-select stats whose mod
//! carries one. The registry is a compile-time map from mod name to icon
//! descriptor.

/// Descriptor of a recognized mod icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModIcon {
    pub name: &'static str,
    pub path: &'static str,
}

/// Returns whether a stat's mod has a recognized icon.
pub trait IconLookup {
    fn get(&self, mod_name: Option<&str>) -> Option<&ModIcon>;
}

/// Mod name -> icon descriptor
static MOD_ICONS: phf::Map<&'static str, ModIcon> = phf::phf_map! {
    "The Shaper's" => ModIcon { name: "The Shaper's", path: "assets/mod-icons/shaper.png" },
    "of Shaping" => ModIcon { name: "of Shaping", path: "assets/mod-icons/shaper.png" },
    "The Elder's" => ModIcon { name: "The Elder's", path: "assets/mod-icons/elder.png" },
    "Eldritch" => ModIcon { name: "Eldritch", path: "assets/mod-icons/elder.png" },
    "Crusader's" => ModIcon { name: "Crusader's", path: "assets/mod-icons/crusader.png" },
    "Hunter's" => ModIcon { name: "Hunter's", path: "assets/mod-icons/hunter.png" },
    "Redeemer's" => ModIcon { name: "Redeemer's", path: "assets/mod-icons/redeemer.png" },
    "Warlord's" => ModIcon { name: "Warlord's", path: "assets/mod-icons/warlord.png" },
    "Subterranean" => ModIcon { name: "Subterranean", path: "assets/mod-icons/delve.png" },
    "of the Underground" => ModIcon { name: "of the Underground", path: "assets/mod-icons/delve.png" },
    "Veiled" => ModIcon { name: "Veiled", path: "assets/mod-icons/veiled.png" },
    "of the Veil" => ModIcon { name: "of the Veil", path: "assets/mod-icons/veiled.png" },
    "of the Conquest" => ModIcon { name: "of the Conquest", path: "assets/mod-icons/warband.png" },
    "Essences" => ModIcon { name: "Essences", path: "assets/mod-icons/essence.png" },
};

/// Bundled compile-time icon registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModIconRegistry;

impl IconLookup for ModIconRegistry {
    fn get(&self, mod_name: Option<&str>) -> Option<&ModIcon> {
        MOD_ICONS.get(mod_name?)
    }
}
