//! Add-on configuration: which display blocks exist and what they accept.
//!
//! File loading lives in the binary; this module only defines the schema and
//! its defaults.

use crate::sound::PLACE_VOLUME;
use serde::{Deserialize, Serialize};

/// Item name reserved for the `(0, 0)` display slot.
pub const EMPTY_SENTINEL: &str = "empty";

/// Top-level add-on configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AddonConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Volume for placement sounds (0.0 to 1.0).
    pub place_volume: f32,
    /// Register the coloured pot component.
    pub coloured_pot: bool,
    /// Display blocks to register.
    pub display_blocks: Vec<DisplayBlockConfig>,
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            place_volume: PLACE_VOLUME,
            coloured_pot: true,
            display_blocks: vec![DisplayBlockConfig::default()],
        }
    }
}

/// One display block component.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayBlockConfig {
    /// Custom component id (e.g., `mkt:display_item`).
    pub component: String,
    /// Block type the component is attached to.
    pub block: String,
    /// Integer state holding the category.
    pub category_state: String,
    /// Integer state holding the variant.
    pub variant_state: String,
    /// Attachable items.
    pub items: Vec<DisplayItemConfig>,
}

impl Default for DisplayBlockConfig {
    fn default() -> Self {
        // The shipped block definitions spell the category key "catergory".
        Self {
            component: "mkt:display_item".to_string(),
            block: "mkt:display_case".to_string(),
            category_state: "mkt:catergory".to_string(),
            variant_state: "mkt:variant".to_string(),
            items: default_display_items(),
        }
    }
}

/// One attachable item of a display block.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayItemConfig {
    /// Item identifier, or [`EMPTY_SENTINEL`].
    pub item: String,
    /// Model family.
    pub category: u8,
    /// Model within the family.
    pub variant: u8,
    /// Sound played when the item is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

fn default_display_items() -> Vec<DisplayItemConfig> {
    const ITEMS: &[(&str, u8, u8, &str)] = &[
        (EMPTY_SENTINEL, 0, 0, "random.pop"),
        ("minecraft:iron_ingot", 1, 0, "armor.equip_iron"),
        ("minecraft:gold_ingot", 1, 1, "armor.equip_gold"),
        ("minecraft:copper_ingot", 1, 2, "armor.equip_iron"),
        ("minecraft:netherite_ingot", 1, 3, "armor.equip_netherite"),
        ("minecraft:diamond", 2, 0, "armor.equip_diamond"),
        ("minecraft:emerald", 2, 1, "random.orb"),
        ("minecraft:amethyst_shard", 2, 2, "hit.amethyst_block"),
        ("minecraft:lapis_lazuli", 2, 3, "random.orb"),
        ("minecraft:apple", 3, 0, "block.itemframe.add_item"),
        ("minecraft:golden_apple", 3, 1, "block.itemframe.add_item"),
        ("minecraft:bread", 3, 2, "block.itemframe.add_item"),
        ("minecraft:cake", 3, 3, "block.itemframe.add_item"),
    ];

    ITEMS
        .iter()
        .map(|(item, category, variant, sound)| DisplayItemConfig {
            item: item.to_string(),
            category: *category,
            variant: *variant,
            sound: Some(sound.to_string()),
        })
        .collect()
}
