//! Coloured pot: plants stored as a category tag plus a per-category type field.
//!
//! The block definition declares `bap:pot_contents` (the active category) and
//! one string field per category that carries an item id. Bamboo and cactus
//! have a single model each, so they need no type field.

use crate::catalog::{Catalog, CatalogEntry, CatalogError};
use crate::encoding::{ContentEncoding, ContentSlot};
use crate::permutation::{BlockPermutation, PermutationError};
use displayblocks_core::ItemId;
use serde::Serialize;
use std::fmt;

/// Custom component id bound to the coloured pot block.
pub const POT_COMPONENT: &str = "bap:change_flower";

/// Block type of the coloured pot.
pub const POT_BLOCK: &str = "bap:coloured_pot";

/// Active category field.
pub const CONTENTS_STATE: &str = "bap:pot_contents";
/// Flower type field.
pub const FLOWER_TYPE_STATE: &str = "bap:flower_type";
/// Azalea type field.
pub const AZALEA_TYPE_STATE: &str = "bap:azalea_type";
/// Sapling type field.
pub const SAPLING_TYPE_STATE: &str = "bap:sapling_type";
/// Fungus type field.
pub const FUNGUS_TYPE_STATE: &str = "bap:fungus_type";

/// Content family of a potted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PotCategory {
    /// Nothing planted.
    Empty,
    /// Flowers, ferns and dead bushes.
    Flower,
    /// Azalea bushes.
    Azalea,
    /// Saplings and propagules.
    Sapling,
    /// Fungi, mushrooms and roots.
    Fungus,
    /// Bamboo.
    Bamboo,
    /// Cactus.
    Cactus,
}

impl PotCategory {
    /// Value written to [`CONTENTS_STATE`].
    pub const fn as_str(self) -> &'static str {
        match self {
            PotCategory::Empty => "empty",
            PotCategory::Flower => "flower",
            PotCategory::Azalea => "azalea",
            PotCategory::Sapling => "sapling",
            PotCategory::Fungus => "fungus",
            PotCategory::Bamboo => "bamboo",
            PotCategory::Cactus => "cactus",
        }
    }

    /// Parse a [`CONTENTS_STATE`] value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "empty" => Some(PotCategory::Empty),
            "flower" => Some(PotCategory::Flower),
            "azalea" => Some(PotCategory::Azalea),
            "sapling" => Some(PotCategory::Sapling),
            "fungus" => Some(PotCategory::Fungus),
            "bamboo" => Some(PotCategory::Bamboo),
            "cactus" => Some(PotCategory::Cactus),
            _ => None,
        }
    }

    /// Field holding the item id for this category, if it has one.
    pub const fn type_state(self) -> Option<&'static str> {
        match self {
            PotCategory::Flower => Some(FLOWER_TYPE_STATE),
            PotCategory::Azalea => Some(AZALEA_TYPE_STATE),
            PotCategory::Sapling => Some(SAPLING_TYPE_STATE),
            PotCategory::Fungus => Some(FUNGUS_TYPE_STATE),
            PotCategory::Empty | PotCategory::Bamboo | PotCategory::Cactus => None,
        }
    }
}

impl fmt::Display for PotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a coloured pot holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "category", content = "item", rename_all = "snake_case")]
pub enum PotContents {
    /// Nothing planted.
    Empty,
    /// A flower type.
    Flower(ItemId),
    /// An azalea type.
    Azalea(ItemId),
    /// A sapling type.
    Sapling(ItemId),
    /// A fungus type.
    Fungus(ItemId),
    /// Bamboo.
    Bamboo,
    /// Cactus.
    Cactus,
}

impl PotContents {
    /// Category tag of this content.
    pub fn category(&self) -> PotCategory {
        match self {
            PotContents::Empty => PotCategory::Empty,
            PotContents::Flower(_) => PotCategory::Flower,
            PotContents::Azalea(_) => PotCategory::Azalea,
            PotContents::Sapling(_) => PotCategory::Sapling,
            PotContents::Fungus(_) => PotCategory::Fungus,
            PotContents::Bamboo => PotCategory::Bamboo,
            PotContents::Cactus => PotCategory::Cactus,
        }
    }

    /// Build content from a category plus its item.
    pub fn from_parts(category: PotCategory, item: ItemId) -> Self {
        match category {
            PotCategory::Empty => PotContents::Empty,
            PotCategory::Flower => PotContents::Flower(item),
            PotCategory::Azalea => PotContents::Azalea(item),
            PotCategory::Sapling => PotContents::Sapling(item),
            PotCategory::Fungus => PotContents::Fungus(item),
            PotCategory::Bamboo => PotContents::Bamboo,
            PotCategory::Cactus => PotContents::Cactus,
        }
    }

    fn type_value(&self) -> Option<&ItemId> {
        match self {
            PotContents::Flower(id)
            | PotContents::Azalea(id)
            | PotContents::Sapling(id)
            | PotContents::Fungus(id) => Some(id),
            PotContents::Empty | PotContents::Bamboo | PotContents::Cactus => None,
        }
    }
}

impl ContentSlot for PotContents {
    fn empty() -> Self {
        PotContents::Empty
    }

    fn carried_item(&self) -> Option<ItemId> {
        match self {
            PotContents::Empty => None,
            PotContents::Bamboo | PotContents::Cactus => Some(fixed_item(self.category())),
            other => other.type_value().cloned(),
        }
    }
}

/// String-keyed encoding used by the coloured pot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PotEncoding;

impl ContentEncoding for PotEncoding {
    type Slot = PotContents;

    /// Empty pot with every type field at its first value.
    fn default_permutation(&self) -> BlockPermutation {
        let block = ItemId::parse(POT_BLOCK).expect("pot block id is a valid literal");
        BlockPermutation::new(block)
            .with_state(CONTENTS_STATE, PotCategory::Empty.as_str())
            .with_state(FLOWER_TYPE_STATE, "minecraft:dandelion")
            .with_state(AZALEA_TYPE_STATE, "minecraft:azalea")
            .with_state(SAPLING_TYPE_STATE, "minecraft:oak_sapling")
            .with_state(FUNGUS_TYPE_STATE, "minecraft:crimson_fungus")
    }

    fn read(&self, permutation: &BlockPermutation) -> Result<PotContents, PermutationError> {
        let raw = permutation.string_state(CONTENTS_STATE)?;
        let category = PotCategory::parse(raw).ok_or_else(|| PermutationError::UnknownValue {
            state: CONTENTS_STATE.to_string(),
            value: raw.to_string(),
        })?;

        let item = match category.type_state() {
            Some(state) => {
                let raw = permutation.string_state(state)?;
                ItemId::parse(raw).map_err(|_| PermutationError::UnknownValue {
                    state: state.to_string(),
                    value: raw.to_string(),
                })?
            }
            None => fixed_item(category),
        };
        Ok(PotContents::from_parts(category, item))
    }

    fn write(&self, permutation: &BlockPermutation, slot: &PotContents) -> BlockPermutation {
        let category = slot.category();
        let next = permutation.with_state(CONTENTS_STATE, category.as_str());
        match (category.type_state(), slot.type_value()) {
            (Some(state), Some(item)) => next.with_state(state, item),
            _ => next,
        }
    }
}

// Only consulted for categories without a type field, where the item is ignored.
fn fixed_item(category: PotCategory) -> ItemId {
    let raw = match category {
        PotCategory::Bamboo => "minecraft:bamboo",
        PotCategory::Cactus => "minecraft:cactus",
        _ => "minecraft:air",
    };
    ItemId::parse(raw).expect("fixed pot items are valid literals")
}

/// Compiled table of plants that fit in a coloured pot.
const POT_ITEMS: &[(&str, PotCategory)] = &[
    ("minecraft:crimson_fungus", PotCategory::Fungus),
    ("minecraft:warped_fungus", PotCategory::Fungus),
    ("minecraft:brown_mushroom", PotCategory::Fungus),
    ("minecraft:red_mushroom", PotCategory::Fungus),
    ("minecraft:crimson_roots", PotCategory::Fungus),
    ("minecraft:warped_roots", PotCategory::Fungus),
    ("minecraft:azalea", PotCategory::Azalea),
    ("minecraft:flowering_azalea", PotCategory::Azalea),
    ("minecraft:cactus", PotCategory::Cactus),
    ("minecraft:bamboo", PotCategory::Bamboo),
    ("minecraft:dandelion", PotCategory::Flower),
    ("minecraft:poppy", PotCategory::Flower),
    ("minecraft:blue_orchid", PotCategory::Flower),
    ("minecraft:azure_bluet", PotCategory::Flower),
    ("minecraft:pink_tulip", PotCategory::Flower),
    ("minecraft:white_tulip", PotCategory::Flower),
    ("minecraft:orange_tulip", PotCategory::Flower),
    ("minecraft:red_tulip", PotCategory::Flower),
    ("minecraft:allium", PotCategory::Flower),
    ("minecraft:oxeye_daisy", PotCategory::Flower),
    ("minecraft:cornflower", PotCategory::Flower),
    ("minecraft:lily_of_the_valley", PotCategory::Flower),
    ("minecraft:torchflower", PotCategory::Flower),
    ("minecraft:wither_rose", PotCategory::Flower),
    ("minecraft:deadbush", PotCategory::Flower),
    ("minecraft:fern", PotCategory::Flower),
    ("minecraft:oak_sapling", PotCategory::Sapling),
    ("minecraft:dark_oak_sapling", PotCategory::Sapling),
    ("minecraft:spruce_sapling", PotCategory::Sapling),
    ("minecraft:jungle_sapling", PotCategory::Sapling),
    ("minecraft:acacia_sapling", PotCategory::Sapling),
    ("minecraft:cherry_sapling", PotCategory::Sapling),
    ("minecraft:birch_sapling", PotCategory::Sapling),
    ("minecraft:mangrove_propagule", PotCategory::Sapling),
];

/// Build the coloured pot catalog from the compiled table.
///
/// Entries carry no sound of their own; the handler's placement sound applies.
pub fn pot_catalog() -> Result<Catalog<PotContents>, CatalogError> {
    let mut entries = Vec::with_capacity(POT_ITEMS.len());
    for (raw, category) in POT_ITEMS {
        let item = ItemId::parse(raw)?;
        let slot = PotContents::from_parts(*category, item.clone());
        entries.push(CatalogEntry::new(item, slot));
    }
    Catalog::new(entries)
}
