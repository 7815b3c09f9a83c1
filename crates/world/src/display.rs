//! Generic display block: content stored as a numeric category/variant pair.
//!
//! `(0, 0)` is reserved for "nothing displayed"; every other pair selects one
//! model in the block definition.

use crate::catalog::{Catalog, CatalogEntry, CatalogError};
use crate::config::{DisplayBlockConfig, DisplayItemConfig, EMPTY_SENTINEL};
use crate::encoding::{ContentEncoding, ContentSlot};
use crate::permutation::{BlockPermutation, PermutationError};
use crate::sound::SoundEvent;
use displayblocks_core::{ItemId, ItemIdError};
use serde::Serialize;

/// What a display block shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplaySlot {
    /// Nothing displayed.
    Empty,
    /// A model selected by category and variant.
    Item {
        /// Model family.
        category: u8,
        /// Model within the family.
        variant: u8,
    },
}

impl DisplaySlot {
    /// Slot for a raw pair; `(0, 0)` maps to [`DisplaySlot::Empty`].
    pub fn from_pair(category: u8, variant: u8) -> Self {
        if category == 0 && variant == 0 {
            DisplaySlot::Empty
        } else {
            DisplaySlot::Item { category, variant }
        }
    }

    /// Raw pair written to the block.
    pub fn pair(self) -> (u8, u8) {
        match self {
            DisplaySlot::Empty => (0, 0),
            DisplaySlot::Item { category, variant } => (category, variant),
        }
    }
}

impl ContentSlot for DisplaySlot {
    fn empty() -> Self {
        DisplaySlot::Empty
    }
}

/// Numeric category/variant encoding.
#[derive(Debug, Clone)]
pub struct DisplayEncoding {
    block: ItemId,
    category_state: String,
    variant_state: String,
}

impl DisplayEncoding {
    /// Encoding for `block` using the given state names.
    pub fn new(
        block: ItemId,
        category_state: impl Into<String>,
        variant_state: impl Into<String>,
    ) -> Self {
        Self {
            block,
            category_state: category_state.into(),
            variant_state: variant_state.into(),
        }
    }

    /// Encoding described by a display block config.
    pub fn from_config(config: &DisplayBlockConfig) -> Result<Self, ItemIdError> {
        Ok(Self::new(
            ItemId::parse(&config.block)?,
            config.category_state.as_str(),
            config.variant_state.as_str(),
        ))
    }

    fn read_u8(&self, permutation: &BlockPermutation, state: &str) -> Result<u8, PermutationError> {
        let raw = permutation.int_state(state)?;
        u8::try_from(raw).map_err(|_| PermutationError::UnknownValue {
            state: state.to_string(),
            value: raw.to_string(),
        })
    }
}

impl ContentEncoding for DisplayEncoding {
    type Slot = DisplaySlot;

    fn default_permutation(&self) -> BlockPermutation {
        BlockPermutation::new(self.block.clone())
            .with_state(&self.category_state, 0)
            .with_state(&self.variant_state, 0)
    }

    fn read(&self, permutation: &BlockPermutation) -> Result<DisplaySlot, PermutationError> {
        let category = self.read_u8(permutation, &self.category_state)?;
        let variant = self.read_u8(permutation, &self.variant_state)?;
        Ok(DisplaySlot::from_pair(category, variant))
    }

    fn write(&self, permutation: &BlockPermutation, slot: &DisplaySlot) -> BlockPermutation {
        let (category, variant) = slot.pair();
        permutation
            .with_state(&self.category_state, i32::from(category))
            .with_state(&self.variant_state, i32::from(variant))
    }
}

/// Build a display catalog from configured items.
///
/// An `empty` entry is accepted only on `(0, 0)` and is skipped; it exists
/// so item tables can spell out the reserved pair.
pub fn display_catalog(
    items: &[DisplayItemConfig],
    volume: f32,
) -> Result<Catalog<DisplaySlot>, CatalogError> {
    let mut entries = Vec::with_capacity(items.len());
    for cfg in items {
        if cfg.item == EMPTY_SENTINEL {
            if (cfg.category, cfg.variant) != (0, 0) {
                return Err(CatalogError::MisplacedSentinel {
                    sentinel: cfg.item.clone(),
                    category: cfg.category,
                    variant: cfg.variant,
                });
            }
            continue;
        }

        let item = ItemId::parse(&cfg.item)?;
        let slot = DisplaySlot::from_pair(cfg.category, cfg.variant);
        let mut entry = CatalogEntry::new(item, slot);
        if let Some(sound) = &cfg.sound {
            entry = entry.with_sound(SoundEvent::with_volume(sound.as_str(), volume));
        }
        entries.push(entry);
    }
    Catalog::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AddonConfig;

    fn encoding() -> DisplayEncoding {
        DisplayEncoding::new(
            ItemId::parse("mkt:display_item").unwrap(),
            "mkt:catergory",
            "mkt:variant",
        )
    }

    fn item(name: &str, category: u8, variant: u8) -> DisplayItemConfig {
        DisplayItemConfig {
            item: name.to_string(),
            category,
            variant,
            sound: Some("random.orb".to_string()),
        }
    }

    #[test]
    fn zero_pair_is_empty() {
        let enc = encoding();
        assert_eq!(enc.read(&enc.default_permutation()), Ok(DisplaySlot::Empty));
        assert_eq!(DisplaySlot::from_pair(0, 3), DisplaySlot::Item { category: 0, variant: 3 });
    }

    #[test]
    fn write_then_read() {
        let enc = encoding();
        let slot = DisplaySlot::Item { category: 2, variant: 7 };
        let perm = enc.write(&enc.default_permutation(), &slot);
        assert_eq!(perm.int_state("mkt:catergory").unwrap(), 2);
        assert_eq!(perm.int_state("mkt:variant").unwrap(), 7);
        assert_eq!(enc.read(&perm), Ok(slot));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let enc = encoding();
        let perm = enc.default_permutation().with_state("mkt:variant", -1);
        assert!(matches!(
            enc.read(&perm),
            Err(PermutationError::UnknownValue { .. })
        ));
    }

    #[test]
    fn catalog_skips_sentinel_and_keeps_sounds() {
        let catalog = display_catalog(
            &[item("empty", 0, 0), item("minecraft:diamond", 1, 0)],
            0.5,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        let entry = catalog
            .lookup(&ItemId::parse("minecraft:diamond").unwrap())
            .unwrap();
        assert_eq!(entry.sound, Some(SoundEvent::with_volume("random.orb", 0.5)));
    }

    #[test]
    fn misplaced_sentinel_is_rejected() {
        let err = display_catalog(&[item("empty", 1, 0)], 0.5).unwrap_err();
        assert_eq!(
            err,
            CatalogError::MisplacedSentinel {
                sentinel: EMPTY_SENTINEL.to_string(),
                category: 1,
                variant: 0,
            }
        );
        assert_eq!(err.to_string(), "\"empty\" is reserved for (0, 0), got (1, 0)");
    }

    #[test]
    fn default_config_catalogs_build() {
        let config = AddonConfig::default();
        for block in &config.display_blocks {
            display_catalog(&block.items, config.place_volume).expect("default catalog valid");
        }
    }
}
