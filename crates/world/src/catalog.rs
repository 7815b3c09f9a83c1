//! Attachable item catalogs.
//!
//! A catalog maps each attachable item to the slot it occupies once placed
//! on a block. Both directions must be functions, so duplicate items and
//! duplicate slots are rejected when the catalog is built.

use crate::encoding::ContentSlot;
use crate::sound::SoundEvent;
use displayblocks_core::{ItemId, ItemIdError};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// One attachable item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry<S> {
    /// Item identifier.
    pub item: ItemId,
    /// Slot the item occupies when attached.
    pub slot: S,
    /// Sound played on attach (falls back to the handler default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<SoundEvent>,
}

impl<S> CatalogEntry<S> {
    /// Entry without a custom sound.
    pub fn new(item: ItemId, slot: S) -> Self {
        Self {
            item,
            slot,
            sound: None,
        }
    }

    /// Attach a placement sound.
    pub fn with_sound(mut self, sound: SoundEvent) -> Self {
        self.sound = Some(sound);
        self
    }
}

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// An identifier in a static table or config failed to parse.
    #[error(transparent)]
    InvalidItem(#[from] ItemIdError),
    /// The same item was listed twice.
    #[error("item {0} is listed more than once")]
    DuplicateItem(ItemId),
    /// Two items map to the same slot.
    #[error("items {existing} and {item} share the same slot")]
    DuplicateSlot {
        /// Item registered first.
        existing: ItemId,
        /// Item that collided.
        item: ItemId,
    },
    /// An item was mapped onto the reserved empty slot.
    #[error("item {0} uses the reserved empty slot")]
    EmptySlot(ItemId),
    /// The reserved empty row names a pair other than `(0, 0)`.
    #[error("{sentinel:?} is reserved for (0, 0), got ({category}, {variant})")]
    MisplacedSentinel {
        /// Sentinel name as written in the table.
        sentinel: String,
        /// Configured category.
        category: u8,
        /// Configured variant.
        variant: u8,
    },
}

/// Validated, bidirectional item → slot table.
#[derive(Debug, Clone)]
pub struct Catalog<S: ContentSlot> {
    entries: BTreeMap<ItemId, CatalogEntry<S>>,
    by_slot: HashMap<S, ItemId>,
}

impl<S: ContentSlot> Catalog<S> {
    /// Build a catalog, rejecting duplicate items, duplicate slots and
    /// entries on the empty slot.
    pub fn new<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = CatalogEntry<S>>,
    {
        let mut by_item = BTreeMap::new();
        let mut by_slot = HashMap::new();

        for entry in entries {
            if entry.slot.is_empty() {
                return Err(CatalogError::EmptySlot(entry.item));
            }
            if by_item.contains_key(&entry.item) {
                return Err(CatalogError::DuplicateItem(entry.item));
            }
            if let Some(existing) = by_slot.get(&entry.slot) {
                return Err(CatalogError::DuplicateSlot {
                    existing: ItemId::clone(existing),
                    item: entry.item,
                });
            }
            by_slot.insert(entry.slot.clone(), entry.item.clone());
            by_item.insert(entry.item.clone(), entry);
        }

        Ok(Self {
            entries: by_item,
            by_slot,
        })
    }

    /// Look up an attachable item; `None` means it cannot be attached.
    pub fn lookup(&self, item: &ItemId) -> Option<&CatalogEntry<S>> {
        self.entries.get(item)
    }

    /// Reverse lookup: which item a slot represents.
    pub fn item_for_slot(&self, slot: &S) -> Option<&ItemId> {
        self.by_slot.get(slot)
    }

    /// Entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry<S>> {
        self.entries.values()
    }

    /// Number of attachable items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing can be attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
