//! The attach/detach state transition shared by every display-style block.
//!
//! [`DisplayHandler`] is driven only by a catalog and a content encoding, so
//! the coloured pot and the generic display block run the same code.

use crate::catalog::Catalog;
use crate::component::BlockCustomComponent;
use crate::encoding::{ContentEncoding, ContentSlot};
use crate::host::{PlayerDestroyEvent, PlayerInteractEvent};
use crate::permutation::BlockPermutation;
use crate::sound::SoundEvent;
use displayblocks_core::{ItemId, ItemStack};
use serde_json::json;
use tracing::{debug, warn};

/// Result of one interaction, for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractOutcome {
    /// The player has no equipment component.
    NoEquipment,
    /// Held item cannot be attached.
    Ignored(ItemId),
    /// Nothing changed (empty hand on an empty block, or same item).
    Unchanged,
    /// Empty hand removed the attached item.
    Cleared(ItemId),
    /// Item attached to an empty block.
    Attached(ItemId),
    /// Attached item replaced by another.
    Swapped {
        /// Item ejected into the world.
        removed: ItemId,
        /// Item now attached.
        attached: ItemId,
    },
}

/// Catalog-driven interact/destroy handler.
pub struct DisplayHandler<E: ContentEncoding> {
    id: String,
    encoding: E,
    catalog: Catalog<E::Slot>,
    place_sound: SoundEvent,
    swap_sound: SoundEvent,
}

impl<E: ContentEncoding> DisplayHandler<E> {
    /// Handler for component `id`. `place_sound` is used for entries without
    /// their own sound.
    pub fn new(
        id: impl Into<String>,
        encoding: E,
        catalog: Catalog<E::Slot>,
        place_sound: SoundEvent,
    ) -> Self {
        Self {
            id: id.into(),
            encoding,
            catalog,
            place_sound,
            swap_sound: SoundEvent::swap(),
        }
    }

    /// Component id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Attachable items.
    pub fn catalog(&self) -> &Catalog<E::Slot> {
        &self.catalog
    }

    /// Content encoding.
    pub fn encoding(&self) -> &E {
        &self.encoding
    }

    /// Item represented by `permutation`, or `None` when empty.
    ///
    /// Malformed permutations read as empty.
    pub fn content_item(&self, permutation: &BlockPermutation) -> Option<ItemId> {
        let slot = match self.encoding.read(permutation) {
            Ok(slot) => slot,
            Err(err) => {
                warn!(component = %self.id, %err, "unreadable block content, treating as empty");
                return None;
            }
        };
        if slot.is_empty() {
            return None;
        }
        self.catalog
            .item_for_slot(&slot)
            .cloned()
            .or_else(|| slot.carried_item())
    }

    /// Apply a player interaction.
    pub fn interact(&self, event: PlayerInteractEvent<'_>) -> InteractOutcome {
        let PlayerInteractEvent {
            block,
            dimension,
            player,
        } = event;

        let game_mode = player.game_mode();
        let Some(main_hand) = player.main_hand() else {
            return InteractOutcome::NoEquipment;
        };

        let at = block.center();
        let current = self.content_item(block.permutation());

        let Some(held) = main_hand.type_id().cloned() else {
            let Some(current) = current else {
                return InteractOutcome::Unchanged;
            };
            dimension.spawn_item(ItemStack::single(current.clone()), at);
            let next = self
                .encoding
                .write(block.permutation(), &<E::Slot as ContentSlot>::empty());
            block.set_permutation(next);
            return InteractOutcome::Cleared(current);
        };

        let Some(entry) = self.catalog.lookup(&held) else {
            debug!(component = %self.id, item = %held, "item cannot be attached");
            return InteractOutcome::Ignored(held);
        };

        if let Some(current) = &current {
            if *current == held {
                return InteractOutcome::Unchanged;
            }
            dimension.play_sound(&self.swap_sound, at);
            dimension.spawn_item(ItemStack::single(current.clone()), at);
        }

        let next = self.encoding.write(block.permutation(), &entry.slot);
        block.set_permutation(next);
        dimension.play_sound(entry.sound.as_ref().unwrap_or(&self.place_sound), at);

        if game_mode.consumes_items() {
            main_hand.consume_one();
        }

        match current {
            Some(removed) => InteractOutcome::Swapped {
                removed,
                attached: held,
            },
            None => InteractOutcome::Attached(held),
        }
    }

    /// Eject the content of a destroyed block; returns the spawned item.
    pub fn destroy(&self, event: PlayerDestroyEvent<'_>) -> Option<ItemId> {
        let item = self.content_item(event.destroyed_permutation)?;
        event
            .dimension
            .spawn_item(ItemStack::single(item.clone()), event.location.center());
        Some(item)
    }
}

impl<E: ContentEncoding> BlockCustomComponent for DisplayHandler<E> {
    fn on_player_interact(&self, event: PlayerInteractEvent<'_>) {
        let location = event.block.location();
        let outcome = self.interact(event);
        debug!(component = %self.id, %location, ?outcome, "player interact");
    }

    fn on_player_destroy(&self, event: PlayerDestroyEvent<'_>) {
        let location = event.location;
        let dropped = self.destroy(event);
        debug!(component = %self.id, %location, ?dropped, "player destroy");
    }

    fn default_permutation(&self) -> BlockPermutation {
        self.encoding.default_permutation()
    }

    fn describe(&self) -> serde_json::Value {
        json!({
            "component": self.id,
            "items": self.catalog.iter().collect::<Vec<_>>(),
        })
    }
}
