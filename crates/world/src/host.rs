//! Host-engine collaborators seen by block components.
//!
//! The engine owns block storage, player inventories and the world. A
//! component only sees these narrow views for the duration of one event.

use crate::permutation::BlockPermutation;
use crate::sound::SoundEvent;
use displayblocks_core::{BlockPos, DimensionId, GameMode, ItemId, ItemStack, Vec3};
use serde::{Deserialize, Serialize};

/// The block an event targets.
pub trait BlockAccess {
    /// Block location.
    fn location(&self) -> BlockPos;

    /// Current permutation.
    fn permutation(&self) -> &BlockPermutation;

    /// Replace the permutation.
    fn set_permutation(&mut self, permutation: BlockPermutation);

    /// World-space centre of the block.
    fn center(&self) -> Vec3 {
        self.location().center()
    }
}

/// The interacting player.
pub trait PlayerAccess {
    /// Main-hand slot; `None` when the player has no equipment component.
    fn main_hand(&mut self) -> Option<&mut EquipmentSlot>;

    /// Current game mode.
    fn game_mode(&self) -> GameMode;
}

/// The dimension the block lives in.
pub trait DimensionAccess {
    /// Dimension identifier.
    fn id(&self) -> DimensionId;

    /// Spawn an item entity at `at`.
    fn spawn_item(&mut self, stack: ItemStack, at: Vec3);

    /// Play a sound at `at`.
    fn play_sound(&mut self, sound: &SoundEvent, at: Vec3);
}

/// A single equipment slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentSlot {
    item: Option<ItemStack>,
}

impl EquipmentSlot {
    /// Slot holding `item`.
    pub fn with_item(item: ItemStack) -> Self {
        Self { item: Some(item) }
    }

    /// Whether the slot holds anything.
    pub fn has_item(&self) -> bool {
        self.item.is_some()
    }

    /// Held stack.
    pub fn item(&self) -> Option<&ItemStack> {
        self.item.as_ref()
    }

    /// Identifier of the held item.
    pub fn type_id(&self) -> Option<&ItemId> {
        self.item.as_ref().map(|stack| &stack.item)
    }

    /// Amount held (0 when empty).
    pub fn amount(&self) -> u32 {
        self.item.as_ref().map_or(0, |stack| stack.amount)
    }

    /// Replace the slot contents.
    pub fn set_item(&mut self, item: Option<ItemStack>) {
        self.item = item;
    }

    /// Remove one item, clearing the slot when the stack runs out.
    pub fn consume_one(&mut self) {
        match &mut self.item {
            Some(stack) if stack.amount > 1 => stack.amount -= 1,
            _ => self.item = None,
        }
    }
}

/// Player interacted with a block carrying the component.
pub struct PlayerInteractEvent<'a> {
    /// Target block.
    pub block: &'a mut dyn BlockAccess,
    /// Dimension of the block.
    pub dimension: &'a mut dyn DimensionAccess,
    /// Interacting player.
    pub player: &'a mut dyn PlayerAccess,
}

/// Player destroyed a block carrying the component.
///
/// The block is already gone; only its last permutation remains.
pub struct PlayerDestroyEvent<'a> {
    /// Former block location.
    pub location: BlockPos,
    /// Permutation immediately before destruction.
    pub destroyed_permutation: &'a BlockPermutation,
    /// Dimension of the block.
    pub dimension: &'a mut dyn DimensionAccess,
}
