//! In-memory host used by tests and the CLI.
//!
//! Stands in for the engine: stores placed blocks, players and spawned item
//! entities, and routes interact/destroy events through a component registry
//! the same way the engine does.

use crate::blocks::register_all_blocks;
use crate::component::{BlockComponentRegistry, RegistrationError};
use crate::config::AddonConfig;
use crate::host::{
    BlockAccess, DimensionAccess, EquipmentSlot, PlayerAccess, PlayerDestroyEvent,
    PlayerInteractEvent,
};
use crate::permutation::BlockPermutation;
use crate::sound::SoundEvent;
use displayblocks_core::{BlockPos, DimensionId, GameMode, ItemId, ItemStack, Vec3};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::trace;

/// Something observable the host did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// An item entity appeared.
    ItemSpawned {
        /// Entity id.
        entity: u64,
        /// Item identifier.
        item: ItemId,
        /// Stack amount.
        amount: u32,
        /// Spawn location.
        at: Vec3,
    },
    /// A sound was played.
    SoundPlayed {
        /// Sound identifier.
        sound: String,
        /// Volume override.
        #[serde(skip_serializing_if = "Option::is_none")]
        volume: Option<f32>,
        /// Playback location.
        at: Vec3,
    },
    /// A block permutation was rewritten.
    BlockChanged {
        /// Block location.
        pos: BlockPos,
        /// New permutation.
        permutation: BlockPermutation,
    },
    /// A block was destroyed.
    BlockDestroyed {
        /// Former block location.
        pos: BlockPos,
    },
}

/// Item entity lying in the world.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldItem {
    /// Entity id.
    pub entity: u64,
    /// Item stack.
    pub stack: ItemStack,
    /// Location.
    pub at: Vec3,
}

/// Errors from driving the simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// No block at the position.
    #[error("no block at {0}")]
    NoBlock(BlockPos),
    /// A block already occupies the position.
    #[error("position {0} is already occupied")]
    Occupied(BlockPos),
    /// No such player.
    #[error("unknown player {0:?}")]
    UnknownPlayer(String),
    /// Routing to a component failed.
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

/// Single-dimension world state visible to components.
#[derive(Debug, Default)]
pub struct SimDimension {
    id: DimensionId,
    next_entity: u64,
    items: Vec<WorldItem>,
    events: Vec<HostEvent>,
}

impl SimDimension {
    /// Empty dimension.
    pub fn new(id: DimensionId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Item entities in spawn order.
    pub fn items(&self) -> &[WorldItem] {
        &self.items
    }
}

impl DimensionAccess for SimDimension {
    fn id(&self) -> DimensionId {
        self.id
    }

    fn spawn_item(&mut self, stack: ItemStack, at: Vec3) {
        let entity = self.next_entity;
        self.next_entity += 1;
        trace!(entity, item = %stack.item, "spawn item");
        self.events.push(HostEvent::ItemSpawned {
            entity,
            item: stack.item.clone(),
            amount: stack.amount,
            at,
        });
        self.items.push(WorldItem { entity, stack, at });
    }

    fn play_sound(&mut self, sound: &SoundEvent, at: Vec3) {
        self.events.push(HostEvent::SoundPlayed {
            sound: sound.id.clone(),
            volume: sound.volume,
            at,
        });
    }
}

/// A simulated player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimPlayer {
    /// Game mode.
    pub game_mode: GameMode,
    /// Main-hand slot; `None` models a player without equipment.
    pub main_hand: Option<EquipmentSlot>,
}

impl SimPlayer {
    /// Player with an empty hand.
    pub fn new(game_mode: GameMode) -> Self {
        Self {
            game_mode,
            main_hand: Some(EquipmentSlot::default()),
        }
    }

    /// Held stack, if any.
    pub fn held(&self) -> Option<&ItemStack> {
        self.main_hand.as_ref().and_then(EquipmentSlot::item)
    }
}

impl PlayerAccess for SimPlayer {
    fn main_hand(&mut self) -> Option<&mut EquipmentSlot> {
        self.main_hand.as_mut()
    }

    fn game_mode(&self) -> GameMode {
        self.game_mode
    }
}

#[derive(Debug)]
struct PlacedBlock {
    component: String,
    permutation: BlockPermutation,
}

struct SimBlock<'a> {
    pos: BlockPos,
    permutation: &'a mut BlockPermutation,
    writes: &'a mut u64,
}

impl BlockAccess for SimBlock<'_> {
    fn location(&self) -> BlockPos {
        self.pos
    }

    fn permutation(&self) -> &BlockPermutation {
        self.permutation
    }

    fn set_permutation(&mut self, permutation: BlockPermutation) {
        *self.writes += 1;
        *self.permutation = permutation;
    }
}

/// In-memory host world.
pub struct SimWorld {
    registry: BlockComponentRegistry,
    blocks: BTreeMap<BlockPos, PlacedBlock>,
    players: BTreeMap<String, SimPlayer>,
    dimension: SimDimension,
    permutation_writes: u64,
}

impl SimWorld {
    /// World routing events through `registry`.
    pub fn new(registry: BlockComponentRegistry) -> Self {
        Self {
            registry,
            blocks: BTreeMap::new(),
            players: BTreeMap::new(),
            dimension: SimDimension::new(DimensionId::DEFAULT),
            permutation_writes: 0,
        }
    }

    /// World with every block from `config` registered.
    pub fn with_config(config: &AddonConfig) -> Result<Self, RegistrationError> {
        let mut registry = BlockComponentRegistry::new();
        register_all_blocks(&mut registry, config)?;
        Ok(Self::new(registry))
    }

    /// Component registry.
    pub fn registry(&self) -> &BlockComponentRegistry {
        &self.registry
    }

    /// Place a fresh block carrying `component`.
    pub fn place(&mut self, pos: BlockPos, component: &str) -> Result<(), SimError> {
        if self.blocks.contains_key(&pos) {
            return Err(SimError::Occupied(pos));
        }
        let permutation = self
            .registry
            .get(component)
            .ok_or_else(|| RegistrationError::UnknownComponent(component.to_string()))?
            .default_permutation();
        self.blocks.insert(
            pos,
            PlacedBlock {
                component: component.to_string(),
                permutation,
            },
        );
        Ok(())
    }

    /// Overwrite a block's permutation directly, as world loading would.
    pub fn set_permutation(
        &mut self,
        pos: BlockPos,
        permutation: BlockPermutation,
    ) -> Result<(), SimError> {
        let placed = self.blocks.get_mut(&pos).ok_or(SimError::NoBlock(pos))?;
        placed.permutation = permutation;
        Ok(())
    }

    /// Current permutation at `pos`.
    pub fn permutation(&self, pos: BlockPos) -> Option<&BlockPermutation> {
        self.blocks.get(&pos).map(|placed| &placed.permutation)
    }

    /// Add (or replace) a player with an empty hand.
    pub fn add_player(&mut self, name: &str, game_mode: GameMode) {
        self.players.insert(name.to_string(), SimPlayer::new(game_mode));
    }

    /// Add a player that has no equipment component.
    pub fn add_player_without_equipment(&mut self, name: &str, game_mode: GameMode) {
        self.players.insert(
            name.to_string(),
            SimPlayer {
                game_mode,
                main_hand: None,
            },
        );
    }

    /// Look up a player.
    pub fn player(&self, name: &str) -> Option<&SimPlayer> {
        self.players.get(name)
    }

    /// Put `stack` into the player's main hand.
    pub fn give(&mut self, name: &str, stack: ItemStack) -> Result<(), SimError> {
        if let Some(slot) = self.player_mut(name)?.main_hand.as_mut() {
            slot.set_item(Some(stack));
        }
        Ok(())
    }

    /// Empty the player's main hand.
    pub fn clear_hand(&mut self, name: &str) -> Result<(), SimError> {
        if let Some(slot) = self.player_mut(name)?.main_hand.as_mut() {
            slot.set_item(None);
        }
        Ok(())
    }

    /// Change a player's game mode.
    pub fn set_game_mode(&mut self, name: &str, game_mode: GameMode) -> Result<(), SimError> {
        self.player_mut(name)?.game_mode = game_mode;
        Ok(())
    }

    /// Player `name` uses the block at `pos`.
    pub fn interact(&mut self, name: &str, pos: BlockPos) -> Result<(), SimError> {
        let placed = self.blocks.get_mut(&pos).ok_or(SimError::NoBlock(pos))?;
        let player = self
            .players
            .get_mut(name)
            .ok_or_else(|| SimError::UnknownPlayer(name.to_string()))?;

        let writes_before = self.permutation_writes;
        let mut block = SimBlock {
            pos,
            permutation: &mut placed.permutation,
            writes: &mut self.permutation_writes,
        };
        self.registry.dispatch_interact(
            &placed.component,
            PlayerInteractEvent {
                block: &mut block,
                dimension: &mut self.dimension,
                player,
            },
        )?;

        if self.permutation_writes != writes_before {
            self.dimension.events.push(HostEvent::BlockChanged {
                pos,
                permutation: placed.permutation.clone(),
            });
        }
        Ok(())
    }

    /// Destroy the block at `pos`, returning its last permutation.
    pub fn destroy(&mut self, pos: BlockPos) -> Result<BlockPermutation, SimError> {
        let placed = self.blocks.remove(&pos).ok_or(SimError::NoBlock(pos))?;
        self.dimension
            .events
            .push(HostEvent::BlockDestroyed { pos });
        self.registry.dispatch_destroy(
            &placed.component,
            PlayerDestroyEvent {
                location: pos,
                destroyed_permutation: &placed.permutation,
                dimension: &mut self.dimension,
            },
        )?;
        Ok(placed.permutation)
    }

    /// Item entities in spawn order.
    pub fn spawned_items(&self) -> &[WorldItem] {
        self.dimension.items()
    }

    /// Everything observable so far.
    pub fn events(&self) -> &[HostEvent] {
        &self.dimension.events
    }

    /// Take and clear the event log.
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.dimension.events)
    }

    /// Total permutation writes made by components.
    pub fn permutation_writes(&self) -> u64 {
        self.permutation_writes
    }

    fn player_mut(&mut self, name: &str) -> Result<&mut SimPlayer, SimError> {
        self.players
            .get_mut(name)
            .ok_or_else(|| SimError::UnknownPlayer(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pot::POT_COMPONENT;

    #[test]
    fn placing_needs_a_known_component() {
        let mut world = SimWorld::with_config(&AddonConfig::default()).unwrap();
        let pos = BlockPos::new(0, 64, 0);
        assert!(matches!(
            world.place(pos, "bap:nothing"),
            Err(SimError::Registration(RegistrationError::UnknownComponent(_)))
        ));
        world.place(pos, POT_COMPONENT).unwrap();
        assert!(matches!(world.place(pos, POT_COMPONENT), Err(SimError::Occupied(_))));
    }

    #[test]
    fn spawned_entities_get_increasing_ids() {
        let mut dim = SimDimension::new(DimensionId::Nether);
        let at = BlockPos::new(1, 2, 3).center();
        dim.spawn_item(ItemStack::parse("minecraft:poppy", 1).unwrap(), at);
        dim.spawn_item(ItemStack::parse("minecraft:allium", 1).unwrap(), at);
        let ids: Vec<_> = dim.items().iter().map(|item| item.entity).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(dim.id(), DimensionId::Nether);
    }

    #[test]
    fn unknown_player_is_reported() {
        let mut world = SimWorld::with_config(&AddonConfig::default()).unwrap();
        let pos = BlockPos::new(0, 64, 0);
        world.place(pos, POT_COMPONENT).unwrap();
        assert!(matches!(
            world.interact("ghost", pos),
            Err(SimError::UnknownPlayer(_))
        ));
    }
}
