//! Ready-made worlds, players and stacks.

use displayblocks_core::{BlockPos, GameMode, ItemId, ItemStack};
use displayblocks_world::{AddonConfig, SimWorld};

/// Where fixture blocks are placed.
pub const ORIGIN: BlockPos = BlockPos::new(0, 64, 0);

/// Name of the survival-mode fixture player.
pub const SURVIVOR: &str = "survivor";

/// Name of the creative-mode fixture player.
pub const BUILDER: &str = "builder";

/// Parse an item id, panicking on malformed test input.
pub fn item(id: &str) -> ItemId {
    ItemId::parse(id).unwrap_or_else(|err| panic!("fixture item {id:?}: {err}"))
}

/// Build a stack, panicking on malformed test input.
pub fn stack(id: &str, amount: u32) -> ItemStack {
    ItemStack::new(item(id), amount)
}

/// World with the default add-on config, one block carrying `component` at
/// [`ORIGIN`], and the two fixture players.
pub fn world_with(component: &str) -> SimWorld {
    let mut world = SimWorld::with_config(&AddonConfig::default())
        .unwrap_or_else(|err| panic!("default config must register: {err}"));
    world
        .place(ORIGIN, component)
        .unwrap_or_else(|err| panic!("placing {component}: {err}"));
    world.add_player(SURVIVOR, GameMode::Survival);
    world.add_player(BUILDER, GameMode::Creative);
    world
}

/// Held amount of `player`'s main hand (0 when empty).
pub fn held_amount(world: &SimWorld, player: &str) -> u32 {
    world
        .player(player)
        .and_then(|p| p.held())
        .map_or(0, |stack| stack.amount)
}
