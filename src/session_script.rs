use anyhow::{Context, Result};
use displayblocks_core::{BlockPos, GameMode, ItemStack, SimTick};
use displayblocks_world::{HostEvent, SimWorld};
use serde::Deserialize;
use std::{collections::VecDeque, fs, path::Path};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SessionScriptFile {
    steps: Vec<SessionStepDef>,
}

#[derive(Debug, Clone, Deserialize)]
struct SessionStepDef {
    tick: u64,
    #[serde(flatten)]
    action: SessionAction,
}

/// One thing a script does to the simulated world.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    Place {
        pos: [i32; 3],
        component: String,
    },
    AddPlayer {
        player: String,
        #[serde(default)]
        game_mode: GameMode,
        /// Players without equipment exercise the no-op interact path.
        #[serde(default = "default_equipped")]
        equipped: bool,
    },
    Give {
        player: String,
        item: String,
        #[serde(default = "default_amount")]
        amount: u32,
    },
    ClearHand {
        player: String,
    },
    GameMode {
        player: String,
        game_mode: GameMode,
    },
    Interact {
        player: String,
        pos: [i32; 3],
    },
    Destroy {
        pos: [i32; 3],
    },
}

fn default_equipped() -> bool {
    true
}

fn default_amount() -> u32 {
    1
}

fn block_pos([x, y, z]: [i32; 3]) -> BlockPos {
    BlockPos::new(x, y, z)
}

impl SessionAction {
    /// Apply the action to `world`.
    pub fn apply(&self, world: &mut SimWorld) -> Result<()> {
        match self {
            SessionAction::Place { pos, component } => {
                world.place(block_pos(*pos), component)?;
            }
            SessionAction::AddPlayer {
                player,
                game_mode,
                equipped,
            } => {
                if *equipped {
                    world.add_player(player, *game_mode);
                } else {
                    world.add_player_without_equipment(player, *game_mode);
                }
            }
            SessionAction::Give {
                player,
                item,
                amount,
            } => {
                let stack = ItemStack::parse(item, *amount)
                    .with_context(|| format!("give to {player}"))?;
                world.give(player, stack)?;
            }
            SessionAction::ClearHand { player } => world.clear_hand(player)?,
            SessionAction::GameMode { player, game_mode } => {
                world.set_game_mode(player, *game_mode)?;
            }
            SessionAction::Interact { player, pos } => {
                world.interact(player, block_pos(*pos))?;
            }
            SessionAction::Destroy { pos } => {
                world.destroy(block_pos(*pos))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct SessionStep {
    tick: SimTick,
    action: SessionAction,
}

/// Deterministic session script runner.
///
/// Scripts are a list of `{tick, action, ...}` steps sorted by tick.
#[derive(Debug)]
pub struct SessionScript {
    pending: VecDeque<SessionStep>,
}

impl SessionScript {
    /// Load a session script from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read session script {}", path.display()))?;
        Self::from_str(&contents)
    }

    /// Load a session script from an in-memory JSON string.
    pub fn from_str(contents: &str) -> Result<Self> {
        let file: SessionScriptFile = serde_json::from_str(contents)?;
        if file.steps.is_empty() {
            anyhow::bail!("session script contains no steps");
        }

        let mut pending = VecDeque::with_capacity(file.steps.len());
        let mut last_tick: Option<u64> = None;
        for step in file.steps {
            if let Some(prev) = last_tick {
                if step.tick < prev {
                    anyhow::bail!("session script steps must be sorted by tick");
                }
            }
            last_tick = Some(step.tick);

            pending.push_back(SessionStep {
                tick: SimTick(step.tick),
                action: step.action,
            });
        }

        Ok(Self { pending })
    }

    /// Drain and return all actions scheduled for ticks `<= tick`.
    pub fn drain_ready_actions(&mut self, tick: SimTick) -> Vec<SessionAction> {
        let mut actions = Vec::new();
        while let Some(step) = self.pending.front() {
            if step.tick > tick {
                break;
            }
            let step = self.pending.pop_front().expect("front existed");
            actions.push(step.action);
        }
        actions
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// Run every step against `world`, returning the events of each tick
    /// that produced any.
    pub fn run(mut self, world: &mut SimWorld) -> Result<Vec<(SimTick, Vec<HostEvent>)>> {
        let mut log = Vec::new();
        let mut tick = SimTick::ZERO;
        while !self.is_finished() {
            for action in self.drain_ready_actions(tick) {
                debug!(tick = tick.0, ?action, "Applying session action");
                action
                    .apply(world)
                    .with_context(|| format!("tick {}: {action:?}", tick.0))?;
            }
            let events = world.drain_events();
            if !events.is_empty() {
                log.push((tick, events));
            }
            tick = tick.advance(1);
        }
        Ok(log)
    }
}
