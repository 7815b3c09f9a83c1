//! Item stacks and player game modes.

use crate::registry::{ItemId, ItemIdError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest amount a single stack may hold.
pub const MAX_STACK_SIZE: u32 = 64;

/// An item stack held in an equipment slot or spawned into the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item identifier.
    pub item: ItemId,
    /// Quantity in the stack (always >= 1).
    pub amount: u32,
}

impl ItemStack {
    /// Create a stack, clamping `amount` into `1..=MAX_STACK_SIZE`.
    pub fn new(item: ItemId, amount: u32) -> Self {
        Self {
            item,
            amount: amount.clamp(1, MAX_STACK_SIZE),
        }
    }

    /// A stack of exactly one item.
    pub fn single(item: ItemId) -> Self {
        Self::new(item, 1)
    }

    /// Parse the identifier and build a stack.
    pub fn parse(item: &str, amount: u32) -> Result<Self, ItemIdError> {
        Ok(Self::new(ItemId::parse(item)?, amount))
    }

    /// Identifier of the stacked item.
    pub fn type_id(&self) -> &ItemId {
        &self.item
    }
}

/// Player game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Items are consumed on use.
    #[default]
    Survival,
    /// Unlimited items.
    Creative,
    /// Survival rules with restricted block interaction.
    Adventure,
    /// Observer only.
    Spectator,
}

impl GameMode {
    /// Whether using an item consumes it from the stack.
    pub fn consumes_items(self) -> bool {
        self == GameMode::Survival
    }

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::Survival => "survival",
            GameMode::Creative => "creative",
            GameMode::Adventure => "adventure",
            GameMode::Spectator => "spectator",
        }
    }

    /// Parse a game mode name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "survival" | "s" => Some(GameMode::Survival),
            "creative" | "c" => Some(GameMode::Creative),
            "adventure" | "a" => Some(GameMode::Adventure),
            "spectator" | "sp" => Some(GameMode::Spectator),
            _ => None,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
