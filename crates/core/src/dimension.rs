//! Dimension identifiers.
//!
//! Spawned items and sounds are dimension-scoped in the host, so every
//! world-facing call carries the dimension the block lives in.

use serde::{Deserialize, Serialize};

/// Stable identifier for a world dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DimensionId {
    /// The Overworld dimension.
    Overworld = 0,
    /// The Nether dimension.
    Nether = 1,
    /// The End dimension.
    End = 2,
}

impl DimensionId {
    /// Default (Overworld) dimension.
    pub const DEFAULT: Self = Self::Overworld;

    /// Host-facing identifier (e.g., `minecraft:overworld`).
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Overworld => "minecraft:overworld",
            Self::Nether => "minecraft:nether",
            Self::End => "minecraft:the_end",
        }
    }

    /// Resolve a host-facing identifier; the namespace is optional.
    pub fn from_identifier(value: &str) -> Option<Self> {
        let path = value
            .strip_prefix("minecraft:")
            .unwrap_or(value)
            .trim();
        match path {
            "overworld" => Some(Self::Overworld),
            "nether" => Some(Self::Nether),
            "the_end" | "end" => Some(Self::End),
            _ => None,
        }
    }
}

impl Default for DimensionId {
    fn default() -> Self {
        Self::DEFAULT
    }
}
