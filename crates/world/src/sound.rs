//! Sound events played through the host.

use serde::{Deserialize, Serialize};

/// Played when an attached item is knocked out by a different one.
pub const SWAP_SOUND: &str = "random.pop";

/// Generic "planted into dirt" sound.
pub const PLANT_SOUND: &str = "dig.grass";

/// Volume used for placement sounds.
pub const PLACE_VOLUME: f32 = 0.5;

/// A named sound plus optional playback volume (host default when `None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundEvent {
    /// Host sound identifier (e.g., `dig.grass`).
    pub id: String,
    /// Optional volume override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,
}

impl SoundEvent {
    /// Sound at the host's default volume.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            volume: None,
        }
    }

    /// Sound at an explicit volume, clamped to `0.0..=1.0`.
    pub fn with_volume(id: impl Into<String>, volume: f32) -> Self {
        Self {
            id: id.into(),
            volume: Some(volume.clamp(0.0, 1.0)),
        }
    }

    /// The swap ("pop") sound.
    pub fn swap() -> Self {
        Self::new(SWAP_SOUND)
    }
}
