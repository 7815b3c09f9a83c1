#![warn(missing_docs)]
//! Attachable-item blocks: catalogs, content encodings and the shared
//! interact/destroy handler, plus an in-memory host for driving them.

mod blocks;
mod catalog;
mod component;
mod config;
mod display;
mod encoding;
mod handler;
mod host;
mod permutation;
mod pot;
mod sim;
mod sound;

pub use blocks::register_all_blocks;
pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use component::{BlockComponentRegistry, BlockCustomComponent, RegistrationError};
pub use config::{AddonConfig, DisplayBlockConfig, DisplayItemConfig, EMPTY_SENTINEL};
pub use display::{display_catalog, DisplayEncoding, DisplaySlot};
pub use encoding::{ContentEncoding, ContentSlot};
pub use handler::{DisplayHandler, InteractOutcome};
pub use host::{
    BlockAccess, DimensionAccess, EquipmentSlot, PlayerAccess, PlayerDestroyEvent,
    PlayerInteractEvent,
};
pub use permutation::{BlockPermutation, PermutationError, StateValue};
pub use pot::{
    pot_catalog, PotCategory, PotContents, PotEncoding, AZALEA_TYPE_STATE, CONTENTS_STATE,
    FLOWER_TYPE_STATE, FUNGUS_TYPE_STATE, POT_BLOCK, POT_COMPONENT, SAPLING_TYPE_STATE,
};
pub use sim::{HostEvent, SimDimension, SimError, SimPlayer, SimWorld, WorldItem};
pub use sound::{SoundEvent, PLACE_VOLUME, PLANT_SOUND, SWAP_SOUND};
