//! Mapping between content slots and block permutation fields.

use crate::permutation::{BlockPermutation, PermutationError};
use displayblocks_core::ItemId;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// What a display block currently holds, as a closed set of kinds.
pub trait ContentSlot: Clone + Eq + Hash + Debug + Serialize + Send + Sync + 'static {
    /// The "nothing attached" slot.
    fn empty() -> Self;

    /// Whether this is the empty slot.
    fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Item the slot names by itself, for slots whose payload is an item id.
    ///
    /// Used when the catalog has no entry for the slot.
    fn carried_item(&self) -> Option<ItemId> {
        None
    }
}

/// Reads and writes a [`ContentSlot`] through block state fields.
///
/// `read(&write(p, s)) == Ok(s)` must hold for every slot `s` and every
/// permutation `p` that declares the encoding's fields.
pub trait ContentEncoding: Send + Sync + 'static {
    /// Slot type this encoding stores.
    type Slot: ContentSlot;

    /// Permutation of a freshly placed, empty block.
    fn default_permutation(&self) -> BlockPermutation;

    /// Decode the active slot.
    fn read(&self, permutation: &BlockPermutation) -> Result<Self::Slot, PermutationError>;

    /// Return `permutation` with `slot` written into it.
    fn write(&self, permutation: &BlockPermutation, slot: &Self::Slot) -> BlockPermutation;
}
