//! Block permutations: a block type plus its typed state fields.
//!
//! The host persists these; handlers only ever read a permutation and hand
//! back a modified copy through [`BlockPermutation::with_state`].

use displayblocks_core::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Typed value stored in a block state field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    /// Boolean state.
    Bool(bool),
    /// Integer state.
    Int(i32),
    /// String state (enum-like values and item identifiers).
    String(String),
}

impl StateValue {
    /// Short type label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            StateValue::Bool(_) => "bool",
            StateValue::Int(_) => "int",
            StateValue::String(_) => "string",
        }
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Bool(v) => write!(f, "{v}"),
            StateValue::Int(v) => write!(f, "{v}"),
            StateValue::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        StateValue::Bool(value)
    }
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        StateValue::Int(value)
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::String(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        StateValue::String(value)
    }
}

impl From<&ItemId> for StateValue {
    fn from(value: &ItemId) -> Self {
        StateValue::String(value.to_string())
    }
}

/// Errors raised while reading content out of a permutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermutationError {
    /// The block definition does not declare the field.
    #[error("block {block} has no state {state:?}")]
    MissingState {
        /// Block type.
        block: String,
        /// State name.
        state: String,
    },
    /// The field exists but holds another type.
    #[error("state {state:?} holds a {found}, expected {expected}")]
    WrongType {
        /// State name.
        state: String,
        /// Expected type label.
        expected: &'static str,
        /// Actual type label.
        found: &'static str,
    },
    /// The field holds a value the encoding does not recognise.
    #[error("state {state:?} has unrecognised value {value:?}")]
    UnknownValue {
        /// State name.
        state: String,
        /// Offending value.
        value: String,
    },
}

/// Snapshot of a block's type and typed state fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPermutation {
    block: ItemId,
    states: BTreeMap<String, StateValue>,
}

impl BlockPermutation {
    /// Create a permutation with no state fields.
    pub fn new(block: ItemId) -> Self {
        Self {
            block,
            states: BTreeMap::new(),
        }
    }

    /// Block type identifier.
    pub fn block(&self) -> &ItemId {
        &self.block
    }

    /// Read a state field, if declared.
    pub fn get_state(&self, name: &str) -> Option<&StateValue> {
        self.states.get(name)
    }

    /// Return a copy with `name` set to `value`.
    pub fn with_state(&self, name: &str, value: impl Into<StateValue>) -> Self {
        let mut next = self.clone();
        next.states.insert(name.to_string(), value.into());
        next
    }

    /// Iterate over declared fields in name order.
    pub fn states(&self) -> impl Iterator<Item = (&str, &StateValue)> {
        self.states.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Read a required string field.
    pub fn string_state(&self, name: &str) -> Result<&str, PermutationError> {
        match self.require(name)? {
            StateValue::String(v) => Ok(v.as_str()),
            other => Err(PermutationError::WrongType {
                state: name.to_string(),
                expected: "string",
                found: other.kind(),
            }),
        }
    }

    /// Read a required integer field.
    pub fn int_state(&self, name: &str) -> Result<i32, PermutationError> {
        match self.require(name)? {
            StateValue::Int(v) => Ok(*v),
            other => Err(PermutationError::WrongType {
                state: name.to_string(),
                expected: "int",
                found: other.kind(),
            }),
        }
    }

    fn require(&self, name: &str) -> Result<&StateValue, PermutationError> {
        self.states
            .get(name)
            .ok_or_else(|| PermutationError::MissingState {
                block: self.block.to_string(),
                state: name.to_string(),
            })
    }
}
