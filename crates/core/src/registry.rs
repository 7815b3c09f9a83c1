//! Namespaced item identifiers.
//!
//! Item identifiers are stable string keys of the form `namespace:path`
//! (e.g., `minecraft:poppy`). They double as the values written into
//! string-typed block states, so parsing is strict and the textual form
//! round-trips exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default namespace used when an identifier omits an explicit namespace.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Error returned when parsing an invalid [`ItemId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid item id {input:?}: {reason}")]
pub struct ItemIdError {
    input: String,
    reason: &'static str,
}

impl ItemIdError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// Why the identifier was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A namespaced identifier of the form `namespace:path`.
///
/// Ordering is lexical by `(namespace, path)` and is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId {
    namespace: String,
    path: String,
}

impl ItemId {
    /// Parse an identifier.
    ///
    /// Accepts either:
    /// - `namespace:path`
    /// - `path` (uses [`DEFAULT_NAMESPACE`])
    pub fn parse(input: &str) -> Result<Self, ItemIdError> {
        Self::parse_with_default_namespace(input, DEFAULT_NAMESPACE)
    }

    /// Parse an identifier using a caller-provided default namespace.
    pub fn parse_with_default_namespace(
        input: &str,
        default_namespace: &str,
    ) -> Result<Self, ItemIdError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ItemIdError::new(input, "identifier cannot be empty"));
        }

        let (namespace, path) = trimmed
            .split_once(':')
            .unwrap_or((default_namespace, trimmed));

        validate_namespace(input, namespace)?;
        validate_path(input, path)?;

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Identifier namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Identifier path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ItemId {
    type Err = ItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = ItemIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.to_string()
    }
}

fn validate_namespace(input: &str, ns: &str) -> Result<(), ItemIdError> {
    if ns.is_empty() {
        return Err(ItemIdError::new(input, "namespace cannot be empty"));
    }
    if ns.len() > 64 {
        return Err(ItemIdError::new(input, "namespace too long (max 64)"));
    }
    if !ns
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'))
    {
        return Err(ItemIdError::new(
            input,
            "namespace has invalid characters (allowed: a-z0-9_.-)",
        ));
    }
    Ok(())
}

fn validate_path(input: &str, path: &str) -> Result<(), ItemIdError> {
    if path.is_empty() {
        return Err(ItemIdError::new(input, "path cannot be empty"));
    }
    if path.len() > 128 {
        return Err(ItemIdError::new(input, "path too long (max 128)"));
    }
    if !path
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/'))
    {
        return Err(ItemIdError::new(
            input,
            "path has invalid characters (allowed: a-z0-9_./-)",
        ));
    }
    Ok(())
}
