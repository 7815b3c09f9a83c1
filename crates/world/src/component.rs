//! Custom block components and their registry.
//!
//! The host binds a component id to block definitions; when an event fires on
//! such a block it is routed here by name.

use crate::catalog::CatalogError;
use crate::host::{PlayerDestroyEvent, PlayerInteractEvent};
use crate::permutation::BlockPermutation;
use displayblocks_core::{ItemId, ItemIdError};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Callbacks a custom block component receives.
pub trait BlockCustomComponent: Send + Sync {
    /// A player used the block.
    fn on_player_interact(&self, event: PlayerInteractEvent<'_>);

    /// A player destroyed the block.
    fn on_player_destroy(&self, event: PlayerDestroyEvent<'_>);

    /// Permutation for a freshly placed block using this component.
    fn default_permutation(&self) -> BlockPermutation;

    /// Catalog of attachable items, for diagnostics.
    fn describe(&self) -> serde_json::Value {
        serde_json::Value::Null
    }
}

/// Errors raised while registering or dispatching components.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Component ids must be namespaced (`namespace:name`).
    #[error("invalid component id {id:?}: {source}")]
    InvalidId {
        /// Rejected id.
        id: String,
        /// Parse failure.
        #[source]
        source: ItemIdError,
    },
    /// Component id without an explicit namespace.
    #[error("component id {0:?} needs an explicit namespace")]
    MissingNamespace(String),
    /// The id is already taken.
    #[error("component {0} is already registered")]
    Duplicate(String),
    /// No component has this id.
    #[error("no component registered as {0}")]
    UnknownComponent(String),
    /// A component's catalog is invalid.
    #[error("component {component} has an invalid catalog: {source}")]
    Catalog {
        /// Component id.
        component: String,
        /// Catalog failure.
        #[source]
        source: CatalogError,
    },
}

/// Named custom components, in id order.
#[derive(Default)]
pub struct BlockComponentRegistry {
    components: BTreeMap<String, Arc<dyn BlockCustomComponent>>,
}

impl BlockComponentRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `component` under `id`.
    pub fn register_custom_component(
        &mut self,
        id: &str,
        component: Arc<dyn BlockCustomComponent>,
    ) -> Result<(), RegistrationError> {
        if !id.contains(':') {
            return Err(RegistrationError::MissingNamespace(id.to_string()));
        }
        ItemId::parse(id).map_err(|source| RegistrationError::InvalidId {
            id: id.to_string(),
            source,
        })?;
        if self.components.contains_key(id) {
            return Err(RegistrationError::Duplicate(id.to_string()));
        }

        // Stored as given: events are routed by the exact registered spelling.
        info!(component = %id, "registered custom block component");
        self.components.insert(id.to_string(), component);
        Ok(())
    }

    /// Look up a component.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn BlockCustomComponent>> {
        self.components.get(id)
    }

    /// Registered ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Route an interact event to `id`.
    pub fn dispatch_interact(
        &self,
        id: &str,
        event: PlayerInteractEvent<'_>,
    ) -> Result<(), RegistrationError> {
        self.require(id)?.on_player_interact(event);
        Ok(())
    }

    /// Route a destroy event to `id`.
    pub fn dispatch_destroy(
        &self,
        id: &str,
        event: PlayerDestroyEvent<'_>,
    ) -> Result<(), RegistrationError> {
        self.require(id)?.on_player_destroy(event);
        Ok(())
    }

    fn require(&self, id: &str) -> Result<&Arc<dyn BlockCustomComponent>, RegistrationError> {
        self.components
            .get(id)
            .ok_or_else(|| RegistrationError::UnknownComponent(id.to_string()))
    }
}
