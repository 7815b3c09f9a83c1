//! One-time registration of every scripted block in the add-on.

use crate::catalog::CatalogError;
use crate::component::{BlockComponentRegistry, RegistrationError};
use crate::config::AddonConfig;
use crate::display::{display_catalog, DisplayEncoding};
use crate::handler::DisplayHandler;
use crate::pot::{pot_catalog, PotEncoding, POT_COMPONENT};
use crate::sound::{SoundEvent, PLANT_SOUND};
use std::sync::Arc;

/// Register the coloured pot and every configured display block.
///
/// Called once by the host at world initialization. Any failure aborts
/// startup; nothing is registered past the first error.
pub fn register_all_blocks(
    registry: &mut BlockComponentRegistry,
    config: &AddonConfig,
) -> Result<(), RegistrationError> {
    if config.coloured_pot {
        let catalog = pot_catalog().map_err(|source| RegistrationError::Catalog {
            component: POT_COMPONENT.to_string(),
            source,
        })?;
        let handler = DisplayHandler::new(
            POT_COMPONENT,
            PotEncoding,
            catalog,
            SoundEvent::with_volume(PLANT_SOUND, config.place_volume),
        );
        registry.register_custom_component(POT_COMPONENT, Arc::new(handler))?;
    }

    for block in &config.display_blocks {
        let catalog_error = |source: CatalogError| RegistrationError::Catalog {
            component: block.component.clone(),
            source,
        };
        let encoding = DisplayEncoding::from_config(block)
            .map_err(|err| catalog_error(err.into()))?;
        let catalog = display_catalog(&block.items, config.place_volume).map_err(catalog_error)?;
        let handler = DisplayHandler::new(
            block.component.as_str(),
            encoding,
            catalog,
            SoundEvent::with_volume(PLANT_SOUND, config.place_volume),
        );
        registry.register_custom_component(&block.component, Arc::new(handler))?;
    }

    Ok(())
}
