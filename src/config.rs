use anyhow::Result;
use displayblocks_world::AddonConfig;
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_ADDON_PATH: &str = "config/addon.toml";

/// Load the add-on configuration from the default path.
pub fn load() -> AddonConfig {
    load_from_path(Path::new(DEFAULT_ADDON_PATH))
}

/// Load configuration from an explicit path, falling back to defaults on errors.
pub fn load_from_path(path: &Path) -> AddonConfig {
    match fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<AddonConfig>(&contents) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("Failed to parse {}: {err}. Using defaults", path.display());
                AddonConfig::default()
            }
        },
        Err(err) => {
            if path != Path::new(DEFAULT_ADDON_PATH) || err.kind() != std::io::ErrorKind::NotFound
            {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
            } else {
                warn!(
                    "Add-on config not found at {}. Using defaults",
                    path.display()
                );
            }
            AddonConfig::default()
        }
    }
}

/// Write `config` as TOML to `path`.
pub fn save_to_path(config: &AddonConfig, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("displayblocks-config-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = load_from_path(&temp_path("missing.toml"));
        assert!(cfg.coloured_pot);
        assert_eq!(cfg.log_filter, "warn");
        assert_eq!(cfg.display_blocks.len(), 1);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_path("partial.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "coloured_pot = false\nplace_volume = 0.25\n").unwrap();

        let cfg = load_from_path(&path);

        assert!(!cfg.coloured_pot);
        assert_eq!(cfg.place_volume, 0.25);
        assert_eq!(cfg.display_blocks[0].component, "mkt:display_item");
    }

    #[test]
    fn unparsable_file_uses_defaults() {
        let path = temp_path("broken.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "coloured_pot = [").unwrap();

        let cfg = load_from_path(&path);

        assert!(cfg.coloured_pot);
    }

    #[test]
    fn shipped_config_gives_every_display_item_a_sound() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_ADDON_PATH);
        let shipped: AddonConfig =
            toml::from_str(&fs::read_to_string(&path).expect("shipped config readable"))
                .expect("shipped config parses");

        for block in &shipped.display_blocks {
            for item in &block.items {
                assert!(item.sound.is_some(), "{} has no sound", item.item);
            }
        }
    }

    #[test]
    fn saved_config_loads_back() {
        let path = temp_path("saved/addon.toml");
        let mut cfg = AddonConfig::default();
        cfg.display_blocks[0].items.truncate(3);
        save_to_path(&cfg, &path).expect("save config");

        let loaded = load_from_path(&path);

        assert_eq!(loaded.display_blocks[0].items, cfg.display_blocks[0].items);
    }
}
