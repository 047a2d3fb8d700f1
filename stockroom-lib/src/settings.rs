//! Application settings (database location, first-run seeding).
//!
//! The settings file is `~/.config/stockroom/settings.toml`. Missing or
//! unreadable settings fall back to defaults.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub general: GeneralSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(default = "default_true")]
    pub seed_on_empty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            seed_on_empty: true,
        }
    }
}

/// Canonical path to the settings file: `~/.config/stockroom/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("stockroom").join("settings.toml")
}

/// Default database location: `<data dir>/stockroom/inventory.db`.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("stockroom").join("inventory.db")
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Save settings to `path` atomically (write to temp, then rename).
pub fn save_settings_to(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

pub fn save_settings(settings: &Settings) -> io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `database.path` in the settings
/// 3. [`default_database_path`]
pub fn resolve_database_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    cli_override
        .or_else(|| settings.database.path.clone())
        .unwrap_or_else(default_database_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let settings = load_settings_from(&tmp.path().join("nope.toml"));
        assert_eq!(settings, Settings::default());
        assert!(settings.general.seed_on_empty);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "this is [not toml").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[database]\npath = \"/srv/inventory.db\"\n").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(
            settings.database.path,
            Some(PathBuf::from("/srv/inventory.db"))
        );
        assert!(settings.general.seed_on_empty);
    }

    #[test]
    fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.toml");
        let settings = Settings {
            database: DatabaseSettings {
                path: Some(PathBuf::from("/tmp/stock.db")),
            },
            general: GeneralSettings {
                seed_on_empty: false,
            },
        };

        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), settings);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_resolve_priority() {
        let settings = Settings {
            database: DatabaseSettings {
                path: Some(PathBuf::from("/from/settings.db")),
            },
            ..Default::default()
        };

        assert_eq!(
            resolve_database_path(Some(PathBuf::from("/from/cli.db")), &settings),
            PathBuf::from("/from/cli.db")
        );
        assert_eq!(
            resolve_database_path(None, &settings),
            PathBuf::from("/from/settings.db")
        );
        assert_eq!(
            resolve_database_path(None, &Settings::default()),
            default_database_path()
        );
    }
}
