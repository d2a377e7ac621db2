//! Settings location management.
//!
//! Resolves the platform config directory (`<config_dir>/shapekit/`) and
//! loads or saves the main `config.toml` there.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "shapekit";
const CONFIG_FILE: &str = "config.toml";

pub struct SettingsManager;

impl SettingsManager {
    /// Platform configuration directory for ShapeKit.
    pub fn config_directory() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_directory()?.join(CONFIG_FILE))
    }

    /// Creates the config directory if it does not exist yet.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_directory()?;
        std::fs::create_dir_all(&dir).map_err(|e| {
            SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e))
        })?;
        Ok(dir)
    }

    /// Loads `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Config {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Config::default();
        }
        match Config::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Loads the user's config file from the platform directory.
    pub fn load() -> Config {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                tracing::warn!("{}", e);
                Config::default()
            }
        }
    }

    /// Saves `config` to the platform directory, returning the file written.
    pub fn save(config: &Config) -> SettingsResult<PathBuf> {
        let path = Self::ensure_config_dir()?.join(CONFIG_FILE);
        config
            .save_to_file(&path)
            .map_err(|e| SettingsError::SaveError(e.to_string()))?;
        Ok(path)
    }
}
