//! ShapeKit Settings Crate
//!
//! Handles application configuration and settings persistence: calibration,
//! grid, interaction thresholds, display units and the default shape style.

pub mod config;
pub mod error;
pub mod manager;
pub mod persistence;

pub use config::{Config, DisplaySettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
pub use persistence::SettingsPersistence;
