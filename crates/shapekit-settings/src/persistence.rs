//! Settings Persistence
//!
//! Handles loading and saving settings from/to configuration files and
//! bridges the stored [`Config`] with a live [`DesignerState`].

use crate::config::{Config, FixedCalibration, MeasurementUnit};
use crate::error::{SettingsError, SettingsResult};
use crate::manager::SettingsManager;
use shapekit_designer::DesignerState;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Settings persistence layer
#[derive(Debug, Clone, Default)]
pub struct SettingsPersistence {
    config: Config,
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> SettingsResult<T> {
    value.trim().parse::<T>().map_err(|_| SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: format!("cannot parse '{}'", value),
    })
}

impl SettingsPersistence {
    /// Create new persistence layer with default config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Load settings from file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config = Config::load_from_file(path)?;
        Ok(Self { config })
    }

    /// Save settings to file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.config.save_to_file(path)
    }

    /// Loads the user's `<config_dir>/shapekit/config.toml`, or defaults
    /// when it is absent or unreadable.
    pub fn load_user() -> Self {
        Self::from_config(SettingsManager::load())
    }

    /// Saves to the user's config file, returning its path.
    pub fn save_user(&self) -> SettingsResult<PathBuf> {
        SettingsManager::save(&self.config)
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        Ok(self.config.validate()?)
    }

    /// Pushes the stored settings into a running session.
    pub fn apply_to(&self, state: &mut DesignerState) {
        self.config.apply_to(state);
    }

    /// Reads the session's current preferences back into the config.
    ///
    /// Calibration is not read back; it only changes through [`Self::set_value`].
    pub fn capture_from(&mut self, state: &DesignerState) -> SettingsResult<()> {
        let mut updated = self.config.clone();
        updated.display.unit = state.unit();
        updated.grid = *state.canvas.grid();
        updated.interaction = *state.canvas.config();
        updated.style = state.canvas.default_style().clone();
        updated.validate()?;
        self.config = updated;
        Ok(())
    }

    /// Updates one setting from its dotted key and text value, as entered
    /// in a settings form. The config is left untouched on error.
    pub fn set_value(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        let mut updated = self.config.clone();
        match key {
            "calibration.pixels_per_cm" => {
                updated.calibration = FixedCalibration::new(parse_value(key, value)?)
            }
            "calibration.dpi" => {
                updated.calibration = FixedCalibration::from_dpi(parse_value(key, value)?)
            }
            "grid.cell_size" => updated.grid.cell_size = parse_value(key, value)?,
            "grid.subdivisions" => updated.grid.subdivisions = parse_value(key, value)?,
            "interaction.min_drag_distance" => {
                updated.interaction.min_drag_distance = parse_value(key, value)?
            }
            "interaction.min_create_distance" => {
                updated.interaction.min_create_distance = parse_value(key, value)?
            }
            "interaction.nudge_step" => updated.interaction.nudge_step = parse_value(key, value)?,
            "interaction.nudge_step_large" => {
                updated.interaction.nudge_step_large = parse_value(key, value)?
            }
            "interaction.scale_step" => updated.interaction.scale_step = parse_value(key, value)?,
            "interaction.rotation_sensitivity" => {
                updated.interaction.rotation_sensitivity = parse_value(key, value)?
            }
            "interaction.rotation_snap_degrees" => {
                updated.interaction.rotation_snap_degrees = parse_value(key, value)?
            }
            "display.unit" => updated.display.unit = parse_value::<MeasurementUnit>(key, value)?,
            "display.decimal_places" => updated.display.decimal_places = parse_value(key, value)?,
            "style.fill_color" => updated.style.fill_color = value.trim().to_string(),
            "style.stroke_color" => updated.style.stroke_color = value.trim().to_string(),
            "style.stroke_width" => updated.style.stroke_width = parse_value(key, value)?,
            "style.opacity" => updated.style.opacity = parse_value(key, value)?,
            _ => {
                return Err(SettingsError::InvalidSetting {
                    key: key.to_string(),
                    reason: "unknown setting".to_string(),
                })
            }
        }
        updated.validate()?;
        tracing::debug!("Setting {} = {}", key, value);
        self.config = updated;
        Ok(())
    }
}
