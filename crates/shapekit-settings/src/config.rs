//! Configuration for ShapeKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension.
//!
//! Configuration is organized into logical sections:
//! - Calibration (canvas pixels per physical centimetre)
//! - Grid (snap cell size and subdivisions)
//! - Interaction (drag/create thresholds, nudge and scale steps, rotation)
//! - Display (measurement unit, decimal places)
//! - Style (default look of newly drawn shapes)

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use shapekit_core::{FixedCalibration, MeasurementUnit};
use shapekit_designer::{DesignerState, Grid, InteractionConfig, ShapeStyle};

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// Largest number of decimals the measurement panel will show.
pub const MAX_DECIMAL_PLACES: usize = 6;

/// Measurement panel preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Unit measurements are shown and edited in
    pub unit: MeasurementUnit,
    /// Decimal places for formatted measurements
    pub decimal_places: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            unit: MeasurementUnit::Centimeters,
            decimal_places: 2,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub calibration: FixedCalibration,
    pub grid: Grid,
    pub interaction: InteractionConfig,
    pub display: DisplaySettings,
    pub style: ShapeStyle,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let ppcm = self.calibration.pixels_per_cm;
        if !(ppcm.is_finite() && ppcm > 0.0) {
            return Err(ConfigError::out_of_range("calibration.pixels_per_cm", ppcm));
        }

        if !(self.grid.cell_size.is_finite() && self.grid.cell_size > 0.0) {
            return Err(ConfigError::out_of_range("grid.cell_size", self.grid.cell_size));
        }
        if self.grid.subdivisions == 0 {
            return Err(ConfigError::out_of_range("grid.subdivisions", 0));
        }

        let interaction = &self.interaction;
        let non_negative = [
            ("interaction.min_drag_distance", interaction.min_drag_distance),
            ("interaction.min_create_distance", interaction.min_create_distance),
            ("interaction.rotation_snap_degrees", interaction.rotation_snap_degrees),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }
        let positive = [
            ("interaction.nudge_step", interaction.nudge_step),
            ("interaction.nudge_step_large", interaction.nudge_step_large),
            ("interaction.rotation_sensitivity", interaction.rotation_sensitivity),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }
        // Minus must still shrink to a positive size.
        if !(interaction.scale_step > 0.0 && interaction.scale_step < 1.0) {
            return Err(ConfigError::out_of_range(
                "interaction.scale_step",
                interaction.scale_step,
            ));
        }

        if self.display.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::out_of_range(
                "display.decimal_places",
                self.display.decimal_places,
            ));
        }

        if !(self.style.stroke_width.is_finite() && self.style.stroke_width >= 0.0) {
            return Err(ConfigError::out_of_range(
                "style.stroke_width",
                self.style.stroke_width,
            ));
        }
        if !(0.0..=1.0).contains(&self.style.opacity) {
            return Err(ConfigError::out_of_range("style.opacity", self.style.opacity));
        }

        Ok(())
    }

    /// Pushes these settings into a running session.
    pub fn apply_to(&self, state: &mut DesignerState) {
        state.set_unit(self.display.unit);
        state.set_calibration(self.calibration);
        state.canvas.set_grid(self.grid);
        state.canvas.set_config(self.interaction);
        state.canvas.set_default_style(self.style.clone());
    }

    /// Builds a designer session with this configuration applied.
    pub fn designer_state(&self) -> DesignerState {
        let mut state = DesignerState::new();
        self.apply_to(&mut state);
        state
    }
}
