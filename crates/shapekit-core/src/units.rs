//! Measurement units and screen calibration
//!
//! Shapes live in canvas pixels. Measurements are shown in centimetres or
//! inches, converted through a pixels-per-unit factor that a calibration
//! provider supplies. The engine never hardcodes that factor: every
//! measurement function receives a [`UnitScale`] built from the provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

/// Centimetres per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementUnit {
    /// Centimetres
    #[serde(rename = "cm")]
    Centimeters,
    /// Inches
    #[serde(rename = "in")]
    Inches,
}

impl Default for MeasurementUnit {
    fn default() -> Self {
        Self::Centimeters
    }
}

impl MeasurementUnit {
    /// Short label used next to displayed values ("cm" or "in")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Inches => "in",
        }
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MeasurementUnit {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(Self::Centimeters)
            }
            "in" | "inch" | "inches" => Ok(Self::Inches),
            _ => Err(ShapeError::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

/// Supplies the screen calibration factor for a unit.
pub trait CalibrationProvider {
    /// Number of canvas pixels that make up one `unit`.
    fn pixels_per_unit(&self, unit: MeasurementUnit) -> f64;

    /// Builds the conversion context for `unit`.
    fn unit_scale(&self, unit: MeasurementUnit) -> UnitScale {
        UnitScale::new(unit, self.pixels_per_unit(unit))
    }
}

/// Calibration with a fixed pixels-per-centimetre factor.
///
/// The inch factor is derived from it, so both units always agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedCalibration {
    /// Canvas pixels per centimetre
    pub pixels_per_cm: f64,
}

impl FixedCalibration {
    pub fn new(pixels_per_cm: f64) -> Self {
        Self { pixels_per_cm }
    }

    /// Calibration derived from a screen density in dots per inch.
    pub fn from_dpi(dpi: f64) -> Self {
        Self::new(dpi / CM_PER_INCH)
    }
}

impl Default for FixedCalibration {
    /// 96 DPI, the CSS reference pixel.
    fn default() -> Self {
        Self::from_dpi(96.0)
    }
}

impl CalibrationProvider for FixedCalibration {
    fn pixels_per_unit(&self, unit: MeasurementUnit) -> f64 {
        match unit {
            MeasurementUnit::Centimeters => self.pixels_per_cm,
            MeasurementUnit::Inches => self.pixels_per_cm * CM_PER_INCH,
        }
    }
}

/// Unit plus its calibration factor, passed into every measurement function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    pub unit: MeasurementUnit,
    pub pixels_per_unit: f64,
}

impl UnitScale {
    /// Creates a unit scale. A non-positive or non-finite factor falls back to 1.
    pub fn new(unit: MeasurementUnit, pixels_per_unit: f64) -> Self {
        let pixels_per_unit = if pixels_per_unit.is_finite() && pixels_per_unit > 0.0 {
            pixels_per_unit
        } else {
            tracing::warn!(
                "Invalid calibration factor {} for {}, using 1 px/unit",
                pixels_per_unit,
                unit
            );
            1.0
        };
        Self {
            unit,
            pixels_per_unit,
        }
    }

    /// Identity scale (1 px per unit), handy for pixel-space measurements.
    pub fn pixels() -> Self {
        Self::new(MeasurementUnit::Centimeters, 1.0)
    }

    /// Pixels to display units for lengths.
    pub fn linear_from_px(&self, px: f64) -> f64 {
        px / self.pixels_per_unit
    }

    /// Display units to pixels for lengths.
    pub fn linear_to_px(&self, value: f64) -> f64 {
        value * self.pixels_per_unit
    }

    /// Square pixels to display units for areas.
    pub fn area_from_px(&self, px2: f64) -> f64 {
        px2 / (self.pixels_per_unit * self.pixels_per_unit)
    }

    /// Display units to square pixels for areas.
    pub fn area_to_px(&self, value: f64) -> f64 {
        value * self.pixels_per_unit * self.pixels_per_unit
    }
}

/// Format a measurement for display with the unit label (squared for areas).
pub fn format_measurement(
    value: f64,
    unit: MeasurementUnit,
    is_area: bool,
    decimals: usize,
) -> String {
    if is_area {
        format!("{:.*} {}²", decimals, value, unit.label())
    } else {
        format!("{:.*} {}", decimals, value, unit.label())
    }
}
