//! Measurement keys and the ordered measurement set shown in the panel.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use shapekit_core::{ShapeError, UnitScale};

/// Every measurement any shape type can report or accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKey {
    Radius,
    Diameter,
    Circumference,
    Area,
    Width,
    Height,
    Perimeter,
    Diagonal,
    Side1,
    Side2,
    Side3,
    Angle1,
    Angle2,
    Angle3,
    Length,
    Angle,
}

impl MeasurementKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementKey::Radius => "radius",
            MeasurementKey::Diameter => "diameter",
            MeasurementKey::Circumference => "circumference",
            MeasurementKey::Area => "area",
            MeasurementKey::Width => "width",
            MeasurementKey::Height => "height",
            MeasurementKey::Perimeter => "perimeter",
            MeasurementKey::Diagonal => "diagonal",
            MeasurementKey::Side1 => "side1",
            MeasurementKey::Side2 => "side2",
            MeasurementKey::Side3 => "side3",
            MeasurementKey::Angle1 => "angle1",
            MeasurementKey::Angle2 => "angle2",
            MeasurementKey::Angle3 => "angle3",
            MeasurementKey::Length => "length",
            MeasurementKey::Angle => "angle",
        }
    }

    /// Angles are in degrees and never unit-converted.
    pub fn is_angle(&self) -> bool {
        matches!(
            self,
            MeasurementKey::Angle1
                | MeasurementKey::Angle2
                | MeasurementKey::Angle3
                | MeasurementKey::Angle
        )
    }

    pub fn is_area(&self) -> bool {
        matches!(self, MeasurementKey::Area)
    }

    /// Triangle side index (0-based) for `side1..3`.
    pub fn side_index(&self) -> Option<usize> {
        match self {
            MeasurementKey::Side1 => Some(0),
            MeasurementKey::Side2 => Some(1),
            MeasurementKey::Side3 => Some(2),
            _ => None,
        }
    }

    /// Triangle vertex index (0-based) for `angle1..3`.
    pub fn vertex_index(&self) -> Option<usize> {
        match self {
            MeasurementKey::Angle1 => Some(0),
            MeasurementKey::Angle2 => Some(1),
            MeasurementKey::Angle3 => Some(2),
            _ => None,
        }
    }

    /// Converts a pixel-space value into display units.
    pub fn to_units(&self, px_value: f64, scale: &UnitScale) -> f64 {
        if self.is_angle() {
            px_value
        } else if self.is_area() {
            scale.area_from_px(px_value)
        } else {
            scale.linear_from_px(px_value)
        }
    }

    /// Converts a display-unit value back into pixel space.
    pub fn to_pixels(&self, value: f64, scale: &UnitScale) -> f64 {
        if self.is_angle() {
            value
        } else if self.is_area() {
            scale.area_to_px(value)
        } else {
            scale.linear_to_px(value)
        }
    }
}

impl fmt::Display for MeasurementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeasurementKey {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim().to_lowercase().as_str() {
            "radius" => MeasurementKey::Radius,
            "diameter" => MeasurementKey::Diameter,
            "circumference" => MeasurementKey::Circumference,
            "area" => MeasurementKey::Area,
            "width" => MeasurementKey::Width,
            "height" => MeasurementKey::Height,
            "perimeter" => MeasurementKey::Perimeter,
            "diagonal" => MeasurementKey::Diagonal,
            "side1" => MeasurementKey::Side1,
            "side2" => MeasurementKey::Side2,
            "side3" => MeasurementKey::Side3,
            "angle1" => MeasurementKey::Angle1,
            "angle2" => MeasurementKey::Angle2,
            "angle3" => MeasurementKey::Angle3,
            "length" => MeasurementKey::Length,
            "angle" => MeasurementKey::Angle,
            _ => {
                return Err(ShapeError::UnknownMeasurementKey { key: s.to_string() });
            }
        };
        Ok(key)
    }
}

/// Measurements of one shape, in the order the panel lists them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    entries: Vec<(MeasurementKey, f64)>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value, replacing any existing entry with the same key.
    pub fn push(&mut self, key: MeasurementKey, value: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn with(mut self, key: MeasurementKey, value: f64) -> Self {
        self.push(key, value);
        self
    }

    pub fn value(&self, key: MeasurementKey) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Lookup by panel key name; unknown names give `None`.
    pub fn get(&self, key: &str) -> Option<f64> {
        key.parse::<MeasurementKey>()
            .ok()
            .and_then(|k| self.value(k))
    }

    pub fn keys(&self) -> impl Iterator<Item = MeasurementKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeasurementKey, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), *v))
            .collect()
    }
}

impl FromIterator<(MeasurementKey, f64)> for Measurements {
    fn from_iter<I: IntoIterator<Item = (MeasurementKey, f64)>>(iter: I) -> Self {
        let mut measurements = Measurements::new();
        for (key, value) in iter {
            measurements.push(key, value);
        }
        measurements
    }
}
