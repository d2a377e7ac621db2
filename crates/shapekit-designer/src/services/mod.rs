//! Per-shape-type geometry services.
//!
//! Each shape type has a stateless service implementing [`ShapeService`].
//! Callers holding a [`Shape`] resolve the right one through
//! [`ShapeServiceFactory`]; callers holding a concrete variant can use the
//! typed associated functions on the service directly.
//!
//! Every operation returns a new value. A service handed a variant of the
//! wrong type logs an error and hands the input back unchanged.

use serde::{Deserialize, Serialize};

use shapekit_core::constants::{GEOMETRY_EPSILON, MIN_DIMENSION_PX};
use shapekit_core::{ShapeError, UnitScale};

use crate::measurement::{MeasurementKey, Measurements};
use crate::model::{Point, Shape, ShapeId, ShapeStyle, ShapeType};

mod circle;
mod line;
mod rectangle;
mod triangle;

pub use circle::CircleService;
pub use line::LineService;
pub use rectangle::RectangleService;
pub use triangle::TriangleService;

/// Radius used when a circle is created from a position alone.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 50.0;
pub const DEFAULT_RECTANGLE_WIDTH: f64 = 100.0;
pub const DEFAULT_RECTANGLE_HEIGHT: f64 = 60.0;
/// Width and height of the box a default triangle is inscribed in.
pub const DEFAULT_TRIANGLE_SIZE: f64 = 100.0;
pub const DEFAULT_LINE_LENGTH: f64 = 100.0;

/// Operations every shape type supports.
pub trait ShapeService: Send + Sync {
    fn shape_type(&self) -> ShapeType;

    fn create_shape(&self, params: &CreateShapeParams) -> Shape;

    /// Translates all defining geometry by (`dx`, `dy`).
    fn move_shape(&self, shape: &Shape, dx: f64, dy: f64) -> Shape;

    /// Uniform resize about the shape's own centre.
    fn resize_shape(&self, shape: &Shape, factor: f64) -> Shape {
        self.scale_shape(shape, factor, None)
    }

    /// Uniform scale about `center` (the shape's centre when `None`),
    /// composed through the baseline dimensions.
    fn scale_shape(&self, shape: &Shape, factor: f64, center: Option<Point>) -> Shape;

    /// Rotates by `angle_deg` about `center` (the shape's centre when `None`).
    fn rotate_shape(&self, shape: &Shape, angle_deg: f64, center: Option<Point>) -> Shape;

    /// Forward measurements converted to `scale.unit`.
    fn get_measurements(&self, shape: &Shape, scale: &UnitScale) -> Measurements;

    /// Reshapes so that `key` reads `new_value` (in `scale.unit`).
    ///
    /// `original_value` is what the panel displayed before the edit.
    fn update_from_measurement(
        &self,
        shape: &Shape,
        key: &str,
        new_value: f64,
        original_value: f64,
        scale: &UnitScale,
    ) -> Shape;

    fn contains_point(&self, shape: &Shape, point: Point) -> bool;
}

/// Inputs for [`ShapeService::create_shape`].
///
/// Explicit geometry wins; otherwise the shape is built around `position`
/// with the per-type defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateShapeParams {
    pub id: Option<ShapeId>,
    pub position: Option<Point>,
    pub center: Option<Point>,
    pub radius: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub points: Option<[Point; 3]>,
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub style: Option<ShapeStyle>,
}

impl CreateShapeParams {
    pub fn at(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Self {
            center: Some(center),
            radius: Some(radius),
            ..Default::default()
        }
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Some(Point::new(x, y)),
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    pub fn triangle(points: [Point; 3]) -> Self {
        Self {
            points: Some(points),
            ..Default::default()
        }
    }

    pub fn line(start: Point, end: Point) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: ShapeId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = Some(style);
        self
    }
}

static CIRCLE_SERVICE: CircleService = CircleService;
static RECTANGLE_SERVICE: RectangleService = RectangleService;
static TRIANGLE_SERVICE: TriangleService = TriangleService;
static LINE_SERVICE: LineService = LineService;

/// Resolves the service for a shape type.
pub struct ShapeServiceFactory;

impl ShapeServiceFactory {
    pub fn service(shape_type: ShapeType) -> &'static dyn ShapeService {
        match shape_type {
            ShapeType::Circle => &CIRCLE_SERVICE,
            ShapeType::Rectangle => &RECTANGLE_SERVICE,
            ShapeType::Triangle => &TRIANGLE_SERVICE,
            ShapeType::Line => &LINE_SERVICE,
        }
    }

    pub fn for_shape(shape: &Shape) -> &'static dyn ShapeService {
        Self::service(shape.shape_type())
    }

    /// Looks a service up by type name, failing on unknown names.
    pub fn by_name(name: &str) -> Result<&'static dyn ShapeService, ShapeError> {
        let shape_type: ShapeType = name.parse()?;
        Ok(Self::service(shape_type))
    }
}

/// A validated measurement edit in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MeasurementEdit {
    pub key: MeasurementKey,
    /// Requested value in pixels (px² for areas, degrees for angles).
    pub target: f64,
    /// Value shown before the edit, same space as `target`.
    pub original: f64,
}

impl MeasurementEdit {
    /// Scale factor that takes `current` to `target`, falling back to the
    /// original value as the reference when `current` has collapsed.
    pub fn factor_from(&self, current: f64) -> Option<f64> {
        let reference = if current.abs() > GEOMETRY_EPSILON {
            current
        } else if self.original.abs() > GEOMETRY_EPSILON {
            self.original
        } else {
            return None;
        };
        let factor = self.target / reference;
        (factor.is_finite() && factor > 0.0).then_some(factor)
    }
}

/// Parses and validates a panel edit for `shape_type`.
///
/// Returns `None` (after logging) when the edit should leave the shape as is.
pub(crate) fn prepare_edit(
    shape_type: ShapeType,
    supported: &[MeasurementKey],
    key: &str,
    new_value: f64,
    original_value: f64,
    scale: &UnitScale,
) -> Option<MeasurementEdit> {
    let key = match key.parse::<MeasurementKey>() {
        Ok(key) if supported.contains(&key) => key,
        _ => {
            tracing::warn!("Unknown measurement key '{}' for {}", key, shape_type);
            return None;
        }
    };

    if (new_value - original_value).abs() <= GEOMETRY_EPSILON {
        tracing::debug!("{} {} unchanged at {}", shape_type, key, new_value);
        return None;
    }

    let mut target = key.to_pixels(new_value, scale);
    if key.is_angle() {
        if !target.is_finite() {
            tracing::warn!("Non-finite {} for {}, ignoring", key, shape_type);
            return None;
        }
    } else if !target.is_finite() || target <= 0.0 {
        tracing::warn!(
            "Invalid {} {} for {}, clamping to {}",
            key,
            new_value,
            shape_type,
            MIN_DIMENSION_PX
        );
        target = MIN_DIMENSION_PX;
    }

    Some(MeasurementEdit {
        key,
        target,
        original: key.to_pixels(original_value, scale),
    })
}

/// Rejects non-positive or non-finite scale factors.
pub(crate) fn valid_factor(factor: f64, shape_type: ShapeType) -> bool {
    if factor.is_finite() && factor > 0.0 {
        true
    } else {
        tracing::warn!("Ignoring invalid scale factor {} for {}", factor, shape_type);
        false
    }
}

/// Builds a measurement set from pixel-space values.
pub(crate) fn measurements_in_units(
    values: impl IntoIterator<Item = (MeasurementKey, f64)>,
    scale: &UnitScale,
) -> Measurements {
    values
        .into_iter()
        .map(|(key, px)| (key, key.to_units(px, scale)))
        .collect()
}

pub(crate) fn log_variant_mismatch(expected: ShapeType, shape: &Shape, operation: &str) {
    tracing::error!(
        "{} service asked to {} a {} shape ({})",
        expected,
        operation,
        shape.shape_type(),
        shape.id()
    );
}
