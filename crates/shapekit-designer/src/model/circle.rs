use lyon::path::Path;
use serde::{Deserialize, Serialize};

use shapekit_core::constants::MIN_DIMENSION_PX;

use super::{OriginalDimensions, Point, ShapeId, ShapeStyle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCircle {
    pub id: ShapeId,
    pub center: Point,
    pub radius: f64,
    /// Rotation in degrees; kept for consistency, it never moves the geometry.
    pub rotation: f64,
    pub style: ShapeStyle,
    /// Radius at scale 1.
    pub original_dimensions: Option<OriginalDimensions<f64>>,
}

impl DesignCircle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: ShapeId::new(),
            center,
            radius: clamp_radius(radius),
            rotation: 0.0,
            style: ShapeStyle::default(),
            original_dimensions: None,
        }
    }

    pub fn with_id(mut self, id: ShapeId) -> Self {
        self.id = id;
        self
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    pub fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_circle(
            lyon::math::point(self.center.x as f32, self.center.y as f32),
            self.radius as f32,
            lyon::path::Winding::Positive,
        );
        builder.build()
    }
}

pub(crate) fn clamp_radius(radius: f64) -> f64 {
    if radius.is_finite() && radius >= MIN_DIMENSION_PX {
        radius
    } else {
        tracing::warn!("Invalid circle radius {}, clamping to {}", radius, MIN_DIMENSION_PX);
        MIN_DIMENSION_PX
    }
}
