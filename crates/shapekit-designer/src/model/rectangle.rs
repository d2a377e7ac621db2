use lyon::path::Path;
use serde::{Deserialize, Serialize};

use shapekit_core::constants::MIN_DIMENSION_PX;

use super::{bounds_of, polygon_path, rotate_point, OriginalDimensions, Point, ShapeId, ShapeStyle};

/// Width and height pair used as the rectangle baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    pub id: ShapeId,
    /// Top-left corner of the unrotated box.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Rotation angle in degrees about [`DesignRectangle::center`]
    pub rotation: f64,
    pub style: ShapeStyle,
    pub original_dimensions: Option<OriginalDimensions<Size>>,
}

impl DesignRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: ShapeId::new(),
            position: Point::new(x, y),
            width: clamp_side(width, "width"),
            height: clamp_side(height, "height"),
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

    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Returns a copy with new dimensions, keeping the centre where it was.
    pub fn resized_about_center(&self, width: f64, height: f64) -> Self {
        let center = self.center();
        let width = clamp_side(width, "width");
        let height = clamp_side(height, "height");
        Self {
            position: Point::new(center.x - width / 2.0, center.y - height / 2.0),
            width,
            height,
            ..self.clone()
        }
    }

    /// Corners in drawing order (TL, TR, BR, BL) with rotation applied.
    pub fn corners(&self) -> [Point; 4] {
        let center = self.center();
        let Point { x, y } = self.position;
        [
            Point::new(x, y),
            Point::new(x + self.width, y),
            Point::new(x + self.width, y + self.height),
            Point::new(x, y + self.height),
        ]
        .map(|p| rotate_point(p, center, self.rotation))
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        bounds_of(&self.corners())
    }

    pub fn render(&self) -> Path {
        polygon_path(&self.corners())
    }
}

pub(crate) fn clamp_side(value: f64, name: &str) -> f64 {
    if value.is_finite() && value >= MIN_DIMENSION_PX {
        value
    } else {
        tracing::warn!("Invalid rectangle {} {}, clamping to {}", name, value, MIN_DIMENSION_PX);
        MIN_DIMENSION_PX
    }
}
