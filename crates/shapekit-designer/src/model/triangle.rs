use lyon::path::Path;
use serde::{Deserialize, Serialize};

use crate::geometry;

use super::{bounds_of, polygon_path, OriginalDimensions, Point, ShapeId, ShapeStyle};

/// Triangle defined by three absolute points.
///
/// `position` is always the centroid of `points`; the only way to change the
/// points is through constructors that recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TriangleRecord")]
pub struct DesignTriangle {
    id: ShapeId,
    points: [Point; 3],
    position: Point,
    /// Degrees in [0, 360). The points already include this rotation.
    rotation: f64,
    style: ShapeStyle,
    /// Vertex offsets from the centroid at scale 1.
    original_dimensions: Option<OriginalDimensions<[Point; 3]>>,
}

/// Stored form of a triangle. A stored `position` is ignored and rebuilt
/// from the points.
#[derive(Deserialize)]
struct TriangleRecord {
    id: ShapeId,
    points: [Point; 3],
    #[serde(default)]
    rotation: f64,
    #[serde(default)]
    style: ShapeStyle,
    #[serde(default)]
    original_dimensions: Option<OriginalDimensions<[Point; 3]>>,
}

impl From<TriangleRecord> for DesignTriangle {
    fn from(record: TriangleRecord) -> Self {
        Self {
            id: record.id,
            points: record.points,
            position: Point::centroid(&record.points),
            rotation: geometry::normalize_degrees(record.rotation),
            style: record.style,
            original_dimensions: record.original_dimensions,
        }
    }
}

impl DesignTriangle {
    pub fn new(points: [Point; 3]) -> Self {
        Self {
            id: ShapeId::new(),
            points,
            position: Point::centroid(&points),
            rotation: 0.0,
            style: ShapeStyle::default(),
            original_dimensions: None,
        }
    }

    /// Isosceles triangle filling the box: apex at top centre, base along the bottom.
    pub fn from_bounds(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new([
            Point::new(x + width / 2.0, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ])
    }

    pub fn with_id(mut self, id: ShapeId) -> Self {
        self.id = id;
        self
    }

    pub fn with_style(&self, style: ShapeStyle) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }

    /// Same triangle identity with new vertices. Drops the scaling baseline.
    pub fn with_points(&self, points: [Point; 3]) -> Self {
        Self {
            points,
            position: Point::centroid(&points),
            original_dimensions: None,
            ..self.clone()
        }
    }

    pub(crate) fn with_scaled_points(
        &self,
        points: [Point; 3],
        baseline: OriginalDimensions<[Point; 3]>,
    ) -> Self {
        Self {
            points,
            position: Point::centroid(&points),
            original_dimensions: Some(baseline),
            ..self.clone()
        }
    }

    /// Replaces the points after a rotation by `delta_deg`.
    pub(crate) fn with_rotation(&self, points: [Point; 3], delta_deg: f64) -> Self {
        // Rotating the baseline offsets keeps later resizes in the rotated frame.
        let original_dimensions = self.original_dimensions.map(|b| OriginalDimensions {
            dimensions: b
                .dimensions
                .map(|p| p.rotate_about(&Point::ORIGIN, delta_deg)),
            scale: b.scale,
        });
        Self {
            points,
            position: Point::centroid(&points),
            rotation: geometry::normalize_degrees(self.rotation + delta_deg),
            original_dimensions,
            ..self.clone()
        }
    }

    /// Moves every vertex. The baseline is relative to the centroid, so it survives.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let points = self.points.map(|p| p.translate(dx, dy));
        Self {
            points,
            position: Point::centroid(&points),
            ..self.clone()
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn points(&self) -> &[Point; 3] {
        &self.points
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn original_dimensions(&self) -> Option<&OriginalDimensions<[Point; 3]>> {
        self.original_dimensions.as_ref()
    }

    /// Side lengths |p0p1|, |p1p2|, |p2p0|.
    pub fn sides(&self) -> [f64; 3] {
        geometry::triangle_sides(&self.points)
    }

    /// Interior angles in degrees at p0, p1, p2.
    pub fn angles(&self) -> [f64; 3] {
        geometry::triangle_angles(&self.points)
    }

    pub fn area(&self) -> f64 {
        geometry::triangle_area(&self.points)
    }

    pub fn is_degenerate(&self) -> bool {
        geometry::is_degenerate_triangle(&self.points)
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        bounds_of(&self.points)
    }

    pub fn render(&self) -> Path {
        polygon_path(&self.points)
    }
}
