use lyon::path::Path;
use serde::{Deserialize, Serialize};

use crate::geometry;

use super::{OriginalDimensions, Point, ShapeId, ShapeStyle};

/// Straight segment. `length` and `position` (midpoint) are derived from the
/// endpoints and recomputed whenever they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LineRecord")]
pub struct DesignLine {
    id: ShapeId,
    start: Point,
    end: Point,
    length: f64,
    position: Point,
    style: ShapeStyle,
    /// Endpoint offsets from the midpoint at scale 1.
    original_dimensions: Option<OriginalDimensions<[Point; 2]>>,
}

/// Stored form of a line; `length` and `position` are rebuilt from the endpoints.
#[derive(Deserialize)]
struct LineRecord {
    id: ShapeId,
    start: Point,
    end: Point,
    #[serde(default)]
    style: ShapeStyle,
    #[serde(default)]
    original_dimensions: Option<OriginalDimensions<[Point; 2]>>,
}

impl From<LineRecord> for DesignLine {
    fn from(record: LineRecord) -> Self {
        let mut line = DesignLine::new(record.start, record.end);
        line.id = record.id;
        line.style = record.style;
        line.original_dimensions = record.original_dimensions;
        line
    }
}

impl DesignLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: ShapeId::new(),
            start,
            end,
            length: start.distance_to(&end),
            position: start.midpoint(&end),
            style: ShapeStyle::default(),
            original_dimensions: None,
        }
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

    /// Same line identity with new endpoints. Drops the scaling baseline.
    pub fn with_endpoints(&self, start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            length: start.distance_to(&end),
            position: start.midpoint(&end),
            original_dimensions: None,
            ..self.clone()
        }
    }

    pub(crate) fn with_scaled_endpoints(
        &self,
        start: Point,
        end: Point,
        baseline: Option<OriginalDimensions<[Point; 2]>>,
    ) -> Self {
        Self {
            original_dimensions: baseline,
            ..self.with_endpoints(start, end)
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        self.with_scaled_endpoints(
            self.start.translate(dx, dy),
            self.end.translate(dx, dy),
            self.original_dimensions,
        )
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Direction of start -> end in degrees, wrapped into (-180, 180].
    pub fn rotation(&self) -> f64 {
        geometry::normalize_signed_degrees(self.direction_degrees())
    }

    /// Raw atan2 direction of start -> end in degrees.
    pub fn direction_degrees(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        dy.atan2(dx).to_degrees()
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn original_dimensions(&self) -> Option<&OriginalDimensions<[Point; 2]>> {
        self.original_dimensions.as_ref()
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    pub fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.begin(lyon::math::point(self.start.x as f32, self.start.y as f32));
        builder.line_to(lyon::math::point(self.end.x as f32, self.end.y as f32));
        builder.end(false);
        builder.build()
    }
}
