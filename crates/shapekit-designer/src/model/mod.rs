use lyon::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use shapekit_core::ShapeError;

mod circle;
mod line;
mod rectangle;
mod triangle;

pub use circle::DesignCircle;
pub use line::DesignLine;
pub use rectangle::{DesignRectangle, Size};
pub use triangle::DesignTriangle;

pub(crate) use circle::clamp_radius;
pub(crate) use rectangle::clamp_side;

/// 2D point in canvas-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Length of the point read as a vector from the origin.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Rotates about `center` by `angle_deg` (positive is clockwise on a y-down canvas).
    pub fn rotate_about(&self, center: &Point, angle_deg: f64) -> Point {
        rotate_point(*self, *center, angle_deg)
    }

    /// Scales the offset from `center` by `sx`/`sy`.
    pub fn scale_from(&self, center: &Point, sx: f64, sy: f64) -> Point {
        Point::new(
            center.x + (self.x - center.x) * sx,
            center.y + (self.y - center.y) * sy,
        )
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 2D cross product.
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Unsigned angle in degrees between two vectors, 0 when either is zero-length.
    pub fn angle_between(&self, other: &Point) -> f64 {
        let denom = self.length() * other.length();
        if denom <= shapekit_core::constants::GEOMETRY_EPSILON {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Mean of a set of points, origin for an empty slice.
    pub fn centroid(points: &[Point]) -> Point {
        if points.is_empty() {
            return Point::ORIGIN;
        }
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Stable shape identifier, generated once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(uuid::Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual attributes handed through to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill_color: "#4a90d9".to_string(),
            stroke_color: "#1f3b57".to_string(),
            stroke_width: 2.0,
            opacity: 1.0,
        }
    }
}

/// Baseline snapshot for uniform scaling.
///
/// `dimensions` is the geometry at `scale == 1`; every uniform resize rebuilds
/// the shape from it using the accumulated `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OriginalDimensions<T> {
    pub dimensions: T,
    pub scale: f64,
}

impl<T> OriginalDimensions<T> {
    pub fn new(dimensions: T) -> Self {
        Self {
            dimensions,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Circle,
    Rectangle,
    Triangle,
    Line,
}

impl ShapeType {
    pub const ALL: [ShapeType; 4] = [
        ShapeType::Circle,
        ShapeType::Rectangle,
        ShapeType::Triangle,
        ShapeType::Line,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeType::Circle => "circle",
            ShapeType::Rectangle => "rectangle",
            ShapeType::Triangle => "triangle",
            ShapeType::Line => "line",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShapeType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(ShapeType::Circle),
            "rectangle" | "rect" => Ok(ShapeType::Rectangle),
            "triangle" => Ok(ShapeType::Triangle),
            "line" => Ok(ShapeType::Line),
            _ => Err(ShapeError::UnsupportedShapeType {
                shape_type: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle(DesignCircle),
    Rectangle(DesignRectangle),
    Triangle(DesignTriangle),
    Line(DesignLine),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::Line(_) => ShapeType::Line,
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Circle(s) => s.id,
            Shape::Rectangle(s) => s.id,
            Shape::Triangle(s) => s.id(),
            Shape::Line(s) => s.id(),
        }
    }

    /// Anchor point: circle centre, rectangle top-left, triangle centroid, line midpoint.
    pub fn position(&self) -> Point {
        match self {
            Shape::Circle(s) => s.center,
            Shape::Rectangle(s) => s.position,
            Shape::Triangle(s) => s.position(),
            Shape::Line(s) => s.position(),
        }
    }

    /// Pivot used for rotation and scaling.
    pub fn center(&self) -> Point {
        match self {
            Shape::Circle(s) => s.center,
            Shape::Rectangle(s) => s.center(),
            Shape::Triangle(s) => s.position(),
            Shape::Line(s) => s.position(),
        }
    }

    /// Returns the rotation angle in degrees
    pub fn rotation(&self) -> f64 {
        match self {
            Shape::Circle(s) => s.rotation,
            Shape::Rectangle(s) => s.rotation,
            Shape::Triangle(s) => s.rotation(),
            Shape::Line(s) => s.rotation(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Circle(s) => &s.style,
            Shape::Rectangle(s) => &s.style,
            Shape::Triangle(s) => s.style(),
            Shape::Line(s) => s.style(),
        }
    }

    pub fn with_style(&self, style: ShapeStyle) -> Shape {
        match self {
            Shape::Circle(s) => Shape::Circle(DesignCircle {
                style,
                ..s.clone()
            }),
            Shape::Rectangle(s) => Shape::Rectangle(DesignRectangle {
                style,
                ..s.clone()
            }),
            Shape::Triangle(s) => Shape::Triangle(s.with_style(style)),
            Shape::Line(s) => Shape::Line(s.with_style(style)),
        }
    }

    pub fn has_baseline(&self) -> bool {
        match self {
            Shape::Circle(s) => s.original_dimensions.is_some(),
            Shape::Rectangle(s) => s.original_dimensions.is_some(),
            Shape::Triangle(s) => s.original_dimensions().is_some(),
            Shape::Line(s) => s.original_dimensions().is_some(),
        }
    }

    /// Axis-aligned bounds as (min_x, min_y, max_x, max_y), rotation included.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Circle(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Triangle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
        }
    }

    /// Outline path for the rendering layer.
    pub fn render(&self) -> Path {
        match self {
            Shape::Circle(s) => s.render(),
            Shape::Rectangle(s) => s.render(),
            Shape::Triangle(s) => s.render(),
            Shape::Line(s) => s.render(),
        }
    }
}

pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    let angle_rad = angle_deg.to_radians();
    let s = angle_rad.sin();
    let c = angle_rad.cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}

fn bounds_of(points: &[Point]) -> (f64, f64, f64, f64) {
    points.iter().fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(min_x, min_y, max_x, max_y), p| {
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        },
    )
}

fn polygon_path(points: &[Point]) -> Path {
    let mut builder = Path::builder();
    if let Some((first, rest)) = points.split_first() {
        builder.begin(lyon::math::point(first.x as f32, first.y as f32));
        for p in rest {
            builder.line_to(lyon::math::point(p.x as f32, p.y as f32));
        }
        builder.close();
    }
    builder.build()
}
