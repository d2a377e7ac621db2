use shapekit_core::constants::GEOMETRY_EPSILON;
use shapekit_core::UnitScale;

use super::{
    log_variant_mismatch, measurements_in_units, prepare_edit, valid_factor, CreateShapeParams,
    MeasurementEdit, ShapeService, DEFAULT_TRIANGLE_SIZE,
};
use crate::geometry::{barycentric, triangle_angles, triangle_area, triangle_sides};
use crate::measurement::{MeasurementKey, Measurements};
use crate::model::{DesignTriangle, OriginalDimensions, Point, Shape, ShapeType};
use crate::triangle_solver::solve_angle_edit;

const KEYS: [MeasurementKey; 9] = [
    MeasurementKey::Side1,
    MeasurementKey::Side2,
    MeasurementKey::Side3,
    MeasurementKey::Angle1,
    MeasurementKey::Angle2,
    MeasurementKey::Angle3,
    MeasurementKey::Perimeter,
    MeasurementKey::Area,
    MeasurementKey::Height,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleService;

impl TriangleService {
    /// Explicit points, or the default isosceles triangle centred on `position`.
    pub fn create(params: &CreateShapeParams) -> DesignTriangle {
        let mut triangle = match params.points {
            Some(points) => DesignTriangle::new(points),
            None => {
                let size = DEFAULT_TRIANGLE_SIZE;
                let template = DesignTriangle::from_bounds(0.0, 0.0, size, size);
                let target = params.position.unwrap_or(Point::ORIGIN);
                let offset = target - template.position();
                template.translated(offset.x, offset.y)
            }
        };
        if let Some(id) = params.id {
            triangle = triangle.with_id(id);
        }
        if let Some(style) = &params.style {
            triangle = triangle.with_style(style.clone());
        }
        triangle
    }

    pub fn translate(triangle: &DesignTriangle, dx: f64, dy: f64) -> DesignTriangle {
        triangle.translated(dx, dy)
    }

    pub fn resize(triangle: &DesignTriangle, factor: f64) -> DesignTriangle {
        Self::scale(triangle, factor, None)
    }

    pub fn scale(triangle: &DesignTriangle, factor: f64, pivot: Option<Point>) -> DesignTriangle {
        if !valid_factor(factor, ShapeType::Triangle) {
            return triangle.clone();
        }
        let centroid = triangle.position();
        let mut baseline = triangle
            .original_dimensions()
            .copied()
            .unwrap_or_else(|| OriginalDimensions::new(triangle.points().map(|p| p - centroid)));
        baseline.scale *= factor;

        let new_centroid = match pivot {
            Some(pivot) => centroid.scale_from(&pivot, factor, factor),
            None => centroid,
        };
        let points = baseline
            .dimensions
            .map(|offset| new_centroid + offset * baseline.scale);

        triangle.with_scaled_points(points, baseline)
    }

    /// Rotates every vertex; the stored angle accumulates in [0, 360).
    pub fn rotate(
        triangle: &DesignTriangle,
        angle_deg: f64,
        pivot: Option<Point>,
    ) -> DesignTriangle {
        let pivot = pivot.unwrap_or_else(|| triangle.position());
        let points = triangle.points().map(|p| p.rotate_about(&pivot, angle_deg));
        triangle.with_rotation(points, angle_deg)
    }

    /// Distance from the longest side to the opposite vertex.
    pub fn height(points: &[Point; 3]) -> f64 {
        let longest = triangle_sides(points).iter().cloned().fold(0.0, f64::max);
        if longest <= GEOMETRY_EPSILON {
            return 0.0;
        }
        2.0 * triangle_area(points) / longest
    }

    pub fn measurements(triangle: &DesignTriangle, scale: &UnitScale) -> Measurements {
        let points = triangle.points();
        let [s1, s2, s3] = triangle_sides(points);
        let [a1, a2, a3] = triangle_angles(points);
        measurements_in_units(
            [
                (MeasurementKey::Side1, s1),
                (MeasurementKey::Side2, s2),
                (MeasurementKey::Side3, s3),
                (MeasurementKey::Angle1, a1),
                (MeasurementKey::Angle2, a2),
                (MeasurementKey::Angle3, a3),
                (MeasurementKey::Perimeter, s1 + s2 + s3),
                (MeasurementKey::Area, triangle_area(points)),
                (MeasurementKey::Height, Self::height(points)),
            ],
            scale,
        )
    }

    /// Stretches the triangle perpendicular to its longest side, about the
    /// centroid, so the height becomes `target`. Clears the baseline.
    fn scale_height(triangle: &DesignTriangle, edit: MeasurementEdit) -> DesignTriangle {
        let points = triangle.points();
        let sides = triangle_sides(points);
        let longest = (0..3)
            .max_by(|&a, &b| sides[a].total_cmp(&sides[b]))
            .unwrap_or(0);
        let base = points[(longest + 1) % 3] - points[longest];
        let base_len = base.length();
        let current = Self::height(points);
        if base_len <= GEOMETRY_EPSILON || current <= GEOMETRY_EPSILON {
            tracing::warn!("Cannot set height of degenerate triangle {}", triangle.id());
            return triangle.clone();
        }

        let factor = edit.target / current;
        let normal = Point::new(-base.y / base_len, base.x / base_len);
        let centroid = triangle.position();
        let stretched = points.map(|p| {
            let along_normal = (p - centroid).dot(&normal);
            p + normal * (along_normal * (factor - 1.0))
        });
        triangle.with_points(stretched)
    }

    fn apply_edit(triangle: &DesignTriangle, edit: MeasurementEdit) -> DesignTriangle {
        let points = triangle.points();
        if let Some(vertex) = edit.key.vertex_index() {
            let result = solve_angle_edit(points, vertex, edit.target);
            tracing::debug!(
                "Triangle {} angle{} -> {:.2} (target {}, {:?})",
                triangle.id(),
                vertex + 1,
                result.achieved,
                result.target,
                result.strategy
            );
            return triangle.with_points(result.points);
        }

        let factor = match edit.key {
            MeasurementKey::Side1 | MeasurementKey::Side2 | MeasurementKey::Side3 => {
                let index = edit.key.side_index().unwrap_or(0);
                edit.factor_from(triangle_sides(points)[index])
            }
            MeasurementKey::Perimeter => edit.factor_from(triangle_sides(points).iter().sum()),
            MeasurementKey::Area => edit.factor_from(triangle_area(points)).map(f64::sqrt),
            MeasurementKey::Height => return Self::scale_height(triangle, edit),
            _ => None,
        };

        match factor {
            Some(factor) => Self::resize(triangle, factor),
            None => {
                tracing::warn!(
                    "No usable reference to set {} on triangle {}",
                    edit.key,
                    triangle.id()
                );
                triangle.clone()
            }
        }
    }

    pub fn update_measurement(
        triangle: &DesignTriangle,
        key: &str,
        new_value: f64,
        original_value: f64,
        scale: &UnitScale,
    ) -> DesignTriangle {
        match prepare_edit(ShapeType::Triangle, &KEYS, key, new_value, original_value, scale) {
            Some(edit) => Self::apply_edit(triangle, edit),
            None => triangle.clone(),
        }
    }

    /// Barycentric containment; degenerate triangles contain nothing.
    pub fn contains(triangle: &DesignTriangle, point: Point) -> bool {
        match barycentric(point, triangle.points()) {
            Some((u, v, w)) => [u, v, w].iter().all(|&c| c >= -GEOMETRY_EPSILON),
            None => false,
        }
    }
}

impl ShapeService for TriangleService {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Triangle
    }

    fn create_shape(&self, params: &CreateShapeParams) -> Shape {
        Shape::Triangle(Self::create(params))
    }

    fn move_shape(&self, shape: &Shape, dx: f64, dy: f64) -> Shape {
        match shape {
            Shape::Triangle(t) => Shape::Triangle(Self::translate(t, dx, dy)),
            other => {
                log_variant_mismatch(ShapeType::Triangle, other, "move");
                other.clone()
            }
        }
    }

    fn scale_shape(&self, shape: &Shape, factor: f64, center: Option<Point>) -> Shape {
        match shape {
            Shape::Triangle(t) => Shape::Triangle(Self::scale(t, factor, center)),
            other => {
                log_variant_mismatch(ShapeType::Triangle, other, "scale");
                other.clone()
            }
        }
    }

    fn rotate_shape(&self, shape: &Shape, angle_deg: f64, center: Option<Point>) -> Shape {
        match shape {
            Shape::Triangle(t) => Shape::Triangle(Self::rotate(t, angle_deg, center)),
            other => {
                log_variant_mismatch(ShapeType::Triangle, other, "rotate");
                other.clone()
            }
        }
    }

    fn get_measurements(&self, shape: &Shape, scale: &UnitScale) -> Measurements {
        match shape {
            Shape::Triangle(t) => Self::measurements(t, scale),
            other => {
                log_variant_mismatch(ShapeType::Triangle, other, "measure");
                Measurements::new()
            }
        }
    }

    fn update_from_measurement(
        &self,
        shape: &Shape,
        key: &str,
        new_value: f64,
        original_value: f64,
        scale: &UnitScale,
    ) -> Shape {
        match shape {
            Shape::Triangle(t) => Shape::Triangle(Self::update_measurement(
                t,
                key,
                new_value,
                original_value,
                scale,
            )),
            other => {
                log_variant_mismatch(ShapeType::Triangle, other, "update");
                other.clone()
            }
        }
    }

    fn contains_point(&self, shape: &Shape, point: Point) -> bool {
        match shape {
            Shape::Triangle(t) => Self::contains(t, point),
            other => {
                log_variant_mismatch(ShapeType::Triangle, other, "hit-test");
                false
            }
        }
    }
}
