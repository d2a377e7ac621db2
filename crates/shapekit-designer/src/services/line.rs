use shapekit_core::constants::{GEOMETRY_EPSILON, LINE_HIT_MIN_RADIUS_PX, LINE_HIT_PADDING_PX};
use shapekit_core::UnitScale;

use super::{
    log_variant_mismatch, measurements_in_units, prepare_edit, valid_factor, CreateShapeParams,
    MeasurementEdit, ShapeService, DEFAULT_LINE_LENGTH,
};
use crate::geometry::{distance_to_segment, normalize_degrees};
use crate::measurement::{MeasurementKey, Measurements};
use crate::model::{DesignLine, OriginalDimensions, Point, Shape, ShapeType};

const KEYS: [MeasurementKey; 2] = [MeasurementKey::Length, MeasurementKey::Angle];

#[derive(Debug, Clone, Copy, Default)]
pub struct LineService;

impl LineService {
    /// Explicit endpoints, or a horizontal line centred on `position`.
    pub fn create(params: &CreateShapeParams) -> DesignLine {
        let (start, end) = match (params.start, params.end) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                let mid = params.position.or(params.start).unwrap_or(Point::ORIGIN);
                let half = DEFAULT_LINE_LENGTH / 2.0;
                (mid.translate(-half, 0.0), mid.translate(half, 0.0))
            }
        };
        let mut line = DesignLine::new(start, end);
        if let Some(id) = params.id {
            line = line.with_id(id);
        }
        if let Some(style) = &params.style {
            line = line.with_style(style.clone());
        }
        line
    }

    pub fn translate(line: &DesignLine, dx: f64, dy: f64) -> DesignLine {
        line.translated(dx, dy)
    }

    pub fn resize(line: &DesignLine, factor: f64) -> DesignLine {
        Self::scale(line, factor, None)
    }

    pub fn scale(line: &DesignLine, factor: f64, pivot: Option<Point>) -> DesignLine {
        if !valid_factor(factor, ShapeType::Line) {
            return line.clone();
        }
        let mid = line.position();
        let mut baseline = line
            .original_dimensions()
            .copied()
            .unwrap_or_else(|| OriginalDimensions::new([line.start() - mid, line.end() - mid]));
        baseline.scale *= factor;

        let new_mid = match pivot {
            Some(pivot) => mid.scale_from(&pivot, factor, factor),
            None => mid,
        };
        let [start, end] = baseline
            .dimensions
            .map(|offset| new_mid + offset * baseline.scale);

        line.with_scaled_endpoints(start, end, Some(baseline))
    }

    pub fn rotate(line: &DesignLine, angle_deg: f64, pivot: Option<Point>) -> DesignLine {
        let pivot = pivot.unwrap_or_else(|| line.position());
        let baseline = line.original_dimensions().map(|b| OriginalDimensions {
            dimensions: b.dimensions.map(|p| p.rotate_about(&Point::ORIGIN, angle_deg)),
            scale: b.scale,
        });
        line.with_scaled_endpoints(
            line.start().rotate_about(&pivot, angle_deg),
            line.end().rotate_about(&pivot, angle_deg),
            baseline,
        )
    }

    /// Direction of start -> end in [0, 360).
    pub fn angle(line: &DesignLine) -> f64 {
        normalize_degrees(line.direction_degrees())
    }

    pub fn measurements(line: &DesignLine, scale: &UnitScale) -> Measurements {
        measurements_in_units(
            [
                (MeasurementKey::Length, line.length()),
                (MeasurementKey::Angle, Self::angle(line)),
            ],
            scale,
        )
    }

    fn apply_edit(line: &DesignLine, edit: MeasurementEdit) -> DesignLine {
        match edit.key {
            MeasurementKey::Length if line.length() <= GEOMETRY_EPSILON => {
                // No direction to scale along; lay it out horizontally.
                let half = edit.target / 2.0;
                let mid = line.position();
                line.with_endpoints(mid.translate(-half, 0.0), mid.translate(half, 0.0))
            }
            MeasurementKey::Length => match edit.factor_from(line.length()) {
                Some(factor) => Self::resize(line, factor),
                None => line.clone(),
            },
            MeasurementKey::Angle => {
                let delta = normalize_degrees(edit.target) - Self::angle(line);
                Self::rotate(line, delta, None)
            }
            _ => line.clone(),
        }
    }

    pub fn update_measurement(
        line: &DesignLine,
        key: &str,
        new_value: f64,
        original_value: f64,
        scale: &UnitScale,
    ) -> DesignLine {
        match prepare_edit(ShapeType::Line, &KEYS, key, new_value, original_value, scale) {
            Some(edit) => Self::apply_edit(line, edit),
            None => line.clone(),
        }
    }

    /// Hit radius grows with the stroke but never drops below a few pixels.
    pub fn hit_radius(line: &DesignLine) -> f64 {
        (line.style().stroke_width / 2.0 + LINE_HIT_PADDING_PX).max(LINE_HIT_MIN_RADIUS_PX)
    }

    pub fn contains(line: &DesignLine, point: Point) -> bool {
        distance_to_segment(point, line.start(), line.end()) <= Self::hit_radius(line)
    }
}

impl ShapeService for LineService {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Line
    }

    fn create_shape(&self, params: &CreateShapeParams) -> Shape {
        Shape::Line(Self::create(params))
    }

    fn move_shape(&self, shape: &Shape, dx: f64, dy: f64) -> Shape {
        match shape {
            Shape::Line(l) => Shape::Line(Self::translate(l, dx, dy)),
            other => {
                log_variant_mismatch(ShapeType::Line, other, "move");
                other.clone()
            }
        }
    }

    fn scale_shape(&self, shape: &Shape, factor: f64, center: Option<Point>) -> Shape {
        match shape {
            Shape::Line(l) => Shape::Line(Self::scale(l, factor, center)),
            other => {
                log_variant_mismatch(ShapeType::Line, other, "scale");
                other.clone()
            }
        }
    }

    fn rotate_shape(&self, shape: &Shape, angle_deg: f64, center: Option<Point>) -> Shape {
        match shape {
            Shape::Line(l) => Shape::Line(Self::rotate(l, angle_deg, center)),
            other => {
                log_variant_mismatch(ShapeType::Line, other, "rotate");
                other.clone()
            }
        }
    }

    fn get_measurements(&self, shape: &Shape, scale: &UnitScale) -> Measurements {
        match shape {
            Shape::Line(l) => Self::measurements(l, scale),
            other => {
                log_variant_mismatch(ShapeType::Line, other, "measure");
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
            Shape::Line(l) => Shape::Line(Self::update_measurement(
                l,
                key,
                new_value,
                original_value,
                scale,
            )),
            other => {
                log_variant_mismatch(ShapeType::Line, other, "update");
                other.clone()
            }
        }
    }

    fn contains_point(&self, shape: &Shape, point: Point) -> bool {
        match shape {
            Shape::Line(l) => Self::contains(l, point),
            other => {
                log_variant_mismatch(ShapeType::Line, other, "hit-test");
                false
            }
        }
    }
}
