use std::f64::consts::PI;

use shapekit_core::UnitScale;

use super::{
    log_variant_mismatch, measurements_in_units, prepare_edit, valid_factor, CreateShapeParams,
    MeasurementEdit, ShapeService, DEFAULT_CIRCLE_RADIUS,
};
use crate::geometry::normalize_degrees;
use crate::measurement::{MeasurementKey, Measurements};
use crate::model::{clamp_radius, DesignCircle, OriginalDimensions, Point, Shape, ShapeType};

const KEYS: [MeasurementKey; 4] = [
    MeasurementKey::Radius,
    MeasurementKey::Diameter,
    MeasurementKey::Circumference,
    MeasurementKey::Area,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CircleService;

impl CircleService {
    pub fn create(params: &CreateShapeParams) -> DesignCircle {
        let center = params
            .center
            .or(params.position)
            .unwrap_or(Point::ORIGIN);
        let mut circle = DesignCircle::new(center, params.radius.unwrap_or(DEFAULT_CIRCLE_RADIUS));
        if let Some(id) = params.id {
            circle = circle.with_id(id);
        }
        if let Some(style) = &params.style {
            circle = circle.with_style(style.clone());
        }
        circle
    }

    pub fn translate(circle: &DesignCircle, dx: f64, dy: f64) -> DesignCircle {
        DesignCircle {
            center: circle.center.translate(dx, dy),
            ..circle.clone()
        }
    }

    pub fn resize(circle: &DesignCircle, factor: f64) -> DesignCircle {
        Self::scale(circle, factor, None)
    }

    pub fn scale(circle: &DesignCircle, factor: f64, pivot: Option<Point>) -> DesignCircle {
        if !valid_factor(factor, ShapeType::Circle) {
            return circle.clone();
        }
        let mut baseline = circle
            .original_dimensions
            .unwrap_or_else(|| OriginalDimensions::new(circle.radius));
        baseline.scale *= factor;

        let center = match pivot {
            Some(pivot) => circle.center.scale_from(&pivot, factor, factor),
            None => circle.center,
        };

        let composed = baseline.dimensions * baseline.scale;
        let radius = clamp_radius(composed);
        if radius != composed {
            // Clamped: the geometry is the new reference.
            baseline = OriginalDimensions::new(radius);
        }

        DesignCircle {
            center,
            radius,
            original_dimensions: Some(baseline),
            ..circle.clone()
        }
    }

    /// Circles are rotation invariant: only the stored angle changes, plus
    /// the centre when rotating about some other pivot.
    pub fn rotate(circle: &DesignCircle, angle_deg: f64, pivot: Option<Point>) -> DesignCircle {
        let center = match pivot {
            Some(pivot) => circle.center.rotate_about(&pivot, angle_deg),
            None => circle.center,
        };
        DesignCircle {
            center,
            rotation: normalize_degrees(circle.rotation + angle_deg),
            ..circle.clone()
        }
    }

    pub fn measurements(circle: &DesignCircle, scale: &UnitScale) -> Measurements {
        let r = circle.radius;
        measurements_in_units(
            [
                (MeasurementKey::Radius, r),
                (MeasurementKey::Diameter, 2.0 * r),
                (MeasurementKey::Circumference, 2.0 * PI * r),
                (MeasurementKey::Area, PI * r * r),
            ],
            scale,
        )
    }

    /// Every circle edit becomes a uniform resize to the implied radius.
    fn apply_edit(circle: &DesignCircle, edit: MeasurementEdit) -> DesignCircle {
        let to_radius = |v: f64| match edit.key {
            MeasurementKey::Diameter => v / 2.0,
            MeasurementKey::Circumference => v / (2.0 * PI),
            MeasurementKey::Area => (v / PI).sqrt(),
            _ => v,
        };
        let radius_edit = MeasurementEdit {
            key: MeasurementKey::Radius,
            target: to_radius(edit.target),
            original: to_radius(edit.original.max(0.0)),
        };
        match radius_edit.factor_from(circle.radius) {
            Some(factor) => Self::resize(circle, factor),
            None => circle.clone(),
        }
    }

    pub fn update_measurement(
        circle: &DesignCircle,
        key: &str,
        new_value: f64,
        original_value: f64,
        scale: &UnitScale,
    ) -> DesignCircle {
        match prepare_edit(ShapeType::Circle, &KEYS, key, new_value, original_value, scale) {
            Some(edit) => Self::apply_edit(circle, edit),
            None => circle.clone(),
        }
    }

    pub fn contains(circle: &DesignCircle, point: Point) -> bool {
        circle.center.distance_to(&point) <= circle.radius
    }
}

impl ShapeService for CircleService {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn create_shape(&self, params: &CreateShapeParams) -> Shape {
        Shape::Circle(Self::create(params))
    }

    fn move_shape(&self, shape: &Shape, dx: f64, dy: f64) -> Shape {
        match shape {
            Shape::Circle(c) => Shape::Circle(Self::translate(c, dx, dy)),
            other => {
                log_variant_mismatch(ShapeType::Circle, other, "move");
                other.clone()
            }
        }
    }

    fn scale_shape(&self, shape: &Shape, factor: f64, center: Option<Point>) -> Shape {
        match shape {
            Shape::Circle(c) => Shape::Circle(Self::scale(c, factor, center)),
            other => {
                log_variant_mismatch(ShapeType::Circle, other, "scale");
                other.clone()
            }
        }
    }

    fn rotate_shape(&self, shape: &Shape, angle_deg: f64, center: Option<Point>) -> Shape {
        match shape {
            Shape::Circle(c) => Shape::Circle(Self::rotate(c, angle_deg, center)),
            other => {
                log_variant_mismatch(ShapeType::Circle, other, "rotate");
                other.clone()
            }
        }
    }

    fn get_measurements(&self, shape: &Shape, scale: &UnitScale) -> Measurements {
        match shape {
            Shape::Circle(c) => Self::measurements(c, scale),
            other => {
                log_variant_mismatch(ShapeType::Circle, other, "measure");
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
            Shape::Circle(c) => Shape::Circle(Self::update_measurement(
                c,
                key,
                new_value,
                original_value,
                scale,
            )),
            other => {
                log_variant_mismatch(ShapeType::Circle, other, "update");
                other.clone()
            }
        }
    }

    fn contains_point(&self, shape: &Shape, point: Point) -> bool {
        match shape {
            Shape::Circle(c) => Self::contains(c, point),
            other => {
                log_variant_mismatch(ShapeType::Circle, other, "hit-test");
                false
            }
        }
    }
}
