use shapekit_core::constants::GEOMETRY_EPSILON;
use shapekit_core::UnitScale;

use super::{
    log_variant_mismatch, measurements_in_units, prepare_edit, valid_factor, CreateShapeParams,
    MeasurementEdit, ShapeService, DEFAULT_RECTANGLE_HEIGHT, DEFAULT_RECTANGLE_WIDTH,
};
use crate::geometry::normalize_degrees;
use crate::measurement::{MeasurementKey, Measurements};
use crate::model::{
    clamp_side, rotate_point, DesignRectangle, OriginalDimensions, Point, Shape, ShapeType, Size,
};

const KEYS: [MeasurementKey; 5] = [
    MeasurementKey::Width,
    MeasurementKey::Height,
    MeasurementKey::Perimeter,
    MeasurementKey::Area,
    MeasurementKey::Diagonal,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleService;

impl RectangleService {
    pub fn create(params: &CreateShapeParams) -> DesignRectangle {
        let position = params.position.unwrap_or(Point::ORIGIN);
        let mut rect = DesignRectangle::new(
            position.x,
            position.y,
            params.width.unwrap_or(DEFAULT_RECTANGLE_WIDTH),
            params.height.unwrap_or(DEFAULT_RECTANGLE_HEIGHT),
        );
        if let Some(id) = params.id {
            rect = rect.with_id(id);
        }
        if let Some(style) = &params.style {
            rect = rect.with_style(style.clone());
        }
        rect
    }

    pub fn translate(rect: &DesignRectangle, dx: f64, dy: f64) -> DesignRectangle {
        DesignRectangle {
            position: rect.position.translate(dx, dy),
            ..rect.clone()
        }
    }

    pub fn resize(rect: &DesignRectangle, factor: f64) -> DesignRectangle {
        Self::scale(rect, factor, None)
    }

    pub fn scale(rect: &DesignRectangle, factor: f64, pivot: Option<Point>) -> DesignRectangle {
        if !valid_factor(factor, ShapeType::Rectangle) {
            return rect.clone();
        }
        let mut baseline = rect.original_dimensions.unwrap_or_else(|| {
            OriginalDimensions::new(Size {
                width: rect.width,
                height: rect.height,
            })
        });
        baseline.scale *= factor;

        let (width, height) = (
            baseline.dimensions.width * baseline.scale,
            baseline.dimensions.height * baseline.scale,
        );
        let resized = rect.resized_about_center(width, height);
        if resized.width != width || resized.height != height {
            // Clamped: the geometry is the new reference.
            baseline = OriginalDimensions::new(Size {
                width: resized.width,
                height: resized.height,
            });
        }
        let resized = match pivot {
            Some(pivot) => {
                let old_center = rect.center();
                let new_center = old_center.scale_from(&pivot, factor, factor);
                Self::translate(&resized, new_center.x - old_center.x, new_center.y - old_center.y)
            }
            None => resized,
        };

        DesignRectangle {
            original_dimensions: Some(baseline),
            ..resized
        }
    }

    /// Rotation only changes the stored angle; the box turns about its centre
    /// at render and hit-test time.
    pub fn rotate(rect: &DesignRectangle, angle_deg: f64, pivot: Option<Point>) -> DesignRectangle {
        let rotated = DesignRectangle {
            rotation: normalize_degrees(rect.rotation + angle_deg),
            ..rect.clone()
        };
        match pivot {
            Some(pivot) => {
                let center = rect.center();
                let moved = center.rotate_about(&pivot, angle_deg);
                Self::translate(&rotated, moved.x - center.x, moved.y - center.y)
            }
            None => rotated,
        }
    }

    pub fn measurements(rect: &DesignRectangle, scale: &UnitScale) -> Measurements {
        let (w, h) = (rect.width, rect.height);
        measurements_in_units(
            [
                (MeasurementKey::Width, w),
                (MeasurementKey::Height, h),
                (MeasurementKey::Perimeter, 2.0 * (w + h)),
                (MeasurementKey::Area, w * h),
                (MeasurementKey::Diagonal, w.hypot(h)),
            ],
            scale,
        )
    }

    fn apply_edit(rect: &DesignRectangle, edit: MeasurementEdit) -> DesignRectangle {
        match edit.key {
            MeasurementKey::Width => DesignRectangle {
                original_dimensions: None,
                ..rect.resized_about_center(edit.target, rect.height)
            },
            MeasurementKey::Height => DesignRectangle {
                original_dimensions: None,
                ..rect.resized_about_center(rect.width, edit.target)
            },
            MeasurementKey::Area | MeasurementKey::Perimeter | MeasurementKey::Diagonal => {
                let aspect = if rect.height > GEOMETRY_EPSILON {
                    rect.width / rect.height
                } else {
                    1.0
                };
                let height = match edit.key {
                    MeasurementKey::Area => (edit.target / aspect).sqrt(),
                    MeasurementKey::Perimeter => edit.target / (2.0 * (aspect + 1.0)),
                    _ => edit.target / (aspect * aspect + 1.0).sqrt(),
                };
                let height = clamp_side(height, "height");
                // Aspect-preserving, so it composes with the baseline like any resize.
                Self::resize(rect, height / rect.height)
            }
            _ => rect.clone(),
        }
    }

    pub fn update_measurement(
        rect: &DesignRectangle,
        key: &str,
        new_value: f64,
        original_value: f64,
        scale: &UnitScale,
    ) -> DesignRectangle {
        match prepare_edit(ShapeType::Rectangle, &KEYS, key, new_value, original_value, scale) {
            Some(edit) => Self::apply_edit(rect, edit),
            None => rect.clone(),
        }
    }

    /// De-rotates the query about the centre, then tests the axis-aligned box.
    pub fn contains(rect: &DesignRectangle, point: Point) -> bool {
        let local = rotate_point(point, rect.center(), -rect.rotation);
        local.x >= rect.position.x
            && local.x <= rect.position.x + rect.width
            && local.y >= rect.position.y
            && local.y <= rect.position.y + rect.height
    }
}

impl ShapeService for RectangleService {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Rectangle
    }

    fn create_shape(&self, params: &CreateShapeParams) -> Shape {
        Shape::Rectangle(Self::create(params))
    }

    fn move_shape(&self, shape: &Shape, dx: f64, dy: f64) -> Shape {
        match shape {
            Shape::Rectangle(r) => Shape::Rectangle(Self::translate(r, dx, dy)),
            other => {
                log_variant_mismatch(ShapeType::Rectangle, other, "move");
                other.clone()
            }
        }
    }

    fn scale_shape(&self, shape: &Shape, factor: f64, center: Option<Point>) -> Shape {
        match shape {
            Shape::Rectangle(r) => Shape::Rectangle(Self::scale(r, factor, center)),
            other => {
                log_variant_mismatch(ShapeType::Rectangle, other, "scale");
                other.clone()
            }
        }
    }

    fn rotate_shape(&self, shape: &Shape, angle_deg: f64, center: Option<Point>) -> Shape {
        match shape {
            Shape::Rectangle(r) => Shape::Rectangle(Self::rotate(r, angle_deg, center)),
            other => {
                log_variant_mismatch(ShapeType::Rectangle, other, "rotate");
                other.clone()
            }
        }
    }

    fn get_measurements(&self, shape: &Shape, scale: &UnitScale) -> Measurements {
        match shape {
            Shape::Rectangle(r) => Self::measurements(r, scale),
            other => {
                log_variant_mismatch(ShapeType::Rectangle, other, "measure");
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
            Shape::Rectangle(r) => Shape::Rectangle(Self::update_measurement(
                r,
                key,
                new_value,
                original_value,
                scale,
            )),
            other => {
                log_variant_mismatch(ShapeType::Rectangle, other, "update");
                other.clone()
            }
        }
    }

    fn contains_point(&self, shape: &Shape, point: Point) -> bool {
        match shape {
            Shape::Rectangle(r) => Self::contains(r, point),
            other => {
                log_variant_mismatch(ShapeType::Rectangle, other, "hit-test");
                false
            }
        }
    }
}
