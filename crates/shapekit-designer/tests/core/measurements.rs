use std::f64::consts::PI;

use shapekit_core::{CalibrationProvider, FixedCalibration, MeasurementUnit, UnitScale};
use shapekit_designer::{
    CircleService, DesignCircle, DesignLine, DesignRectangle, LineService, MeasurementKey, Point,
    RectangleService, Shape, ShapeServiceFactory,
};

fn cm_scale() -> UnitScale {
    FixedCalibration::new(10.0).unit_scale(MeasurementUnit::Centimeters)
}

#[test]
fn test_circle_measurements_in_centimeters() {
    let circle = DesignCircle::new(Point::ORIGIN, 50.0);
    let m = CircleService::measurements(&circle, &cm_scale());
    assert_eq!(m.value(MeasurementKey::Radius), Some(5.0));
    assert_eq!(m.value(MeasurementKey::Diameter), Some(10.0));
    assert!((m.get("circumference").unwrap() - 10.0 * PI).abs() < 1e-9);
    assert!((m.get("area").unwrap() - 25.0 * PI).abs() < 1e-9);
}

#[test]
fn test_inches_follow_calibration() {
    let scale = FixedCalibration::new(10.0).unit_scale(MeasurementUnit::Inches);
    let rect = DesignRectangle::new(0.0, 0.0, 25.4, 12.7);
    let m = RectangleService::measurements(&rect, &scale);
    assert!((m.get("width").unwrap() - 1.0).abs() < 1e-12);
    assert!((m.get("area").unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn test_circle_area_round_trip() {
    let scale = cm_scale();
    let circle = DesignCircle::new(Point::new(30.0, 30.0), 25.0);
    let area = CircleService::measurements(&circle, &scale)
        .value(MeasurementKey::Area)
        .unwrap();

    let edited = CircleService::update_measurement(&circle, "area", 12.0, area, &scale);
    let measured = CircleService::measurements(&edited, &scale)
        .value(MeasurementKey::Area)
        .unwrap();
    assert!((measured - 12.0).abs() < 1e-9);
    assert_eq!(edited.center, circle.center);
}

#[test]
fn test_circle_inverse_rules() {
    let px = UnitScale::pixels();
    let circle = DesignCircle::new(Point::ORIGIN, 10.0);
    let by_diameter = CircleService::update_measurement(&circle, "diameter", 50.0, 20.0, &px);
    assert!((by_diameter.radius - 25.0).abs() < 1e-9);
    let (target, shown) = (2.0 * PI * 7.0, 2.0 * PI * 10.0);
    let by_circumference =
        CircleService::update_measurement(&circle, "circumference", target, shown, &px);
    assert!((by_circumference.radius - 7.0).abs() < 1e-9);
}

#[test]
fn test_rectangle_forward_measurements() {
    let rect = DesignRectangle::new(0.0, 0.0, 30.0, 40.0);
    let m = RectangleService::measurements(&rect, &UnitScale::pixels());
    assert_eq!(m.get("perimeter"), Some(140.0));
    assert_eq!(m.get("area"), Some(1200.0));
    assert_eq!(m.get("diagonal"), Some(50.0));
    let keys: Vec<&str> = m.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["width", "height", "perimeter", "area", "diagonal"]);
}

#[test]
fn test_line_angle_is_normalized() {
    let line = DesignLine::new(Point::new(0.0, 0.0), Point::new(0.0, -10.0));
    let m = LineService::measurements(&line, &UnitScale::pixels());
    assert!((m.get("angle").unwrap() - 270.0).abs() < 1e-9);
    assert_eq!(m.get("length"), Some(10.0));
}

#[test]
fn test_unknown_key_leaves_shape_unchanged() {
    let shape = Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 30.0, 40.0));
    let service = ShapeServiceFactory::for_shape(&shape);
    let px = UnitScale::pixels();
    assert_eq!(service.update_from_measurement(&shape, "radius", 5.0, 1.0, &px), shape);
    assert_eq!(service.update_from_measurement(&shape, "volume", 5.0, 1.0, &px), shape);
}

#[test]
fn test_unchanged_value_is_noop() {
    let rect = RectangleService::resize(&DesignRectangle::new(0.0, 0.0, 30.0, 40.0), 2.0);
    let px = UnitScale::pixels();
    let same = RectangleService::update_measurement(&rect, "width", 60.0, 60.0, &px);
    assert_eq!(same, rect);
    assert!(same.original_dimensions.is_some());
}

#[test]
fn test_invalid_target_is_clamped() {
    let px = UnitScale::pixels();
    let line = DesignLine::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let edited = LineService::update_measurement(&line, "length", -3.0, 10.0, &px);
    assert!((edited.length() - 1.0).abs() < 1e-9);

    let rect = DesignRectangle::new(0.0, 0.0, 30.0, 40.0);
    let edited = RectangleService::update_measurement(&rect, "height", f64::NAN, 40.0, &px);
    assert_eq!(edited.height, 1.0);
}

#[test]
fn test_zero_length_line_takes_horizontal_length() {
    let px = UnitScale::pixels();
    let line = DesignLine::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
    let edited = LineService::update_measurement(&line, "length", 20.0, 0.0, &px);
    assert_eq!(edited.start(), Point::new(-5.0, 5.0));
    assert_eq!(edited.end(), Point::new(15.0, 5.0));
}
