use shapekit_core::constants::ANGLE_SUM_TOLERANCE_DEG;
use shapekit_core::UnitScale;
use shapekit_designer::{
    solve_angle_edit, DesignTriangle, MeasurementKey, Point, ReconstructionStrategy,
    TriangleService,
};

fn right_triangle() -> DesignTriangle {
    DesignTriangle::new([Point::new(0.0, 0.0), Point::new(120.0, 0.0), Point::new(0.0, 90.0)])
}

fn angle_sum(triangle: &DesignTriangle) -> f64 {
    triangle.angles().iter().sum()
}

#[test]
fn test_right_triangle_measurements() {
    let m = TriangleService::measurements(&right_triangle(), &UnitScale::pixels());
    assert!((m.get("side1").unwrap() - 120.0).abs() < 1e-9);
    assert!((m.get("side2").unwrap() - 150.0).abs() < 1e-9);
    assert!((m.get("side3").unwrap() - 90.0).abs() < 1e-9);
    assert!((m.get("angle1").unwrap() - 90.0).abs() < 1e-6);
    assert!((m.get("angle2").unwrap() - 36.87).abs() < 0.01);
    assert!((m.get("angle3").unwrap() - 53.13).abs() < 0.01);
    assert!((m.get("perimeter").unwrap() - 360.0).abs() < 1e-9);
    assert!((m.get("area").unwrap() - 5400.0).abs() < 1e-9);
}

#[test]
fn test_set_angle1_to_80() {
    let triangle = right_triangle();
    let px = UnitScale::pixels();
    let edited = TriangleService::update_measurement(&triangle, "angle1", 80.0, 90.0, &px);
    let angles = edited.angles();
    assert!((angles[0] - 80.0).abs() < 0.5);
    assert!((angle_sum(&edited) - 180.0).abs() < ANGLE_SUM_TOLERANCE_DEG);
    assert!(edited.position().distance_to(&triangle.position()) < 1e-9);
}

#[test]
fn test_each_vertex_can_be_edited() {
    let triangle = right_triangle();
    let px = UnitScale::pixels();
    for (key, vertex) in [("angle1", 0), ("angle2", 1), ("angle3", 2)] {
        let edited = TriangleService::update_measurement(&triangle, key, 70.0, 0.0, &px);
        assert!((edited.angles()[vertex] - 70.0).abs() < 0.5, "{}", key);
        assert!((angle_sum(&edited) - 180.0).abs() < ANGLE_SUM_TOLERANCE_DEG, "{}", key);
    }
}

#[test]
fn test_angle_targets_are_rounded_and_clamped() {
    let triangle = right_triangle();
    let px = UnitScale::pixels();

    let tiny = TriangleService::update_measurement(&triangle, "angle1", 0.2, 90.0, &px);
    assert!((tiny.angles()[0] - 1.0).abs() < 1e-6);

    let huge = TriangleService::update_measurement(&triangle, "angle1", 200.0, 90.0, &px);
    assert!((huge.angles()[0] - 179.0).abs() < 1e-6);

    let fractional = TriangleService::update_measurement(&triangle, "angle1", 44.6, 90.0, &px);
    assert!((fractional.angles()[0] - 45.0).abs() < 1e-6);
}

#[test]
fn test_angle_edit_clears_baseline() {
    let scaled = TriangleService::resize(&right_triangle(), 2.0);
    assert!(scaled.original_dimensions().is_some());
    let px = UnitScale::pixels();
    let edited = TriangleService::update_measurement(&scaled, "angle2", 40.0, 36.87, &px);
    assert!(edited.original_dimensions().is_none());
}

#[test]
fn test_solver_reports_strategy() {
    let triangle = right_triangle();
    let edit = solve_angle_edit(triangle.points(), 0, 80.0);
    assert_eq!(edit.strategy, ReconstructionStrategy::Rotation);
    assert_eq!(edit.target, 80.0);
}

#[test]
fn test_collinear_triangle_never_produces_nan() {
    let flat = DesignTriangle::new([
        Point::new(0.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(10.0, 0.0),
    ]);
    let px = UnitScale::pixels();

    let m = TriangleService::measurements(&flat, &px);
    assert!(m.iter().all(|(_, v)| v.is_finite()));
    assert_eq!(m.value(MeasurementKey::Area), Some(0.0));

    for (key, value, original) in [
        ("angle1", 60.0, 0.0),
        ("area", 50.0, 10.0),
        ("height", 10.0, 0.0),
        ("side2", 8.0, 5.0),
        ("perimeter", 40.0, 20.0),
    ] {
        let edited = TriangleService::update_measurement(&flat, key, value, original, &px);
        assert!(edited.points().iter().all(|p| p.is_finite()), "{}", key);
        assert!(edited.angles().iter().all(|a| a.is_finite()), "{}", key);
    }

    let fixed = TriangleService::update_measurement(&flat, "angle1", 60.0, 0.0, &px);
    assert!(!fixed.is_degenerate());
    assert!((angle_sum(&fixed) - 180.0).abs() < ANGLE_SUM_TOLERANCE_DEG);
}

#[test]
fn test_side_edit_scales_uniformly() {
    let triangle = right_triangle();
    let px = UnitScale::pixels();
    let edited = TriangleService::update_measurement(&triangle, "side3", 45.0, 90.0, &px);
    let sides = edited.sides();
    assert!((sides[0] - 60.0).abs() < 1e-9);
    assert!((sides[1] - 75.0).abs() < 1e-9);
    assert!((sides[2] - 45.0).abs() < 1e-9);
}
