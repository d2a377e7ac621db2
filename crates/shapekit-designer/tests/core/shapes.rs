use shapekit_designer::{
    CircleService, CreateShapeParams, DesignCircle, DesignLine, DesignRectangle, DesignTriangle,
    LineService, Point, RectangleService, Shape, ShapeServiceFactory, ShapeStyle, ShapeType,
    TriangleService,
};

fn close(a: Point, b: Point) -> bool {
    a.distance_to(&b) < 1e-9
}

#[test]
fn test_point_distance() {
    let p1 = Point::new(0.0, 0.0);
    let p2 = Point::new(3.0, 4.0);
    assert_eq!(p1.distance_to(&p2), 5.0);
    assert_eq!(p1.midpoint(&p2), Point::new(1.5, 2.0));
}

#[test]
fn test_point_rotation_is_clockwise_on_screen() {
    let p = Point::new(10.0, 0.0).rotate_about(&Point::ORIGIN, 90.0);
    assert!(close(p, Point::new(0.0, 10.0)));
}

#[test]
fn test_point_angle_between() {
    let x = Point::new(5.0, 0.0);
    assert!((x.angle_between(&Point::new(0.0, 3.0)) - 90.0).abs() < 1e-9);
    assert!((x.angle_between(&Point::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
    assert!((x.angle_between(&Point::new(2.0, 2.0)) - 45.0).abs() < 1e-9);
    assert!((x.angle_between(&Point::new(2.0, -2.0)) - 45.0).abs() < 1e-9);
    assert_eq!(x.angle_between(&Point::ORIGIN), 0.0);
}

#[test]
fn test_create_from_position_uses_defaults() {
    let at = Point::new(200.0, 150.0);
    for shape_type in ShapeType::ALL {
        let service = ShapeServiceFactory::service(shape_type);
        let shape = service.create_shape(&CreateShapeParams::at(at));
        assert_eq!(shape.shape_type(), shape_type);
        assert!(close(shape.position(), at), "{} at {:?}", shape_type, shape.position());
    }
}

#[test]
fn test_create_keeps_id_and_style() {
    let style = ShapeStyle {
        stroke_width: 6.0,
        ..ShapeStyle::default()
    };
    let template = DesignCircle::new(Point::ORIGIN, 1.0);
    let params = CreateShapeParams::circle(Point::new(5.0, 5.0), 12.0)
        .with_id(template.id)
        .with_style(style.clone());
    let shape = ShapeServiceFactory::service(ShapeType::Circle).create_shape(&params);
    assert_eq!(shape.id(), template.id);
    assert_eq!(shape.style(), &style);
}

#[test]
fn test_invalid_dimensions_are_clamped() {
    let circle = DesignCircle::new(Point::ORIGIN, -4.0);
    assert_eq!(circle.radius, 1.0);
    let rect = DesignRectangle::new(0.0, 0.0, f64::NAN, 0.0);
    assert_eq!((rect.width, rect.height), (1.0, 1.0));
}

#[test]
fn test_move_recomputes_derived_positions() {
    let triangle = DesignTriangle::new([
        Point::new(0.0, 0.0),
        Point::new(30.0, 0.0),
        Point::new(0.0, 30.0),
    ]);
    let moved = TriangleService::translate(&triangle, 5.0, -5.0);
    assert!(close(moved.position(), Point::new(15.0, 5.0)));

    let line = DesignLine::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let moved = LineService::translate(&line, 0.0, 7.0);
    assert!(close(moved.position(), Point::new(5.0, 7.0)));
    assert_eq!(moved.length(), 10.0);
}

#[test]
fn test_resize_round_trip_restores_every_type() {
    let shapes = vec![
        Shape::Circle(DesignCircle::new(Point::new(40.0, 40.0), 15.0)),
        Shape::Rectangle(DesignRectangle::new(10.0, 20.0, 60.0, 30.0)),
        Shape::Triangle(DesignTriangle::new([
            Point::new(0.0, 0.0),
            Point::new(40.0, 10.0),
            Point::new(10.0, 50.0),
        ])),
        Shape::Line(DesignLine::new(Point::new(-5.0, 3.0), Point::new(25.0, 43.0))),
    ];

    for shape in shapes {
        let service = ShapeServiceFactory::for_shape(&shape);
        let back = service.resize_shape(&service.resize_shape(&shape, 2.0), 0.5);
        let (a, b) = (shape.bounds(), back.bounds());
        assert!((a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9, "{:?}", shape.shape_type());
        assert!((a.2 - b.2).abs() < 1e-9 && (a.3 - b.3).abs() < 1e-9, "{:?}", shape.shape_type());
        assert!(back.has_baseline());
    }
}

#[test]
fn test_repeated_rescale_is_idempotent() {
    let rect = DesignRectangle::new(0.0, 0.0, 30.0, 20.0);
    let mut current = rect.clone();
    for _ in 0..10 {
        current = RectangleService::resize(&RectangleService::resize(&current, 3.0), 1.0 / 3.0);
    }
    assert!((current.width - 30.0).abs() < 1e-9);
    assert!((current.height - 20.0).abs() < 1e-9);
    assert!(close(current.center(), rect.center()));
}

#[test]
fn test_non_positive_factor_is_ignored() {
    let circle = DesignCircle::new(Point::new(1.0, 1.0), 10.0);
    assert_eq!(CircleService::resize(&circle, 0.0), circle);
    assert_eq!(CircleService::resize(&circle, f64::INFINITY), circle);
}

#[test]
fn test_scale_about_external_pivot() {
    let circle = DesignCircle::new(Point::new(10.0, 0.0), 5.0);
    let scaled = CircleService::scale(&circle, 2.0, Some(Point::ORIGIN));
    assert_eq!(scaled.center, Point::new(20.0, 0.0));
    assert_eq!(scaled.radius, 10.0);
}

#[test]
fn test_rotation_semantics_per_type() {
    let rect = DesignRectangle::new(0.0, 0.0, 40.0, 20.0);
    let rotated = RectangleService::rotate(&rect, -30.0, None);
    assert_eq!(rotated.rotation, 330.0);
    assert_eq!(rotated.position, rect.position);

    let line = DesignLine::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let rotated = LineService::rotate(&line, 190.0, None);
    assert!((rotated.rotation() - -170.0).abs() < 1e-9);
    assert!(close(rotated.position(), line.position()));
}

#[test]
fn test_wrong_variant_is_returned_unchanged() {
    let line = Shape::Line(DesignLine::new(Point::ORIGIN, Point::new(1.0, 1.0)));
    let circle_service = ShapeServiceFactory::service(ShapeType::Circle);
    assert_eq!(circle_service.move_shape(&line, 5.0, 5.0), line);
    assert!(circle_service
        .get_measurements(&line, &shapekit_core::UnitScale::pixels())
        .is_empty());
}

#[test]
fn test_shape_serializes_with_type_tag() {
    let shape = Shape::Rectangle(DesignRectangle::new(1.0, 2.0, 3.0, 4.0));
    let json = serde_json::to_value(&shape).unwrap();
    assert_eq!(json["type"], "rectangle");
    let back: Shape = serde_json::from_value(json).unwrap();
    assert_eq!(back, shape);
}

#[test]
fn test_deserialize_rebuilds_derived_fields() {
    let triangle = DesignTriangle::new([
        Point::new(0.0, 0.0),
        Point::new(30.0, 0.0),
        Point::new(0.0, 30.0),
    ]);
    let mut json = serde_json::to_value(Shape::Triangle(triangle.clone())).unwrap();
    json["position"] = serde_json::json!({ "x": 500.0, "y": -7.0 });
    let Shape::Triangle(back) = serde_json::from_value(json).unwrap() else {
        panic!("expected a triangle");
    };
    assert_eq!(back.position(), Point::new(10.0, 10.0));
    assert_eq!(back, triangle);

    let line = DesignLine::new(Point::new(0.0, 0.0), Point::new(40.0, 0.0));
    let mut json = serde_json::to_value(Shape::Line(line.clone())).unwrap();
    json["length"] = serde_json::json!(3.0);
    json["position"] = serde_json::json!({ "x": 1.0, "y": 1.0 });
    let Shape::Line(back) = serde_json::from_value(json).unwrap() else {
        panic!("expected a line");
    };
    assert_eq!(back.length(), 40.0);
    assert_eq!(back.position(), Point::new(20.0, 0.0));
    assert_eq!(back, line);
}

#[test]
fn test_render_produces_outline() {
    let shape = Shape::Triangle(DesignTriangle::from_bounds(0.0, 0.0, 10.0, 10.0));
    assert!(shape.render().iter().count() >= 4);
}
