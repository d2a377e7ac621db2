use shapekit_designer::{
    Canvas, DesignCircle, DesignLine, DesignRectangle, DesignTriangle, LineService, Point,
    RectangleService, Shape, ShapeStyle,
};

#[test]
fn test_topmost_shape_wins() {
    let mut canvas = Canvas::new();
    let bottom = canvas.add_shape(Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 100.0, 100.0)));
    let top = canvas.add_shape(Shape::Circle(DesignCircle::new(Point::new(50.0, 50.0), 20.0)));

    assert_eq!(canvas.get_shape_at_position(Point::new(50.0, 50.0)), Some(top));
    assert_eq!(canvas.get_shape_at_position(Point::new(5.0, 5.0)), Some(bottom));
    assert_eq!(canvas.get_shape_at_position(Point::new(500.0, 5.0)), None);

    canvas.delete_shape(top);
    assert_eq!(canvas.get_shape_at_position(Point::new(50.0, 50.0)), Some(bottom));
}

#[test]
fn test_circle_boundary_is_inside() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(Shape::Circle(DesignCircle::new(Point::ORIGIN, 5.0)));
    assert_eq!(canvas.get_shape_at_position(Point::new(3.0, 4.0)), Some(id));
    assert_eq!(canvas.get_shape_at_position(Point::new(3.0, 4.1)), None);
}

#[test]
fn test_rotated_rectangle_hit() {
    let rect = DesignRectangle::new(0.0, 0.0, 100.0, 10.0);
    let rotated = RectangleService::rotate(&rect, 45.0, None);
    // The far right end of the unrotated bar is empty once rotated.
    assert!(RectangleService::contains(&rect, Point::new(95.0, 5.0)));
    assert!(!RectangleService::contains(&rotated, Point::new(95.0, 5.0)));
    assert!(RectangleService::contains(&rotated, Point::new(50.0, 5.0)));
}

#[test]
fn test_line_hit_radius_follows_stroke() {
    let line = DesignLine::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    let thick = line.with_style(ShapeStyle {
        stroke_width: 12.0,
        ..ShapeStyle::default()
    });
    assert_eq!(LineService::hit_radius(&thick), 8.0);
    assert!(LineService::contains(&thick, Point::new(50.0, 7.5)));
    assert!(!LineService::contains(&thick, Point::new(50.0, 8.5)));
}

#[test]
fn test_degenerate_triangle_is_never_hit() {
    let mut canvas = Canvas::new();
    canvas.add_shape(Shape::Triangle(DesignTriangle::new([
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 0.0),
    ])));
    assert_eq!(canvas.get_shape_at_position(Point::new(10.0, 0.0)), None);
}
