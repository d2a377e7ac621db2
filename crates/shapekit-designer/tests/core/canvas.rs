use shapekit_designer::{
    Canvas, DesignCircle, DesignRectangle, DrawingMode, Gesture, InteractionOutcome, Key,
    Modifiers, Point, PointerEvent, Shape, ShapeType,
};

fn only_shape(canvas: &Canvas) -> Shape {
    assert_eq!(canvas.shape_count(), 1);
    canvas.shapes().next().cloned().unwrap()
}

fn rect_canvas() -> (Canvas, shapekit_designer::ShapeId) {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 100.0, 50.0)));
    (canvas, id)
}

#[test]
fn test_canvas_creation() {
    let canvas = Canvas::new();
    assert_eq!(canvas.shape_count(), 0);
    assert_eq!(canvas.mode(), DrawingMode::Select);
    assert!(canvas.gesture().is_idle());
}

#[test]
fn test_draw_circle_gesture() {
    let mut canvas = Canvas::new();
    canvas.set_mode(DrawingMode::Create(ShapeType::Circle));
    canvas.pointer_down(PointerEvent::at(100.0, 100.0));
    canvas.pointer_move(PointerEvent::at(140.0, 100.0));
    assert_eq!(
        canvas.gesture().preview(),
        Some((Point::new(100.0, 100.0), Point::new(140.0, 100.0)))
    );

    let outcome = canvas.pointer_up(PointerEvent::at(140.0, 100.0));
    let Shape::Circle(circle) = only_shape(&canvas) else {
        panic!("expected a circle");
    };
    assert_eq!(outcome, InteractionOutcome::ShapeCreated(circle.id));
    assert_eq!(circle.center, Point::new(100.0, 100.0));
    assert_eq!(circle.radius, 40.0);
    assert_eq!(canvas.selected_id(), Some(circle.id));
    assert_eq!(canvas.mode(), DrawingMode::Select);
}

#[test]
fn test_short_draw_gesture_creates_nothing() {
    let mut canvas = Canvas::new();
    canvas.set_mode(DrawingMode::Create(ShapeType::Rectangle));
    canvas.pointer_down(PointerEvent::at(10.0, 10.0));
    let outcome = canvas.pointer_up(PointerEvent::at(13.0, 13.0));
    assert_eq!(outcome, InteractionOutcome::None);
    assert_eq!(canvas.shape_count(), 0);
    assert_eq!(canvas.mode(), DrawingMode::Create(ShapeType::Rectangle));
}

#[test]
fn test_draw_triangle_fills_box() {
    let mut canvas = Canvas::new();
    canvas.set_mode(DrawingMode::Create(ShapeType::Triangle));
    canvas.pointer_down(PointerEvent::at(100.0, 80.0));
    canvas.pointer_up(PointerEvent::at(0.0, 0.0));
    let Shape::Triangle(triangle) = only_shape(&canvas) else {
        panic!("expected a triangle");
    };
    assert_eq!(
        *triangle.points(),
        [Point::new(50.0, 0.0), Point::new(100.0, 80.0), Point::new(0.0, 80.0)]
    );
}

#[test]
fn test_pointer_leave_finishes_draw() {
    let mut canvas = Canvas::new();
    canvas.set_mode(DrawingMode::Create(ShapeType::Line));
    canvas.pointer_down(PointerEvent::at(0.0, 0.0));
    canvas.pointer_move(PointerEvent::at(30.0, 0.0));
    canvas.pointer_leave(PointerEvent::at(50.0, 0.0));
    let Shape::Line(line) = only_shape(&canvas) else {
        panic!("expected a line");
    };
    assert_eq!(line.length(), 50.0);
    assert!(canvas.gesture().is_idle());
}

#[test]
fn test_mode_switch_abandons_gesture() {
    let mut canvas = Canvas::new();
    canvas.set_mode(DrawingMode::Create(ShapeType::Rectangle));
    canvas.pointer_down(PointerEvent::at(0.0, 0.0));
    canvas.pointer_move(PointerEvent::at(60.0, 60.0));
    canvas.set_mode(DrawingMode::Select);
    assert_eq!(*canvas.gesture(), Gesture::Idle);
    assert_eq!(canvas.pointer_up(PointerEvent::at(60.0, 60.0)), InteractionOutcome::None);
    assert_eq!(canvas.shape_count(), 0);
}

#[test]
fn test_drag_respects_threshold() {
    let (mut canvas, id) = rect_canvas();
    let outcome = canvas.pointer_down(PointerEvent::at(10.0, 10.0));
    assert_eq!(outcome, InteractionOutcome::SelectionChanged(Some(id)));

    assert_eq!(canvas.pointer_move(PointerEvent::at(12.0, 10.0)), InteractionOutcome::None);
    assert_eq!(canvas.get_shape(id).unwrap().position(), Point::new(0.0, 0.0));

    assert_eq!(
        canvas.pointer_move(PointerEvent::at(30.0, 10.0)),
        InteractionOutcome::ShapeUpdated(id)
    );
    assert_eq!(canvas.get_shape(id).unwrap().position(), Point::new(20.0, 0.0));

    // Once dragging, small moves are followed exactly.
    canvas.pointer_move(PointerEvent::at(11.0, 10.0));
    assert_eq!(canvas.get_shape(id).unwrap().position(), Point::new(1.0, 0.0));
    canvas.pointer_up(PointerEvent::at(11.0, 10.0));
    assert!(canvas.gesture().is_idle());
}

#[test]
fn test_resize_gesture_scales_about_center() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(Shape::Circle(DesignCircle::new(Point::new(100.0, 100.0), 20.0)));
    canvas.set_mode(DrawingMode::Resize);
    canvas.pointer_down(PointerEvent::at(120.0, 100.0));
    canvas.pointer_move(PointerEvent::at(140.0, 100.0));
    let Some(Shape::Circle(circle)) = canvas.get_shape(id) else {
        panic!("expected a circle");
    };
    assert!((circle.radius - 40.0).abs() < 1e-9);
    assert_eq!(circle.center, Point::new(100.0, 100.0));
}

#[test]
fn test_rotate_gesture_uses_horizontal_travel() {
    let (mut canvas, id) = rect_canvas();
    canvas.set_mode(DrawingMode::Rotate);
    canvas.pointer_down(PointerEvent::at(50.0, 25.0));
    canvas.pointer_move(PointerEvent::at(70.0, 25.0));
    assert!((canvas.get_shape(id).unwrap().rotation() - 10.0).abs() < 1e-9);
}

#[test]
fn test_rotate_on_empty_space_uses_selection() {
    let (mut canvas, id) = rect_canvas();
    canvas.select(id);
    canvas.set_mode(DrawingMode::Rotate);
    assert_eq!(canvas.pointer_down(PointerEvent::at(500.0, 500.0)), InteractionOutcome::None);
    canvas.pointer_move(PointerEvent::at(540.0, 500.0));
    assert!((canvas.get_shape(id).unwrap().rotation() - 20.0).abs() < 1e-9);
}

#[test]
fn test_keyboard_nudge_scale_and_delete() {
    let (mut canvas, id) = rect_canvas();
    assert_eq!(canvas.key_down(Key::ArrowRight, Modifiers::NONE), InteractionOutcome::None);

    canvas.select(id);
    canvas.key_down(Key::ArrowRight, Modifiers::NONE);
    assert_eq!(canvas.get_shape(id).unwrap().position(), Point::new(1.0, 0.0));

    let large = Modifiers {
        large_step: true,
        ..Modifiers::NONE
    };
    canvas.key_down(Key::ArrowDown, large);
    assert_eq!(canvas.get_shape(id).unwrap().position(), Point::new(1.0, 10.0));

    canvas.key_down(Key::Plus, Modifiers::NONE);
    let Some(Shape::Rectangle(rect)) = canvas.get_shape(id) else {
        panic!("expected a rectangle");
    };
    assert!((rect.width - 105.0).abs() < 1e-9);

    assert_eq!(canvas.key_down(Key::Other, Modifiers::NONE), InteractionOutcome::None);
    assert_eq!(canvas.key_down(Key::Delete, Modifiers::NONE), InteractionOutcome::ShapeDeleted(id));
    assert_eq!(canvas.shape_count(), 0);
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_click_on_empty_space_clears_selection() {
    let (mut canvas, id) = rect_canvas();
    canvas.select(id);
    assert_eq!(
        canvas.pointer_down(PointerEvent::at(300.0, 300.0)),
        InteractionOutcome::SelectionChanged(None)
    );
    assert_eq!(canvas.selected_id(), None);
    assert_eq!(canvas.pointer_down(PointerEvent::at(300.0, 300.0)), InteractionOutcome::None);
}

#[test]
fn test_drawing_mode_names() {
    assert_eq!("rotate".parse::<DrawingMode>().unwrap(), DrawingMode::Rotate);
    assert_eq!(
        "Triangle".parse::<DrawingMode>().unwrap(),
        DrawingMode::Create(ShapeType::Triangle)
    );
    assert!("lasso".parse::<DrawingMode>().is_err());
    assert_eq!(DrawingMode::Create(ShapeType::Line).to_string(), "line");
}

#[test]
fn test_pointer_leave_finishes_drag() {
    let (mut canvas, id) = rect_canvas();
    canvas.pointer_down(PointerEvent::at(10.0, 10.0));
    canvas.pointer_move(PointerEvent::at(40.0, 30.0));
    assert_eq!(canvas.pointer_leave(PointerEvent::at(40.0, 30.0)), InteractionOutcome::None);
    assert!(canvas.gesture().is_idle());
    assert_eq!(canvas.get_shape(id).unwrap().position(), Point::new(30.0, 20.0));

    // Moves after leaving no longer drag.
    canvas.pointer_move(PointerEvent::at(90.0, 90.0));
    assert_eq!(canvas.get_shape(id).unwrap().position(), Point::new(30.0, 20.0));
}

#[test]
fn test_plus_grows_shape_shrunk_to_minimum() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 4.0, 4.0)));
    canvas.select(id);
    for _ in 0..60 {
        canvas.key_down(Key::Minus, Modifiers::default());
    }
    let Some(Shape::Rectangle(rect)) = canvas.get_shape(id) else {
        panic!("expected a rectangle");
    };
    assert_eq!(rect.width, 1.0);

    canvas.key_down(Key::Plus, Modifiers::default());
    canvas.key_down(Key::Plus, Modifiers::default());
    let Some(Shape::Rectangle(rect)) = canvas.get_shape(id) else {
        panic!("expected a rectangle");
    };
    assert!((rect.width - 1.1025).abs() < 1e-9);
    assert!((rect.height - 1.1025).abs() < 1e-9);
}

#[test]
fn test_non_finite_pointer_move_is_ignored() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(Shape::Circle(DesignCircle::new(Point::new(50.0, 50.0), 20.0)));
    canvas.set_mode(DrawingMode::Rotate);
    canvas.pointer_down(PointerEvent::at(50.0, 50.0));

    assert_eq!(
        canvas.pointer_move(PointerEvent::at(f64::NAN, 50.0)),
        InteractionOutcome::None
    );
    let shape = canvas.get_shape(id).unwrap();
    assert_eq!(shape.rotation(), 0.0);
    assert!(shape.center().is_finite());
}
