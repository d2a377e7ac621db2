use shapekit_core::{FixedCalibration, MeasurementUnit};
use shapekit_designer::{
    Canvas, DesignRectangle, DesignerState, DrawingMode, InteractionOutcome, MeasurementKey, Shape,
    ShapeType,
};

fn state_with_rect() -> DesignerState {
    let mut state = DesignerState::with_calibration(Canvas::new(), FixedCalibration::new(10.0));
    let id = state
        .canvas
        .add_shape(Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 100.0, 50.0)));
    state.canvas.select(id);
    state
}

#[test]
fn test_designer_state_defaults() {
    let state = DesignerState::new();
    assert_eq!(state.unit(), MeasurementUnit::Centimeters);
    assert_eq!(state.canvas.mode(), DrawingMode::Select);
    assert!(state.selected_measurements().is_none());
    assert!(state.formatted_measurements(2).is_empty());
}

#[test]
fn test_selected_measurements_use_calibration() {
    let state = state_with_rect();
    let m = state.selected_measurements().unwrap();
    assert_eq!(m.value(MeasurementKey::Width), Some(10.0));
    assert_eq!(m.value(MeasurementKey::Height), Some(5.0));
    assert_eq!(m.value(MeasurementKey::Area), Some(50.0));
}

#[test]
fn test_switching_units() {
    let mut state = state_with_rect();
    state.set_unit(MeasurementUnit::Inches);
    let width = state.selected_measurements().unwrap().value(MeasurementKey::Width).unwrap();
    assert!((width - 100.0 / 25.4).abs() < 1e-9);
}

#[test]
fn test_measurement_edit_updates_selection() {
    let mut state = state_with_rect();
    let id = state.canvas.selected_id().unwrap();
    let outcome = state.update_selected_measurement("width", 20.0, 10.0);
    assert_eq!(outcome, InteractionOutcome::ShapeUpdated(id));
    let Some(Shape::Rectangle(rect)) = state.canvas.get_shape(id) else {
        panic!("expected a rectangle");
    };
    assert!((rect.width - 200.0).abs() < 1e-9);
    assert!((rect.height - 50.0).abs() < 1e-9);
}

#[test]
fn test_rejected_edits_report_nothing() {
    let mut state = state_with_rect();
    assert_eq!(
        state.update_selected_measurement("radius", 3.0, 1.0),
        InteractionOutcome::None
    );
    assert_eq!(
        state.update_selected_measurement("width", 10.0, 10.0),
        InteractionOutcome::None
    );
    state.canvas.deselect();
    assert_eq!(
        state.update_selected_measurement("width", 20.0, 10.0),
        InteractionOutcome::None
    );
}

#[test]
fn test_set_mode_by_name() {
    let mut state = DesignerState::new();
    state.set_mode_by_name("circle");
    assert_eq!(state.canvas.mode(), DrawingMode::Create(ShapeType::Circle));
    state.set_mode_by_name("bogus");
    assert_eq!(state.canvas.mode(), DrawingMode::Select);
}

#[test]
fn test_formatted_measurements() {
    let state = state_with_rect();
    let formatted = state.formatted_measurements(2);
    assert_eq!(formatted[0], (MeasurementKey::Width, "10.00 cm".to_string()));
    assert!(formatted
        .iter()
        .any(|(key, text)| *key == MeasurementKey::Area && text == "50.00 cm²"));
}
