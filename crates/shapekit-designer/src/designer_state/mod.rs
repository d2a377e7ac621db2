//! Designer state manager for UI integration.
//! Owns the canvas plus the measurement-panel context (unit and calibration)
//! and routes panel edits to the right shape service.

use shapekit_core::{
    format_measurement, CalibrationProvider, FixedCalibration, MeasurementUnit, UnitScale,
};

use crate::canvas::{Canvas, DrawingMode, InteractionOutcome};
use crate::measurement::{MeasurementKey, Measurements};
use crate::model::ShapeId;
use crate::services::ShapeServiceFactory;

/// Designer state for UI integration
pub struct DesignerState {
    pub canvas: Canvas,
    unit: MeasurementUnit,
    calibration: Box<dyn CalibrationProvider + Send + Sync>,
}

impl DesignerState {
    /// Creates a new designer state with the default 96 DPI calibration.
    pub fn new() -> Self {
        Self::with_calibration(Canvas::new(), FixedCalibration::default())
    }

    pub fn with_calibration(
        canvas: Canvas,
        calibration: impl CalibrationProvider + Send + Sync + 'static,
    ) -> Self {
        Self {
            canvas,
            unit: MeasurementUnit::default(),
            calibration: Box::new(calibration),
        }
    }

    pub fn set_calibration(
        &mut self,
        calibration: impl CalibrationProvider + Send + Sync + 'static,
    ) {
        self.calibration = Box::new(calibration);
    }

    pub fn unit(&self) -> MeasurementUnit {
        self.unit
    }

    pub fn set_unit(&mut self, unit: MeasurementUnit) {
        self.unit = unit;
    }

    /// Conversion context for the current unit.
    pub fn unit_scale(&self) -> UnitScale {
        self.calibration.unit_scale(self.unit)
    }

    /// Sets the drawing mode.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.canvas.set_mode(mode);
    }

    /// Sets the drawing mode from a toolbar name, falling back to Select.
    pub fn set_mode_by_name(&mut self, name: &str) {
        let mode = match name.parse::<DrawingMode>() {
            Ok(mode) => mode,
            Err(_) => {
                tracing::warn!("Unknown drawing mode {}, defaulting to Select", name);
                DrawingMode::Select
            }
        };
        self.canvas.set_mode(mode);
    }

    pub fn measurements_for(&self, id: ShapeId) -> Option<Measurements> {
        let shape = self.canvas.get_shape(id)?;
        Some(ShapeServiceFactory::for_shape(shape).get_measurements(shape, &self.unit_scale()))
    }

    /// Measurements of the selected shape in the current unit.
    pub fn selected_measurements(&self) -> Option<Measurements> {
        self.measurements_for(self.canvas.selected_id()?)
    }

    /// Panel-ready strings for the selected shape.
    pub fn formatted_measurements(&self, decimals: usize) -> Vec<(MeasurementKey, String)> {
        match self.canvas.selected_id() {
            Some(id) => self.formatted_measurements_for(id, decimals),
            None => Vec::new(),
        }
    }

    pub fn formatted_measurements_for(
        &self,
        id: ShapeId,
        decimals: usize,
    ) -> Vec<(MeasurementKey, String)> {
        let Some(measurements) = self.measurements_for(id) else {
            return Vec::new();
        };
        measurements
            .iter()
            .map(|(key, value)| {
                let text = if key.is_angle() {
                    format!("{:.*}°", decimals, value)
                } else {
                    format_measurement(value, self.unit, key.is_area(), decimals)
                };
                (key, text)
            })
            .collect()
    }

    /// Applies a panel edit to the selected shape.
    ///
    /// `original_value` is the value the panel showed before the edit.
    pub fn update_selected_measurement(
        &mut self,
        key: &str,
        new_value: f64,
        original_value: f64,
    ) -> InteractionOutcome {
        let Some(shape) = self.canvas.selected_shape() else {
            tracing::debug!("Measurement edit with nothing selected");
            return InteractionOutcome::None;
        };
        let scale = self.unit_scale();
        let updated = ShapeServiceFactory::for_shape(shape).update_from_measurement(
            shape,
            key,
            new_value,
            original_value,
            &scale,
        );
        if &updated == shape {
            return InteractionOutcome::None;
        }
        let id = updated.id();
        match self.canvas.replace_shape(updated) {
            Ok(()) => InteractionOutcome::ShapeUpdated(id),
            Err(e) => {
                tracing::warn!("Measurement edit lost: {}", e);
                InteractionOutcome::None
            }
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DesignerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignerState")
            .field("canvas", &self.canvas)
            .field("unit", &self.unit)
            .field("unit_scale", &self.unit_scale())
            .finish()
    }
}
