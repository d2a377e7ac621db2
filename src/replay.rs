//! Headless replay of recorded canvas sessions.
//!
//! A script is a JSON document listing pointer, key and measurement-panel
//! actions. Replaying it drives a [`DesignerState`] exactly as the UI would
//! and reports the resulting shapes with their measurements.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use shapekit_core::MeasurementUnit;
use shapekit_designer::{
    DesignerState, InteractionOutcome, Key, MeasurementKey, Modifiers, Point, PointerEvent,
    ShapeId, ShapeType,
};

/// One recorded action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Toolbar mode change by name (`select`, `move`, `resize`, `rotate`
    /// or a shape type).
    SetMode { mode: String },
    SetUnit { unit: MeasurementUnit },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerLeave {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Key {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Measurement panel edit on the selected shape. Without `original`
    /// the value currently shown for `key` is used.
    EditMeasurement {
        key: String,
        value: f64,
        #[serde(default)]
        original: Option<f64>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Unit to start in; the configured unit otherwise.
    #[serde(default)]
    pub unit: Option<MeasurementUnit>,
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid replay script")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading replay script {}", path.display()))?;
        Self::from_json(&json)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeReport {
    pub id: ShapeId,
    pub shape_type: ShapeType,
    pub position: Point,
    pub rotation: f64,
    pub measurements: BTreeMap<String, f64>,
    pub formatted: BTreeMap<String, String>,
}

/// Canvas state after a replay, shapes in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub unit: MeasurementUnit,
    pub outcomes: Vec<InteractionOutcome>,
    pub selected: Option<ShapeId>,
    pub shapes: Vec<ShapeReport>,
}

fn event(x: f64, y: f64, modifiers: Modifiers) -> PointerEvent {
    PointerEvent::at(x, y).with_modifiers(modifiers)
}

pub struct Replayer {
    state: DesignerState,
    decimals: usize,
    outcomes: Vec<InteractionOutcome>,
}

impl Replayer {
    pub fn new(state: DesignerState, decimals: usize) -> Self {
        Self {
            state,
            decimals,
            outcomes: Vec::new(),
        }
    }

    pub fn state(&self) -> &DesignerState {
        &self.state
    }

    /// Applies a single step and records its outcome.
    pub fn apply(&mut self, step: &ReplayStep) -> anyhow::Result<InteractionOutcome> {
        let outcome = match step {
            ReplayStep::SetMode { mode } => {
                self.state.set_mode_by_name(mode);
                InteractionOutcome::None
            }
            ReplayStep::SetUnit { unit } => {
                self.state.set_unit(*unit);
                InteractionOutcome::None
            }
            ReplayStep::PointerDown { x, y, modifiers } => {
                self.state.canvas.pointer_down(event(*x, *y, *modifiers))
            }
            ReplayStep::PointerMove { x, y, modifiers } => {
                self.state.canvas.pointer_move(event(*x, *y, *modifiers))
            }
            ReplayStep::PointerUp { x, y, modifiers } => {
                self.state.canvas.pointer_up(event(*x, *y, *modifiers))
            }
            ReplayStep::PointerLeave { x, y, modifiers } => {
                self.state.canvas.pointer_leave(event(*x, *y, *modifiers))
            }
            ReplayStep::Key { key, modifiers } => self.state.canvas.key_down(*key, *modifiers),
            ReplayStep::EditMeasurement {
                key,
                value,
                original,
            } => {
                let parsed: MeasurementKey = key.parse()?;
                let original = match original {
                    Some(original) => *original,
                    None => self
                        .state
                        .selected_measurements()
                        .and_then(|m| m.value(parsed))
                        .ok_or_else(|| anyhow!("no selected shape shows '{}'", key))?,
                };
                self.state.update_selected_measurement(key, *value, original)
            }
        };
        tracing::debug!("{:?} -> {:?}", step, outcome);
        self.outcomes.push(outcome);
        Ok(outcome)
    }

    pub fn run(&mut self, script: &ReplayScript) -> anyhow::Result<ReplayReport> {
        if let Some(unit) = script.unit {
            self.state.set_unit(unit);
        }
        for (index, step) in script.steps.iter().enumerate() {
            self.apply(step)
                .with_context(|| format!("step {} ({:?})", index + 1, step))?;
        }
        tracing::info!(
            "Replayed {} steps, {} shapes on canvas",
            script.steps.len(),
            self.state.canvas.shape_count()
        );
        Ok(self.report())
    }

    pub fn report(&self) -> ReplayReport {
        let shapes = self
            .state
            .canvas
            .shapes()
            .map(|shape| {
                let id = shape.id();
                ShapeReport {
                    id,
                    shape_type: shape.shape_type(),
                    position: shape.position(),
                    rotation: shape.rotation(),
                    measurements: self
                        .state
                        .measurements_for(id)
                        .map(|m| m.to_map())
                        .unwrap_or_default(),
                    formatted: self
                        .state
                        .formatted_measurements_for(id, self.decimals)
                        .into_iter()
                        .map(|(key, text)| (key.to_string(), text))
                        .collect(),
                }
            })
            .collect();

        ReplayReport {
            unit: self.state.unit(),
            outcomes: self.outcomes.clone(),
            selected: self.state.canvas.selected_id(),
            shapes,
        }
    }
}
