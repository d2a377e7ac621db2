//! Canvas type definitions: modes, gestures, pointer and key events,
//! interaction outcomes and thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use shapekit_core::ShapeError;

use crate::model::{Point, Shape, ShapeId, ShapeType};

/// Drawing modes for the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "shape", rename_all = "lowercase")]
pub enum DrawingMode {
    #[default]
    Select,
    Create(ShapeType),
    Move,
    Resize,
    Rotate,
}

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawingMode::Select => write!(f, "select"),
            DrawingMode::Create(shape_type) => write!(f, "{}", shape_type),
            DrawingMode::Move => write!(f, "move"),
            DrawingMode::Resize => write!(f, "resize"),
            DrawingMode::Rotate => write!(f, "rotate"),
        }
    }
}

/// Accepts `select`, `move`, `resize`, `rotate` or a shape type name (create mode).
impl FromStr for DrawingMode {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "select" => Ok(DrawingMode::Select),
            "move" => Ok(DrawingMode::Move),
            "resize" => Ok(DrawingMode::Resize),
            "rotate" => Ok(DrawingMode::Rotate),
            other => other.parse::<ShapeType>().map(DrawingMode::Create),
        }
    }
}

/// The in-flight pointer gesture. Only one exists at a time and
/// [`super::Canvas::set_mode`] always resets it to `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing {
        shape_type: ShapeType,
        start: Point,
        current: Point,
    },
    Dragging {
        target: ShapeId,
        start: Point,
        original: Shape,
        /// Set once the pointer has travelled past the drag threshold.
        moved: bool,
    },
    Resizing {
        target: ShapeId,
        start: Point,
        original: Shape,
    },
    Rotating {
        target: ShapeId,
        start: Point,
        original: Shape,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "idle",
            Gesture::Drawing { .. } => "draw",
            Gesture::Dragging { .. } => "drag",
            Gesture::Resizing { .. } => "resize",
            Gesture::Rotating { .. } => "rotate",
        }
    }

    /// Draw-preview rectangle for the rendering layer while creating.
    pub fn preview(&self) -> Option<(Point, Point)> {
        match self {
            Gesture::Drawing { start, current, .. } => Some((*start, *current)),
            _ => None,
        }
    }
}

/// Modifier keys that change interaction behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Snap to the grid (Shift on most platforms).
    pub precision: bool,
    /// Use the large nudge step.
    pub large_step: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        precision: false,
        large_step: false,
    };
    pub const PRECISION: Modifiers = Modifiers {
        precision: true,
        large_step: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Plus,
    Minus,
    Delete,
    Other,
}

/// What an event changed, for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionOutcome {
    None,
    SelectionChanged(Option<ShapeId>),
    ShapeCreated(ShapeId),
    ShapeUpdated(ShapeId),
    ShapeDeleted(ShapeId),
}

/// Thresholds and step sizes of the interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Pointer travel (px) before a press on a shape becomes a drag.
    pub min_drag_distance: f64,
    /// Drag distance (px) a draw gesture needs to commit a shape.
    pub min_create_distance: f64,
    pub nudge_step: f64,
    pub nudge_step_large: f64,
    /// Relative size change per `+`/`-` key press.
    pub scale_step: f64,
    /// Degrees of rotation per pixel of horizontal pointer travel.
    pub rotation_sensitivity: f64,
    pub rotation_snap_degrees: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            min_drag_distance: 3.0,
            min_create_distance: 5.0,
            nudge_step: 1.0,
            nudge_step_large: 10.0,
            scale_step: 0.05,
            rotation_sensitivity: 0.5,
            rotation_snap_degrees: 15.0,
        }
    }
}
