//! # ShapeKit Designer
//!
//! Geometry engine behind the ShapeKit canvas: circles, rectangles,
//! triangles and lines that can be drawn, moved, resized and rotated with the
//! pointer, measured, and reshaped by editing a measurement.
//!
//! ## Core Components
//!
//! - **Model**: [`Point`] math and the closed [`Shape`] enum
//! - **Services**: one [`ShapeService`] per shape type, resolved through
//!   [`ShapeServiceFactory`]
//! - **Measurements**: forward measurements and inverse edits, including the
//!   angle-constrained triangle solver
//! - **Canvas**: shape store, selection, grid snapping and the pointer/key
//!   interaction state machine
//! - **DesignerState**: session facade for the measurement panel
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (unit + calibration)
//!   └── Canvas (mode, gesture, grid)
//!         ├── ShapeStore (z-ordered shapes)
//!         └── SelectionManager
//!
//! ShapeServiceFactory
//!   └── Circle / Rectangle / Triangle / Line services
//!         └── geometry + triangle_solver
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_designer::{Canvas, DrawingMode, PointerEvent, ShapeType};
//!
//! let mut canvas = Canvas::new();
//! canvas.set_mode(DrawingMode::Create(ShapeType::Circle));
//! canvas.pointer_down(PointerEvent::at(100.0, 100.0));
//! canvas.pointer_move(PointerEvent::at(140.0, 100.0));
//! canvas.pointer_up(PointerEvent::at(140.0, 100.0));
//!
//! assert_eq!(canvas.shape_count(), 1);
//! assert_eq!(canvas.mode(), DrawingMode::Select);
//! ```

pub mod canvas;
pub mod designer_state;
pub mod geometry;
pub mod grid;
pub mod measurement;
pub mod model;
pub mod selection_manager;
pub mod services;
pub mod shape_store;
pub mod triangle_solver;

pub use canvas::{
    Canvas, DrawingMode, Gesture, InteractionConfig, InteractionOutcome, Key, Modifiers,
    PointerEvent,
};
pub use designer_state::DesignerState;
pub use grid::{snap_to_grid, Grid};
pub use measurement::{MeasurementKey, Measurements};
pub use model::{
    DesignCircle, DesignLine, DesignRectangle, DesignTriangle, OriginalDimensions, Point, Shape,
    ShapeId, ShapeStyle, ShapeType, Size,
};
pub use selection_manager::SelectionManager;
pub use services::{
    CircleService, CreateShapeParams, LineService, RectangleService, ShapeService,
    ShapeServiceFactory, TriangleService,
};
pub use shape_store::ShapeStore;
pub use triangle_solver::{solve_angle_edit, AngleEdit, ReconstructionStrategy};
