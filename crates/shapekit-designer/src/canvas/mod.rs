//! Canvas for drawing and manipulating shapes.

mod interaction;
mod types;

pub use interaction::{characteristic_size, snap_anchor};
pub use types::{
    DrawingMode, Gesture, InteractionConfig, InteractionOutcome, Key, Modifiers, PointerEvent,
};

use shapekit_core::ShapeError;

use crate::grid::Grid;
use crate::model::{Point, Shape, ShapeId, ShapeStyle};
use crate::selection_manager::SelectionManager;
use crate::shape_store::ShapeStore;

/// Canvas state: the shapes, the selection, the active mode and the one
/// gesture in flight.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub shape_store: ShapeStore,
    pub selection_manager: SelectionManager,
    mode: DrawingMode,
    gesture: Gesture,
    grid: Grid,
    config: InteractionConfig,
    default_style: ShapeStyle,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates a new canvas.
    pub fn new() -> Self {
        Self::with_settings(Grid::default(), InteractionConfig::default())
    }

    pub fn with_settings(grid: Grid, config: InteractionConfig) -> Self {
        Self {
            shape_store: ShapeStore::new(),
            selection_manager: SelectionManager::new(),
            mode: DrawingMode::Select,
            gesture: Gesture::Idle,
            grid,
            config,
            default_style: ShapeStyle::default(),
        }
    }

    /// Sets the drawing mode and abandons any gesture in flight.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        if !self.gesture.is_idle() {
            tracing::debug!("Mode change to {} discards {:?}", mode, self.gesture);
        }
        self.mode = mode;
        self.gesture = Gesture::Idle;
    }

    /// Gets the current drawing mode.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub(crate) fn set_gesture(&mut self, gesture: Gesture) {
        self.gesture = gesture;
    }

    pub(crate) fn take_gesture(&mut self) -> Gesture {
        std::mem::take(&mut self.gesture)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: InteractionConfig) {
        self.config = config;
    }

    pub fn default_style(&self) -> &ShapeStyle {
        &self.default_style
    }

    /// Style applied to shapes created by draw gestures.
    pub fn set_default_style(&mut self, style: ShapeStyle) {
        self.default_style = style;
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    /// Shapes in draw order, bottom first.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.shape_store.iter()
    }

    /// Gets a reference to a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shape_store.get(id)
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selection_manager.selected_id()
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_id().and_then(|id| self.shape_store.get(id))
    }

    pub fn select(&mut self, id: ShapeId) -> bool {
        self.selection_manager.select_id(&self.shape_store, id)
    }

    pub fn deselect(&mut self) {
        self.selection_manager.deselect();
    }

    /// Topmost shape under `point`.
    pub fn get_shape_at_position(&self, point: Point) -> Option<ShapeId> {
        SelectionManager::shape_at(&self.shape_store, point)
    }

    /// Adds a shape on top of the others.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        self.shape_store.insert(shape)
    }

    pub fn replace_shape(&mut self, shape: Shape) -> Result<(), ShapeError> {
        self.shape_store.replace(shape)
    }

    /// Removes a shape, clearing the selection if it pointed at it.
    pub fn delete_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let removed = self.shape_store.remove(id)?;
        self.selection_manager.prune(&self.shape_store);
        Some(removed)
    }

    /// Removes every shape and resets selection and gesture.
    pub fn clear(&mut self) {
        self.shape_store.clear();
        self.selection_manager.deselect();
        self.gesture = Gesture::Idle;
    }
}
