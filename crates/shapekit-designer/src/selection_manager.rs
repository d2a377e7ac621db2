use crate::model::{Point, ShapeId};
use crate::services::ShapeServiceFactory;
use crate::shape_store::ShapeStore;

/// Tracks the single selected shape and performs point selection.
///
/// Hit-testing walks the store top to bottom, so where shapes overlap the one
/// drawn last wins.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<ShapeId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapekit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected_id
    }

    pub fn deselect(&mut self) {
        self.selected_id = None;
    }

    /// Topmost shape containing `point`, if any.
    pub fn shape_at(store: &ShapeStore, point: Point) -> Option<ShapeId> {
        store
            .iter_topmost_first()
            .find(|shape| ShapeServiceFactory::for_shape(shape).contains_point(shape, point))
            .map(|shape| shape.id())
    }

    /// Selects `id` if the store holds it.
    pub fn select_id(&mut self, store: &ShapeStore, id: ShapeId) -> bool {
        if store.contains(id) {
            self.selected_id = Some(id);
            true
        } else {
            false
        }
    }

    /// Drops the selection if it points at a shape that no longer exists.
    pub fn prune(&mut self, store: &ShapeStore) {
        if self.selected_id.is_some_and(|id| !store.contains(id)) {
            self.selected_id = None;
        }
    }
}
