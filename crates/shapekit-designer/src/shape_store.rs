use std::collections::HashMap;

use shapekit_core::ShapeError;

use crate::model::{Shape, ShapeId};

/// Owns the shapes on the canvas and their draw order.
///
/// Later entries in the draw order are painted on top; hit-testing walks
/// [`ShapeStore::iter_topmost_first`].
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: HashMap<ShapeId, Shape>,
    draw_order: Vec<ShapeId>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shape on top. Re-inserting an existing id replaces it in place.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        if self.shapes.insert(id, shape).is_none() {
            self.draw_order.push(id);
        }
        id
    }

    /// Swaps in a new value for an existing shape, keeping its z position.
    pub fn replace(&mut self, shape: Shape) -> Result<(), ShapeError> {
        let id = shape.id();
        match self.shapes.get_mut(&id) {
            Some(slot) => {
                *slot = shape;
                Ok(())
            }
            None => Err(ShapeError::ShapeNotFound { id: id.to_string() }),
        }
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let removed = self.shapes.remove(&id)?;
        self.draw_order.retain(|&other| other != id);
        Some(removed)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.draw_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_order.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.draw_order.clear();
    }

    pub fn draw_order(&self) -> &[ShapeId] {
        &self.draw_order
    }

    /// Shapes bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> + '_ {
        self.draw_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Shapes top to bottom, the order hit-testing wants.
    pub fn iter_topmost_first(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.iter().rev()
    }
}
