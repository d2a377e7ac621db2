//! Pointer and keyboard handling: turns raw events into create, move,
//! resize and rotate operations.
//!
//! Every in-gesture update is computed from the shape as it was when the
//! gesture started, so rounding never accumulates across pointer moves.

use shapekit_core::constants::GEOMETRY_EPSILON;

use super::{Canvas, DrawingMode, Gesture, InteractionOutcome, Key, Modifiers, PointerEvent};
use crate::model::{DesignTriangle, Point, Shape, ShapeId, ShapeType};
use crate::services::{CreateShapeParams, ShapeServiceFactory};

/// Point of a shape that lands on the grid when moved with the precision
/// modifier: rectangle top-left, the left/top tangents of a circle, the
/// centre of a triangle or line.
pub fn snap_anchor(shape: &Shape) -> Point {
    match shape {
        Shape::Rectangle(r) => r.position,
        Shape::Circle(c) => c.center.translate(-c.radius, -c.radius),
        Shape::Triangle(t) => t.position(),
        Shape::Line(l) => l.position(),
    }
}

/// Dimension kept on whole grid units while resizing with the precision
/// modifier.
pub fn characteristic_size(shape: &Shape) -> f64 {
    match shape {
        Shape::Circle(c) => 2.0 * c.radius,
        Shape::Rectangle(r) => r.width,
        Shape::Triangle(t) => t.sides().iter().cloned().fold(0.0, f64::max),
        Shape::Line(l) => l.length(),
    }
}

impl Canvas {
    pub fn pointer_down(&mut self, event: PointerEvent) -> InteractionOutcome {
        let point = event.position;
        match self.mode() {
            DrawingMode::Select | DrawingMode::Move => match self.get_shape_at_position(point) {
                Some(id) => {
                    let changed = self.selected_id() != Some(id);
                    self.select(id);
                    if let Some(original) = self.get_shape(id).cloned() {
                        self.set_gesture(Gesture::Dragging {
                            target: id,
                            start: point,
                            original,
                            moved: false,
                        });
                    }
                    selection_outcome(changed, Some(id))
                }
                None if self.mode() == DrawingMode::Select => {
                    let changed = self.selected_id().is_some();
                    self.deselect();
                    selection_outcome(changed, None)
                }
                None => InteractionOutcome::None,
            },
            DrawingMode::Create(shape_type) => {
                let start = self.maybe_snap(point, event.modifiers);
                self.set_gesture(Gesture::Drawing {
                    shape_type,
                    start,
                    current: start,
                });
                InteractionOutcome::None
            }
            mode @ (DrawingMode::Resize | DrawingMode::Rotate) => {
                let hit = self.get_shape_at_position(point);
                let changed = hit.is_some() && hit != self.selected_id();
                if let Some(id) = hit {
                    self.select(id);
                }
                let Some(target) = hit.or(self.selected_id()) else {
                    return InteractionOutcome::None;
                };
                let Some(original) = self.get_shape(target).cloned() else {
                    return InteractionOutcome::None;
                };
                let gesture = if mode == DrawingMode::Resize {
                    Gesture::Resizing {
                        target,
                        start: point,
                        original,
                    }
                } else {
                    Gesture::Rotating {
                        target,
                        start: point,
                        original,
                    }
                };
                tracing::debug!("Starting {} on {}", mode, target);
                self.set_gesture(gesture);
                selection_outcome(changed, hit)
            }
        }
    }

    pub fn pointer_move(&mut self, event: PointerEvent) -> InteractionOutcome {
        let point = event.position;
        if !point.is_finite() {
            tracing::debug!("Ignoring non-finite pointer position {:?}", point);
            return InteractionOutcome::None;
        }
        match self.gesture().clone() {
            Gesture::Idle => InteractionOutcome::None,
            Gesture::Drawing {
                shape_type, start, ..
            } => {
                let current = self.maybe_snap(point, event.modifiers);
                self.set_gesture(Gesture::Drawing {
                    shape_type,
                    start,
                    current,
                });
                InteractionOutcome::None
            }
            Gesture::Dragging {
                target,
                start,
                original,
                moved,
            } => {
                let delta = point - start;
                if !moved && delta.length() <= self.config().min_drag_distance {
                    return InteractionOutcome::None;
                }
                let delta = if event.modifiers.precision {
                    let anchor = snap_anchor(&original);
                    self.grid().snap(anchor + delta) - anchor
                } else {
                    delta
                };
                let service = ShapeServiceFactory::for_shape(&original);
                let updated = service.move_shape(&original, delta.x, delta.y);
                self.set_gesture(Gesture::Dragging {
                    target,
                    start,
                    original,
                    moved: true,
                });
                self.commit_update(updated)
            }
            Gesture::Resizing {
                start, original, ..
            } => {
                let center = original.center();
                let start_distance = center.distance_to(&start);
                if start_distance <= GEOMETRY_EPSILON {
                    return InteractionOutcome::None;
                }
                let mut factor = center.distance_to(&point) / start_distance;
                if event.modifiers.precision {
                    let size = characteristic_size(&original);
                    if size > GEOMETRY_EPSILON {
                        factor = self.grid().snap_length(size * factor) / size;
                    }
                }
                if factor <= GEOMETRY_EPSILON {
                    return InteractionOutcome::None;
                }
                let service = ShapeServiceFactory::for_shape(&original);
                let updated = service.resize_shape(&original, factor);
                self.commit_update(updated)
            }
            Gesture::Rotating {
                start, original, ..
            } => {
                let config = self.config();
                let mut delta = (point.x - start.x) * config.rotation_sensitivity;
                if event.modifiers.precision && config.rotation_snap_degrees > 0.0 {
                    let step = config.rotation_snap_degrees;
                    let current = original.rotation();
                    delta = ((current + delta) / step).round() * step - current;
                }
                let updated =
                    ShapeServiceFactory::for_shape(&original).rotate_shape(&original, delta, None);
                self.commit_update(updated)
            }
        }
    }

    pub fn pointer_up(&mut self, event: PointerEvent) -> InteractionOutcome {
        self.finish_gesture(event)
    }

    /// Leaving the canvas finishes the gesture exactly like releasing.
    pub fn pointer_leave(&mut self, event: PointerEvent) -> InteractionOutcome {
        self.finish_gesture(event)
    }

    pub fn key_down(&mut self, key: Key, modifiers: Modifiers) -> InteractionOutcome {
        let Some(shape) = self.selected_shape().cloned() else {
            return InteractionOutcome::None;
        };
        let service = ShapeServiceFactory::for_shape(&shape);
        let config = *self.config();
        let step = if modifiers.large_step {
            config.nudge_step_large
        } else {
            config.nudge_step
        };

        let updated = match key {
            Key::ArrowUp => service.move_shape(&shape, 0.0, -step),
            Key::ArrowDown => service.move_shape(&shape, 0.0, step),
            Key::ArrowLeft => service.move_shape(&shape, -step, 0.0),
            Key::ArrowRight => service.move_shape(&shape, step, 0.0),
            Key::Plus => {
                let resized = service.resize_shape(&shape, 1.0 + config.scale_step);
                return self.commit_update(resized);
            }
            Key::Minus => {
                let resized = service.resize_shape(&shape, 1.0 - config.scale_step);
                return self.commit_update(resized);
            }
            Key::Delete => {
                let id = shape.id();
                self.delete_shape(id);
                tracing::debug!("Deleted {} {}", shape.shape_type(), id);
                return InteractionOutcome::ShapeDeleted(id);
            }
            Key::Other => return InteractionOutcome::None,
        };
        self.commit_update(updated)
    }

    fn finish_gesture(&mut self, event: PointerEvent) -> InteractionOutcome {
        match self.take_gesture() {
            Gesture::Drawing {
                shape_type,
                start,
                current,
            } => {
                let current = if event.position.is_finite() {
                    self.maybe_snap(event.position, event.modifiers)
                } else {
                    current
                };
                if start.distance_to(&current) <= self.config().min_create_distance {
                    tracing::debug!("Draw gesture too short, no {} created", shape_type);
                    return InteractionOutcome::None;
                }
                let shape = self.build_drawn_shape(shape_type, start, current);
                let id = self.add_shape(shape);
                self.set_mode(DrawingMode::Select);
                self.select(id);
                tracing::debug!("Created {} {}", shape_type, id);
                InteractionOutcome::ShapeCreated(id)
            }
            Gesture::Idle => InteractionOutcome::None,
            gesture => {
                tracing::debug!("Finished {} gesture", gesture.name());
                InteractionOutcome::None
            }
        }
    }

    fn build_drawn_shape(&self, shape_type: ShapeType, start: Point, current: Point) -> Shape {
        let x = start.x.min(current.x);
        let y = start.y.min(current.y);
        let width = (current.x - start.x).abs();
        let height = (current.y - start.y).abs();

        let params = match shape_type {
            ShapeType::Circle => CreateShapeParams::circle(start, start.distance_to(&current)),
            ShapeType::Rectangle => CreateShapeParams::rectangle(x, y, width, height),
            ShapeType::Triangle => {
                let template = DesignTriangle::from_bounds(x, y, width, height);
                CreateShapeParams::triangle(*template.points())
            }
            ShapeType::Line => CreateShapeParams::line(start, current),
        };
        ShapeServiceFactory::service(shape_type)
            .create_shape(&params.with_style(self.default_style().clone()))
    }

    fn maybe_snap(&self, point: Point, modifiers: Modifiers) -> Point {
        if modifiers.precision {
            self.grid().snap(point)
        } else {
            point
        }
    }

    fn commit_update(&mut self, shape: Shape) -> InteractionOutcome {
        let id = shape.id();
        match self.replace_shape(shape) {
            Ok(()) => InteractionOutcome::ShapeUpdated(id),
            Err(e) => {
                tracing::warn!("Dropping update: {}", e);
                InteractionOutcome::None
            }
        }
    }
}

fn selection_outcome(changed: bool, id: Option<ShapeId>) -> InteractionOutcome {
    if changed {
        InteractionOutcome::SelectionChanged(id)
    } else {
        InteractionOutcome::None
    }
}
