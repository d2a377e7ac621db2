//! Snapping grid.

use serde::{Deserialize, Serialize};

use crate::model::Point;

/// Canvas grid: major cells of `cell_size` pixels from `origin`, each split
/// into `subdivisions` minor cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    pub origin: Point,
    pub cell_size: f64,
    pub subdivisions: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            origin: Point::ORIGIN,
            cell_size: 20.0,
            subdivisions: 4,
        }
    }
}

impl Grid {
    pub fn new(origin: Point, cell_size: f64, subdivisions: u32) -> Self {
        Self {
            origin,
            cell_size,
            subdivisions,
        }
    }

    /// Size of one minor cell, used when snapping dimensions.
    pub fn small_unit(&self) -> f64 {
        self.cell_size / f64::from(self.subdivisions.max(1))
    }

    /// Snaps to the nearest major grid intersection.
    pub fn snap(&self, point: Point) -> Point {
        snap_to_grid(point, self.origin, self.cell_size)
    }

    /// Rounds a length to a whole number of minor cells, never below one cell.
    pub fn snap_length(&self, length: f64) -> f64 {
        let unit = self.small_unit();
        if !(unit.is_finite() && unit > 0.0) {
            return length;
        }
        ((length / unit).round() * unit).max(unit)
    }
}

/// Rounds `point` to the nearest grid intersection. A non-positive cell size
/// leaves the point untouched.
pub fn snap_to_grid(point: Point, origin: Point, cell_size: f64) -> Point {
    if !(cell_size.is_finite() && cell_size > 0.0) {
        return point;
    }
    Point::new(
        origin.x + ((point.x - origin.x) / cell_size).round() * cell_size,
        origin.y + ((point.y - origin.y) / cell_size).round() * cell_size,
    )
}
