//! Angle-constrained triangle reconstruction.
//!
//! Editing one interior angle has to move the vertices so that angle takes
//! the requested value while the triangle stays where it was on the canvas.
//! The solver builds two candidates:
//!
//! 1. **Rotation**: keep the first edge from the edited vertex fixed and swing
//!    the second edge (keeping its length and winding) until it subtends the
//!    target angle.
//! 2. **Law of Sines**: rebuild the triangle from a full target angle set,
//!    where the other two angles share the remaining budget in proportion to
//!    their current sizes.
//!
//! The rotation candidate is used unless it is degenerate or lands more than
//! [`ANGLE_VERIFY_TOLERANCE_DEG`] off target; otherwise whichever candidate is
//! closer to the target wins. Both are re-centred on the original centroid.

use shapekit_core::constants::{
    ANGLE_VERIFY_TOLERANCE_DEG, GEOMETRY_EPSILON, MAX_TRIANGLE_ANGLE_DEG, MIN_DIMENSION_PX,
    MIN_TRIANGLE_ANGLE_DEG,
};

use crate::geometry::{is_degenerate_triangle, triangle_angles, triangle_sides};
use crate::model::Point;

/// Which reconstruction produced the accepted points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconstructionStrategy {
    Rotation,
    LawOfSines,
}

/// Outcome of an angle edit.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleEdit {
    pub points: [Point; 3],
    /// Target after rounding and clamping.
    pub target: f64,
    /// Angle measured at the edited vertex of `points`.
    pub achieved: f64,
    pub strategy: ReconstructionStrategy,
}

/// Rounds the requested angle to a whole degree inside [1, 179].
pub fn clamp_target_angle(angle_deg: f64) -> f64 {
    if !angle_deg.is_finite() {
        tracing::warn!("Non-finite triangle angle {}, using 60", angle_deg);
        return 60.0;
    }
    angle_deg
        .round()
        .clamp(MIN_TRIANGLE_ANGLE_DEG, MAX_TRIANGLE_ANGLE_DEG)
}

/// Splits `180 - target` between the two other vertices in proportion to
/// their current angles. The second angle takes the exact remainder.
pub fn distribute_remaining(target: f64, current_b: f64, current_c: f64) -> (f64, f64) {
    let remaining = 180.0 - target;
    let total = current_b + current_c;
    let share = if current_b > GEOMETRY_EPSILON && current_c > GEOMETRY_EPSILON {
        current_b / total
    } else {
        0.5
    };
    let b = remaining * share;
    (b, remaining - b)
}

/// Sets the interior angle at `points[vertex]` to `target_deg`.
pub fn solve_angle_edit(points: &[Point; 3], vertex: usize, target_deg: f64) -> AngleEdit {
    let vertex = vertex % 3;
    let target = clamp_target_angle(target_deg);
    let centroid = Point::centroid(points);

    let error_of = |candidate: &[Point; 3]| (triangle_angles(candidate)[vertex] - target).abs();

    let primary = rotate_second_edge(points, vertex, target)
        .map(|p| recenter(p, centroid))
        .filter(|p| !is_degenerate_triangle(p));

    if let Some(candidate) = primary {
        let error = error_of(&candidate);
        if error <= ANGLE_VERIFY_TOLERANCE_DEG {
            return AngleEdit {
                achieved: triangle_angles(&candidate)[vertex],
                points: candidate,
                target,
                strategy: ReconstructionStrategy::Rotation,
            };
        }
        tracing::debug!(
            "Rotation reconstruction missed angle target by {:.2} deg, trying Law of Sines",
            error
        );
    }

    let current = triangle_angles(points);
    let (angle_b, angle_c) =
        distribute_remaining(target, current[(vertex + 1) % 3], current[(vertex + 2) % 3]);
    let fallback = recenter(
        law_of_sines_rebuild(points, vertex, target, angle_b, angle_c),
        centroid,
    );

    let (points, strategy) = match primary {
        Some(candidate) if error_of(&candidate) <= error_of(&fallback) => {
            (candidate, ReconstructionStrategy::Rotation)
        }
        _ => (fallback, ReconstructionStrategy::LawOfSines),
    };

    AngleEdit {
        achieved: triangle_angles(&points)[vertex],
        points,
        target,
        strategy,
    }
}

/// Keeps A->B and rotates A->C about A until the angle at A equals `target`.
fn rotate_second_edge(points: &[Point; 3], vertex: usize, target: f64) -> Option<[Point; 3]> {
    let (ia, ib, ic) = (vertex, (vertex + 1) % 3, (vertex + 2) % 3);
    let a = points[ia];
    let ab = points[ib] - a;
    let ac = points[ic] - a;
    let len_ab = ab.length();
    let len_ac = ac.length();
    if len_ab <= GEOMETRY_EPSILON || len_ac <= GEOMETRY_EPSILON {
        return None;
    }

    let winding = if ab.cross(&ac) >= 0.0 { 1.0 } else { -1.0 };
    let new_ac = (ab * (1.0 / len_ab)).rotate_about(&Point::ORIGIN, winding * target) * len_ac;

    let mut rebuilt = *points;
    rebuilt[ic] = a + new_ac;
    Some(rebuilt)
}

/// Builds a triangle with angles (A, B, C) = (`target`, `angle_b`, `angle_c`)
/// at (`vertex`, `vertex + 1`, `vertex + 2`), keeping |AB| and the direction
/// and winding of the original A->B edge.
fn law_of_sines_rebuild(
    points: &[Point; 3],
    vertex: usize,
    target: f64,
    angle_b: f64,
    angle_c: f64,
) -> [Point; 3] {
    let (ia, ib, ic) = (vertex, (vertex + 1) % 3, (vertex + 2) % 3);
    let a = points[ia];
    let ab = points[ib] - a;
    let ac = points[ic] - a;

    let side_c = {
        let len = ab.length();
        if len > GEOMETRY_EPSILON {
            len
        } else {
            let longest = triangle_sides(points).iter().cloned().fold(0.0, f64::max);
            longest.max(MIN_DIMENSION_PX)
        }
    };

    let sin_a = target.to_radians().sin();
    let sin_b = angle_b.to_radians().sin();
    let sin_c = angle_c.to_radians().sin().max(GEOMETRY_EPSILON);
    let k = side_c / sin_c;
    let side_a = k * sin_a; // |BC|
    let side_b = k * sin_b; // |AC|

    // A at the origin, B on the x-axis, C from the Law of Cosines at A.
    let cos_at_a = if side_b > GEOMETRY_EPSILON {
        ((side_b * side_b + side_c * side_c - side_a * side_a) / (2.0 * side_b * side_c))
            .clamp(-1.0, 1.0)
    } else {
        target.to_radians().cos()
    };
    let sin_at_a = (1.0 - cos_at_a * cos_at_a).max(0.0).sqrt();

    let winding = if ab.cross(&ac) >= 0.0 { 1.0 } else { -1.0 };
    let local_b = Point::new(side_c, 0.0);
    let local_c = Point::new(side_b * cos_at_a, winding * side_b * sin_at_a);

    let heading = if ab.length() > GEOMETRY_EPSILON {
        ab.y.atan2(ab.x).to_degrees()
    } else {
        0.0
    };

    let mut rebuilt = [Point::ORIGIN; 3];
    rebuilt[ia] = a;
    rebuilt[ib] = a + local_b.rotate_about(&Point::ORIGIN, heading);
    rebuilt[ic] = a + local_c.rotate_about(&Point::ORIGIN, heading);
    rebuilt
}

fn recenter(points: [Point; 3], centroid: Point) -> [Point; 3] {
    let offset = centroid - Point::centroid(&points);
    points.map(|p| p + offset)
}
