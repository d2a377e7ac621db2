//! Closed-form geometry helpers shared by the shape services.
//!
//! All functions are pure and guard their divisions, so degenerate input
//! (zero-length sides, collinear points) produces finite values rather than
//! NaN or infinity.

use shapekit_core::constants::GEOMETRY_EPSILON;

use crate::model::Point;

/// Wraps an angle into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wraps an angle into (-180, 180].
pub fn normalize_signed_degrees(angle: f64) -> f64 {
    let wrapped = normalize_degrees(angle);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Side lengths |p0p1|, |p1p2|, |p2p0|.
pub fn triangle_sides(points: &[Point; 3]) -> [f64; 3] {
    [
        points[0].distance_to(&points[1]),
        points[1].distance_to(&points[2]),
        points[2].distance_to(&points[0]),
    ]
}

/// Signed area; positive when the points wind clockwise on a y-down canvas.
pub fn triangle_signed_area(points: &[Point; 3]) -> f64 {
    let ab = points[1] - points[0];
    let ac = points[2] - points[0];
    ab.cross(&ac) / 2.0
}

pub fn triangle_area(points: &[Point; 3]) -> f64 {
    triangle_signed_area(points).abs()
}

/// True when the triangle has (numerically) no area.
pub fn is_degenerate_triangle(points: &[Point; 3]) -> bool {
    let sides = triangle_sides(points);
    let longest = sides.iter().cloned().fold(0.0, f64::max);
    longest <= GEOMETRY_EPSILON || triangle_area(points) <= GEOMETRY_EPSILON * longest.max(1.0)
}

/// Interior angle in degrees at the vertex between sides `adjacent_a` and
/// `adjacent_b`, opposite `opposite`, via the Law of Cosines.
///
/// Returns 0 when an adjacent side has no length.
pub fn law_of_cosines_angle(adjacent_a: f64, adjacent_b: f64, opposite: f64) -> f64 {
    let denom = 2.0 * adjacent_a * adjacent_b;
    if denom <= GEOMETRY_EPSILON {
        return 0.0;
    }
    let cos = (adjacent_a * adjacent_a + adjacent_b * adjacent_b - opposite * opposite) / denom;
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Interior angles in degrees at p0, p1 and p2.
pub fn triangle_angles(points: &[Point; 3]) -> [f64; 3] {
    let [s1, s2, s3] = triangle_sides(points);
    [
        law_of_cosines_angle(s1, s3, s2),
        law_of_cosines_angle(s1, s2, s3),
        law_of_cosines_angle(s2, s3, s1),
    ]
}

/// Barycentric coordinates of `p` against the triangle, `None` when degenerate.
pub fn barycentric(p: Point, points: &[Point; 3]) -> Option<(f64, f64, f64)> {
    let [a, b, c] = *points;
    let denom = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
    if denom.abs() <= GEOMETRY_EPSILON {
        return None;
    }
    let u = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / denom;
    let v = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / denom;
    Some((u, v, 1.0 - u - v))
}

/// Shortest distance from `p` to the segment `a`-`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let l2 = ab.dot(&ab);
    if l2 <= GEOMETRY_EPSILON {
        return p.distance_to(&a);
    }
    let t = ((p - a).dot(&ab) / l2).clamp(0.0, 1.0);
    let proj = a + ab * t;
    p.distance_to(&proj)
}
