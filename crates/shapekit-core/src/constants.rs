//! Numeric constants shared across the shape engine.

/// Smallest linear dimension (px) a shape may take after clamping.
pub const MIN_DIMENSION_PX: f64 = 1.0;

/// Below this magnitude a length, area or denominator counts as zero.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Allowed drift of a triangle's angle sum away from 180 degrees.
pub const ANGLE_SUM_TOLERANCE_DEG: f64 = 0.5;

/// Angle edits further than this from the target trigger the fallback solver.
pub const ANGLE_VERIFY_TOLERANCE_DEG: f64 = 5.0;

/// Smallest and largest angle a triangle angle edit may request.
pub const MIN_TRIANGLE_ANGLE_DEG: f64 = 1.0;
pub const MAX_TRIANGLE_ANGLE_DEG: f64 = 179.0;

/// Extra pixels added to half the stroke width when hit-testing lines.
pub const LINE_HIT_PADDING_PX: f64 = 2.0;

/// Minimum hit radius for lines so thin strokes stay clickable.
pub const LINE_HIT_MIN_RADIUS_PX: f64 = 5.0;
