//! # ShapeKit Core
//!
//! Core types and utilities shared by the ShapeKit crates:
//! the error taxonomy, measurement units with calibration, and the numeric
//! constants the shape engine uses for clamping and degeneracy guards.

pub mod constants;
pub mod error;
pub mod units;

pub use error::ShapeError;

pub use units::{
    format_measurement, CalibrationProvider, FixedCalibration, MeasurementUnit, UnitScale,
};
