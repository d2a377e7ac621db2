//! Error handling for ShapeKit
//!
//! Provides the shape error type shared by every layer of the shape engine:
//! unsupported types, unknown measurement keys or units, missing shapes.
//!
//! Invalid geometric input and unknown measurement keys coming from the UI are
//! *not* errors: the engine clamps or ignores them and logs a warning so a
//! gesture never aborts halfway. The variants here cover programming errors and
//! lookups that the caller must handle.

use thiserror::Error;

/// Shape error type
///
/// Represents failures resolving shape types, measurement keys, units or
/// shapes inside a collection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// No shape service is registered for the requested type
    #[error("Unsupported shape type: {shape_type}")]
    UnsupportedShapeType {
        /// The type name that could not be resolved.
        shape_type: String,
    },

    /// Measurement key is not known to any shape service
    #[error("Unknown measurement key: {key}")]
    UnknownMeasurementKey {
        /// The key that could not be parsed.
        key: String,
    },

    /// Measurement unit name could not be parsed
    #[error("Unknown measurement unit: {unit}")]
    UnknownUnit {
        /// The unit name that could not be parsed.
        unit: String,
    },

    /// No shape with the given id exists in the collection
    #[error("Shape not found: {id}")]
    ShapeNotFound {
        /// The id that was looked up.
        id: String,
    },
}
