//! # ShapeKit
//!
//! An interactive geometric shape engine:
//! - Circles, rectangles, triangles and lines drawn, moved, resized and
//!   rotated with pointer gestures and keyboard nudges
//! - Live measurements in calibrated centimetres or inches
//! - Inverse measurement editing, including an angle-constrained triangle
//!   solver that keeps the interior angles summing to 180°
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Errors, measurement units, calibration, constants
//! 2. **shapekit-designer** - Shape model and services, measurement engine,
//!    canvas interaction state machine
//! 3. **shapekit-settings** - Configuration files and persistence
//! 4. **shapekit** - Logging setup, gesture script replay and the binary

pub mod replay;

pub use shapekit_core as core;
pub use shapekit_designer as designer;
pub use shapekit_settings as settings;

pub use shapekit_core::{
    CalibrationProvider, FixedCalibration, MeasurementUnit, ShapeError, UnitScale,
};
pub use shapekit_designer::{
    Canvas, DesignerState, DrawingMode, InteractionOutcome, MeasurementKey, Measurements, Point,
    Shape, ShapeServiceFactory, ShapeType,
};
pub use shapekit_settings::{Config, SettingsManager, SettingsPersistence};

pub use replay::{ReplayReport, ReplayScript, ReplayStep, Replayer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging in the given format. Output goes to stderr so stdout
/// stays free for reports.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_thread_names(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
