//! Error types for workout-summary.
//!
//! A single error enum covers the calculation core: dispatching a sensor
//! package, binding its readings and computing calories.

use thiserror::Error;

/// Errors produced while reading a sensor package or computing a summary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The workout code is not one of `SWM`, `RUN`, `WLK`.
    #[error("unknown training type: \"{0}\"")]
    UnknownWorkoutType(String),

    /// The package carries the wrong number of readings for its workout.
    #[error("{kind} expects {expected} readings, got {actual}")]
    ArityMismatch {
        /// Label of the resolved workout.
        kind: &'static str,
        /// Number of readings the workout is built from.
        expected: usize,
        /// Number of readings in the package.
        actual: usize,
    },

    /// A count reading (steps, strokes, laps) is not a non-negative whole number.
    #[error("invalid reading for {field}: {value}")]
    InvalidReading {
        /// Name of the field the reading binds to.
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Calories were requested from a training without a calorie formula.
    #[error("calorie formula not implemented for {training_type}")]
    NotImplemented {
        /// Label of the training the formula is missing on.
        training_type: &'static str,
    },
}

/// A specialized Result type for workout-summary operations.
pub type Result<T> = std::result::Result<T, Error>;
