//! Workout Summary
//!
//! Fitness tracker summaries computed from raw sensor packages. A package is
//! a short workout code plus positional readings; the library turns it into
//! distance, mean speed and spent calories and renders a fixed message line.
//!
//! # Overview
//!
//! ```text
//! ("RUN", [15000, 1, 75])
//!          │ read_package
//!   ┌──────▼──────┐
//!   │   Workout   │  Running | SportsWalking | Swimming
//!   └──────┬──────┘
//!          │ Calculator::summarize
//!   ┌──────▼──────┐
//!   │   Summary   │  Display → "Тип тренировки: Running; ..."
//!   └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`] - Error types for the calculation core
//! - [`training`] - The calculator contract and the workouts
//! - [`package`] - Dispatch from workout code to calculator
//! - [`summary`] - The rendered result
//! - [`config`] - Package sets for the command-line driver
//!
//! # Example
//!
//! ```
//! use workout_summary::{Calculator, read_package};
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let summary = workout.summarize()?;
//! assert_eq!(
//!     summary.to_string(),
//!     "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
//!      Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
//! );
//! # Ok::<(), workout_summary::Error>(())
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod package;
pub mod summary;
pub mod training;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use package::{SensorPackage, WorkoutKind, read_package};
pub use summary::Summary;
pub use training::{Calculator, Measurement, Workout};
