//! Workout calculators.
//!
//! This module holds the calculation core: the [`Calculator`] contract, the
//! common [`Measurement`] record and the closed set of workouts built on it.
//!
//! # Architecture
//!
//! - [`Measurement`] carries the readings every workout shares and is itself
//!   a calculator with the default distance and speed formulas but no calorie
//!   formula.
//! - [`Running`], [`SportsWalking`] and [`Swimming`] each wrap a measurement,
//!   add their own readings and supply a calorie formula from a constant
//!   table. Swimming also replaces the step length and the speed formula.
//! - [`Workout`] is the sum type handed out by
//!   [`read_package`](crate::package::read_package).

pub mod running;
pub mod swimming;
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::error::{Error, Result};
use crate::summary::Summary;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Default distance covered by one action (step), in meters.
pub const LEN_STEP: f64 = 0.65;

/// Distance, speed and calorie computation over one workout's readings.
///
/// Every method is a pure function of the readings held by the implementor.
pub trait Calculator {
    /// The readings shared by all workouts.
    fn measurement(&self) -> &Measurement;

    /// Label used in the rendered summary.
    fn training_type(&self) -> &'static str;

    /// Distance covered by one action, in meters.
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers.
    fn distance_km(&self) -> f64 {
        f64::from(self.measurement().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed over the whole session, in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.measurement().duration
    }

    /// Spent calories in kcal.
    ///
    /// ## Errors
    /// Returns [`Error::NotImplemented`] unless the workout supplies a formula.
    fn spent_calories(&self) -> Result<f64> {
        Err(Error::NotImplemented {
            training_type: self.training_type(),
        })
    }

    /// Builds the summary of the workout.
    ///
    /// ## Errors
    /// Propagates the error of [`Calculator::spent_calories`].
    fn summarize(&self) -> Result<Summary> {
        Ok(Summary {
            training_type: self.training_type(),
            duration: self.measurement().duration,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories()?,
        })
    }
}

/// Raw readings shared by every workout.
///
/// `duration` must be positive: speeds divide by it. It is not checked, a
/// zero duration produces non-finite speeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Number of actions (steps or strokes).
    pub action: u32,
    /// Duration in hours.
    pub duration: f64,
    /// Body weight in kilograms.
    pub weight: f64,
}

impl Measurement {
    /// Number of readings a measurement is built from.
    pub const READINGS: usize = 3;

    /// Label of a training with no concrete workout.
    pub const TRAINING_TYPE: &'static str = "Training";

    /// Creates a measurement.
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    /// Binds the leading readings `[action, duration, weight]`.
    ///
    /// Callers check the package arity first; this only needs the first three.
    pub(crate) fn from_leading(readings: &[f64]) -> Result<Self> {
        Ok(Self::new(
            count_reading("action", readings[0])?,
            readings[1],
            readings[2],
        ))
    }
}

impl Calculator for Measurement {
    fn measurement(&self) -> &Measurement {
        self
    }

    fn training_type(&self) -> &'static str {
        Self::TRAINING_TYPE
    }
}

/// Checks that a package carries exactly `expected` readings.
pub(crate) fn check_arity(kind: &'static str, expected: usize, readings: &[f64]) -> Result<()> {
    if readings.len() == expected {
        Ok(())
    } else {
        Err(Error::ArityMismatch {
            kind,
            expected,
            actual: readings.len(),
        })
    }
}

/// Converts a count reading to a whole number.
pub(crate) fn count_reading(field: &'static str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        // Range and integrality are checked above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = value as u32;
        Ok(count)
    } else {
        Err(Error::InvalidReading { field, value })
    }
}

/// One workout of the closed set the tracker knows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    /// Running.
    Running(Running),
    /// Sports walking.
    SportsWalking(SportsWalking),
    /// Swimming in a pool.
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Calculator {
        match self {
            Self::Running(w) => w,
            Self::SportsWalking(w) => w,
            Self::Swimming(w) => w,
        }
    }
}

impl Calculator for Workout {
    fn measurement(&self) -> &Measurement {
        self.inner().measurement()
    }

    fn training_type(&self) -> &'static str {
        self.inner().training_type()
    }

    fn step_length(&self) -> f64 {
        self.inner().step_length()
    }

    fn distance_km(&self) -> f64 {
        self.inner().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.inner().mean_speed_kmh()
    }

    fn spent_calories(&self) -> Result<f64> {
        self.inner().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Self::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Self::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Self::Swimming(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_distance_and_speed() {
        let m = Measurement::new(15000, 1.5, 75.0);
        assert!((m.distance_km() - 9.75).abs() < 1e-12);
        assert!((m.mean_speed_kmh() - 6.5).abs() < 1e-12);
    }

    #[test]
    fn test_measurement_calories_not_implemented() {
        let m = Measurement::new(100, 1.0, 70.0);
        assert_eq!(
            m.spent_calories(),
            Err(Error::NotImplemented {
                training_type: "Training"
            })
        );
        assert!(matches!(m.summarize(), Err(Error::NotImplemented { .. })));
    }

    #[test]
    fn test_check_arity() {
        assert!(check_arity("Running", 3, &[1.0, 1.0, 1.0]).is_ok());
        assert_eq!(
            check_arity("Running", 3, &[1.0, 1.0]),
            Err(Error::ArityMismatch {
                kind: "Running",
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_count_reading() {
        assert_eq!(count_reading("action", 720.0), Ok(720));
        assert_eq!(count_reading("action", 0.0), Ok(0));
        for bad in [-1.0, 1.5, f64::NAN, f64::INFINITY, 5e9] {
            assert!(matches!(
                count_reading("action", bad),
                Err(Error::InvalidReading {
                    field: "action",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_workout_delegates_to_variant() {
        let workout = Workout::from(Swimming::new(Measurement::new(720, 1.0, 80.0), 25.0, 40));
        assert_eq!(workout.training_type(), "Swimming");
        assert!((workout.step_length() - 1.38).abs() < 1e-12);
        assert!((workout.mean_speed_kmh() - 1.0).abs() < 1e-12);
    }
}
