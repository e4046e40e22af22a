//! Running.

use super::{Calculator, M_IN_KM, MIN_IN_H, Measurement, check_arity};
use crate::error::Result;

/// Calorie formula coefficients for running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningCoefficients {
    /// Multiplier applied to the mean speed.
    pub speed_multiplier: f64,
    /// Shift added to the scaled mean speed.
    pub speed_shift: f64,
}

/// Running workout: `[action, duration, weight]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    measurement: Measurement,
}

impl Running {
    /// Label used in the rendered summary.
    pub const TRAINING_TYPE: &'static str = "Running";
    /// Number of readings in a running package.
    pub const READINGS: usize = Measurement::READINGS;
    /// Calorie formula coefficients.
    pub const COEFFICIENTS: RunningCoefficients = RunningCoefficients {
        speed_multiplier: 18.0,
        speed_shift: 1.79,
    };

    /// Creates a running workout.
    pub fn new(measurement: Measurement) -> Self {
        Self { measurement }
    }

    /// Binds positional readings `[action, duration, weight]`.
    ///
    /// ## Errors
    /// [`Error::ArityMismatch`](crate::Error::ArityMismatch) on a wrong reading
    /// count, [`Error::InvalidReading`](crate::Error::InvalidReading) when the
    /// action count is not a whole number.
    pub fn from_readings(readings: &[f64]) -> Result<Self> {
        check_arity(Self::TRAINING_TYPE, Self::READINGS, readings)?;
        Ok(Self::new(Measurement::from_leading(readings)?))
    }
}

impl Calculator for Running {
    fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    fn training_type(&self) -> &'static str {
        Self::TRAINING_TYPE
    }

    fn spent_calories(&self) -> Result<f64> {
        let k = Self::COEFFICIENTS;
        let m = &self.measurement;
        Ok(
            (k.speed_multiplier * self.mean_speed_kmh() + k.speed_shift) * m.weight / M_IN_KM
                * (m.duration * MIN_IN_H),
        )
    }
}
