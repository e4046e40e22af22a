//! Swimming in a pool.
//!
//! Distance still comes from the stroke count, but mean speed is taken from
//! the pool geometry: `length_pool * count_pool` meters over the session.

use super::{Calculator, M_IN_KM, Measurement, check_arity, count_reading};
use crate::error::Result;

/// Calorie formula coefficients for swimming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingCoefficients {
    /// Shift added to the mean speed.
    pub speed_shift: f64,
    /// Multiplier applied to the shifted speed.
    pub duration_multiplier: f64,
}

/// Swimming workout: `[action, duration, weight, length_pool, count_pool]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    measurement: Measurement,
    /// Pool length in meters.
    length_pool: f64,
    /// Number of pool lengths swum.
    count_pool: u32,
}

impl Swimming {
    /// Label used in the rendered summary.
    pub const TRAINING_TYPE: &'static str = "Swimming";
    /// Number of readings in a swimming package.
    pub const READINGS: usize = Measurement::READINGS + 2;
    /// Distance covered by one stroke, in meters.
    pub const LEN_STEP: f64 = 1.38;
    /// Calorie formula coefficients.
    pub const COEFFICIENTS: SwimmingCoefficients = SwimmingCoefficients {
        speed_shift: 1.1,
        duration_multiplier: 2.0,
    };

    /// Creates a swimming workout.
    pub fn new(measurement: Measurement, length_pool: f64, count_pool: u32) -> Self {
        Self {
            measurement,
            length_pool,
            count_pool,
        }
    }

    /// Pool length in meters.
    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    /// Number of pool lengths swum.
    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }

    /// Binds positional readings `[action, duration, weight, length_pool, count_pool]`.
    ///
    /// ## Errors
    /// [`Error::ArityMismatch`](crate::Error::ArityMismatch) on a wrong reading
    /// count, [`Error::InvalidReading`](crate::Error::InvalidReading) when the
    /// stroke or lap count is not a whole number.
    pub fn from_readings(readings: &[f64]) -> Result<Self> {
        check_arity(Self::TRAINING_TYPE, Self::READINGS, readings)?;
        Ok(Self::new(
            Measurement::from_leading(readings)?,
            readings[3],
            count_reading("count_pool", readings[4])?,
        ))
    }
}

impl Calculator for Swimming {
    fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    fn training_type(&self) -> &'static str {
        Self::TRAINING_TYPE
    }

    fn step_length(&self) -> f64 {
        Self::LEN_STEP
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.measurement.duration
    }

    fn spent_calories(&self) -> Result<f64> {
        let k = Self::COEFFICIENTS;
        let m = &self.measurement;
        Ok((self.mean_speed_kmh() + k.speed_shift) * k.duration_multiplier * m.weight * m.duration)
    }
}
