//! Sports walking.

use super::{Calculator, MIN_IN_H, Measurement, check_arity};
use crate::error::Result;

/// Calorie formula coefficients for sports walking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingCoefficients {
    /// Multiplier applied to body weight.
    pub weight_multiplier: f64,
    /// Multiplier applied to the speed-squared over height term.
    pub height_multiplier: f64,
    /// Conversion factor from km/h to m/s.
    pub kmh_to_ms: f64,
    /// Centimeters in a meter.
    pub cm_in_m: f64,
}

/// Sports walking workout: `[action, duration, weight, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    measurement: Measurement,
    /// Walker height in centimeters.
    height: f64,
}

impl SportsWalking {
    /// Label used in the rendered summary.
    pub const TRAINING_TYPE: &'static str = "SportsWalking";
    /// Number of readings in a walking package.
    pub const READINGS: usize = Measurement::READINGS + 1;
    /// Calorie formula coefficients.
    pub const COEFFICIENTS: WalkingCoefficients = WalkingCoefficients {
        weight_multiplier: 0.035,
        height_multiplier: 0.029,
        kmh_to_ms: 0.278,
        cm_in_m: 100.0,
    };

    /// Creates a walking workout for a walker `height` centimeters tall.
    pub fn new(measurement: Measurement, height: f64) -> Self {
        Self {
            measurement,
            height,
        }
    }

    /// Walker height in centimeters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Binds positional readings `[action, duration, weight, height]`.
    ///
    /// ## Errors
    /// [`Error::ArityMismatch`](crate::Error::ArityMismatch) on a wrong reading
    /// count, [`Error::InvalidReading`](crate::Error::InvalidReading) when the
    /// action count is not a whole number.
    pub fn from_readings(readings: &[f64]) -> Result<Self> {
        check_arity(Self::TRAINING_TYPE, Self::READINGS, readings)?;
        Ok(Self::new(Measurement::from_leading(readings)?, readings[3]))
    }
}

impl Calculator for SportsWalking {
    fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    fn training_type(&self) -> &'static str {
        Self::TRAINING_TYPE
    }

    fn spent_calories(&self) -> Result<f64> {
        let k = Self::COEFFICIENTS;
        let m = &self.measurement;
        let speed_ms = self.mean_speed_kmh() * k.kmh_to_ms;
        Ok((k.weight_multiplier * m.weight
            + (speed_ms.powi(2) / (self.height / k.cm_in_m)) * k.height_multiplier * m.weight)
            * (m.duration * MIN_IN_H))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_walking_reference_session() {
        let walk = SportsWalking::from_readings(&[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!((walk.distance_km() - 5.85).abs() < 1e-12);
        assert!((walk.mean_speed_kmh() - 5.85).abs() < 1e-12);
        assert!((walk.height() - 180.0).abs() < f64::EPSILON);

        let speed_ms: f64 = 5.85 * 0.278;
        let expected = (0.035 * 75.0 + (speed_ms * speed_ms / 1.8) * 0.029 * 75.0) * 60.0;
        let calories = walk.spent_calories().unwrap();
        assert!((calories - expected).abs() < 1e-9);
        assert!((calories - 349.252).abs() < 1e-3);
    }

    #[test]
    fn test_walking_needs_height() {
        assert_eq!(
            SportsWalking::from_readings(&[9000.0, 1.0, 75.0]),
            Err(Error::ArityMismatch {
                kind: "SportsWalking",
                expected: 4,
                actual: 3
            })
        );
    }
}
