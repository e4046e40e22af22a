//! Sensor package dispatch.
//!
//! A sensor package is a short workout code plus the positional readings the
//! tracker recorded. [`read_package`] resolves the code to a [`WorkoutKind`]
//! and binds the readings to the matching calculator.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::trace;

use crate::error::{Error, Result};
use crate::training::{Running, SportsWalking, Swimming, Workout};

/// Workout codes sent by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    /// `SWM`
    Swimming,
    /// `RUN`
    Running,
    /// `WLK`
    SportsWalking,
}

impl WorkoutKind {
    /// All known workout kinds.
    pub const ALL: [WorkoutKind; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// The tracker code of this kind.
    pub fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Number of positional readings a package of this kind carries.
    pub fn readings(self) -> usize {
        match self {
            Self::Swimming => Swimming::READINGS,
            Self::Running => Running::READINGS,
            Self::SportsWalking => SportsWalking::READINGS,
        }
    }

    /// Binds `readings` to the calculator of this kind.
    ///
    /// ## Errors
    /// Construction errors of the resolved workout.
    pub fn build(self, readings: &[f64]) -> Result<Workout> {
        Ok(match self {
            Self::Swimming => Swimming::from_readings(readings)?.into(),
            Self::Running => Running::from_readings(readings)?.into(),
            Self::SportsWalking => SportsWalking::from_readings(readings)?.into(),
        })
    }
}

impl FromStr for WorkoutKind {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        match code {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            other => Err(Error::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Reads the data received from the tracker sensors.
///
/// ## Errors
/// - [`Error::UnknownWorkoutType`] if `code` is not `SWM`, `RUN` or `WLK`.
/// - [`Error::ArityMismatch`] if `data` has the wrong length for the workout.
/// - [`Error::InvalidReading`] if a count reading is not a whole number.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let kind: WorkoutKind = code.parse()?;
    trace!(%kind, readings = data.len(), "binding sensor package");
    kind.build(data)
}

/// One `(code, data)` pair as recorded by the tracker.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorPackage {
    /// Workout code.
    pub code: String,
    /// Positional readings.
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Creates a package.
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    /// Dispatches this package, see [`read_package`].
    ///
    /// ## Errors
    /// Same as [`read_package`].
    pub fn read(&self) -> Result<Workout> {
        read_package(&self.code, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::Calculator;

    #[test]
    fn test_code_roundtrip() {
        for kind in WorkoutKind::ALL {
            assert_eq!(kind.code().parse::<WorkoutKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(
            "XYZ".parse::<WorkoutKind>(),
            Err(Error::UnknownWorkoutType("XYZ".to_string()))
        );
        assert!("run".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn test_read_package_variants() {
        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert!(matches!(swim, Workout::Swimming(_)));
        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert!(matches!(run, Workout::Running(_)));
        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walk.training_type(), "SportsWalking");
    }

    #[test]
    fn test_read_package_arity_comes_from_resolved_kind() {
        assert_eq!(WorkoutKind::Swimming.readings(), 5);
        assert_eq!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]),
            Err(Error::ArityMismatch {
                kind: "SportsWalking",
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_unknown_code_checked_before_arity() {
        assert_eq!(
            read_package("XYZ", &[]),
            Err(Error::UnknownWorkoutType("XYZ".to_string()))
        );
    }

    #[test]
    fn test_sensor_package_deserialize() {
        let package: SensorPackage =
            serde_json::from_str(r#"{"code": "RUN", "data": [15000, 1, 75]}"#).unwrap();
        assert_eq!(package, SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
        assert!(package.read().is_ok());
    }
}
