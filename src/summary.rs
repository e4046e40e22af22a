//! Rendered result of one workout computation.

use std::fmt;

use serde::Serialize;

/// Informational message about a completed training.
///
/// Produced once by [`Calculator::summarize`](crate::training::Calculator::summarize)
/// and consumed only for rendering. The `Display` implementation yields the
/// tracker's fixed message line with every number printed to three decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Training label, e.g. `Running`.
    pub training_type: &'static str,
    /// Duration in hours.
    pub duration: f64,
    /// Distance in kilometers.
    pub distance: f64,
    /// Mean speed in km/h.
    pub speed: f64,
    /// Spent calories in kcal.
    pub calories: f64,
}

impl Summary {
    /// Returns the message line shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Summary {
        Summary {
            training_type: "Running",
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 797.805,
        }
    }

    #[test]
    fn test_message_format() {
        assert_eq!(
            sample().message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
        );
    }

    #[test]
    fn test_message_rounds_to_three_decimals() {
        let summary = Summary {
            distance: 0.9936,
            ..sample()
        };
        assert!(summary.message().contains("Дистанция: 0.994 км;"));
    }

    #[test]
    fn test_serialize_json() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["training_type"], "Running");
        assert_eq!(value["distance"], 9.75);
    }
}
