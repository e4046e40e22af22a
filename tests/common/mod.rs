//! Common test helpers and utilities.

#![allow(dead_code)]

use workout_summary::SensorPackage;

/// Tolerance for comparing computed floats.
pub const EPS: f64 = 1e-9;

/// The reference swim, run and walk with their expected message lines.
pub fn reference_packages() -> Vec<(SensorPackage, &'static str)> {
    vec![
        (
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
        ),
        (
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.",
        ),
        (
            SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
             Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252.",
        ),
    ]
}

/// Asserts two floats are within [`EPS`].
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}
