//! Energy usage log: twelve hourly power readings for the usage chart.

use serde::Serialize;

use crate::sensor::SensorRange;

/// Hour of the first reading (08:00).
pub const FIRST_HOUR: u8 = 8;

/// Number of hourly readings (08:00 through 19:00).
pub const HOURS: usize = 12;

/// Sampling interval and precision of each hourly reading, in watts.
pub const ENERGY_LOG_RANGE: SensorRange = SensorRange::new(0.3, 1.5, 2);

/// A single `(label, value)` pair of the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyLogPoint {
    /// Hour label such as `"8:00"`.
    pub label: String,
    /// Power in watts.
    pub watts: f64,
}

/// Ordered hourly readings from 08:00 to 19:00 inclusive.
///
/// Always exactly [`HOURS`] points with the fixed labels returned by
/// [`hour_labels`]. Regenerated on every refresh, never accumulated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EnergyLogSeries {
    points: Vec<EnergyLogPoint>,
}

impl EnergyLogSeries {
    /// Build the series from one unit draw per hour.
    #[must_use]
    pub fn from_unit_draws(draws: [f64; HOURS]) -> Self {
        let points = hour_labels()
            .into_iter()
            .zip(draws)
            .map(|(label, unit)| EnergyLogPoint {
                label,
                watts: ENERGY_LOG_RANGE.sample(unit),
            })
            .collect();
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[EnergyLogPoint] {
        &self.points
    }

    /// Hour labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|point| point.label.as_str())
    }

    /// Readings in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.watts)
    }

    /// Highest reading of the series.
    #[must_use]
    pub fn peak(&self) -> f64 {
        self.values().fold(ENERGY_LOG_RANGE.min, f64::max)
    }
}

/// The fixed labels `"8:00"`, `"9:00"`, …, `"19:00"`.
#[must_use]
pub fn hour_labels() -> Vec<String> {
    (0..HOURS)
        .map(|offset| format!("{}:00", usize::from(FIRST_HOUR) + offset))
        .collect()
}
