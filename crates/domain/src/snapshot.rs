//! Sensor snapshot: one immutable set of simulated readings.

use serde::Serialize;

use crate::sensor::{SensorKind, round_to};

/// Days of constant absorption assumed by the lifetime offset projection.
pub const LIFETIME_PROJECTION_DAYS: f64 = 30.0;

/// One complete set of simulated readings at a point in time.
///
/// Fields are private so a snapshot can only be produced through
/// [`SensorSnapshot::from_unit_draws`], which guarantees every value lies in
/// its [`SensorKind::range`] and carries its declared precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorSnapshot {
    energy_output: f64,
    battery_level: f64,
    humidity: f64,
    temperature: f64,
    soil_moisture: f64,
    co2_absorbed: f64,
}

impl SensorSnapshot {
    /// Build a snapshot from one unit draw per sensor, in
    /// [`SensorKind::ALL`] order.
    #[must_use]
    pub fn from_unit_draws(draws: [f64; 6]) -> Self {
        let [energy, battery, humidity, temperature, soil, co2] = draws;
        Self {
            energy_output: SensorKind::EnergyOutput.range().sample(energy),
            battery_level: SensorKind::BatteryLevel.range().sample(battery),
            humidity: SensorKind::Humidity.range().sample(humidity),
            temperature: SensorKind::Temperature.range().sample(temperature),
            soil_moisture: SensorKind::SoilMoisture.range().sample(soil),
            co2_absorbed: SensorKind::Co2Absorbed.range().sample(co2),
        }
    }

    /// Energy output in watts.
    #[must_use]
    pub fn energy_output(&self) -> f64 {
        self.energy_output
    }

    /// Battery charge in percent.
    #[must_use]
    pub fn battery_level(&self) -> f64 {
        self.battery_level
    }

    /// Relative humidity in percent.
    #[must_use]
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Air temperature in degrees Celsius.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Normalised soil moisture in `[0, 1]`.
    #[must_use]
    pub fn soil_moisture(&self) -> f64 {
        self.soil_moisture
    }

    /// CO2 absorbed today, in kilograms.
    #[must_use]
    pub fn co2_absorbed(&self) -> f64 {
        self.co2_absorbed
    }

    /// Value of a single reading.
    #[must_use]
    pub fn reading(&self, kind: SensorKind) -> f64 {
        match kind {
            SensorKind::EnergyOutput => self.energy_output,
            SensorKind::BatteryLevel => self.battery_level,
            SensorKind::Humidity => self.humidity,
            SensorKind::Temperature => self.temperature,
            SensorKind::SoilMoisture => self.soil_moisture,
            SensorKind::Co2Absorbed => self.co2_absorbed,
        }
    }

    /// Projected offset after [`LIFETIME_PROJECTION_DAYS`] of today's rate.
    #[must_use]
    pub fn lifetime_offset_kg(&self) -> f64 {
        lifetime_offset_kg(self.co2_absorbed)
    }

    /// Soil moisture as a whole percentage.
    #[must_use]
    pub fn soil_moisture_percent(&self) -> u8 {
        soil_moisture_percent(self.soil_moisture)
    }
}

/// `round(co2_absorbed * 30, 2)`.
#[must_use]
pub fn lifetime_offset_kg(co2_absorbed: f64) -> f64 {
    round_to(co2_absorbed * LIFETIME_PROJECTION_DAYS, 2)
}

/// `round(soil_moisture * 100)`, saturating at the `u8` bounds.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn soil_moisture_percent(soil_moisture: f64) -> u8 {
    (soil_moisture * 100.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_project_lifetime_offset_over_thirty_days() {
        assert!((lifetime_offset_kg(0.05) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_convert_soil_moisture_to_percent() {
        assert_eq!(soil_moisture_percent(0.42), 42);
    }

    #[test]
    fn should_place_every_reading_inside_its_range() {
        for draws in [[0.0; 6], [1.0; 6], [0.5; 6], [0.33, 0.91, 0.07, 0.61, 0.49, 0.999]] {
            let snapshot = SensorSnapshot::from_unit_draws(draws);
            for kind in SensorKind::ALL {
                let range = kind.range();
                let value = snapshot.reading(kind);
                assert!(range.contains(value), "{kind} = {value} out of range");
                assert!(range.is_rounded(value), "{kind} = {value} not rounded");
            }
        }
    }

    #[test]
    fn should_sample_each_field_from_its_own_draw() {
        let snapshot = SensorSnapshot::from_unit_draws([0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
        assert!((snapshot.energy_output() - 0.1).abs() < 1e-12);
        assert!((snapshot.battery_level() - 100.0).abs() < 1e-12);
        assert!((snapshot.humidity() - 50.0).abs() < 1e-12);
        assert!((snapshot.temperature() - 28.0).abs() < 1e-12);
        assert!((snapshot.soil_moisture() - 0.3).abs() < 1e-12);
        assert!((snapshot.co2_absorbed() - 0.06).abs() < 1e-12);
    }

    #[test]
    fn should_derive_display_values_from_snapshot() {
        let snapshot = SensorSnapshot::from_unit_draws([0.5; 6]);
        assert_eq!(snapshot.soil_moisture_percent(), 60);
        assert!((snapshot.lifetime_offset_kg() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn should_serialize_with_snake_case_field_names() {
        let snapshot = SensorSnapshot::from_unit_draws([0.0; 6]);
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(json["battery_level"], serde_json::json!(20.0));
        assert_eq!(json["co2_absorbed"], serde_json::json!(0.02));
    }
}
