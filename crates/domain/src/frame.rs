//! Dashboard frame: everything a single refresh cycle hands to the presenter.

use serde::Serialize;

use crate::energy_log::EnergyLogSeries;
use crate::snapshot::SensorSnapshot;
use crate::time::Timestamp;

/// Display values computed from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedReadings {
    pub lifetime_offset_kg: f64,
    pub soil_moisture_percent: u8,
}

impl From<&SensorSnapshot> for DerivedReadings {
    fn from(snapshot: &SensorSnapshot) -> Self {
        Self {
            lifetime_offset_kg: snapshot.lifetime_offset_kg(),
            soil_moisture_percent: snapshot.soil_moisture_percent(),
        }
    }
}

/// One presented cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFrame {
    /// 1-based cycle counter, monotonic for the lifetime of a scheduler.
    pub sequence: u64,
    pub captured_at: Timestamp,
    /// LED toggle as configured when the frame was generated.
    pub led_on: bool,
    pub snapshot: SensorSnapshot,
    pub derived: DerivedReadings,
    pub energy_log: EnergyLogSeries,
}

impl DashboardFrame {
    #[must_use]
    pub fn new(
        sequence: u64,
        captured_at: Timestamp,
        led_on: bool,
        snapshot: SensorSnapshot,
        energy_log: EnergyLogSeries,
    ) -> Self {
        Self {
            sequence,
            captured_at,
            led_on,
            derived: DerivedReadings::from(&snapshot),
            snapshot,
            energy_log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy_log::HOURS;

    fn frame() -> DashboardFrame {
        DashboardFrame::new(
            3,
            crate::time::now(),
            false,
            SensorSnapshot::from_unit_draws([0.5; 6]),
            EnergyLogSeries::from_unit_draws([0.0; HOURS]),
        )
    }

    #[test]
    fn should_compute_derived_readings_on_construction() {
        let frame = frame();
        assert_eq!(frame.derived.soil_moisture_percent, 60);
        assert!((frame.derived.lifetime_offset_kg - 1.2).abs() < 1e-12);
    }

    #[test]
    fn should_serialize_frame_with_nested_sections() {
        let json = serde_json::to_value(frame()).unwrap();
        assert_eq!(json["sequence"], 3);
        assert_eq!(json["led_on"], false);
        assert_eq!(json["derived"]["soil_moisture_percent"], 60);
        assert_eq!(json["energy_log"].as_array().map(Vec::len), Some(HOURS));
        assert!(json["snapshot"]["temperature"].is_number());
    }
}
