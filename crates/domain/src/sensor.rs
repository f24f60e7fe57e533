//! Sensor catalogue: the six simulated terrarium readings.
//!
//! Every reading is drawn uniformly from a fixed closed interval and rounded
//! to a fixed number of decimals. Because both bounds are representable at
//! the reading's precision, rounding can never push a value outside its
//! interval.

use serde::{Deserialize, Serialize};

/// One of the simulated terrarium sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    EnergyOutput,
    BatteryLevel,
    Humidity,
    Temperature,
    SoilMoisture,
    Co2Absorbed,
}

/// Closed sampling interval plus display precision of a reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRange {
    pub min: f64,
    pub max: f64,
    pub decimals: u8,
}

impl SensorRange {
    #[must_use]
    pub const fn new(min: f64, max: f64, decimals: u8) -> Self {
        Self { min, max, decimals }
    }

    /// Map a unit draw in `[0, 1]` onto the interval and round it.
    ///
    /// Draws outside `[0, 1]` are clamped first.
    #[must_use]
    pub fn sample(&self, unit: f64) -> f64 {
        let unit = unit.clamp(0.0, 1.0);
        let raw = self.min + (self.max - self.min) * unit;
        round_to(raw, self.decimals).clamp(self.min, self.max)
    }

    /// Whether `value` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Whether `value` carries no more than [`decimals`](Self::decimals) digits.
    #[must_use]
    pub fn is_rounded(&self, value: f64) -> bool {
        (round_to(value, self.decimals) - value).abs() < 1e-9
    }
}

impl SensorKind {
    /// All sensors in dashboard order.
    pub const ALL: [Self; 6] = [
        Self::EnergyOutput,
        Self::BatteryLevel,
        Self::Humidity,
        Self::Temperature,
        Self::SoilMoisture,
        Self::Co2Absorbed,
    ];

    /// Sampling interval and precision.
    #[must_use]
    pub const fn range(self) -> SensorRange {
        match self {
            Self::EnergyOutput => SensorRange::new(0.1, 1.5, 2),
            Self::BatteryLevel => SensorRange::new(20.0, 100.0, 1),
            Self::Humidity => SensorRange::new(50.0, 90.0, 1),
            Self::Temperature => SensorRange::new(18.0, 28.0, 1),
            Self::SoilMoisture => SensorRange::new(0.3, 0.9, 2),
            Self::Co2Absorbed => SensorRange::new(0.02, 0.06, 3),
        }
    }

    /// Unit of the raw reading.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::EnergyOutput => "W",
            Self::BatteryLevel | Self::Humidity => "%",
            Self::Temperature => "\u{b0}C",
            Self::SoilMoisture => "",
            Self::Co2Absorbed => "kg/day",
        }
    }

    /// Snake-case identifier, matching the serialized field name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::EnergyOutput => "energy_output",
            Self::BatteryLevel => "battery_level",
            Self::Humidity => "humidity",
            Self::Temperature => "temperature",
            Self::SoilMoisture => "soil_moisture",
            Self::Co2Absorbed => "co2_absorbed",
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Round half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10_f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}
