//! Telemetry generator: synthetic terrarium readings.

use terratrack_domain::energy_log::{EnergyLogSeries, HOURS};
use terratrack_domain::snapshot::SensorSnapshot;

use crate::ports::RandomSource;

/// Produces snapshots and energy logs from an injected [`RandomSource`].
///
/// Holds no state besides the source; every call draws fresh values.
pub struct TelemetryGenerator<R> {
    source: R,
}

impl<R: RandomSource> TelemetryGenerator<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Six independent readings, each rounded to its precision.
    pub fn generate_snapshot(&mut self) -> SensorSnapshot {
        SensorSnapshot::from_unit_draws(std::array::from_fn(|_| self.source.next_unit()))
    }

    /// Twelve independent hourly readings labelled `"8:00"` to `"19:00"`.
    pub fn generate_energy_log(&mut self) -> EnergyLogSeries {
        EnergyLogSeries::from_unit_draws(std::array::from_fn::<_, HOURS, _>(|_| {
            self.source.next_unit()
        }))
    }

    /// Give the random source back, consuming the generator.
    pub fn into_source(self) -> R {
        self.source
    }
}
