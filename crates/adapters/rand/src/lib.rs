//! # terratrack-adapter-rand
//!
//! [`RandomSource`] implementation backed by the [`rand`] crate.
//!
//! The daemon uses an entropy-seeded [`StdRng`]; a fixed seed makes a whole
//! dashboard session reproducible, which is handy for demos and tests.
//!
//! ## Dependency rule
//!
//! Depends on `terratrack-app` (port traits) only.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use terratrack_app::ports::RandomSource;

/// Uniform draws in `[0, 1)` from any [`RngCore`].
#[derive(Debug, Clone)]
pub struct RandSource<G> {
    rng: G,
}

impl<G: RngCore> RandSource<G> {
    pub fn new(rng: G) -> Self {
        Self { rng }
    }
}

impl RandSource<StdRng> {
    /// Seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic stream for the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Entropy-seeded unless a seed is given.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<G: RngCore> RandomSource for RandSource<G> {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terratrack_app::telemetry::TelemetryGenerator;
    use terratrack_domain::energy_log::ENERGY_LOG_RANGE;
    use terratrack_domain::sensor::SensorKind;

    #[test]
    fn should_draw_inside_unit_interval() {
        let mut source = RandSource::seeded(7);
        for _ in 0..1_000 {
            let draw = source.next_unit();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn should_repeat_stream_for_same_seed() {
        let mut a = RandSource::seeded(42);
        let mut b = RandSource::seeded(42);
        for _ in 0..32 {
            assert!((a.next_unit() - b.next_unit()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn should_diverge_for_different_seeds() {
        let mut a = RandSource::seeded(1);
        let mut b = RandSource::seeded(2);
        let same = (0..16).all(|_| (a.next_unit() - b.next_unit()).abs() < f64::EPSILON);
        assert!(!same);
    }

    #[test]
    fn should_feed_generator_with_valid_readings() {
        let mut generator = TelemetryGenerator::new(RandSource::from_optional_seed(None));
        for _ in 0..500 {
            let snapshot = generator.generate_snapshot();
            for kind in SensorKind::ALL {
                let range = kind.range();
                assert!(range.contains(snapshot.reading(kind)));
                assert!(range.is_rounded(snapshot.reading(kind)));
            }
            let log = generator.generate_energy_log();
            assert_eq!(log.points().len(), 12);
            assert!(log.values().all(|v| ENERGY_LOG_RANGE.contains(v)));
        }
    }
}
