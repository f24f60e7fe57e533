//! Random source port: where the simulated readings get their entropy.

/// Produces uniform draws in `[0, 1]`.
///
/// The generator maps each draw onto a sensor's interval, so a scripted
/// implementation fully determines the generated readings.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1]`.
    fn next_unit(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
