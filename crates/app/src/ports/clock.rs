//! Clock port: the named suspension point between refresh cycles.

use std::future::Future;
use std::time::Duration;

/// Suspends the scheduler between cycles.
pub trait Clock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// [`Clock`] backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
