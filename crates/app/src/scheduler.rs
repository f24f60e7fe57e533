//! Refresh scheduler: drives the generate → present → wait cadence.
//!
//! ```text
//! Idle ──▶ Generating ──▶ Presenting ──┬──▶ Waiting ──▶ Generating …
//!                                      └──▶ Terminal   (auto-refresh off)
//! ```
//!
//! Cycles are strictly sequential: a frame is fully presented before the
//! next one is generated. The [`RefreshConfig`] is read once per cycle
//! boundary from a [`watch`] channel owned by the control surface, and a
//! [`ShutdownSignal`] is honoured at every boundary, including while waiting.

use tokio::sync::watch;

use terratrack_domain::error::TerraTrackError;
use terratrack_domain::frame::DashboardFrame;
use terratrack_domain::refresh::RefreshConfig;

use crate::ports::{Clock, Presenter, RandomSource};
use crate::shutdown::ShutdownSignal;
use crate::telemetry::TelemetryGenerator;

/// Where the scheduler currently is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Generating,
    Presenting,
    Waiting,
    Terminal,
}

/// Why a [`RefreshScheduler::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Auto-refresh was off (or got switched off); `cycles` frames were presented.
    Completed { cycles: u64 },
    /// Shutdown was observed at a cycle boundary.
    Cancelled { cycles: u64 },
}

/// Repeatedly generates frames and hands them to a [`Presenter`].
pub struct RefreshScheduler<R, P, C> {
    generator: TelemetryGenerator<R>,
    presenter: P,
    clock: C,
    config: watch::Receiver<RefreshConfig>,
    shutdown: ShutdownSignal,
    state: SchedulerState,
    sequence: u64,
}

impl<R, P, C> RefreshScheduler<R, P, C>
where
    R: RandomSource + Send,
    P: Presenter + Send + Sync,
    C: Clock + Send + Sync,
{
    pub fn new(
        generator: TelemetryGenerator<R>,
        presenter: P,
        clock: C,
        config: watch::Receiver<RefreshConfig>,
        shutdown: ShutdownSignal,
    ) -> Self {
        Self {
            generator,
            presenter,
            clock,
            config,
            shutdown,
            state: SchedulerState::Idle,
            sequence: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Sequence number of the last presented frame (0 before the first).
    #[must_use]
    pub fn last_sequence(&self) -> u64 {
        self.sequence
    }

    /// Run cycles until auto-refresh is off or shutdown is requested.
    ///
    /// With auto-refresh disabled exactly one frame is presented and the run
    /// returns without suspending.
    ///
    /// # Errors
    ///
    /// Returns [`TerraTrackError::Presentation`] as soon as the presenter
    /// fails; the failing cycle is abandoned and no retry is attempted.
    pub async fn run(&mut self) -> Result<RunOutcome, TerraTrackError> {
        let mut cycles = 0;
        let mut config = self.read_config();

        loop {
            if self.shutdown.is_requested() {
                return Ok(self.finish(RunOutcome::Cancelled { cycles }));
            }

            let frame = self.generate(config.led_on());
            self.transition(SchedulerState::Presenting);
            if let Err(err) = self.presenter.present(frame).await {
                tracing::error!(sequence = err.sequence, %err, "presentation failed");
                self.transition(SchedulerState::Terminal);
                return Err(err.into());
            }
            cycles += 1;

            if !config.auto_refresh_enabled() {
                return Ok(self.finish(RunOutcome::Completed { cycles }));
            }
            if self.shutdown.is_requested() {
                return Ok(self.finish(RunOutcome::Cancelled { cycles }));
            }

            self.transition(SchedulerState::Waiting);
            let interval = config.refresh_interval();
            tracing::debug!(interval_secs = interval.as_secs(), "waiting for next cycle");
            tokio::select! {
                biased;
                () = self.shutdown.requested() => {
                    return Ok(self.finish(RunOutcome::Cancelled { cycles }));
                }
                () = self.clock.sleep(interval) => {}
            }

            config = self.read_config();
            if !config.auto_refresh_enabled() {
                tracing::info!("auto-refresh switched off");
                return Ok(self.finish(RunOutcome::Completed { cycles }));
            }
        }
    }

    /// Keep the dashboard alive for a whole session.
    ///
    /// Runs [`run`](Self::run); whenever a run completes because auto-refresh
    /// is off, waits for the next configuration change and runs again, so
    /// every change on the control surface yields at least one fresh frame.
    /// Returns the total number of presented frames once shutdown is
    /// requested or the control surface goes away.
    ///
    /// # Errors
    ///
    /// Propagates the first presentation failure.
    pub async fn run_until_shutdown(&mut self) -> Result<u64, TerraTrackError> {
        let mut total = 0;
        loop {
            match self.run().await? {
                RunOutcome::Cancelled { cycles } => return Ok(total + cycles),
                RunOutcome::Completed { cycles } => total += cycles,
            }

            tracing::debug!("waiting for a configuration change");
            tokio::select! {
                biased;
                () = self.shutdown.requested() => return Ok(total),
                changed = self.config.changed() => {
                    if changed.is_err() {
                        tracing::info!("control surface closed, stopping scheduler");
                        return Ok(total);
                    }
                }
            }
        }
    }

    fn read_config(&mut self) -> RefreshConfig {
        *self.config.borrow_and_update()
    }

    fn generate(&mut self, led_on: bool) -> DashboardFrame {
        self.transition(SchedulerState::Generating);
        self.sequence += 1;
        let snapshot = self.generator.generate_snapshot();
        let energy_log = self.generator.generate_energy_log();
        tracing::debug!(
            sequence = self.sequence,
            temperature = snapshot.temperature(),
            humidity = snapshot.humidity(),
            "frame generated"
        );
        DashboardFrame::new(
            self.sequence,
            terratrack_domain::time::now(),
            led_on,
            snapshot,
            energy_log,
        )
    }

    fn finish(&mut self, outcome: RunOutcome) -> RunOutcome {
        self.transition(SchedulerState::Terminal);
        tracing::info!(?outcome, "refresh run finished");
        outcome
    }

    fn transition(&mut self, next: SchedulerState) {
        tracing::trace!(from = ?self.state, to = ?next, "scheduler transition");
        self.state = next;
    }
}
