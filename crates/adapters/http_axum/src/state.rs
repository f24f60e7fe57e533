//! Shared application state for axum handlers.

use std::sync::Arc;

use tokio::sync::watch;

use terratrack_app::frame_bus::InProcessFrameBus;
use terratrack_domain::refresh::RefreshConfig;

/// Application state shared across all axum handlers.
///
/// Cloning only clones the `Arc` wrappers.
#[derive(Clone)]
pub struct AppState {
    /// Frames presented by the scheduler (latest + live subscription).
    pub frames: Arc<InProcessFrameBus>,
    /// Control surface: every accepted change is published to the scheduler.
    pub controls: Arc<watch::Sender<RefreshConfig>>,
}

impl AppState {
    pub fn new(frames: Arc<InProcessFrameBus>, controls: watch::Sender<RefreshConfig>) -> Self {
        Self {
            frames,
            controls: Arc::new(controls),
        }
    }

    /// The configuration currently in effect.
    #[must_use]
    pub fn current_config(&self) -> RefreshConfig {
        *self.controls.borrow()
    }

    /// Publish a new configuration; the scheduler picks it up at its next
    /// cycle boundary.
    pub fn apply_config(&self, config: RefreshConfig) {
        let previous = self.controls.send_replace(config);
        if previous != config {
            tracing::info!(
                led_on = config.led_on(),
                auto_refresh = config.auto_refresh_enabled(),
                interval_secs = config.refresh_interval_secs(),
                "refresh configuration updated"
            );
        }
    }
}
