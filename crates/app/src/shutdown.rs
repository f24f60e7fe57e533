//! Shutdown signalling between the host process and the scheduler.
//!
//! Backed by a tokio [`watch`] channel so any number of tasks can observe the
//! request. Dropping every [`ShutdownHandle`] counts as a shutdown request.

use tokio::sync::watch;

/// Create a connected handle/signal pair.
#[must_use]
pub fn channel() -> (ShutdownHandle, ShutdownSignal) {
    let (tx, rx) = watch::channel(false);
    (ShutdownHandle { tx }, ShutdownSignal { rx })
}

/// Requests shutdown.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: watch::Sender<bool>,
}

impl ShutdownHandle {
    /// Ask every [`ShutdownSignal`] to stop. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    /// Another signal observing this handle.
    #[must_use]
    pub fn signal(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }
}

/// Observes shutdown requests.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Whether shutdown has been requested, without waiting.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Resolve once shutdown is requested.
    pub async fn requested(&mut self) {
        // An error means every handle is gone, which is a shutdown too.
        let _ = self.rx.wait_for(|requested| *requested).await;
    }
}
