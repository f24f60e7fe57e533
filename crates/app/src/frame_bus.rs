//! In-process frame bus backed by a tokio broadcast channel.

use std::future::Future;
use std::sync::RwLock;

use tokio::sync::broadcast;

use terratrack_domain::error::PresentationError;
use terratrack_domain::frame::DashboardFrame;

use crate::ports::Presenter;

/// [`Presenter`] that remembers the latest frame and fans every frame out
/// to subscribers.
///
/// Publishing succeeds even when there are no active subscribers
/// (the frame is simply not delivered, but still becomes the latest).
pub struct InProcessFrameBus {
    sender: broadcast::Sender<DashboardFrame>,
    latest: RwLock<Option<DashboardFrame>>,
}

impl InProcessFrameBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            latest: RwLock::new(None),
        }
    }

    /// Subscribe to frames presented *after* the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardFrame> {
        self.sender.subscribe()
    }

    /// The most recently presented frame, if any cycle has run yet.
    #[must_use]
    pub fn latest(&self) -> Option<DashboardFrame> {
        match self.latest.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store(&self, frame: DashboardFrame) -> Result<(), PresentationError> {
        let sequence = frame.sequence;
        let mut guard = self
            .latest
            .write()
            .map_err(|_| PresentationError::new(sequence, "latest frame lock poisoned"))?;
        *guard = Some(frame.clone());
        drop(guard);

        // Fails only when there are no subscribers.
        let _ = self.sender.send(frame);
        tracing::trace!(sequence, "frame published");
        Ok(())
    }
}

impl Presenter for InProcessFrameBus {
    fn present(
        &self,
        frame: DashboardFrame,
    ) -> impl Future<Output = Result<(), PresentationError>> + Send {
        let result = self.store(frame);
        async { result }
    }
}
