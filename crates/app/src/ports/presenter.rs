//! Presenter port: the collaborator that displays each refresh cycle.

use std::future::Future;

use terratrack_domain::error::PresentationError;
use terratrack_domain::frame::DashboardFrame;

/// Consumes generated frames.
///
/// An error is fatal to the running scheduler: it is propagated to the
/// scheduler's caller and never retried.
pub trait Presenter {
    /// Display one frame.
    fn present(
        &self,
        frame: DashboardFrame,
    ) -> impl Future<Output = Result<(), PresentationError>> + Send;
}

impl<T: Presenter + Send + Sync> Presenter for std::sync::Arc<T> {
    fn present(
        &self,
        frame: DashboardFrame,
    ) -> impl Future<Output = Result<(), PresentationError>> + Send {
        (**self).present(frame)
    }
}
