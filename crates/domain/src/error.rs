//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TerraTrackError`] via `#[from]`.

/// Boxed source error raised by an external collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error for TerraTrack operations.
#[derive(Debug, thiserror::Error)]
pub enum TerraTrackError {
    #[error("invalid configuration")]
    Configuration(#[from] ConfigurationError),

    #[error("presentation failed")]
    Presentation(#[from] PresentationError),
}

/// Rejected control-surface settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("refresh interval must be between {min} and {max} seconds, got {actual}")]
    RefreshIntervalOutOfRange { actual: u32, min: u32, max: u32 },
}

/// Failure raised by the presentation collaborator while handing it a frame.
#[derive(Debug, thiserror::Error)]
#[error("presenter rejected frame {sequence}")]
pub struct PresentationError {
    /// Sequence number of the frame that could not be presented.
    pub sequence: u64,
    #[source]
    pub source: BoxError,
}

impl PresentationError {
    /// Wrap a collaborator failure for the frame with the given sequence.
    pub fn new(sequence: u64, source: impl Into<BoxError>) -> Self {
        Self {
            sequence,
            source: source.into(),
        }
    }
}
