//! Error handling module for clipsplit

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for clipsplit operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Failure raised by the parser, extractor or configuration layer
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// One or more clips failed while the batch continued past errors
    #[error("{failed} of {total} clips failed")]
    ClipsFailed { failed: usize, total: usize },

    /// Worker pool could not be started
    #[error("Failed to start worker pool: {message}")]
    WorkerPool { message: String },
}

/// Result type alias for clipsplit operations
pub type SplitResult<T> = std::result::Result<T, SplitError>;
