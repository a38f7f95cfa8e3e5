//! Dispatcher error types

use thiserror::Error;

/// Dispatcher-level errors
///
/// Individual submission failures are not errors at this level.
#[derive(Debug, Error)]
pub enum DispatcherError {
    /// The consumer went away while facts were still being enqueued
    #[error("dispatch queue closed before all passes were enqueued")]
    QueueClosed,

    /// The consumer task panicked
    #[error("submit worker panicked: {message}")]
    WorkerPanicked { message: String },
}

impl From<tokio::task::JoinError> for DispatcherError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::WorkerPanicked {
            message: e.to_string(),
        }
    }
}
