//! Error types for the executor crate.

use std::time::Duration;

/// Errors that can occur while running the admin tool.
///
/// These never leave the crate as errors: [`crate::ProcessRunner`] folds
/// every variant into a [`sda_core::CommandOutcome::Failure`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExecutorError {
    /// The process could not be started.
    #[error("failed to start {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process did not finish within the configured timeout.
    #[error("{program} did not complete within {timeout:?}")]
    TimedOut { program: String, timeout: Duration },

    /// Underlying I/O error while collecting output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
