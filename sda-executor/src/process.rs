//! Subprocess-backed [`CommandRunner`].

use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use sda_core::{CapturedOutput, CommandOutcome, CommandSpec, InvocationId};
use tokio::process::Command;

use crate::backend::CommandRunner;
use crate::{ExecutorError, RunnerConfig};

/// Runs the admin tool as a child process.
///
/// # Cancel Safety
/// Cancel safe. Dropping the future kills the child via `kill_on_drop`.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    /// Create a runner that gives each invocation at most `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Create a runner bounded by `config.timeout`.
    #[must_use]
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new(config.timeout)
    }

    /// The per-invocation time limit.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Spawn `spec`, wait for it and capture both output streams.
    ///
    /// # Errors
    /// Returns [`ExecutorError::SpawnFailed`] if the executable cannot be
    /// started and [`ExecutorError::TimedOut`] if it outlives the timeout.
    pub async fn capture(&self, spec: &CommandSpec) -> Result<CapturedOutput, ExecutorError> {
        let child = Command::new(spec.program())
            .args(spec.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExecutorError::SpawnFailed {
                program: spec.program().to_owned(),
                source,
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| ExecutorError::TimedOut {
                program: spec.program().to_owned(),
                timeout: self.timeout,
            })??;

        Ok(CapturedOutput::new(
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        ))
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn execute(&self, spec: &CommandSpec) -> CommandOutcome {
        let id = InvocationId::new();
        let start = Instant::now();

        tracing::info!(
            invocation = %id,
            action = %spec.action(),
            args = ?spec.extra_args(),
            "running admin tool"
        );

        match self.capture(spec).await {
            Ok(captured) => {
                let exit_code = captured.exit_code;
                let outcome = captured.into_outcome();
                if outcome.is_success() {
                    tracing::info!(
                        invocation = %id,
                        elapsed_ms = start.elapsed().as_millis(),
                        "admin tool succeeded"
                    );
                } else {
                    tracing::warn!(
                        invocation = %id,
                        exit_code = ?exit_code,
                        elapsed_ms = start.elapsed().as_millis(),
                        "admin tool failed"
                    );
                }
                outcome
            }
            Err(e) => {
                tracing::warn!(invocation = %id, error = %e, "admin tool could not be run");
                CommandOutcome::launch_failure(e.to_string())
            }
        }
    }
}
