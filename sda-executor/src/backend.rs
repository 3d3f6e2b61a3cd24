//! Execution seam between the gateway logic and the operating system.
//!
//! Allows the service to be driven by a scripted fake in tests instead of
//! launching real processes.

use async_trait::async_trait;
use sda_core::{CommandOutcome, CommandSpec};

/// Runs one admin-tool invocation to completion.
///
/// Implementations must be `Send + Sync` to allow use across async tasks and
/// must not fail: launch errors are reported as
/// [`CommandOutcome::Failure`].
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Execute `spec` and return its classified outcome.
    async fn execute(&self, spec: &CommandSpec) -> CommandOutcome;
}
