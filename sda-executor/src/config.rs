//! Admin-tool invocation settings.

use std::path::PathBuf;
use std::time::Duration;

/// Default upper bound on a single admin-tool run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Where the admin tool lives and how long it may run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RunnerConfig {
    /// Path to the `sda-admin` executable.
    pub executable: PathBuf,

    /// Configuration file passed via `--sda-config`.
    pub config_path: PathBuf,

    /// Wall-clock limit for one invocation.
    pub timeout: Duration,
}

impl RunnerConfig {
    /// Create a config with the default timeout.
    #[must_use]
    pub fn new(executable: PathBuf, config_path: PathBuf) -> Self {
        Self { executable, config_path, timeout: DEFAULT_TIMEOUT }
    }

    /// Replace the invocation timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
