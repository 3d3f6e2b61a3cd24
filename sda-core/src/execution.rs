/// Exit code reported when the admin tool could not be started, timed out,
/// or was terminated by a signal.
pub const LAUNCH_FAILURE_CODE: i32 = -1;

/// Raw capture of a finished admin-tool process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Standard output decoded as text.
    pub stdout: String,
    /// Standard error decoded as text.
    pub stderr: String,
}

impl CapturedOutput {
    /// Create a capture from its parts.
    #[must_use]
    pub fn new(
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self { exit_code, stdout: stdout.into(), stderr: stderr.into() }
    }

    /// Apply the admin tool's exit contract.
    ///
    /// Exit code 0 yields the trimmed standard output, or the trimmed
    /// standard error when standard output is blank (the tool reports some
    /// successes on stderr). Any other status yields a failure carrying the
    /// trimmed standard error.
    #[must_use]
    pub fn into_outcome(self) -> CommandOutcome {
        match self.exit_code {
            Some(0) => {
                let stdout = self.stdout.trim();
                let text = if stdout.is_empty() { self.stderr.trim() } else { stdout };
                CommandOutcome::Payload(text.to_owned())
            }
            code => CommandOutcome::Failure {
                message: self.stderr.trim().to_owned(),
                code: code.unwrap_or(LAUNCH_FAILURE_CODE),
            },
        }
    }
}

/// Result of one admin-tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The tool succeeded; trimmed text it printed.
    Payload(String),
    /// The tool failed or could not be run.
    Failure {
        /// Trimmed diagnostic text, possibly empty.
        message: String,
        /// Exit code, or [`LAUNCH_FAILURE_CODE`].
        code: i32,
    },
}

impl CommandOutcome {
    /// Failure for a process that never produced an exit status.
    #[must_use]
    pub fn launch_failure(message: impl Into<String>) -> Self {
        CommandOutcome::Failure {
            message: message.into().trim().to_owned(),
            code: LAUNCH_FAILURE_CODE,
        }
    }

    /// Returns `true` for [`CommandOutcome::Payload`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Payload(_))
    }
}
