use std::fmt;
use std::path::Path;

/// Flag that points the admin tool at its configuration file.
pub const CONFIG_FLAG: &str = "--sda-config";

/// Subcommand of the `sda-admin` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move a file from the inbox into the intake area.
    Ingest,
    /// Register an ingested file under an archival identifier.
    Accession,
    /// Associate an accessioned file with a dataset.
    Dataset,
}

impl Action {
    /// The subcommand name as passed on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Ingest => "ingest",
            Action::Accession => "accession",
            Action::Dataset => "dataset",
        }
    }

    /// Noun used in listing messages, e.g. `"... available for ingestion."`.
    #[must_use]
    pub fn purpose(self) -> &'static str {
        match self {
            Action::Ingest => "ingestion",
            Action::Accession => "accession",
            Action::Dataset => "dataset",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built invocation of the admin tool.
///
/// The argument vector is always
/// `[executable, "--sda-config", config_path, action, ...extra]` and cannot be
/// changed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    action: Action,
    argv: Vec<String>,
}

impl CommandSpec {
    /// Build the argument vector for one admin-tool call.
    ///
    /// # Arguments
    /// - `executable`: path to the admin script
    /// - `config_path`: configuration file handed to the script
    /// - `action`: subcommand to run
    /// - `extra`: caller-supplied arguments, appended in order
    #[must_use]
    pub fn new<I, S>(executable: &Path, config_path: &Path, action: Action, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = vec![
            executable.to_string_lossy().into_owned(),
            CONFIG_FLAG.to_owned(),
            config_path.to_string_lossy().into_owned(),
            action.as_str().to_owned(),
        ];
        argv.extend(extra.into_iter().map(Into::into));
        Self { action, argv }
    }

    /// The subcommand this spec runs.
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    /// The executable (first element of the argument vector).
    #[must_use]
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Everything after the executable.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    /// Caller-supplied arguments only.
    #[must_use]
    pub fn extra_args(&self) -> &[String] {
        &self.argv[4..]
    }

    /// The complete argument vector, executable included.
    #[must_use]
    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv.join(" "))
    }
}
