//! The command gateway: one method per admin operation.
//!
//! Each method builds a fresh [`CommandSpec`], hands it to the configured
//! [`CommandRunner`] and shapes the outcome for the HTTP layer.

use std::sync::Arc;

use sda_core::{
    listing_envelope, message_envelope, Action, CommandOutcome, CommandSpec, ListResponse,
    MessageResponse,
};

use crate::{CommandRunner, RunnerConfig};

/// Stateless façade over the `sda-admin` tool.
///
/// Cloning is cheap; all clones share the same runner.
#[derive(Clone)]
pub struct AdminService {
    runner: Arc<dyn CommandRunner>,
    config: RunnerConfig,
}

impl std::fmt::Debug for AdminService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminService").field("config", &self.config).finish_non_exhaustive()
    }
}

impl AdminService {
    /// Create a service that runs commands through `runner`.
    #[must_use]
    pub fn new(runner: Arc<dyn CommandRunner>, config: RunnerConfig) -> Self {
        Self { runner, config }
    }

    /// The invocation settings used to build every command.
    #[must_use]
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Files waiting in the inbox.
    pub async fn list_inbox(&self) -> ListResponse {
        self.list(Action::Ingest).await
    }

    /// Ingest `file_name`; the tool's status line becomes the message.
    pub async fn ingest_file(&self, file_name: &str) -> MessageResponse {
        message_envelope(self.run(Action::Ingest, [file_name]).await)
    }

    /// Files ingested but not yet accessioned.
    pub async fn list_pending_accessions(&self) -> ListResponse {
        self.list(Action::Accession).await
    }

    /// Assign `unique_id` to `file_name`.
    ///
    /// The outcome is returned unshaped so the caller can pick the
    /// normalized or the legacy rendering.
    pub async fn accession_file(&self, unique_id: &str, file_name: &str) -> CommandOutcome {
        self.run(Action::Accession, [unique_id, file_name]).await
    }

    /// Accessioned files not yet mapped to a dataset.
    pub async fn list_pending_datasets(&self) -> ListResponse {
        self.list(Action::Dataset).await
    }

    /// Map `file_name` into `dataset_id`. Unshaped, like
    /// [`AdminService::accession_file`].
    pub async fn map_file_to_dataset(&self, dataset_id: &str, file_name: &str) -> CommandOutcome {
        self.run(Action::Dataset, [dataset_id, file_name]).await
    }

    async fn list(&self, action: Action) -> ListResponse {
        listing_envelope(action, self.run(action, Vec::<String>::new()).await)
    }

    async fn run<I, S>(&self, action: Action, extra: I) -> CommandOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec =
            CommandSpec::new(&self.config.executable, &self.config.config_path, action, extra);
        self.runner.execute(&spec).await
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use sda_core::GENERIC_ERROR_MESSAGE;

    use super::*;

    /// Returns a fixed outcome and records every spec it is given.
    struct ScriptedRunner {
        outcome: CommandOutcome,
        seen: Mutex<Vec<CommandSpec>>,
    }

    impl ScriptedRunner {
        fn new(outcome: CommandOutcome) -> Arc<Self> {
            Arc::new(Self { outcome, seen: Mutex::new(Vec::new()) })
        }

        fn seen(&self) -> Vec<CommandSpec> {
            match self.seen.lock() {
                Ok(guard) => guard.clone(),
                Err(e) => panic!("lock poisoned: {e}"),
            }
        }
    }

    #[async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn execute(&self, spec: &CommandSpec) -> CommandOutcome {
            match self.seen.lock() {
                Ok(mut guard) => guard.push(spec.clone()),
                Err(e) => panic!("lock poisoned: {e}"),
            }
            self.outcome.clone()
        }
    }

    fn service(runner: Arc<ScriptedRunner>) -> AdminService {
        AdminService::new(
            runner,
            RunnerConfig::new(PathBuf::from("./scripts/sda-admin"), PathBuf::from("s3cmd.conf")),
        )
    }

    #[tokio::test]
    async fn list_inbox_builds_listing_command_and_splits_lines() {
        let runner = ScriptedRunner::new(CommandOutcome::Payload("a.txt\n\nb.txt".to_owned()));
        let resp = service(Arc::clone(&runner)).list_inbox().await;

        assert!(resp.success);
        assert_eq!(resp.files, ["a.txt", "b.txt"]);
        assert_eq!(resp.message, "2 file(s) available for ingestion.");

        let seen = runner.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].argv(),
            ["./scripts/sda-admin", "--sda-config", "s3cmd.conf", "ingest"]
        );
    }

    #[tokio::test]
    async fn ingest_file_appends_file_name_and_keeps_message_whole() {
        let runner = ScriptedRunner::new(CommandOutcome::Payload("Ingested a.txt\nok".to_owned()));
        let resp = service(Arc::clone(&runner)).ingest_file("a.txt").await;

        assert_eq!(
            resp,
            MessageResponse { success: true, message: "Ingested a.txt\nok".to_owned() }
        );
        assert_eq!(runner.seen()[0].extra_args(), ["a.txt"]);
    }

    #[tokio::test]
    async fn ingest_failure_surfaces_stderr() {
        let runner = ScriptedRunner::new(CommandOutcome::Failure {
            message: "no such file".to_owned(),
            code: 1,
        });
        let resp = service(runner).ingest_file("missing.txt").await;
        assert_eq!(resp, MessageResponse { success: false, message: "no such file".to_owned() });
    }

    #[tokio::test]
    async fn listing_failure_without_text_uses_generic_message() {
        let runner =
            ScriptedRunner::new(CommandOutcome::Failure { message: String::new(), code: 3 });
        let resp = service(runner).list_pending_datasets().await;
        assert!(!resp.success);
        assert!(resp.files.is_empty());
        assert_eq!(resp.message, GENERIC_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn pending_accessions_use_accession_action() {
        let runner = ScriptedRunner::new(CommandOutcome::Payload(String::new()));
        let resp = service(Arc::clone(&runner)).list_pending_accessions().await;
        assert_eq!(resp.message, "No files available for accession.");
        assert_eq!(runner.seen()[0].action(), Action::Accession);
    }

    #[tokio::test]
    async fn accession_and_dataset_pass_both_arguments_in_order() {
        let runner = ScriptedRunner::new(CommandOutcome::Payload("done".to_owned()));
        let svc = service(Arc::clone(&runner));

        let outcome = svc.accession_file("EGAF0001", "a.c4gh").await;
        assert_eq!(outcome, CommandOutcome::Payload("done".to_owned()));
        let outcome = svc.map_file_to_dataset("EGAD0001", "a.c4gh").await;
        assert!(outcome.is_success());

        let seen = runner.seen();
        assert_eq!(
            seen[0].args(),
            ["--sda-config", "s3cmd.conf", "accession", "EGAF0001", "a.c4gh"]
        );
        assert_eq!(
            seen[1].args(),
            ["--sda-config", "s3cmd.conf", "dataset", "EGAD0001", "a.c4gh"]
        );
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        match tokio::runtime::Builder::new_current_thread().build() {
            Ok(rt) => rt.block_on(future),
            Err(e) => panic!("runtime: {e}"),
        }
    }

    proptest::proptest! {
        #[test]
        fn proptest_inbox_listing_matches_tool_output(
            names in proptest::collection::vec("[a-zA-Z0-9._-]{1,16}", 0..8usize),
            blanks in proptest::collection::vec(" {0,3}", 0..4usize),
        ) {
            let mut lines: Vec<String> = names.iter().map(|n| format!(" {n} ")).collect();
            lines.extend(blanks);
            let runner = ScriptedRunner::new(CommandOutcome::Payload(lines.join("\n")));
            let resp = block_on(service(Arc::clone(&runner)).list_inbox());

            proptest::prop_assert!(resp.success);
            proptest::prop_assert_eq!(&resp.files, &names);
            if names.is_empty() {
                proptest::prop_assert_eq!(resp.message, "No files available for ingestion.");
            } else {
                proptest::prop_assert_eq!(
                    resp.message,
                    format!("{} file(s) available for ingestion.", names.len())
                );
            }
            proptest::prop_assert_eq!(runner.seen().len(), 1);
        }

        #[test]
        fn proptest_accession_arguments_reach_runner_verbatim(
            unique_id in "[ -~]{1,24}",
            file_name in "[ -~]{1,24}",
        ) {
            let runner = ScriptedRunner::new(CommandOutcome::Payload("ok".to_owned()));
            let outcome =
                block_on(service(Arc::clone(&runner)).accession_file(&unique_id, &file_name));

            proptest::prop_assert!(outcome.is_success());
            let seen = runner.seen();
            proptest::prop_assert_eq!(seen[0].action(), Action::Accession);
            proptest::prop_assert_eq!(seen[0].extra_args(), [unique_id, file_name]);
        }
    }
}
