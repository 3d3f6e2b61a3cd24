//! JSON response envelopes and the rules that turn a [`CommandOutcome`]
//! into one.

use serde::Serialize;

use crate::command::Action;
use crate::execution::CommandOutcome;

/// Message used when a failed command left no diagnostic text.
pub const GENERIC_ERROR_MESSAGE: &str = "Error in API request in S&I service";

/// Response of the listing endpoints.
///
/// A failed listing never carries items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub files: Vec<String>,
    pub message: String,
}

impl ListResponse {
    /// Successful listing with a count-bearing message.
    #[must_use]
    pub fn listed(action: Action, files: Vec<String>) -> Self {
        let message = if files.is_empty() {
            format!("No files available for {}.", action.purpose())
        } else {
            format!("{} file(s) available for {}.", files.len(), action.purpose())
        };
        Self { success: true, files, message }
    }

    /// Failed listing; `files` is always empty.
    #[must_use]
    pub fn failed(message: &str) -> Self {
        Self { success: false, files: Vec::new(), message: failure_text(message) }
    }
}

/// Response of the single-item operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Response of `GET /sda/get/public-key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicKeyResponse {
    pub success: bool,
    pub public_key: String,
    pub message: String,
}

impl PublicKeyResponse {
    /// The key file was read; `key` is its full, untrimmed content.
    #[must_use]
    pub fn loaded(key: String) -> Self {
        Self { success: true, public_key: key, message: "Public key retrieved.".to_owned() }
    }

    /// The key file could not be read.
    #[must_use]
    pub fn unavailable(diagnostic: impl Into<String>) -> Self {
        Self { success: false, public_key: String::new(), message: diagnostic.into() }
    }
}

/// Characters that end a line of tool output: `\n`, `\r`, vertical tab,
/// form feed, the ASCII file/group/record separators, NEL and the Unicode
/// line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split line-oriented tool output into item names.
///
/// Each line is trimmed and blank lines are dropped; order is preserved.
/// `\r\n` yields an empty piece between its two breaks, which the blank
/// filter removes.
#[must_use]
pub fn split_items(text: &str) -> Vec<String> {
    text.split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Classify the outcome of a listing call.
#[must_use]
pub fn listing_envelope(action: Action, outcome: CommandOutcome) -> ListResponse {
    match outcome {
        CommandOutcome::Payload(text) => ListResponse::listed(action, split_items(&text)),
        CommandOutcome::Failure { message, .. } => ListResponse::failed(&message),
    }
}

/// Classify the outcome of a single-item call; the payload becomes the
/// message verbatim.
#[must_use]
pub fn message_envelope(outcome: CommandOutcome) -> MessageResponse {
    match outcome {
        CommandOutcome::Payload(text) => MessageResponse { success: true, message: text },
        CommandOutcome::Failure { message, .. } => {
            MessageResponse { success: false, message: failure_text(&message) }
        }
    }
}

fn failure_text(message: &str) -> String {
    if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE.to_owned()
    } else {
        message.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbox_listing_drops_blank_lines() {
        let outcome = CommandOutcome::Payload("a.txt\n\nb.txt".to_owned());
        let resp = listing_envelope(Action::Ingest, outcome);
        assert_eq!(
            resp,
            ListResponse {
                success: true,
                files: vec!["a.txt".to_owned(), "b.txt".to_owned()],
                message: "2 file(s) available for ingestion.".to_owned(),
            }
        );
    }

    #[test]
    fn empty_listing_reports_no_files() {
        let outcome = CommandOutcome::Payload("  \n \n".to_owned());
        let resp = listing_envelope(Action::Accession, outcome);
        assert!(resp.success);
        assert!(resp.files.is_empty());
        assert_eq!(resp.message, "No files available for accession.");
    }

    #[test]
    fn failed_listing_has_no_files_and_carries_stderr() {
        let outcome =
            CommandOutcome::Failure { message: "database unreachable".to_owned(), code: 2 };
        let resp = listing_envelope(Action::Dataset, outcome);
        assert!(!resp.success);
        assert!(resp.files.is_empty(), "failed listing must not carry items");
        assert_eq!(resp.message, "database unreachable");
    }

    #[test]
    fn failed_listing_without_text_uses_generic_message() {
        let outcome = CommandOutcome::Failure { message: String::new(), code: 1 };
        let resp = listing_envelope(Action::Ingest, outcome);
        assert_eq!(resp.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn dataset_listing_message_uses_dataset_noun() {
        let resp = listing_envelope(Action::Dataset, CommandOutcome::Payload("f1".to_owned()));
        assert_eq!(resp.message, "1 file(s) available for dataset.");
    }

    #[test]
    fn split_items_breaks_on_carriage_return_and_other_separators() {
        assert_eq!(split_items("a.txt\rb.txt"), ["a.txt", "b.txt"]);
        assert_eq!(split_items("a.txt\r\nb.txt\r\n"), ["a.txt", "b.txt"]);
        assert_eq!(
            split_items("a\x0bb\x0cc\u{2028}d\u{2029}e\u{85}f"),
            ["a", "b", "c", "d", "e", "f"]
        );
    }

    #[test]
    fn message_envelope_keeps_payload_unsplit() {
        let resp = message_envelope(CommandOutcome::Payload("line one\nline two".to_owned()));
        assert_eq!(
            resp,
            MessageResponse { success: true, message: "line one\nline two".to_owned() }
        );
    }

    #[test]
    fn message_envelope_ingest_failure() {
        let outcome = CommandOutcome::Failure { message: "no such file".to_owned(), code: 1 };
        let resp = message_envelope(outcome);
        assert_eq!(resp, MessageResponse { success: false, message: "no such file".to_owned() });
    }

    #[test]
    fn public_key_unavailable_has_empty_key() {
        let resp = PublicKeyResponse::unavailable("missing");
        assert!(!resp.success);
        assert!(resp.public_key.is_empty());
        assert_eq!(resp.message, "missing");
    }

    proptest::proptest! {
        #[test]
        fn proptest_listing_counts_non_blank_lines(
            lines in proptest::collection::vec("[ \t]{0,2}[a-z0-9._-]{0,10}[ \t]{0,2}", 0..20usize),
        ) {
            let text = lines.join("\n");
            let expected: Vec<String> = lines
                .iter()
                .map(|l| l.trim().to_owned())
                .filter(|l| !l.is_empty())
                .collect();
            let resp = listing_envelope(Action::Ingest, CommandOutcome::Payload(text));
            proptest::prop_assert!(resp.success);
            proptest::prop_assert_eq!(&resp.files, &expected);
            if expected.is_empty() {
                proptest::prop_assert_eq!(resp.message, "No files available for ingestion.");
            } else {
                let want = format!("{} file(s) available for ingestion.", expected.len());
                proptest::prop_assert_eq!(resp.message, want);
            }
        }

        #[test]
        fn proptest_failed_listing_never_has_items(
            message in ".{0,40}",
            code in 1i32..255,
        ) {
            let outcome = CommandOutcome::Failure { message, code };
            let resp = listing_envelope(Action::Accession, outcome);
            proptest::prop_assert!(!resp.success);
            proptest::prop_assert!(resp.files.is_empty());
            proptest::prop_assert!(!resp.message.trim().is_empty());
        }
    }
}
