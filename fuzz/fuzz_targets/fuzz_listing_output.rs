//! Fuzz target: classification of arbitrary admin-tool output.
//!
//! Whatever the tool prints, a listing must classify without panicking,
//! every item must be trimmed and non-empty, and a failed listing must
//! carry no items.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sda_core::{listing_envelope, Action, CapturedOutput};

fuzz_target!(|data: &[u8]| {
    let Some((&status, rest)) = data.split_first() else {
        return;
    };
    let (stdout, stderr) = rest.split_at(rest.len() / 2);
    let captured = CapturedOutput::new(
        Some(i32::from(status % 3)),
        String::from_utf8_lossy(stdout),
        String::from_utf8_lossy(stderr),
    );

    let resp = listing_envelope(Action::Ingest, captured.into_outcome());
    assert!(resp.files.iter().all(|f| !f.is_empty() && f.trim() == f));
    if resp.success {
        if !resp.files.is_empty() {
            assert!(resp.message.starts_with(&resp.files.len().to_string()));
        }
    } else {
        assert!(resp.files.is_empty());
    }
});
