//! Fuzz target: JSON request bodies and argument validation.
//!
//! Arbitrary bytes are parsed as a request body; any string field that
//! passes validation must be non-empty and must not look like an option.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sda_core::validate_argument;

fuzz_target!(|data: &[u8]| {
    let Ok(serde_json::Value::Object(body)) = serde_json::from_slice::<serde_json::Value>(data)
    else {
        return;
    };
    for (field, value) in &body {
        if let Some(text) = value.as_str() {
            if let Ok(arg) = validate_argument(field, text) {
                assert!(!arg.is_empty());
                assert!(!arg.starts_with('-'));
            }
        }
    }
});
