//! Core types for the SDA admin command gateway.
//!
//! Defines how an admin-tool invocation is built, how its raw output is
//! classified, and the JSON envelopes returned to API callers. Nothing in
//! this crate performs I/O.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod command;
pub mod envelope;
pub mod error;
pub mod execution;
pub mod id;
pub mod validate;

pub use command::{Action, CommandSpec, CONFIG_FLAG};
pub use envelope::{
    listing_envelope, message_envelope, split_items, ListResponse, MessageResponse,
    PublicKeyResponse, GENERIC_ERROR_MESSAGE,
};
pub use error::CoreError;
pub use execution::{CapturedOutput, CommandOutcome, LAUNCH_FAILURE_CODE};
pub use id::InvocationId;
pub use validate::validate_argument;
