//! Runs the `sda-admin` tool and shapes its output for the HTTP gateway.
//!
//! [`AdminService`] maps each admin operation to one tool invocation through
//! the [`CommandRunner`] seam; [`ProcessRunner`] is the real subprocess
//! implementation. [`PublicKeyReader`] serves the archive public key.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod config;
pub mod error;
pub mod process;
pub mod public_key;
pub mod service;

pub use backend::CommandRunner;
pub use config::{RunnerConfig, DEFAULT_TIMEOUT};
pub use error::ExecutorError;
pub use process::ProcessRunner;
pub use public_key::{PublicKeyReader, PUBLIC_KEY_FILE};
pub use service::AdminService;
