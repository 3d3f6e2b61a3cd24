//! Start-up configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use sda_executor::{RunnerConfig, DEFAULT_TIMEOUT};

use crate::error::GatewayError;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5100";
pub const DEFAULT_ADMIN_SCRIPT: &str = "./scripts/sda-admin";
pub const DEFAULT_SDA_CONFIG: &str = "s3cmd.conf";
pub const DEFAULT_SHARED_DIR: &str = "/shared";

/// How the single-item accession and dataset endpoints render results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseMode {
    /// `{success, message}`, same as `POST /sda/ingest`.
    #[default]
    Normalized,
    /// Bare JSON string on success, `{success, output, code}` on failure.
    Raw,
}

impl std::str::FromStr for ResponseMode {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normalized" => Ok(ResponseMode::Normalized),
            "raw" => Ok(ResponseMode::Raw),
            other => Err(GatewayError::Config(format!(
                "SDA_RESPONSE_MODE must be 'normalized' or 'raw', got '{other}'"
            ))),
        }
    }
}

/// Everything the gateway needs, built once in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub listen_addr: String,
    pub runner: RunnerConfig,
    pub shared_dir: PathBuf,
    pub response_mode: ResponseMode,
}

impl GatewayConfig {
    /// Read the configuration from process environment variables.
    ///
    /// # Errors
    /// Returns [`GatewayError::Config`] if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `SDA_LISTEN_ADDR` | `0.0.0.0:5100` |
    /// | `SDA_ADMIN_SCRIPT` | `./scripts/sda-admin` |
    /// | `SDA_CONFIG` | `s3cmd.conf` |
    /// | `SDA_SHARED_DIR` | `/shared` |
    /// | `SDA_COMMAND_TIMEOUT_SECS` | `300` |
    /// | `SDA_RESPONSE_MODE` | `normalized` |
    ///
    /// # Errors
    /// Returns [`GatewayError::Config`] if the timeout is not a positive
    /// integer or the response mode is unknown.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GatewayError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let timeout = match lookup("SDA_COMMAND_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT,
        };
        let response_mode = match lookup("SDA_RESPONSE_MODE") {
            Some(raw) => raw.parse()?,
            None => ResponseMode::default(),
        };

        let runner = RunnerConfig::new(
            PathBuf::from(var("SDA_ADMIN_SCRIPT", DEFAULT_ADMIN_SCRIPT)),
            PathBuf::from(var("SDA_CONFIG", DEFAULT_SDA_CONFIG)),
        )
        .with_timeout(timeout);

        Ok(Self {
            listen_addr: var("SDA_LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            runner,
            shared_dir: PathBuf::from(var("SDA_SHARED_DIR", DEFAULT_SHARED_DIR)),
            response_mode,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, GatewayError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(GatewayError::Config(format!(
            "SDA_COMMAND_TIMEOUT_SECS must be a positive integer, got '{raw}'"
        ))),
    }
}
