//! Serves the archive's Crypt4GH public key from the shared directory.

use std::path::{Path, PathBuf};

use sda_core::PublicKeyResponse;

/// File name of the public key inside the shared directory.
pub const PUBLIC_KEY_FILE: &str = "c4gh.pub.pem";

/// Reads the public key file on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyReader {
    path: PathBuf,
}

impl PublicKeyReader {
    /// Reader for an explicit key file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reader for `<shared_dir>/c4gh.pub.pem`.
    #[must_use]
    pub fn from_shared_dir(shared_dir: &Path) -> Self {
        Self::new(shared_dir.join(PUBLIC_KEY_FILE))
    }

    /// Path of the key file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the key; failures become an unsuccessful response carrying the
    /// I/O diagnostic.
    pub async fn read(&self) -> PublicKeyResponse {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(key) => PublicKeyResponse::loaded(key),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "public key unavailable");
                PublicKeyResponse::unavailable(format!("{}: {e}", self.path.display()))
            }
        }
    }
}
