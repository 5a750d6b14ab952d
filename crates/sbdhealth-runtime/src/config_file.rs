//! File-backed SBD configuration source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sbdhealth_core::ports::{ConfigSourcePort, SbdError};
use tracing::debug;

/// Location of the SBD configuration on SUSE and Red Hat systems.
pub const DEFAULT_SBD_CONFIG_PATH: &str = "/etc/sysconfig/sbd";

/// Reads the whole SBD configuration file on every call.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigSource {
    fn default() -> Self {
        Self::new(DEFAULT_SBD_CONFIG_PATH)
    }
}

#[async_trait]
impl ConfigSourcePort for FileConfigSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, SbdError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SbdError::config_unavailable(self.describe(), e))?;
        debug!(path = %self.path.display(), bytes = raw.len(), "Read SBD configuration");
        Ok(raw)
    }
}
