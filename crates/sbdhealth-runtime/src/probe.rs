//! Device probe backed by the `sbd` command-line utility.
//!
//! `sbd -d <device> dump` reads the on-disk header of an SBD device. The
//! exit status is the only thing consumed; stdout is discarded.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use sbdhealth_core::ports::{DeviceProbeError, DeviceProbePort};
use tokio::process::Command;
use tracing::debug;

/// Binary name resolved through `PATH` when no explicit path is configured.
pub const DEFAULT_SBD_BINARY: &str = "sbd";

/// Probes SBD devices by dumping their header with the `sbd` utility.
#[derive(Debug, Clone)]
pub struct SbdDumpProbe {
    binary: PathBuf,
}

impl SbdDumpProbe {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Default for SbdDumpProbe {
    fn default() -> Self {
        Self::new(DEFAULT_SBD_BINARY)
    }
}

#[async_trait]
impl DeviceProbePort for SbdDumpProbe {
    async fn probe(&self, device: &str) -> Result<(), DeviceProbeError> {
        // kill_on_drop lets a caller-side timeout reap a hung dump.
        let output = Command::new(&self.binary)
            .arg("-d")
            .arg(device)
            .arg("dump")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| DeviceProbeError::Launch {
                device: device.to_string(),
                reason: format!("{}: {}", self.binary.display(), e),
            })?;

        if output.status.success() {
            debug!(device, "sbd dump succeeded");
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(DeviceProbeError::Failed {
            device: device.to_string(),
            status: output.status.to_string(),
            detail: stderr.lines().next().unwrap_or_default().trim().to_string(),
        })
    }
}
