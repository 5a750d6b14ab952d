//! Device probe port.
//!
//! A probe is a single external action that tests whether one SBD device is
//! currently reachable. Only the outcome matters to the core; the error
//! variants exist so adapters can log something useful.

use async_trait::async_trait;
use thiserror::Error;

/// Errors a single device probe can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceProbeError {
    /// The probe could not be started at all (missing binary, permissions).
    #[error("Failed to launch probe for {device}: {reason}")]
    Launch { device: String, reason: String },

    /// The probe ran and reported failure.
    #[error("Probe for {device} failed ({status}): {detail}")]
    Failed {
        device: String,
        status: String,
        detail: String,
    },
}

impl DeviceProbeError {
    /// The device this error refers to.
    pub fn device(&self) -> &str {
        match self {
            Self::Launch { device, .. } | Self::Failed { device, .. } => device,
        }
    }
}

/// Port for probing a single SBD device.
///
/// Implementations must terminate; the core imposes no timeout of its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceProbePort: Send + Sync {
    /// Probe `device`, returning `Ok(())` when it is reachable.
    async fn probe(&self, device: &str) -> Result<(), DeviceProbeError>;
}
