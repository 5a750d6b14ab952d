//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No process or filesystem types in any signature
//! - A probe reports only success or failure; callers never branch on the cause
//! - Errors that end a collection cycle are `SbdError`; per-device failures are not

pub mod config_source;
pub mod device_probe;

use thiserror::Error;

pub use config_source::{ConfigSourcePort, InMemoryConfigSource};
pub use device_probe::{DeviceProbeError, DeviceProbePort};

#[cfg(test)]
pub use device_probe::MockDeviceProbePort;

/// Errors that abort a collection cycle.
///
/// These are returned to the caller unchanged and never retried inside the
/// core. Adapters map them to their own representation (CLI exit codes,
/// monitor events).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SbdError {
    /// The configuration source could not be opened or fully read.
    #[error("Could not read SBD configuration from {source_name}: {reason}")]
    ConfigUnavailable {
        /// Human-readable name of the source (usually a file path).
        source_name: String,
        /// Underlying cause as reported by the adapter.
        reason: String,
    },

    /// The configuration was read but holds no `SBD_DEVICE=` assignment.
    #[error("There is no SBD_DEVICE set in the SBD configuration")]
    NoDeviceConfigured,

    /// Probing was requested for an empty device list.
    #[error("Could not retrieve SBD status: no devices were probed")]
    NoDevicesProbed,
}

impl SbdError {
    /// Build a `ConfigUnavailable` error from any displayable cause.
    pub fn config_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::ConfigUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}
