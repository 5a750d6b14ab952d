//! CLI-specific error types and mappings.
//!
//! This module maps `SbdError` to exit codes and user-facing messages.

use sbdhealth_core::SbdError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The SBD configuration could not be read.
    #[error("{0}")]
    ConfigUnavailable(String),

    /// The SBD configuration has no usable SBD_DEVICE assignment.
    #[error("{0}")]
    NotConfigured(String),

    /// Unexpected internal state.
    #[error("{0}")]
    Internal(String),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(String),

    /// Output could not be rendered.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h:
    /// - 66: configuration file missing or unreadable (EX_NOINPUT)
    /// - 70: internal software error (EX_SOFTWARE)
    /// - 74: output error (EX_IOERR)
    /// - 78: configuration error (EX_CONFIG)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigUnavailable(_) => 66,
            Self::Internal(_) => 70,
            Self::Io(_) | Self::Output(_) => 74,
            Self::NotConfigured(_) => 78,
        }
    }
}

impl From<SbdError> for CliError {
    fn from(err: SbdError) -> Self {
        let msg = err.to_string();
        match err {
            SbdError::ConfigUnavailable { .. } => Self::ConfigUnavailable(msg),
            SbdError::NoDeviceConfigured => Self::NotConfigured(msg),
            SbdError::NoDevicesProbed => Self::Internal(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbd_errors_map_to_distinct_exit_codes() {
        let unavailable: CliError = SbdError::config_unavailable("/etc/sysconfig/sbd", "denied").into();
        let not_configured: CliError = SbdError::NoDeviceConfigured.into();
        let not_probed: CliError = SbdError::NoDevicesProbed.into();

        assert_eq!(unavailable.exit_code(), 66);
        assert_eq!(not_configured.exit_code(), 78);
        assert_eq!(not_probed.exit_code(), 70);
    }

    #[test]
    fn test_message_is_preserved() {
        let err: CliError = SbdError::config_unavailable("/etc/sysconfig/sbd", "denied").into();
        assert!(err.to_string().contains("/etc/sysconfig/sbd"));
    }

    #[test]
    fn test_io_error_mapping() {
        let err: CliError = std::io::Error::other("broken pipe").into();
        assert_eq!(err.exit_code(), 74);
    }
}
