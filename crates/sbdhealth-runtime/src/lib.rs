//! OS-level adapters for the SBD device health reporter.
//!
//! - [`FileConfigSource`] reads the SBD sysconfig file
//! - [`SbdDumpProbe`] probes a device by running `sbd -d <device> dump`
//! - [`SbdHealthMonitor`] drives collection cycles on a fixed interval

#![deny(unsafe_code)]

mod config_file;
pub mod monitor;
mod probe;

pub use config_file::{DEFAULT_SBD_CONFIG_PATH, FileConfigSource};
pub use monitor::{MonitorEvent, SbdHealthMonitor};
pub use probe::{DEFAULT_SBD_BINARY, SbdDumpProbe};
