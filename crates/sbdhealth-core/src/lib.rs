//! Core of the SBD device health reporter.
//!
//! Holds the domain types, the ports through which configuration and
//! device probes are injected, the `SBD_DEVICE` parser and the health
//! aggregation services. Process execution and filesystem access live
//! in `sbdhealth-runtime`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod parser;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{DeviceList, HealthMap, HealthSnapshot};
pub use parser::{ParseOptions, parse_sbd_devices, parse_sbd_devices_with};
pub use ports::{
    ConfigSourcePort, DeviceProbeError, DeviceProbePort, InMemoryConfigSource, SbdError,
};
pub use services::{SbdHealthCollector, probe_all};
