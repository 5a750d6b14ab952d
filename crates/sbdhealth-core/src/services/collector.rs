//! Collector service - one full collection cycle.
//!
//! Reads the configuration, extracts the device list and probes every
//! device. Nothing is cached between cycles, so configuration changes are
//! picked up on the next call.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{DeviceList, HealthSnapshot};
use crate::parser::{ParseOptions, parse_sbd_devices_with};
use crate::ports::{ConfigSourcePort, DeviceProbePort, SbdError};
use crate::services::probe_all;

/// Composes a configuration source and a device probe.
#[derive(Clone)]
pub struct SbdHealthCollector {
    config: Arc<dyn ConfigSourcePort>,
    probe: Arc<dyn DeviceProbePort>,
    options: ParseOptions,
}

impl SbdHealthCollector {
    /// Create a collector with default parse options.
    pub fn new(config: Arc<dyn ConfigSourcePort>, probe: Arc<dyn DeviceProbePort>) -> Self {
        Self {
            config,
            probe,
            options: ParseOptions::default(),
        }
    }

    /// Override how the configuration is parsed.
    #[must_use]
    pub const fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Where the configuration is read from.
    pub fn config_source(&self) -> String {
        self.config.describe()
    }

    /// Read and parse the configuration without probing.
    pub async fn devices(&self) -> Result<DeviceList, SbdError> {
        let raw = self.config.read().await?;
        let devices = parse_sbd_devices_with(&raw, self.options)?;
        debug!(
            source = %self.config.describe(),
            count = devices.len(),
            "Parsed SBD device list"
        );
        Ok(devices)
    }

    /// Run one collection cycle.
    pub async fn collect(&self) -> Result<HealthSnapshot, SbdError> {
        let devices = self.devices().await?;
        let health = probe_all(&devices, self.probe.as_ref()).await?;

        info!(
            devices = health.len(),
            healthy = health.healthy_count(),
            unhealthy = health.unhealthy_count(),
            "SBD device health collected"
        );

        Ok(HealthSnapshot::new(health))
    }
}
