//! Aggregation of per-device probe outcomes into a health map.

use tracing::debug;

use crate::domain::HealthMap;
use crate::ports::{DeviceProbePort, SbdError};

/// Probe every device in order and record whether each probe succeeded.
///
/// Probes run one at a time in list order. A failing probe only marks its
/// own device unhealthy; its error detail is logged and dropped. When a
/// device appears more than once, the last outcome is kept.
///
/// Fails with [`SbdError::NoDevicesProbed`] when `devices` is empty.
pub async fn probe_all(
    devices: &[String],
    probe: &dyn DeviceProbePort,
) -> Result<HealthMap, SbdError> {
    let mut health = HealthMap::new();

    for device in devices {
        let healthy = match probe.probe(device).await {
            Ok(()) => true,
            Err(e) => {
                debug!(device = %device, error = %e, "SBD device probe failed");
                false
            }
        };
        health.record(device.as_str(), healthy);
    }

    if health.is_empty() {
        return Err(SbdError::NoDevicesProbed);
    }

    Ok(health)
}
