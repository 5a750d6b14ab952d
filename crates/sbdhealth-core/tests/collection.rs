//! Integration tests for a full collection cycle through the public API.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sbdhealth_core::{
    DeviceProbeError, DeviceProbePort, InMemoryConfigSource, SbdError, SbdHealthCollector,
    parse_sbd_devices, probe_all,
};

/// Probe that fails for a fixed set of devices and remembers call order.
struct RecordingProbe {
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingProbe {
    fn failing(devices: &[&str]) -> Self {
        Self {
            failing: devices.iter().map(|d| (*d).to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeviceProbePort for RecordingProbe {
    async fn probe(&self, device: &str) -> Result<(), DeviceProbeError> {
        self.calls.lock().unwrap().push(device.to_string());
        if self.failing.contains(device) {
            Err(DeviceProbeError::Failed {
                device: device.to_string(),
                status: "exit status: 1".to_string(),
                detail: String::new(),
            })
        } else {
            Ok(())
        }
    }
}

#[tokio::test]
async fn test_typical_sysconfig_file() {
    let raw = "\
## Type: string
## Default: \"\"
SBD_PACEMAKER=yes
SBD_STARTMODE=always
SBD_DEVICE=\"/dev/disk/by-id/scsi-a;/dev/disk/by-id/scsi-b\"
SBD_WATCHDOG_DEV=/dev/watchdog
";
    let probe = Arc::new(RecordingProbe::failing(&["/dev/disk/by-id/scsi-b"]));
    let collector = SbdHealthCollector::new(Arc::new(InMemoryConfigSource::new(raw)), probe.clone());

    let snapshot = collector.collect().await.unwrap();

    assert_eq!(
        probe.calls(),
        vec!["/dev/disk/by-id/scsi-a", "/dev/disk/by-id/scsi-b"]
    );
    assert_eq!(snapshot.devices.get("/dev/disk/by-id/scsi-a"), Some(true));
    assert_eq!(snapshot.devices.get("/dev/disk/by-id/scsi-b"), Some(false));
}

#[tokio::test]
async fn test_every_device_gets_an_entry() {
    let devices = parse_sbd_devices(b"SBD_DEVICE=\"/dev/a;/dev/b;/dev/c\"").unwrap();
    let probe = RecordingProbe::failing(&["/dev/a", "/dev/b", "/dev/c"]);

    let health = probe_all(&devices, &probe).await.unwrap();

    assert_eq!(health.len(), devices.len());
    assert_eq!(health.healthy_count(), 0);
}

#[tokio::test]
async fn test_collection_rereads_configuration_each_cycle() {
    let probe = Arc::new(RecordingProbe::failing(&[]));
    let first = SbdHealthCollector::new(
        Arc::new(InMemoryConfigSource::new("SBD_DEVICE=/dev/a")),
        probe.clone(),
    );
    let second = SbdHealthCollector::new(
        Arc::new(InMemoryConfigSource::new("SBD_DEVICE=/dev/b")),
        probe.clone(),
    );

    first.collect().await.unwrap();
    second.collect().await.unwrap();
    first.collect().await.unwrap();

    assert_eq!(probe.calls(), vec!["/dev/a", "/dev/b", "/dev/a"]);
}

#[tokio::test]
async fn test_missing_assignment_is_distinct_from_empty_list() {
    let probe = Arc::new(RecordingProbe::failing(&[]));
    let collector =
        SbdHealthCollector::new(Arc::new(InMemoryConfigSource::new("# nothing here\n")), probe);

    assert_eq!(
        collector.collect().await.unwrap_err(),
        SbdError::NoDeviceConfigured
    );
    assert_eq!(
        probe_all(&[], &RecordingProbe::failing(&[])).await.unwrap_err(),
        SbdError::NoDevicesProbed
    );
}
