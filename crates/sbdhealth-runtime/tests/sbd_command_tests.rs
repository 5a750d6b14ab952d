//! End-to-end tests against a stand-in `sbd` script.
//!
//! The script accepts `-d <device> dump` and succeeds only for devices whose
//! path starts with `/dev/good`, mimicking a header read that fails on
//! unreachable storage.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sbdhealth_core::ports::DeviceProbePort;
use sbdhealth_core::{SbdError, SbdHealthCollector};
use sbdhealth_runtime::{FileConfigSource, SbdDumpProbe};
use tempfile::TempDir;

const FAKE_SBD: &str = r#"#!/bin/sh
[ "$1" = "-d" ] && [ "$3" = "dump" ] || exit 2
case "$2" in
    /dev/good*) echo "==Dumping header on disk $2"; exit 0 ;;
    *) echo "== disk $2 unreadable!" >&2; exit 1 ;;
esac
"#;

fn write_fake_sbd(dir: &Path) -> PathBuf {
    let path = dir.join("sbd");
    std::fs::write(&path, FAKE_SBD).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("sysconfig-sbd");
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_collect_with_fake_sbd() {
    let dir = TempDir::new().unwrap();
    let sbd = write_fake_sbd(dir.path());
    let config = write_config(
        dir.path(),
        "SBD_STARTMODE=always\nSBD_DEVICE=\"/dev/good-a;/dev/bad-b;/dev/good-c\"\n",
    );

    let collector = SbdHealthCollector::new(
        Arc::new(FileConfigSource::new(config)),
        Arc::new(SbdDumpProbe::new(sbd.clone())),
    );
    let snapshot = collector.collect().await.unwrap();

    assert_eq!(snapshot.devices.len(), 3);
    assert_eq!(snapshot.devices.get("/dev/good-a"), Some(true));
    assert_eq!(snapshot.devices.get("/dev/bad-b"), Some(false));
    assert_eq!(snapshot.devices.get("/dev/good-c"), Some(true));
    assert_eq!(snapshot.devices.unhealthy_devices(), vec!["/dev/bad-b"]);

    // Failure detail carries the first stderr line.
    let err = SbdDumpProbe::new(sbd)
        .probe("/dev/bad-b")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("unreadable"));
}

#[tokio::test]
async fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let collector = SbdHealthCollector::new(
        Arc::new(FileConfigSource::new(dir.path().join("absent"))),
        Arc::new(SbdDumpProbe::new("true")),
    );

    let err = collector.collect().await.unwrap_err();
    assert!(matches!(err, SbdError::ConfigUnavailable { .. }));
    assert!(err.to_string().contains("absent"));
}

#[tokio::test]
async fn test_missing_sbd_binary_marks_devices_unhealthy() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "SBD_DEVICE=/dev/good-a\n");
    let collector = SbdHealthCollector::new(
        Arc::new(FileConfigSource::new(config)),
        Arc::new(SbdDumpProbe::new(dir.path().join("no-sbd-here"))),
    );

    let snapshot = collector.collect().await.unwrap();
    assert_eq!(snapshot.devices.get("/dev/good-a"), Some(false));
}
