//! Health map and per-cycle snapshot.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-device health of one collection cycle.
///
/// `true` means the device probe succeeded. Every probed device has exactly
/// one entry; recording the same device twice keeps the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthMap(BTreeMap<String, bool>);

impl HealthMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `device`, overwriting any earlier entry.
    pub fn record(&mut self, device: impl Into<String>, healthy: bool) {
        self.0.insert(device.into(), healthy);
    }

    /// Health of `device`, or `None` if it was never probed.
    pub fn get(&self, device: &str) -> Option<bool> {
        self.0.get(device).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(device, healthy)` pairs sorted by device.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(device, healthy)| (device.as_str(), *healthy))
    }

    pub fn healthy_count(&self) -> usize {
        self.0.values().filter(|healthy| **healthy).count()
    }

    pub fn unhealthy_count(&self) -> usize {
        self.len() - self.healthy_count()
    }

    /// True when every recorded device is healthy.
    pub fn all_healthy(&self) -> bool {
        self.0.values().all(|healthy| *healthy)
    }

    /// Devices whose probe failed, sorted.
    pub fn unhealthy_devices(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, healthy)| !healthy)
            .map(|(device, _)| device)
            .collect()
    }
}

impl FromIterator<(String, bool)> for HealthMap {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of a single collection cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    /// Health per configured device.
    pub devices: HealthMap,
    /// When the cycle finished.
    pub collected_at: DateTime<Utc>,
}

impl HealthSnapshot {
    /// Wrap a health map, stamping it with the current time.
    pub fn new(devices: HealthMap) -> Self {
        Self {
            devices,
            collected_at: Utc::now(),
        }
    }
}
