//! Rendering of device lists, health snapshots and monitor events.

use std::fmt::Write as _;

use sbdhealth_core::HealthSnapshot;
use sbdhealth_runtime::MonitorEvent;

use crate::commands::OutputFormat;
use crate::error::CliError;

const TABLE_WIDTH: usize = 60;

/// Display form of a device identifier; empty identifiers are made visible.
pub fn display_device(device: &str) -> &str {
    if device.is_empty() { "<empty>" } else { device }
}

/// One device per line, in configuration order.
pub fn render_device_list(devices: &[String]) -> String {
    let mut out = String::new();
    for device in devices {
        out.push_str(display_device(device));
        out.push('\n');
    }
    out
}

/// Human-readable table of a snapshot, sorted by device.
pub fn render_health_table(snapshot: &HealthSnapshot) -> String {
    let health = &snapshot.devices;
    let mut out = String::new();

    let _ = writeln!(out, "{:<45} {}", "DEVICE", "STATUS");
    let _ = writeln!(out, "{}", "=".repeat(TABLE_WIDTH));
    for (device, healthy) in health.iter() {
        let status = if healthy { "healthy" } else { "UNHEALTHY" };
        let _ = writeln!(out, "{:<45} {}", display_device(device), status);
    }
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));
    let _ = writeln!(
        out,
        "{} device(s): {} healthy, {} unhealthy (collected {})",
        health.len(),
        health.healthy_count(),
        health.unhealthy_count(),
        snapshot.collected_at.to_rfc3339()
    );
    out
}

/// Snapshot as a single-line JSON document.
pub fn render_health_json(snapshot: &HealthSnapshot) -> Result<String, CliError> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Render one monitor event in the requested format.
pub fn render_event(event: &MonitorEvent, format: OutputFormat) -> Result<String, CliError> {
    match (event, format) {
        (MonitorEvent::Collected(snapshot), OutputFormat::Table) => {
            Ok(render_health_table(snapshot))
        }
        (MonitorEvent::Collected(snapshot), OutputFormat::Json) => render_health_json(snapshot),
        (MonitorEvent::Failed(err), OutputFormat::Table) => {
            Ok(format!("collection failed: {err}\n"))
        }
        (MonitorEvent::Failed(err), OutputFormat::Json) => {
            Ok(serde_json::json!({ "error": err.to_string() }).to_string())
        }
        (MonitorEvent::TimedOut { after }, OutputFormat::Table) => Ok(format!(
            "collection timed out after {}s\n",
            after.as_secs()
        )),
        (MonitorEvent::TimedOut { after }, OutputFormat::Json) => Ok(serde_json::json!({
            "error": "timeout",
            "timeoutSecs": after.as_secs(),
        })
        .to_string()),
    }
}
