//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: functions here turn domain values into
//! strings and never run probes or read configuration.

pub mod health;

pub use health::{
    display_device, render_device_list, render_event, render_health_json, render_health_table,
};
