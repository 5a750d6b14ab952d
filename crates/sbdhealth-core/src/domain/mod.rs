//! Domain types for SBD device health.

mod health;

pub use health::{HealthMap, HealthSnapshot};

/// Ordered device identifiers as they appear in `SBD_DEVICE`.
///
/// Duplicates and empty identifiers are kept; the parser does not validate
/// device paths.
pub type DeviceList = Vec<String>;
