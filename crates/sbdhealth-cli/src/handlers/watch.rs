//! Watch command handler.
//!
//! Runs the health monitor until Ctrl-C, printing one block per cycle.

use std::time::Duration;

use futures_util::StreamExt;
use sbdhealth_runtime::SbdHealthMonitor;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::bootstrap::CliContext;
use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::presentation::render_event;

/// Execute the watch command.
///
/// # Arguments
///
/// * `ctx` - The CLI context providing the collector
/// * `interval_secs` - Seconds between cycle starts (must be non-zero)
/// * `timeout_secs` - Optional per-cycle timeout
/// * `format` - Output format for each cycle
pub async fn execute(
    ctx: &CliContext,
    interval_secs: u64,
    timeout_secs: Option<u64>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let cancel_token = CancellationToken::new();

    let mut monitor = SbdHealthMonitor::new(
        ctx.collector().clone(),
        Duration::from_secs(interval_secs),
        cancel_token.clone(),
    );
    if let Some(secs) = timeout_secs {
        monitor = monitor.with_cycle_timeout(Duration::from_secs(secs));
    }

    let ctrl_c_token = cancel_token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            return;
        }
        info!("Interrupted, stopping SBD health monitor");
        ctrl_c_token.cancel();
    });

    let mut events = Box::pin(monitor.monitor());
    while let Some(event) = events.next().await {
        // Table blocks already end with a newline; the extra one separates cycles.
        println!("{}", render_event(&event, format)?);
    }

    Ok(())
}
