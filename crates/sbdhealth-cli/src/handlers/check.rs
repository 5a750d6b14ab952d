//! Check command handler.
//!
//! Runs a single collection cycle and prints the result.

use crate::bootstrap::CliContext;
use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::presentation::{render_health_json, render_health_table};

/// Execute the check command.
///
/// # Returns
///
/// `Ok(true)` when every configured device is healthy, `Ok(false)` when at
/// least one probe failed. Collection errors are returned as `CliError`.
pub async fn execute(ctx: &CliContext, format: OutputFormat) -> Result<bool, CliError> {
    let snapshot = ctx.collector().collect().await?;

    match format {
        OutputFormat::Table => print!("{}", render_health_table(&snapshot)),
        OutputFormat::Json => println!("{}", render_health_json(&snapshot)?),
    }

    Ok(snapshot.devices.all_healthy())
}
