//! Devices command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_device_list;

/// Print the configured device list without probing.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let devices = ctx.collector().devices().await?;
    print!("{}", render_device_list(&devices));
    Ok(())
}
