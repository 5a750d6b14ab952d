//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<_, CliError>`
//! - Thin wrappers that:
//!   1. Call the collector from the context
//!   2. Format output for the terminal through `presentation`
//!
//! Handlers should NOT read configuration or spawn probes themselves.

pub mod check;
pub mod devices;
pub mod watch;
