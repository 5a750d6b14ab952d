//! Available subcommands.

use clap::{Subcommand, ValueEnum};

/// How health results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// One JSON document per collection cycle
    Json,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List the devices configured in SBD_DEVICE
    Devices,

    /// Probe every configured device once and report its health
    ///
    /// Exits 0 when all devices are healthy and 1 when any is not.
    Check {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Probe devices periodically until interrupted (Ctrl-C)
    Watch {
        /// Seconds between collection cycles
        #[arg(
            short,
            long,
            default_value_t = 30,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        interval: u64,

        /// Abort a cycle that takes longer than this many seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}
