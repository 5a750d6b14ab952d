//! Main CLI parser and top-level argument handling.
//!
//! Global options select where the SBD configuration and the `sbd` binary
//! live. Each can also be set through the environment (a `.env` file in
//! the working directory is loaded first).

use std::path::PathBuf;

use clap::Parser;
use sbdhealth_runtime::{DEFAULT_SBD_BINARY, DEFAULT_SBD_CONFIG_PATH};

use crate::commands::Commands;

/// Report the health of SBD fencing devices.
#[derive(Parser)]
#[command(name = "sbdhealth")]
#[command(about = "Report read/write health of SBD (STONITH Block Device) devices")]
#[command(version)]
pub struct Cli {
    /// Path to the SBD configuration file
    #[arg(
        long = "config",
        env = "SBDHEALTH_CONFIG",
        default_value = DEFAULT_SBD_CONFIG_PATH,
        global = true
    )]
    pub config: PathBuf,

    /// Path or name of the sbd utility used to probe devices
    #[arg(
        long = "sbd-binary",
        env = "SBDHEALTH_SBD_BINARY",
        default_value = DEFAULT_SBD_BINARY,
        global = true
    )]
    pub sbd_binary: PathBuf,

    /// Ignore lines starting with '#' when looking for SBD_DEVICE
    #[arg(long = "skip-commented-lines", global = true)]
    pub skip_commented_lines: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "sbdhealth",
            "--verbose",
            "--config",
            "/tmp/sbd",
            "--sbd-binary",
            "/usr/sbin/sbd",
            "check",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("/tmp/sbd"));
        assert_eq!(cli.sbd_binary, PathBuf::from("/usr/sbin/sbd"));
        assert!(matches!(
            cli.command,
            Some(Commands::Check {
                format: OutputFormat::Table
            })
        ));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["sbdhealth", "devices", "--skip-commented-lines"]);
        assert!(cli.skip_commented_lines);
        assert!(matches!(cli.command, Some(Commands::Devices)));
    }

    #[test]
    fn test_watch_args() {
        let cli = Cli::parse_from([
            "sbdhealth",
            "watch",
            "--interval",
            "5",
            "--timeout",
            "20",
            "--format",
            "json",
        ]);
        match cli.command {
            Some(Commands::Watch {
                interval,
                timeout,
                format,
            }) => {
                assert_eq!(interval, 5);
                assert_eq!(timeout, Some(20));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected watch command"),
        }
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let result = Cli::try_parse_from(["sbdhealth", "watch", "--interval", "0"]);
        assert!(result.is_err());
    }
}
