//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Configuration source (file-backed, via sbdhealth-runtime)
//! - Device probe (`sbd` command, via sbdhealth-runtime)
//! - Collector service (via sbdhealth-core)

use std::path::PathBuf;
use std::sync::Arc;

use sbdhealth_core::{ParseOptions, SbdHealthCollector};
use sbdhealth_runtime::{
    DEFAULT_SBD_BINARY, DEFAULT_SBD_CONFIG_PATH, FileConfigSource, SbdDumpProbe,
};
use tracing::debug;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Path to the SBD configuration file.
    pub config_path: PathBuf,
    /// Path or name of the `sbd` utility.
    pub sbd_binary: PathBuf,
    /// How `SBD_DEVICE` is extracted.
    pub parse_options: ParseOptions,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_SBD_CONFIG_PATH),
            sbd_binary: PathBuf::from(DEFAULT_SBD_BINARY),
            parse_options: ParseOptions::default(),
        }
    }

    /// Resolve config from parsed arguments (flags and environment).
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            sbd_binary: cli.sbd_binary.clone(),
            parse_options: ParseOptions {
                skip_commented_lines: cli.skip_commented_lines,
            },
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    collector: SbdHealthCollector,
    config: CliConfig,
}

impl CliContext {
    /// Access the collector.
    pub const fn collector(&self) -> &SbdHealthCollector {
        &self.collector
    }

    /// Access the resolved configuration.
    pub const fn config(&self) -> &CliConfig {
        &self.config
    }
}

/// Bootstrap the CLI context from configuration.
pub fn bootstrap(config: CliConfig) -> CliContext {
    debug!(
        config = %config.config_path.display(),
        sbd = %config.sbd_binary.display(),
        skip_commented_lines = config.parse_options.skip_commented_lines,
        "Bootstrapping sbdhealth"
    );

    let source = Arc::new(FileConfigSource::new(config.config_path.clone()));
    let probe = Arc::new(SbdDumpProbe::new(config.sbd_binary.clone()));
    let collector =
        SbdHealthCollector::new(source, probe).with_parse_options(config.parse_options);

    CliContext { collector, config }
}
