//! Command-line adapter for the SBD device health reporter.
//!
//! `main.rs` is the composition root; this library holds the argument
//! parser, the bootstrap that wires runtime adapters into the core
//! collector, the command handlers and their presentation helpers.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, OutputFormat};
pub use error::CliError;
pub use parser::Cli;
