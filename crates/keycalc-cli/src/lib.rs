//! keycalc CLI library
//!
//! Command-line front end for the `keycalc` calculator engine. The binary
//! is a thin wrapper; argument types, configuration and handlers live here
//! so they can be tested without spawning a process.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{Cli, Commands, FormatArg, PressArgs};
pub use config::{CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
