//! CLI module
//!
//! Provides the command-line interface:
//! - serve: start the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, serve};
pub use errors::{CliError, CliResult};
