//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use std::io;

use thiserror::Error;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to build the async runtime
    #[error("runtime error: {0}")]
    Runtime(String),

    /// The server failed to bind or serve
    #[error("server error: {0}")]
    Server(#[from] io::Error),
}
