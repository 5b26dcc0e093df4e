//! CLI command implementations
//!
//! `serve` builds the tokio runtime, constructs the HTTP server from the
//! parsed arguments, and blocks on the serving loop.

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Start the HTTP server and block until it exits
pub fn serve(host: String, port: u16) -> CliResult<()> {
    let config = HttpServerConfig::with_addr(host, port);
    let server = HttpServer::with_config(config);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    runtime.block_on(server.start())?;
    Ok(())
}
