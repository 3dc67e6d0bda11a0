//! Serve command implementation.
//!
//! Runs the language server over stdin and stdout until the client sends
//! `exit` or closes the input.

use std::io;

use gdx_lsp::Server;
use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// Runs the server and returns its exit status.
pub fn run_serve(config: &Config) -> Result<i32> {
    let server_config = config.server_config();
    info!(
        name = %server_config.name,
        source = %server_config.diagnostic_source,
        "starting language server on stdio"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut server = Server::new(stdin.lock(), stdout.lock(), server_config);
    Ok(server.run()?)
}
