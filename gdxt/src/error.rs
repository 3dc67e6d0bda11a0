//! Error handling module for the gdxt CLI.
//!
//! Library errors are wrapped with `#[from]` so commands can use `?`
//! directly on server and project results. Lexical errors are printed as
//! diagnostics where they occur and only counted here.

use gdx_lsp::{LspError, ProjectError};
use thiserror::Error;

/// Main error type for the gdxt CLI application.
#[derive(Error, Debug)]
pub enum GdxtError {
    /// Error when the configuration cannot be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The language server stopped on a transport failure.
    #[error("Server error: {0}")]
    Lsp(#[from] LspError),

    /// A project descriptor could not be read.
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    /// Scanned files had errors, already reported.
    #[error("{0} file(s) had lexical errors")]
    LexFailed(usize),
}

/// Result type alias using GdxtError.
pub type Result<T> = std::result::Result<T, GdxtError>;
