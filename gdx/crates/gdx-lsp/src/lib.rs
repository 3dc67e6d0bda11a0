//! gdx-lsp - Editor protocol backend for GDScript
//!
//! This crate serves the language server protocol over any byte stream:
//! documents are re-scanned with [`gdx_lex`] on every open or change and
//! the first lexical error, if any, is published as a diagnostic. Keyword
//! completion is offered from the lexer's keyword table.
//!
//! # Module Structure
//!
//! - [`rpc`] - `Content-Length` framing
//! - [`protocol`] - Protocol message types
//! - [`server`] - The message loop and dispatch
//! - [`state`] - Open documents and lifecycle
//! - [`diagnostics`] - Scan results to published diagnostics
//! - [`completion`] - Keyword completion items
//! - [`project`] - `project.godot` reader
//! - [`uri`] - File URIs
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use gdx_lsp::{rpc, Server, ServerConfig};
//!
//! let input = [
//!     rpc::encode_message(&serde_json::json!({"jsonrpc": "2.0", "id": 1, "method": "shutdown"})).unwrap(),
//!     rpc::encode_message(&serde_json::json!({"jsonrpc": "2.0", "method": "exit"})).unwrap(),
//! ]
//! .concat();
//!
//! let mut server = Server::new(Cursor::new(input.into_bytes()), Vec::new(), ServerConfig::default());
//! assert_eq!(server.run().unwrap(), 0);
//! ```

#![warn(missing_docs)]

pub mod completion;
pub mod diagnostics;
pub mod error;
pub mod project;
pub mod protocol;
pub mod rpc;
pub mod server;
pub mod state;
pub mod uri;

pub use error::{LspError, LspResult, ProjectError, RpcError, UriError};
pub use project::{InputConfig, ProjectFile};
pub use server::{Control, Server, ServerConfig};
pub use state::ServerState;
pub use uri::FileUri;
