//! gdx-util - Shared foundation types for the gdx toolchain
//!
//! This crate holds the small set of types every other gdx crate agrees on:
//!
//! - [`span`] - source positions and spans produced by the lexer
//! - [`diagnostic`] - severity levels, diagnostic codes, the [`Diagnostic`]
//!   record, a fluent [`DiagnosticBuilder`] and the collecting [`Handler`]
//!
//! # Example
//!
//! ```
//! use gdx_util::{DiagnosticBuilder, DiagnosticCode, Handler, Position, Span};
//!
//! let start = Position::new(0, 1, 0);
//! let end = Position::new(1, 1, 1);
//!
//! let handler = Handler::new();
//! let diagnostic = DiagnosticBuilder::error("unknown token '?'")
//!     .code(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN)
//!     .span(Span::new(start, end))
//!     .build();
//! handler.emit_diagnostic(diagnostic);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::{Position, Span};
