//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and token construction
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - Quoted, raw and StringName literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Whitespace and comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
pub use identifier::{is_ident_continue, is_ident_start};
