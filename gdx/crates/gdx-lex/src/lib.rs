//! gdx-lex - Lexical Analyzer for GDScript
//!
//! This crate turns GDScript source text into a flat sequence of tokens for
//! editor tooling. Scanning is all-or-nothing: the result is either every
//! token of the document or the first lexical error.
//!
//! # Example Usage
//!
//! ```
//! use gdx_lex::{scan_source, Lexer, TokenKind};
//!
//! let tokens = scan_source("var speed = 3_000.5").unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[3].lexeme, "3000.5");
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new("extends Node");
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Extends);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical error types
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `elif`, `else`, `for`, `while`, `match`, `when`, `break`,
//! `continue`, `pass`, `return`, `class`, `class_name`, `extends`, `is`, `in`,
//! `as`, `self`, `super`, `signal`, `func`, `static`, `const`, `enum`, `var`,
//! `breakpoint`, `preload`, `await`, `yield`, `assert`, `void`, and the
//! constants `PI`, `TAU`, `INF`, `NAN`.
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14`, `1_000_000`
//! - **String**: `"text"`, `'text'`, `"""text"""`, `'''text'''`
//! - **RawString**: `r"text"`, `r'''text'''`
//! - **StringName**: `&"text"`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`, `**`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Bitwise**: `&`, `|`, `^`, `~`, `<<`, `>>`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`, `**=`, `&=`, `|=`,
//!   `^=`, `<<=`, `>>=`
//! - **Punctuation**: `(`, `)`, `[`, `]`, `,`, `.`
//!
//! `#` starts a comment that runs to the end of the line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexErrorKind, LexResult, LexicalError};
pub use lexer::{is_ident_continue, is_ident_start, Lexer};
pub use token::{keyword_from_ident, keywords, Token, TokenKind, KEYWORDS};

/// Scans a whole document.
///
/// Shorthand for `Lexer::new(source).scan_tokens()`.
pub fn scan_source(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).scan_tokens()
}
