//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

/// Returns true if `c` can start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// The whole run is looked up in the keyword table; anything not found
    /// is an `Identifier`.
    pub fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.token_start.offset);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        self.make_token_with(kind, text)
    }
}
