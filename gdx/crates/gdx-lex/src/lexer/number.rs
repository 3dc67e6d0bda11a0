//! Number literal lexing.
//!
//! Only decimal literals exist: a run of digits with optional `_`
//! separators, optionally followed by `.` and a fractional run.

use crate::token::{Token, TokenKind};
use crate::Lexer;

#[inline]
fn is_digit_or_separator(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// The `.` is only taken when a digit or `_` follows it. The lexeme has
    /// every `_` removed.
    pub fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(is_digit_or_separator);

        if self.cursor.peek() == '.' && is_digit_or_separator(self.cursor.peek_next()) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit_or_separator);
        }

        let text = self.cursor.slice_from(self.token_start.offset);
        self.make_token_with(TokenKind::Number, text.replace('_', ""))
    }
}
