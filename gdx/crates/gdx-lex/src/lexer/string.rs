//! String literal lexing.
//!
//! Quoted, raw (`r"..."`) and StringName (`&"..."`) literals share one core.
//! The caller consumes any `r`/`&` prefix first and picks the token kind;
//! everything from the opening delimiter on is handled here. The lexeme is
//! the text strictly between the delimiters. A backslash is ordinary content:
//! the first matching delimiter closes the literal.

use crate::error::{LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

fn triple(quote: char) -> &'static str {
    if quote == '"' {
        "\"\"\""
    } else {
        "'''"
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at its opening delimiter.
    pub fn lex_string(&mut self, kind: TokenKind) -> LexResult<Token> {
        let quote = self.cursor.peek();
        if self.cursor.starts_with(triple(quote)) {
            for _ in 0..3 {
                self.cursor.advance();
            }
            self.lex_triple_quoted(quote, kind)
        } else {
            self.cursor.advance();
            self.lex_single_line(quote, kind)
        }
    }

    /// Lexes the body of a `"""` or `'''` literal.
    ///
    /// Newlines are part of the content.
    fn lex_triple_quoted(&mut self, quote: char, kind: TokenKind) -> LexResult<Token> {
        let content_start = self.cursor.position();
        let closing = triple(quote);

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedTripleString));
            }

            if self.cursor.starts_with(closing) {
                let content = self.cursor.slice_from(content_start);
                for _ in 0..3 {
                    self.cursor.advance();
                }
                return Ok(self.make_token_with(kind, content));
            }

            self.cursor.advance();
        }
    }

    /// Lexes the body of a single-line literal.
    fn lex_single_line(&mut self, quote: char, kind: TokenKind) -> LexResult<Token> {
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedString));
            }

            match self.cursor.peek() {
                '\n' => return Err(self.error(LexErrorKind::UnterminatedStringNewline)),
                c if c == quote => {
                    let content = self.cursor.slice_from(content_start);
                    self.cursor.advance();
                    return Ok(self.make_token_with(kind, content));
                },
                _ => {
                    self.cursor.advance();
                },
            }
        }
    }
}
