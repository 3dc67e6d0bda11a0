//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use gdx_util::{Position, Span};

use crate::cursor::Cursor;
use crate::error::{LexErrorKind, LexResult, LexicalError};
use crate::token::{Token, TokenKind};

/// Lexer for GDScript source.
///
/// The lexer transforms source text into a stream of tokens. It handles
/// whitespace, comments, identifiers, keywords, operators and literals, and
/// stops at the first lexical error.
///
/// # Example
///
/// ```
/// use gdx_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("var x = 1");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Var);
/// assert_eq!(lexer.next_token().unwrap().lexeme, "x");
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Where the current token starts.
    pub(crate) token_start: Position,

    /// Whether the BOM (Byte Order Mark) has been checked.
    pub(crate) bom_checked: bool,

    /// Set once `Eof` or an error has been produced by the iterator.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: Position::START,
            bom_checked: false,
            done: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character. At the end of input this returns an `Eof` token with an
    /// empty lexeme, and keeps doing so on later calls.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.snapshot();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof));
        }

        let token = match self.cursor.peek() {
            '(' => self.lex_single(TokenKind::LParen),
            ')' => self.lex_single(TokenKind::RParen),
            '[' => self.lex_single(TokenKind::LBracket),
            ']' => self.lex_single(TokenKind::RBracket),
            ',' => self.lex_single(TokenKind::Comma),
            '.' => self.lex_single(TokenKind::Period),
            '~' => self.lex_single(TokenKind::Tilde),
            '-' => self.lex_minus(),
            '+' => self.lex_plus(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '/' => self.lex_slash(),
            '*' => self.lex_star(),
            '%' => self.lex_percent(),
            '|' => self.lex_pipe(),
            '>' => self.lex_greater(),
            '<' => self.lex_less(),
            '^' => self.lex_caret(),
            '&' => return self.lex_ampersand(),
            '"' | '\'' => return self.lex_string(TokenKind::String),
            'r' if matches!(self.cursor.peek_next(), '"' | '\'') => {
                self.cursor.advance();
                return self.lex_string(TokenKind::RawString);
            },
            c if c.is_ascii_digit() => self.lex_number(),
            c if super::is_ident_start(c) => self.lex_identifier(),
            c => {
                self.cursor.advance();
                return Err(self.error(LexErrorKind::UnknownToken(c)));
            },
        };

        Ok(token)
    }

    /// Scans the whole source.
    ///
    /// Returns every token in source order, without the trailing `Eof`, or
    /// the first lexical error. On error no tokens are returned.
    ///
    /// # Example
    ///
    /// ```
    /// use gdx_lex::{Lexer, TokenKind};
    ///
    /// let tokens = Lexer::new("a += 1").scan_tokens().unwrap();
    /// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    /// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::PlusEqual, TokenKind::Number]);
    ///
    /// assert!(Lexer::new("a ? b").scan_tokens().is_err());
    /// ```
    pub fn scan_tokens(self) -> LexResult<Vec<Token>> {
        self.collect()
    }

    /// Consumes one character and produces a token of `kind`.
    pub(crate) fn lex_single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Builds a token whose lexeme is the source text of the current token.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        let lexeme = self.cursor.slice_from(self.token_start.offset);
        Token::new(kind, lexeme, self.token_start.line)
    }

    /// Builds a token with an explicit lexeme.
    pub(crate) fn make_token_with(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(kind, lexeme, self.token_start.line)
    }

    /// Builds an error spanning from the token start to the cursor.
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexicalError {
        LexicalError::new(kind, Span::new(self.token_start, self.cursor.snapshot()))
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (0-based, UTF-16 code units).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Yields tokens up to, but not including, `Eof`.
///
/// After an error has been yielded the iterator is exhausted.
impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.done = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            },
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
