//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It advances by whole
//! UTF-8 characters and tracks the line number (1-based) and the column
//! (0-based, in UTF-16 code units) of the next character.

use gdx_util::Position;

/// A cursor for traversing source code character by character.
///
/// Lookahead past the end of the source yields `'\0'`; callers that need to
/// tell a NUL character apart from the end use [`Cursor::is_at_end`].
///
/// # Example
///
/// ```
/// use gdx_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
///
/// assert_eq!(cursor.peek(), 'v');
/// assert_eq!(cursor.advance(), 'v');
/// assert_eq!(cursor.peek(), 'a');
/// assert_eq!(cursor.peek_next(), 'r');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (0-based, UTF-16 code units).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 0,
        }
    }

    /// Returns true if the cursor is at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use gdx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current character, or `'\0'` at the end.
    #[inline]
    pub fn peek(&self) -> char {
        match self.source.as_bytes().get(self.position) {
            None => '\0',
            Some(&b) if b < 128 => b as char,
            Some(_) => self.remaining().chars().next().unwrap_or('\0'),
        }
    }

    /// Returns the character after the current one, or `'\0'`.
    #[inline]
    pub fn peek_next(&self) -> char {
        self.peek_nth(1)
    }

    /// Returns the character `n` characters ahead (0 = current), or `'\0'`.
    ///
    /// # Example
    ///
    /// ```
    /// use gdx_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("\"\"\"doc");
    /// assert_eq!(cursor.peek_nth(2), '"');
    /// assert_eq!(cursor.peek_nth(3), 'd');
    /// assert_eq!(cursor.peek_nth(40), '\0');
    /// ```
    pub fn peek_nth(&self, n: usize) -> char {
        self.remaining().chars().nth(n).unwrap_or('\0')
    }

    /// Consumes and returns the current character.
    ///
    /// Returns `'\0'` without moving if already at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use gdx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 0);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> char {
        let c = match self.remaining().chars().next() {
            Some(c) => c,
            None => return '\0',
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += c.len_utf16() as u32;
        }
        c
    }

    /// Consumes the current character only if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use gdx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.peek(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.peek()) {
            self.advance();
        }
    }

    /// Returns true if the unconsumed source begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (0-based, UTF-16 code units).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the full position of the next character.
    #[inline]
    pub fn snapshot(&self) -> Position {
        Position::new(self.position, self.line, self.column)
    }

    /// Returns the source from byte offset `start` up to the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use gdx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("func _ready");
    /// cursor.eat_while(|c| c.is_alphabetic());
    /// assert_eq!(cursor.slice_from(0), "func");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("var x = 42");
        assert_eq!(cursor.peek(), 'v');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 0);
    }

    #[test]
    fn test_advance_returns_consumed_char() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.advance(), 'a');
        assert_eq!(cursor.advance(), 'b');
        assert_eq!(cursor.advance(), 'c');
        assert_eq!(cursor.advance(), '\0');
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_peek_sentinels() {
        let mut cursor = Cursor::new("a");
        assert_eq!(cursor.peek(), 'a');
        assert_eq!(cursor.peek_next(), '\0');
        cursor.advance();
        assert_eq!(cursor.peek(), '\0');
        assert_eq!(cursor.peek_next(), '\0');
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("größe");
        assert_eq!(cursor.advance(), 'g');
        assert_eq!(cursor.advance(), 'r');
        assert_eq!(cursor.peek(), 'ö');
        assert_eq!(cursor.peek_next(), 'ß');
        cursor.advance();
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_column_counts_utf16_units() {
        let mut cursor = Cursor::new("😀x");
        cursor.advance();
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.peek(), 'x');
    }

    #[test]
    fn test_match_char_at_end() {
        let mut cursor = Cursor::new("");
        assert!(!cursor.match_char('\0'));
        assert!(!cursor.match_char('='));
    }

    #[test]
    fn test_nul_is_not_end() {
        let cursor = Cursor::new("\0");
        assert_eq!(cursor.peek(), '\0');
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd\n\ne");
        cursor.eat_while(|c| c != 'e');
        assert_eq!(cursor.line(), 4);
        assert_eq!(cursor.column(), 0);
        assert_eq!(cursor.snapshot(), Position::new(7, 4, 0));
    }

    #[test]
    fn test_eat_while_and_slice() {
        let mut cursor = Cursor::new("3_500.25");
        cursor.eat_while(|c| c.is_ascii_digit() || c == '_');
        assert_eq!(cursor.slice_from(0), "3_500");
        assert_eq!(cursor.remaining(), ".25");
    }

    #[test]
    fn test_starts_with() {
        let mut cursor = Cursor::new("x'''");
        cursor.advance();
        assert!(cursor.starts_with("'''"));
        assert!(!cursor.starts_with("\"\"\""));
    }
}
