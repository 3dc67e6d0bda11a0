//! Comment lexing.
//!
//! This module handles skipping whitespace and `#` line comments.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Newlines emit no token; the cursor bumps the line counter as it
    /// passes them. A leading byte-order mark is skipped once.
    pub fn skip_whitespace_and_comments(&mut self) {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.starts_with("\u{FEFF}") {
                self.cursor.advance();
            }
        }

        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.peek() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '#' => self.skip_line_comment(),
                _ => return,
            }
        }
    }

    /// Skips a line comment up to, not including, the newline.
    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}
