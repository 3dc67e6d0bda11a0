//! Operator and punctuation lexing.
//!
//! Every match is greedy: the longest matching form wins.

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes the operator's first character, then takes `=` if present.
    fn lex_with_equal(&mut self, plain: TokenKind, with_equal: TokenKind) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            with_equal
        } else {
            plain
        };
        self.make_token(kind)
    }

    /// Handles: `-`, `-=`
    pub fn lex_minus(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Minus, TokenKind::MinusEqual)
    }

    /// Handles: `+`, `+=`
    pub fn lex_plus(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Plus, TokenKind::PlusEqual)
    }

    /// Handles: `=`, `==`
    pub fn lex_equals(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Equals, TokenKind::EqualsEquals)
    }

    /// Handles: `!`, `!=`
    pub fn lex_bang(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Bang, TokenKind::NotEqual)
    }

    /// Handles: `/`, `/=`
    pub fn lex_slash(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Slash, TokenKind::DivideEqual)
    }

    /// Handles: `%`, `%=`
    pub fn lex_percent(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Percent, TokenKind::ModEqual)
    }

    /// Handles: `^`, `^=`
    pub fn lex_caret(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Caret, TokenKind::XorEqual)
    }

    /// Lexes star, power, or their assignment forms.
    ///
    /// Handles: `*`, `*=`, `**`, `**=`
    pub fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('*') {
            if self.cursor.match_char('=') {
                TokenKind::PowerEqual
            } else {
                TokenKind::Power
            }
        } else if self.cursor.match_char('=') {
            TokenKind::TimesEqual
        } else {
            TokenKind::Star
        };
        self.make_token(kind)
    }

    /// Handles: `|`, `||`, `|=`
    pub fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('|') {
            TokenKind::BooleanOr
        } else if self.cursor.match_char('=') {
            TokenKind::OrEqual
        } else {
            TokenKind::Pipe
        };
        self.make_token(kind)
    }

    /// Handles: `>`, `>=`, `>>`, `>>=`
    pub fn lex_greater(&mut self) -> Token {
        self.lex_comparison(
            '>',
            TokenKind::Greater,
            TokenKind::GreaterOrEqual,
            TokenKind::ShiftRight,
            TokenKind::ShiftRightEqual,
        )
    }

    /// Handles: `<`, `<=`, `<<`, `<<=`
    pub fn lex_less(&mut self) -> Token {
        self.lex_comparison(
            '<',
            TokenKind::Less,
            TokenKind::LessOrEqual,
            TokenKind::ShiftLeft,
            TokenKind::ShiftLeftEqual,
        )
    }

    fn lex_comparison(
        &mut self,
        c: char,
        plain: TokenKind,
        or_equal: TokenKind,
        shift: TokenKind,
        shift_equal: TokenKind,
    ) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            or_equal
        } else if self.cursor.match_char(c) {
            if self.cursor.match_char('=') {
                shift_equal
            } else {
                shift
            }
        } else {
            plain
        };
        self.make_token(kind)
    }

    /// Lexes an ampersand, boolean-and, and-assign, or a StringName literal.
    ///
    /// Handles: `&`, `&&`, `&=`, `&"..."`, `&'...'`
    pub fn lex_ampersand(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        let kind = match self.cursor.peek() {
            '"' | '\'' => return self.lex_string(TokenKind::StringName),
            '&' => TokenKind::BooleanAnd,
            '=' => TokenKind::AndEqual,
            _ => return Ok(self.make_token(TokenKind::Ampersand)),
        };
        self.cursor.advance();
        Ok(self.make_token(kind))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .scan_tokens()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(
            kinds("== != >= <="),
            [
                TokenKind::EqualsEquals,
                TokenKind::NotEqual,
                TokenKind::GreaterOrEqual,
                TokenKind::LessOrEqual,
            ]
        );
    }

    #[test]
    fn test_assignments() {
        assert_eq!(
            kinds("+= -= * /"),
            [TokenKind::PlusEqual, TokenKind::MinusEqual, TokenKind::Star, TokenKind::Slash]
        );
        assert_eq!(
            kinds("*= /= %= &= |= ^="),
            [
                TokenKind::TimesEqual,
                TokenKind::DivideEqual,
                TokenKind::ModEqual,
                TokenKind::AndEqual,
                TokenKind::OrEqual,
                TokenKind::XorEqual,
            ]
        );
    }

    #[test]
    fn test_power() {
        assert_eq!(kinds("**"), [TokenKind::Power]);
        assert_eq!(kinds("**="), [TokenKind::PowerEqual]);
        assert_eq!(kinds("***"), [TokenKind::Power, TokenKind::Star]);
    }

    #[test]
    fn test_shifts() {
        assert_eq!(
            kinds(">> << >>= <<="),
            [
                TokenKind::ShiftRight,
                TokenKind::ShiftLeft,
                TokenKind::ShiftRightEqual,
                TokenKind::ShiftLeftEqual,
            ]
        );
        assert_eq!(kinds(">>>"), [TokenKind::ShiftRight, TokenKind::Greater]);
    }

    #[test]
    fn test_logical() {
        assert_eq!(
            kinds("&& || & | ! ~"),
            [
                TokenKind::BooleanAnd,
                TokenKind::BooleanOr,
                TokenKind::Ampersand,
                TokenKind::Pipe,
                TokenKind::Bang,
                TokenKind::Tilde,
            ]
        );
        assert_eq!(kinds("|||"), [TokenKind::BooleanOr, TokenKind::Pipe]);
    }

    #[test]
    fn test_single_characters() {
        assert_eq!(
            kinds("- + = / % , > < ^ ."),
            [
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Equals,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Comma,
                TokenKind::Greater,
                TokenKind::Less,
                TokenKind::Caret,
                TokenKind::Period,
            ]
        );
    }

    #[test]
    fn test_operator_lexemes() {
        let tokens = Lexer::new("a <<= b").scan_tokens().unwrap();
        assert_eq!(tokens[1].lexeme, "<<=");
        let tokens = Lexer::new("**=").scan_tokens().unwrap();
        assert_eq!(tokens[0].lexeme, "**=");
    }

    #[test]
    fn test_adjacent_without_spaces() {
        assert_eq!(
            kinds("a==-b"),
            [
                TokenKind::Identifier,
                TokenKind::EqualsEquals,
                TokenKind::Minus,
                TokenKind::Identifier,
            ]
        );
    }
}
