//! Token definitions and the keyword table.
//!
//! A [`Token`] pairs a [`TokenKind`] with its lexeme and the line it starts
//! on. For literals the lexeme is the decoded value: quotes and prefixes are
//! removed, numeric separators are stripped, escape sequences are kept as
//! written.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

/// The category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // ==================== LITERALS ====================
    /// A name that is not a keyword
    Identifier,
    /// `"..."`, `'...'` and their triple-quoted forms
    String,
    /// `r"..."` and `r'...'`
    RawString,
    /// `&"..."` and `&'...'`
    StringName,
    /// Decimal number, with an optional fractional part
    Number,

    // ==================== KEYWORDS ====================
    /// `if`
    If,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `for`
    For,
    /// `while`
    While,
    /// `match`
    Match,
    /// `when`
    When,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `pass`
    Pass,
    /// `return`
    Return,
    /// `class`
    Class,
    /// `class_name`
    ClassName,
    /// `extends`
    Extends,
    /// `is`
    Is,
    /// `in`
    In,
    /// `as`
    As,
    /// `self`
    SelfKw,
    /// `super`
    Super,
    /// `signal`
    Signal,
    /// `func`
    Func,
    /// `static`
    Static,
    /// `const`
    Const,
    /// `enum`
    Enum,
    /// `var`
    Var,
    /// `breakpoint`
    Breakpoint,
    /// `preload`
    Preload,
    /// `await`
    Await,
    /// `yield`
    Yield,
    /// `assert`
    Assert,
    /// `void`
    Void,
    /// `PI`
    Pi,
    /// `TAU`
    Tau,
    /// `INF`
    Inf,
    /// `NAN`
    Nan,

    // ==================== SINGLE CHARACTER ====================
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `.`
    Period,
    /// `~`
    Tilde,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `=`
    Equals,
    /// `!`
    Bang,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `%`
    Percent,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `,`
    Comma,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `^`
    Caret,

    // ==================== COMPOUND ====================
    /// `==`
    EqualsEquals,
    /// `!=`
    NotEqual,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// `>>`
    ShiftRight,
    /// `<<`
    ShiftLeft,
    /// `&&`
    BooleanAnd,
    /// `||`
    BooleanOr,
    /// `+=`
    PlusEqual,
    /// `-=`
    MinusEqual,
    /// `*=`
    TimesEqual,
    /// `/=`
    DivideEqual,
    /// `**=`
    PowerEqual,
    /// `%=`
    ModEqual,
    /// `&=`
    AndEqual,
    /// `|=`
    OrEqual,
    /// `^=`
    XorEqual,
    /// `>>=`
    ShiftRightEqual,
    /// `<<=`
    ShiftLeftEqual,
    /// `**`
    Power,

    // ==================== SPECIAL ====================
    /// End of input
    Eof,
}

/// Every keyword spelling, in declaration order.
///
/// The constants `PI`, `TAU`, `INF` and `NAN` share the table with the
/// reserved words. Lookups are case-sensitive.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("if", TokenKind::If),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("match", TokenKind::Match),
    ("when", TokenKind::When),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("pass", TokenKind::Pass),
    ("return", TokenKind::Return),
    ("class", TokenKind::Class),
    ("class_name", TokenKind::ClassName),
    ("extends", TokenKind::Extends),
    ("is", TokenKind::Is),
    ("in", TokenKind::In),
    ("as", TokenKind::As),
    ("self", TokenKind::SelfKw),
    ("super", TokenKind::Super),
    ("signal", TokenKind::Signal),
    ("func", TokenKind::Func),
    ("static", TokenKind::Static),
    ("const", TokenKind::Const),
    ("enum", TokenKind::Enum),
    ("var", TokenKind::Var),
    ("breakpoint", TokenKind::Breakpoint),
    ("preload", TokenKind::Preload),
    ("await", TokenKind::Await),
    ("yield", TokenKind::Yield),
    ("assert", TokenKind::Assert),
    ("void", TokenKind::Void),
    ("PI", TokenKind::Pi),
    ("TAU", TokenKind::Tau),
    ("INF", TokenKind::Inf),
    ("NAN", TokenKind::Nan),
];

lazy_static! {
    static ref KEYWORD_MAP: FxHashMap<&'static str, TokenKind> =
        KEYWORDS.iter().copied().collect();
}

/// Looks up `ident` in the keyword table.
///
/// # Example
///
/// ```
/// use gdx_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("class_name"), Some(TokenKind::ClassName));
/// assert_eq!(keyword_from_ident("Func"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORD_MAP.get(ident).copied()
}

/// Iterates over `(spelling, kind)` pairs of the keyword table.
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().copied()
}

impl TokenKind {
    /// Returns true for reserved words and named constants.
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }

    /// Returns true for identifier, string and number kinds.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::String
                | TokenKind::RawString
                | TokenKind::StringName
                | TokenKind::Number
        )
    }

    /// Returns the fixed spelling of punctuation, operators and keywords.
    ///
    /// Literals and `Eof` have no fixed spelling.
    pub fn as_str(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Period => ".",
            TokenKind::Tilde => "~",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Equals => "=",
            TokenKind::Bang => "!",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Percent => "%",
            TokenKind::Ampersand => "&",
            TokenKind::Pipe => "|",
            TokenKind::Comma => ",",
            TokenKind::Greater => ">",
            TokenKind::Less => "<",
            TokenKind::Caret => "^",
            TokenKind::EqualsEquals => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::GreaterOrEqual => ">=",
            TokenKind::LessOrEqual => "<=",
            TokenKind::ShiftRight => ">>",
            TokenKind::ShiftLeft => "<<",
            TokenKind::BooleanAnd => "&&",
            TokenKind::BooleanOr => "||",
            TokenKind::PlusEqual => "+=",
            TokenKind::MinusEqual => "-=",
            TokenKind::TimesEqual => "*=",
            TokenKind::DivideEqual => "/=",
            TokenKind::PowerEqual => "**=",
            TokenKind::ModEqual => "%=",
            TokenKind::AndEqual => "&=",
            TokenKind::OrEqual => "|=",
            TokenKind::XorEqual => "^=",
            TokenKind::ShiftRightEqual => ">>=",
            TokenKind::ShiftLeftEqual => "<<=",
            TokenKind::Power => "**",
            kind => {
                return KEYWORDS
                    .iter()
                    .find(|(_, k)| k == kind)
                    .map(|(spelling, _)| *spelling)
            },
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A scanned token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// Source text, or the decoded value for literals
    pub lexeme: String,
    /// Line the token starts on (1-based)
    pub line: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// Returns true for the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders as `line:Kind "lexeme"`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {:?}", self.line, self.kind, self.lexeme)
    }
}
