//! Lexical errors.
//!
//! Every error is fatal to the scan that produced it. The error records the
//! line and span of the offending construct, measured from where the
//! construct starts: for an unterminated literal that is the opening
//! delimiter (or its `r`/`&` prefix), not the point where input ran out.

use gdx_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A single-line string reached the end of input
    #[error("unterminated string")]
    UnterminatedString,

    /// A triple-quoted string reached the end of input
    #[error("unterminated triple-quoted string")]
    UnterminatedTripleString,

    /// A single-line string hit a raw newline before its closing quote
    #[error("unterminated string due to newline")]
    UnterminatedStringNewline,

    /// A character that starts no token
    #[error("unknown token '{0}'")]
    UnknownToken(char),
}

impl LexErrorKind {
    /// Returns the diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnknownToken(_) => DiagnosticCode::E_LEXER_UNKNOWN_TOKEN,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexErrorKind::UnterminatedTripleString => {
                DiagnosticCode::E_LEXER_UNTERMINATED_TRIPLE_STRING
            },
            LexErrorKind::UnterminatedStringNewline => {
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING_NEWLINE
            },
        }
    }

    /// Returns a hint for fixing the error, if there is one.
    pub fn note(&self) -> Option<&'static str> {
        match self {
            LexErrorKind::UnterminatedStringNewline => {
                Some("use a triple-quoted string for text spanning lines")
            },
            _ => None,
        }
    }
}

/// A lexical error with its location.
///
/// # Example
///
/// ```
/// use gdx_lex::{scan_source, LexErrorKind};
///
/// let err = scan_source("var x = ?").unwrap_err();
/// assert_eq!(err.kind, LexErrorKind::UnknownToken('?'));
/// assert_eq!(err.line, 1);
/// assert_eq!(err.to_string(), "lexical error at line 1: unknown token '?'");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("lexical error at line {line}: {kind}")]
pub struct LexicalError {
    /// What went wrong
    pub kind: LexErrorKind,
    /// Line of the offending construct (1-based)
    pub line: u32,
    /// From the start of the construct to the point of failure
    pub span: Span,
}

impl LexicalError {
    /// Creates an error located at `span`.
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self {
            kind,
            line: span.start.line,
            span,
        }
    }

    /// Returns the message without the location prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Converts this error into a diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::from(self)
    }
}

impl From<&LexicalError> for Diagnostic {
    fn from(err: &LexicalError) -> Self {
        let builder = DiagnosticBuilder::error(err.message())
            .code(err.kind.code())
            .span(err.span);
        match err.kind.note() {
            Some(note) => builder.note(note).build(),
            None => builder.build(),
        }
    }
}

/// Result type for scanning.
pub type LexResult<T> = Result<T, LexicalError>;
