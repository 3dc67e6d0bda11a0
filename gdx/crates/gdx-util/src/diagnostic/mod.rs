//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! # Examples
//!
//! ```
//! use gdx_util::diagnostic::{DiagnosticBuilder, Handler};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(DiagnosticBuilder::error("unknown token '?'").build());
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Rendered source line, when the source was at hand
    pub snippet: Option<SourceSnippet>,
}

impl Diagnostic {
    /// Attach a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    /// Renders like `Display`, with the level painted in its ANSI color.
    pub fn to_colored_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_to(&mut out, true);
        out
    }

    fn write_to(&self, out: &mut impl fmt::Write, color: bool) -> fmt::Result {
        write!(out, "{}:{}: ", self.span.start.line, self.span.start.column + 1)?;
        if color {
            write!(out, "\x1b[1;{}m{}", self.level.color_code(), self.level)?;
        } else {
            write!(out, "{}", self.level)?;
        }
        if let Some(code) = self.code {
            write!(out, "[{}]", code)?;
        }
        if color {
            write!(out, "\x1b[0m")?;
        }
        write!(out, ": {}", self.message)?;
        for note in &self.notes {
            write!(out, "\n  = note: {}", note)?;
        }
        if let Some(ref snippet) = self.snippet {
            write!(out, "\n{}", snippet.format())?;
        }
        Ok(())
    }
}

/// Renders as `line:column: level[code]: message`, then notes and snippet.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, false)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The handler only collects; printing is left to the front end.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_warning())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    fn unknown_token() -> Diagnostic {
        let span = Span::new(Position::new(10, 2, 4), Position::new(11, 2, 5));
        DiagnosticBuilder::error("unknown token '?'")
            .code(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN)
            .span(span)
            .note("remove the character")
            .build()
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());

        handler.emit_diagnostic(DiagnosticBuilder::error("e1").build());
        handler.emit_diagnostic(DiagnosticBuilder::new(Level::Warning, "w1").build());
        handler.emit_diagnostic(DiagnosticBuilder::error("e2").build());

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_display_with_code_and_note() {
        assert_eq!(
            unknown_token().to_string(),
            "2:5: error[E1001]: unknown token '?'\n  = note: remove the character"
        );
    }

    #[test]
    fn test_display_without_code() {
        let diag = DiagnosticBuilder::new(Level::Warning, "odd").build();
        assert_eq!(diag.to_string(), "1:1: warning: odd");
    }

    #[test]
    fn test_colored_paints_level_and_code() {
        assert_eq!(
            unknown_token().to_colored_string(),
            "2:5: \x1b[1;31merror[E1001]\x1b[0m: unknown token '?'\n  = note: remove the character"
        );

        let warning = DiagnosticBuilder::new(Level::Warning, "odd").build();
        assert_eq!(warning.to_colored_string(), "1:1: \x1b[1;33mwarning\x1b[0m: odd");
    }
}
