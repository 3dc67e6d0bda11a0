//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for rendering the
//! offending source line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Level};
use crate::span::Span;

/// A source code snippet for display in diagnostics
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (0-based)
    pub start_column: usize,
    /// Column where the issue ends (0-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Build a snippet for the first line covered by `span`.
    ///
    /// When the span runs past the end of its first line, the highlight is
    /// clipped to the end of that line. Returns `None` if the span's line is
    /// not in `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gdx_util::diagnostic::SourceSnippet;
    /// use gdx_util::span::{Position, Span};
    ///
    /// let source = "var a = 1\nvar b = ?\n";
    /// let span = Span::new(Position::new(18, 2, 8), Position::new(19, 2, 9));
    /// let snippet = SourceSnippet::from_span(source, span).unwrap();
    /// assert_eq!(snippet.line, "var b = ?");
    /// assert_eq!(snippet.start_column, 8);
    /// ```
    pub fn from_span(source: &str, span: Span) -> Option<Self> {
        let index = (span.start.line as usize).checked_sub(1)?;
        let line = source.lines().nth(index)?;
        let line_len = line.encode_utf16().count();
        let start_column = (span.start.column as usize).min(line_len);
        let end_column = if span.is_single_line() {
            (span.end.column as usize).clamp(start_column, line_len.max(start_column))
        } else {
            line_len
        };

        Some(Self {
            line: line.to_string(),
            line_number: span.start.line as usize,
            start_column,
            end_column,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed with its line number, followed by a
    /// caret line pointing at the highlighted range.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = width));

        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(self.start_column));
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use gdx_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use gdx_util::span::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unterminated string")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::DUMMY)
///     .note("the literal was opened here")
///     .build();
/// assert_eq!(diag.notes.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic at the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            snippet: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::new(Level::Warning, "w").build();
        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.span, Span::DUMMY);
        assert!(diag.code.is_none());
        assert!(diag.notes.is_empty());
        assert!(diag.snippet.is_none());
    }

    #[test]
    fn test_builder_collects_notes_in_order() {
        let diag = DiagnosticBuilder::error("boom")
            .code(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN)
            .note("first")
            .note("second")
            .build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN));
        assert_eq!(diag.notes, ["first", "second"]);
    }

    #[test]
    fn test_snippet_format() {
        let snippet = SourceSnippet {
            line: "var s = \"abc".to_string(),
            line_number: 12,
            start_column: 8,
            end_column: 12,
        };
        let formatted = snippet.format();
        let mut lines = formatted.lines();
        assert_eq!(lines.next(), Some(" 12 | var s = \"abc"));
        assert_eq!(lines.next(), Some("    |         ^^^^"));
    }

    #[test]
    fn test_snippet_from_multiline_span_clips_to_line() {
        let source = "var s = \"\"\"abc\nmore";
        let span = Span::new(Position::new(8, 1, 8), Position::new(19, 2, 4));
        let snippet = SourceSnippet::from_span(source, span).unwrap();
        assert_eq!(snippet.line, "var s = \"\"\"abc");
        assert_eq!(snippet.start_column, 8);
        assert_eq!(snippet.end_column, 14);
    }

    #[test]
    fn test_snippet_from_span_out_of_range() {
        let span = Span::point(Position::new(0, 9, 0));
        assert!(SourceSnippet::from_span("one line", span).is_none());
    }
}
