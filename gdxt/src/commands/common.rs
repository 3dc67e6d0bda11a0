//! Helpers shared by the commands.

use std::path::Path;

use gdx_lex::LexicalError;
use gdx_util::{Diagnostic, SourceSnippet};

use crate::error::Result;

/// Reads a script into memory.
pub fn read_source(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Builds the diagnostic for `err`, with the offending line attached.
pub fn lex_diagnostic(source: &str, err: &LexicalError) -> Diagnostic {
    let diagnostic = err.to_diagnostic();
    match SourceSnippet::from_span(source, err.span) {
        Some(snippet) => diagnostic.with_snippet(snippet),
        None => diagnostic,
    }
}

/// Renders a diagnostic as `path:line:col: level[code]: message`.
///
/// With `color` the level is painted by its ANSI color.
pub fn render(path: &Path, diagnostic: &Diagnostic, color: bool) -> String {
    if color {
        format!("{}:{}", path.display(), diagnostic.to_colored_string())
    } else {
        format!("{}:{}", path.display(), diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_snippet() {
        let source = "var a = 1\nvar b = ?\n";
        let err = gdx_lex::scan_source(source).unwrap_err();
        let rendered = render(Path::new("main.gd"), &lex_diagnostic(source, &err), false);

        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some("main.gd:2:9: error[E1001]: unknown token '?'")
        );
        assert_eq!(lines.next(), Some("  2 | var b = ?"));
        assert_eq!(lines.next(), Some("    |         ^"));
    }

    #[test]
    fn test_render_colored() {
        let source = "var s = 'open\nprint(s)\n";
        let err = gdx_lex::scan_source(source).unwrap_err();
        let rendered = render(Path::new("main.gd"), &lex_diagnostic(source, &err), true);

        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some("main.gd:1:9: \x1b[1;31merror[E1004]\x1b[0m: unterminated string due to newline")
        );
        assert_eq!(
            lines.next(),
            Some("  = note: use a triple-quoted string for text spanning lines")
        );
        assert_eq!(lines.next(), Some("  1 | var s = 'open"));
    }

    #[test]
    fn test_read_missing_source() {
        assert!(read_source(Path::new("/nonexistent/main.gd")).is_err());
    }
}
