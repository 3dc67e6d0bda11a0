//! Bridge from scan results to published diagnostics.
//!
//! Protocol lines are 0-based while [`gdx_util::Position`] lines are
//! 1-based; columns already share the UTF-16 measure.

use gdx_lex::scan_source;
use tracing::debug;

use crate::protocol::{self, PublishDiagnosticsParams, Range};

/// Converts a source position into a protocol position.
pub fn to_protocol_position(position: gdx_util::Position) -> protocol::Position {
    protocol::Position {
        line: position.zero_based_line(),
        character: position.column,
    }
}

/// Converts a diagnostic into its protocol form, tagged with `source`.
pub fn to_protocol(diagnostic: &gdx_util::Diagnostic, source: &str) -> protocol::Diagnostic {
    protocol::Diagnostic {
        range: Range {
            start: to_protocol_position(diagnostic.span.start),
            end: to_protocol_position(diagnostic.span.end),
        },
        severity: diagnostic.level.severity(),
        code: diagnostic.code.map(|code| code.as_str()),
        source: source.to_string(),
        message: diagnostic.message.clone(),
    }
}

/// Scans `text` and returns zero or one diagnostic.
pub fn diagnose(text: &str, source: &str) -> Vec<protocol::Diagnostic> {
    match scan_source(text) {
        Ok(tokens) => {
            debug!(tokens = tokens.len(), "scan succeeded");
            Vec::new()
        },
        Err(err) => {
            debug!(error = %err, "scan failed");
            vec![to_protocol(&err.to_diagnostic(), source)]
        },
    }
}

/// Builds the `publishDiagnostics` parameters for one document.
pub fn publish_params(uri: &str, text: &str, source: &str) -> PublishDiagnosticsParams {
    PublishDiagnosticsParams {
        uri: uri.to_string(),
        diagnostics: diagnose(text, source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_document() {
        assert!(diagnose("var x = 1", "gdx").is_empty());
    }

    #[test]
    fn test_unknown_token_range() {
        let diagnostics = diagnose("var a = 1\nvar b = ?", "gdx");
        assert_eq!(diagnostics.len(), 1);

        let diagnostic = &diagnostics[0];
        assert_eq!(diagnostic.severity, 1);
        assert_eq!(diagnostic.source, "gdx");
        assert_eq!(diagnostic.message, "unknown token '?'");
        assert_eq!(diagnostic.code.as_deref(), Some("E1001"));
        assert_eq!(
            diagnostic.range.start,
            protocol::Position {
                line: 1,
                character: 8
            }
        );
        assert_eq!(
            diagnostic.range.end,
            protocol::Position {
                line: 1,
                character: 9
            }
        );
    }

    #[test]
    fn test_unterminated_string_range() {
        let diagnostics = diagnose("x = \"abc\ny", "godot");
        let diagnostic = &diagnostics[0];
        assert_eq!(diagnostic.message, "unterminated string due to newline");
        assert_eq!(diagnostic.source, "godot");
        assert_eq!(diagnostic.range.start.line, 0);
        assert_eq!(diagnostic.range.start.character, 4);
        assert_eq!(diagnostic.range.end.character, 8);
    }

    #[test]
    fn test_publish_params() {
        let params = publish_params("file:///a.gd", "pass", "gdx");
        assert_eq!(params.uri, "file:///a.gd");
        assert!(params.diagnostics.is_empty());
    }
}
