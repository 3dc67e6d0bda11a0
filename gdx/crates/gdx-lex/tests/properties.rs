//! Property tests for the scanner.

use gdx_lex::{scan_source, LexErrorKind, TokenKind, KEYWORDS};
use proptest::prelude::*;

/// Fragments that always scan cleanly on their own.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        "[0-9][0-9_]{0,6}(\\.[0-9][0-9_]{0,4})?",
        "\"[a-z #]{0,10}\"",
        "'[a-z ]{0,10}'",
        "r\"[a-z]{0,8}\"",
        "&\"[a-z]{0,8}\"",
        "\"\"\"[a-z\n]{0,10}\"\"\"",
        Just("**=".to_string()),
        Just("<<=".to_string()),
        Just(">>".to_string()),
        Just("&&".to_string()),
        Just("||".to_string()),
        Just("!=".to_string()),
        Just("(".to_string()),
        Just("]".to_string()),
        Just(".".to_string()),
        Just("# note\n".to_string()),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("\n"), Just("\t"), Just("\r\n")]
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec((fragment(), separator()), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, sep)| fragment + sep)
            .collect()
    })
}

proptest! {
    #[test]
    fn scanning_never_panics(source in "\\PC{0,200}") {
        let _ = scan_source(&source);
    }

    #[test]
    fn scanning_is_idempotent(source in program()) {
        let first = scan_source(&source);
        let second = scan_source(&source);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn token_lines_never_decrease(source in program()) {
        let tokens = scan_source(&source).unwrap();
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
        if let Some(last) = tokens.last() {
            let newlines = source.matches('\n').count() as u32;
            prop_assert!(last.line <= newlines + 1);
        }
    }

    #[test]
    fn unknown_characters_are_reported(prefix in "[a-z ]{0,10}", bad in "[?@$:;{}`\\\\]") {
        let source = format!("{}{}", prefix, bad);
        let err = scan_source(&source).unwrap_err();
        let expected = bad.chars().next().unwrap();
        prop_assert_eq!(err.kind, LexErrorKind::UnknownToken(expected));
        prop_assert_eq!(err.span.start.offset, prefix.len());
    }

    #[test]
    fn numbers_drop_separators(digits in "[0-9][0-9_]{0,10}") {
        let tokens = scan_source(&digits).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].lexeme, &digits.replace('_', ""));
    }

    #[test]
    fn identifiers_round_trip(name in "[a-zA-Z_][a-zA-Z0-9_]{0,16}") {
        let tokens = scan_source(&name).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].lexeme, &name);
        let is_keyword = KEYWORDS.iter().any(|(spelling, _)| *spelling == name);
        prop_assert_eq!(tokens[0].kind == TokenKind::Identifier, !is_keyword);
    }
}
