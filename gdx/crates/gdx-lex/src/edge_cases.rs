//! Edge case tests for gdx-lex
