//! Lex command implementation.
//!
//! Prints one token per line as `line:Kind "lexeme"`, or the whole stream
//! as a JSON array with `--json`.

use std::io::Write;
use std::path::PathBuf;

use gdx_lex::{scan_source, Token};
use tracing::debug;

use crate::commands::common::{lex_diagnostic, read_source, render};
use crate::error::{GdxtError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Script to scan.
    pub file: PathBuf,
    /// Print JSON instead of one token per line.
    pub json: bool,
    /// Color the level of a reported error.
    pub color: bool,
}

/// Scans `args.file` and prints its tokens to stdout.
///
/// A lexical error is printed to stderr and nothing goes to stdout.
pub fn run_lex(args: LexArgs) -> Result<()> {
    let source = read_source(&args.file)?;

    let tokens = match scan_source(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            let diagnostic = lex_diagnostic(&source, &err);
            eprintln!("{}", render(&args.file, &diagnostic, args.color));
            return Err(GdxtError::LexFailed(1));
        },
    };
    debug!(file = %args.file.display(), tokens = tokens.len(), "scanned");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_tokens(&mut out, &tokens, args.json)?;
    Ok(())
}

/// Writes tokens in the selected format.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, tokens)?;
        writeln!(out)?;
    } else {
        for token in tokens {
            writeln!(out, "{}", token)?;
        }
    }
    Ok(())
}
