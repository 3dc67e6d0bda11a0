//! Check command implementation.
//!
//! Scans every file on a rayon pool sized from `--jobs` or `[check] jobs`,
//! then reports failures in the order the files were given.

use std::path::{Path, PathBuf};
use std::time::Instant;

use gdx_lex::scan_source;
use gdx_util::{Diagnostic, Handler};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use crate::commands::common::{lex_diagnostic, read_source, render};
use crate::config::Config;
use crate::error::{GdxtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Scripts to check.
    pub files: Vec<PathBuf>,
    /// Overrides `[check] jobs`.
    pub jobs: Option<usize>,
    /// Report clean files too.
    pub verbose: bool,
    /// Color diagnostic levels.
    pub color: bool,
}

/// Result of checking one file.
#[derive(Debug)]
pub enum Outcome {
    /// Scanned cleanly into this many tokens.
    Clean(usize),
    /// Failed with a lexical error.
    Failed(Diagnostic),
    /// Could not be read.
    Unreadable(String),
}

/// Checks every file and returns the outcomes in input order.
pub fn check_files(files: &[PathBuf], jobs: usize) -> Result<Vec<Outcome>> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(jobs.max(1))
        .build()
        .map_err(|e| GdxtError::Config(format!("Failed to start {} jobs: {}", jobs, e)))?;

    Ok(pool.install(|| files.par_iter().map(|path| check_file(path)).collect()))
}

/// Checks one file.
pub fn check_file(path: &Path) -> Outcome {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => return Outcome::Unreadable(err.to_string()),
    };

    match scan_source(&source) {
        Ok(tokens) => Outcome::Clean(tokens.len()),
        Err(err) => Outcome::Failed(lex_diagnostic(&source, &err)),
    }
}

/// Runs the check command.
///
/// Diagnostics go to stderr. Fails with [`GdxtError::LexFailed`] when any
/// file has an error or cannot be read.
pub fn run_check(args: CheckArgs, config: &Config) -> Result<()> {
    let start_time = Instant::now();
    let jobs = args.jobs.unwrap_or(config.check.jobs);
    let outcomes = check_files(&args.files, jobs)?;

    let handler = Handler::new();
    let mut unreadable = 0;
    for (path, outcome) in args.files.iter().zip(outcomes) {
        match outcome {
            Outcome::Clean(tokens) => {
                debug!(file = %path.display(), tokens, "clean");
                if args.verbose {
                    eprintln!("{}: ok ({} tokens)", path.display(), tokens);
                }
            },
            Outcome::Failed(diagnostic) => {
                eprintln!("{}", render(path, &diagnostic, args.color));
                handler.emit_diagnostic(diagnostic);
            },
            Outcome::Unreadable(reason) => {
                eprintln!("{}: error: {}", path.display(), reason);
                unreadable += 1;
            },
        }
    }

    let failed = handler.error_count() + unreadable;
    info!(
        files = args.files.len(),
        failed,
        warnings = handler.warning_count(),
        jobs,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "check finished"
    );

    if handler.has_errors() || unreadable > 0 {
        return Err(GdxtError::LexFailed(failed));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_check_files_keeps_order() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            write(&dir, "a.gd", "var a = 1\n"),
            write(&dir, "b.gd", "var b = \"open\n"),
            dir.path().join("missing.gd"),
            write(&dir, "c.gd", "func f() -> void\n"),
        ];

        let outcomes = check_files(&files, 2).unwrap();
        assert_eq!(outcomes.len(), 4);
        assert!(matches!(outcomes[0], Outcome::Clean(4)));
        match &outcomes[1] {
            Outcome::Failed(diagnostic) => {
                assert_eq!(diagnostic.message, "unterminated string due to newline");
                assert_eq!(diagnostic.span.start.line, 1);
                assert!(diagnostic.snippet.is_some());
            },
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(matches!(outcomes[2], Outcome::Unreadable(_)));
        assert!(matches!(outcomes[3], Outcome::Clean(7)));
    }

    #[test]
    fn test_run_check_counts_failures() {
        let dir = TempDir::new().unwrap();
        let args = CheckArgs {
            files: vec![
                write(&dir, "ok.gd", "pass\n"),
                write(&dir, "bad.gd", "var x = ?\n"),
                dir.path().join("missing.gd"),
            ],
            jobs: Some(1),
            verbose: false,
            color: true,
        };

        let err = run_check(args, &Config::default()).unwrap_err();
        assert!(matches!(err, GdxtError::LexFailed(2)));
    }

    #[test]
    fn test_run_check_clean() {
        let dir = TempDir::new().unwrap();
        let args = CheckArgs {
            files: vec![write(&dir, "ok.gd", "extends Node\n")],
            jobs: None,
            verbose: true,
            color: false,
        };
        assert!(run_check(args, &Config::default()).is_ok());
    }

    #[test]
    fn test_zero_jobs_uses_one_thread() {
        let dir = TempDir::new().unwrap();
        let files = vec![write(&dir, "a.gd", "pass")];
        let outcomes = check_files(&files, 0).unwrap();
        assert!(matches!(outcomes[0], Outcome::Clean(1)));
    }
}
