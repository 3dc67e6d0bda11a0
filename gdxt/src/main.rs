//! Gdxt CLI - command-line front end for the GDX GDScript tooling.
//!
//! This is the main entry point for the gdxt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    lex::{run_lex, LexArgs},
    project::{run_project, ProjectArgs},
    serve::run_serve,
};
use config::Config;
use error::{GdxtError, Result};

/// Gdxt - GDScript tooling
///
/// Gdxt scans GDScript sources, reports lexical errors, reads Godot
/// project descriptors and serves editors over the language server
/// protocol.
#[derive(Parser, Debug)]
#[command(name = "gdxt")]
#[command(author = "GDX Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GDScript lexer and language server", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "GDXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GDXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "GDXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the gdxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a script
    Lex(LexCommand),

    /// Report lexical errors in scripts
    ///
    /// Files are scanned in parallel. The exit status is non-zero when
    /// any file fails.
    Check(CheckCommand),

    /// Run the language server over stdin and stdout
    Serve,

    /// Show the name and input actions of a Godot project
    Project(ProjectCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Script to scan
    file: PathBuf,

    /// Print tokens as JSON
    #[arg(long)]
    json: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Scripts to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Arguments for the project subcommand.
#[derive(Parser, Debug)]
struct ProjectCommand {
    /// `project.godot` file or the directory holding it
    #[arg(default_value = ".")]
    path: PathBuf,
}

/// Main entry point for the gdxt CLI.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, initializes logging and runs the command.
fn run(cli: Cli) -> Result<ExitCode> {
    // The log file setting lives in the config, so load it first
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    let log_file = match cli.command {
        Commands::Serve => config.log_file.as_deref(),
        _ => None,
    };
    init_logging(verbose, cli.no_color, log_file)?;

    execute_command(cli.command, verbose, !cli.no_color, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr, or to `log_file` when given. Stdout carries command
/// output and, under `serve`, the protocol stream.
fn init_logging(verbose: bool, no_color: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        },
        None => (BoxMakeWriter::new(std::io::stderr), !no_color),
    };

    let subscriber = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| GdxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(
    command: Commands,
    verbose: bool,
    color: bool,
    config: Config,
) -> Result<ExitCode> {
    match command {
        Commands::Lex(args) => run_lex(LexArgs {
            file: args.file,
            json: args.json,
            color,
        })?,
        Commands::Check(args) => run_check(
            CheckArgs {
                files: args.files,
                jobs: args.jobs,
                verbose,
                color,
            },
            &config,
        )?,
        Commands::Serve => return execute_serve(&config),
        Commands::Project(args) => run_project(ProjectArgs { path: args.path })?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Execute the serve command, passing on the server's exit status.
fn execute_serve(config: &Config) -> Result<ExitCode> {
    let code = run_serve(config)?;
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::parse_from(["gdxt", "lex", "player.gd"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("player.gd"));
            assert!(!args.json);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_json() {
        let cli = Cli::parse_from(["gdxt", "lex", "player.gd", "--json"]);
        if let Commands::Lex(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["gdxt", "check", "a.gd", "b.gd", "--jobs", "2"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.files, [PathBuf::from("a.gd"), PathBuf::from("b.gd")]);
            assert_eq!(args.jobs, Some(2));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_check_requires_files() {
        assert!(Cli::try_parse_from(["gdxt", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["gdxt", "serve"]);
        assert!(matches!(cli.command, Commands::Serve));
    }

    #[test]
    fn test_cli_parse_project_default_path() {
        let cli = Cli::parse_from(["gdxt", "project"]);
        if let Commands::Project(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("."));
        } else {
            panic!("Expected Project command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "gdxt",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/gdxt.toml",
            "serve",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/gdxt.toml")));
    }

    #[test]
    fn test_load_missing_config() {
        let result = load_config(Some(Path::new("/nonexistent/gdxt.toml")));
        assert!(matches!(result, Err(GdxtError::Config(_))));
    }
}
