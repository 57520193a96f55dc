//! # trivia CLI entry point
//!
//! Parses command-line arguments, installs logging, resolves the host
//! configuration and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trivia_cli::list::run_list;
use trivia_cli::run::{run_quiz, RunArgs};
use trivia_cli::validate::{run_validate, ValidateArgs};
use trivia_cli::{host_config, EXIT_ERROR};

/// Trivia Runner
///
/// Validates trivia and theme documents and presents quizzes in the
/// terminal.
#[derive(Parser, Debug)]
#[command(name = "trivia", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to a JSON host configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the themes directory.
    #[arg(long, global = true)]
    themes_dir: Option<PathBuf>,

    /// Override the trivia directory.
    #[arg(long, global = true)]
    trivia_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate trivia and theme files against their schemas.
    Validate(ValidateArgs),

    /// List trivia files and valid themes.
    List,

    /// Present a quiz in the terminal.
    Run(RunArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "trivia CLI starting");

    let config = match host_config(
        cli.config.as_deref(),
        cli.themes_dir.as_deref(),
        cli.trivia_dir.as_deref(),
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &config),
        Commands::List => run_list(&config),
        Commands::Run(args) => run_quiz(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// `-v` counts pick the level; without `-v`, `RUST_LOG` applies and
/// defaults to `warn`.
fn init_tracing(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
