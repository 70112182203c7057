//! Command-line interface for envyeet
//!
//! Provides `merge` and `backup` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::EnvError;

mod backup;
mod merge;
mod utils;

/// Merge environment variable files with intelligent key swapping and optional value injection
#[derive(Parser)]
#[command(name = "envyeet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Show detailed merge information (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge source env file into target env file
    Merge(merge::MergeArgs),

    /// Create a backup of an environment file
    Backup(backup::BackupArgs),
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(cli.verbose, rust_log.as_deref());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let (result, failure_code) = match cli.command {
        Commands::Merge(args) => (merge::run(args, cli.quiet), 1),
        Commands::Backup(args) => (backup::run(args, cli.quiet), 4),
    };

    finish(result, failure_code)
}

/// Build the tracing filter.
///
/// A non-empty RUST_LOG is used as given; without it the level is WARN.
/// --verbose always adds a DEBUG default on top.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let from_env = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok());

    match (verbose, from_env) {
        (true, Some(filter)) => filter.add_directive(Level::DEBUG.into()),
        (true, None) => EnvFilter::new("debug"),
        (false, Some(filter)) => filter,
        (false, None) => EnvFilter::new("warn"),
    }
}

/// Report an error on stderr and pick the exit code: 2 for a missing file,
/// otherwise the command's own failure code.
fn finish(result: Result<ExitCode>, failure_code: u8) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let not_found = err
                .chain()
                .filter_map(|cause| cause.downcast_ref::<EnvError>())
                .any(EnvError::is_not_found);
            ExitCode::from(if not_found { 2 } else { failure_code })
        }
    }
}
