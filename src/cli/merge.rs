//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::utils::confirm_overwrite;
use crate::config::{load_config, Config};
use crate::diagnostics::TracingSink;
use crate::files::{backup_file, write_lines};
use crate::merge::{merge_files, MergeOptions, MergeOutcome};

#[derive(Args)]
pub struct MergeArgs {
    /// Source environment file (values are taken from here)
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Target environment file (layout is kept from here)
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Add new keys from source (default: only update existing)
    #[arg(long)]
    pub squash: bool,

    /// Write output to specified file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write directly to target file (destructive)
    #[arg(long)]
    pub overwrite: bool,

    /// Show what would change without modifying files
    #[arg(long)]
    pub dry_run: bool,

    /// Skip confirmation prompts
    #[arg(long)]
    pub force: bool,

    /// Disable confirmation prompts (alias for --force)
    #[arg(long)]
    pub no_input: bool,

    /// Back up the target before --overwrite replaces it
    #[arg(long)]
    pub backup: bool,

    /// Path to config file (default: envyeet.toml or .envyeet.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: MergeArgs, quiet: bool) -> Result<ExitCode> {
    let work_dir = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = load_config(&work_dir, args.config.as_deref())?;

    let options = MergeOptions { squash: args.squash || config.squash, dry_run: args.dry_run };
    let lines = match merge_files(&args.source, &args.target, options, &mut TracingSink)? {
        MergeOutcome::Merged(lines) => lines,
        MergeOutcome::DryRun(_) => return Ok(ExitCode::SUCCESS),
    };

    let Some(destination) = write_target(&args) else {
        if !quiet {
            print!("{}", lines.concat());
        }
        return Ok(ExitCode::SUCCESS);
    };

    if !confirm_overwrite(destination, skip_prompts(&args, &config)) {
        eprintln!("Aborted");
        return Ok(ExitCode::FAILURE);
    }

    if wants_backup(&args, &config) {
        let backup_path = backup_file(destination, None)?;
        if !quiet {
            println!("Backed up to {}", backup_path.display());
        }
    }

    write_lines(destination, &lines)?;
    if !quiet {
        println!("Written to {}", destination.display());
    }

    Ok(ExitCode::SUCCESS)
}

/// `--overwrite` writes the target and wins over `--output`.
fn write_target(args: &MergeArgs) -> Option<&Path> {
    if args.overwrite {
        Some(&args.target)
    } else {
        args.output.as_deref()
    }
}

fn skip_prompts(args: &MergeArgs, config: &Config) -> bool {
    args.force || args.no_input || config.force
}

fn wants_backup(args: &MergeArgs, config: &Config) -> bool {
    args.overwrite && (args.backup || config.backup_on_overwrite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        merge: MergeArgs,
    }

    fn parse_args(extra: &[&str]) -> MergeArgs {
        let argv = ["envyeet", "source.env", "target.env"].into_iter().chain(extra.iter().copied());
        TestCli::try_parse_from(argv).expect("valid args").merge
    }

    #[test]
    fn overwrite_wins_over_output() {
        let args = parse_args(&["--overwrite", "--output", "other.env"]);
        assert_eq!(write_target(&args), Some(Path::new("target.env")));
    }

    #[test]
    fn output_used_without_overwrite() {
        let args = parse_args(&["--output", "other.env"]);
        assert_eq!(write_target(&args), Some(Path::new("other.env")));
        assert_eq!(write_target(&parse_args(&[])), None);
    }

    #[test]
    fn no_input_is_a_force_alias() {
        let config = Config::default();
        assert!(skip_prompts(&parse_args(&["--no-input"]), &config));
        assert!(skip_prompts(&parse_args(&["--force"]), &config));
        assert!(!skip_prompts(&parse_args(&[]), &config));
    }

    #[test]
    fn config_force_skips_prompts() {
        let config = Config { force: true, ..Config::default() };
        assert!(skip_prompts(&parse_args(&[]), &config));
    }

    #[test]
    fn backup_only_applies_to_overwrite() {
        let config = Config { backup_on_overwrite: true, ..Config::default() };
        assert!(wants_backup(&parse_args(&["--overwrite"]), &config));
        assert!(!wants_backup(&parse_args(&["--output", "o.env"]), &config));
        assert!(!wants_backup(&parse_args(&["--overwrite"]), &Config::default()));
        assert!(wants_backup(&parse_args(&["--overwrite", "--backup"]), &Config::default()));
    }
}
