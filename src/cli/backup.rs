//! Backup command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::files::backup_file;

#[derive(Args)]
pub struct BackupArgs {
    /// File to back up
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Custom backup filename (must not exist)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: BackupArgs, quiet: bool) -> Result<ExitCode> {
    let backup_path = backup_file(&args.file, args.output.as_deref())?;
    if !quiet {
        println!("{}", backup_path.display());
    }
    Ok(ExitCode::SUCCESS)
}
