//! envyeet: Merge environment variable files
//!
//! Swaps values from a source env file into a target env file while keeping the
//! target's comments, blank lines, and ordering intact.

use std::process::ExitCode;

fn main() -> ExitCode {
    envyeet::cli::run()
}
