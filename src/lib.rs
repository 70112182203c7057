//! envyeet: Merge environment variable files with intelligent key swapping
//!
//! The core is [`envfile`] (line classification and rendering) and [`merge`]
//! (value substitution and squash). Both work on in-memory text; [`files`] and
//! [`cli`] handle disk and terminal.
//!
//! ```
//! use envyeet::diagnostics::NullSink;
//! use envyeet::merge::{merge, EnvInput, MergeOptions, MergeOutcome};
//!
//! let outcome = merge(
//!     EnvInput::new("staging.env", "DATABASE_URL=staging\n"),
//!     EnvInput::new(".env", "# db\nDATABASE_URL=production\n"),
//!     MergeOptions::default(),
//!     &mut NullSink,
//! );
//! assert_eq!(
//!     outcome,
//!     MergeOutcome::Merged(vec!["# db\n".into(), "DATABASE_URL=staging\n".into()])
//! );
//! ```

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod envfile;
pub mod error;
pub mod files;
pub mod merge;

pub use envfile::{parse, render_line, EnvFile, LineRecord, QuoteStyle};
pub use error::EnvError;
pub use merge::{merge, merge_files, ChangeSet, MergeOptions, MergeOutcome};
