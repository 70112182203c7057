//! Merge engine
//!
//! Walks the target's lines in order and swaps in the source's value for every
//! key both files define. With `squash`, source-only keys are appended after the
//! target's lines in the order the source first defined them.
//!
//! A replaced line takes the source's value and quote style, but stays exported
//! if either side exported it.

use std::path::Path;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::envfile::{parse_with_diagnostics, render_line, EnvFile, LineRecord};
use crate::error::EnvError;
use crate::files::read_env_file;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Append keys that only the source defines.
    pub squash: bool,
    /// Report what would change instead of producing output lines.
    pub dry_run: bool,
}

/// Keys touched by a merge, in the order they were touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub updated: Vec<String>,
    pub added: Vec<String>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.updated.is_empty() && self.added.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    /// Output lines, each carrying its own terminator.
    pub lines: Vec<String>,
    pub changes: ChangeSet,
}

impl MergePlan {
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Merged(Vec<String>),
    DryRun(ChangeSet),
}

/// Env file text together with the name used in diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct EnvInput<'a> {
    pub origin: &'a str,
    pub text: &'a str,
}

impl<'a> EnvInput<'a> {
    pub fn new(origin: &'a str, text: &'a str) -> Self {
        Self { origin, text }
    }
}

/// Merge two already-parsed files.
pub fn merge_parsed(source: &EnvFile, target: &EnvFile, squash: bool) -> MergePlan {
    let mut plan = MergePlan {
        lines: Vec::with_capacity(target.lines.len()),
        changes: ChangeSet::default(),
    };

    for record in &target.lines {
        let replacement = match record {
            LineRecord::Assignment(current) => source.index.get(&current.key).map(|incoming| {
                let line = render_line(
                    &current.key,
                    Some(incoming.value.as_str()),
                    current.exported || incoming.exported,
                    incoming.quote,
                );
                keep_line_ending(line, current.line_ending())
            }),
            LineRecord::Comment(_) | LineRecord::Blank(_) => None,
        };

        match replacement {
            Some(line) => {
                if let Some(key) = record.key() {
                    plan.changes.updated.push(key.to_string());
                }
                plan.lines.push(line);
            }
            None => plan.lines.push(record.raw().to_string()),
        }
    }

    if squash {
        for incoming in source.index.iter().filter(|a| !target.index.contains(&a.key)) {
            plan.lines.push(incoming.render());
            plan.changes.added.push(incoming.key.clone());
        }
    }

    plan
}

/// Swap the rendered `\n` for the replaced line's own `\r\n` or `\r`.
/// An unterminated last line still gets `\n` so squashed keys start on their own line.
fn keep_line_ending(rendered: String, ending: &str) -> String {
    match ending {
        "\r\n" | "\r" => {
            let body = rendered.strip_suffix('\n').unwrap_or(&rendered);
            format!("{body}{ending}")
        }
        _ => rendered,
    }
}

/// Parse and merge `source` into `target`.
///
/// In dry-run mode the change set goes to `sink` as well as being returned.
pub fn merge(
    source: EnvInput<'_>,
    target: EnvInput<'_>,
    options: MergeOptions,
    sink: &mut dyn DiagnosticSink,
) -> MergeOutcome {
    let source_env = parse_with_diagnostics(source.text, source.origin, sink);
    let target_env = parse_with_diagnostics(target.text, target.origin, sink);
    let plan = merge_parsed(&source_env, &target_env, options.squash);

    tracing::debug!(
        updated = plan.changes.updated.len(),
        added = plan.changes.added.len(),
        "merged {} into {}",
        source.origin,
        target.origin
    );

    if options.dry_run {
        sink.report(Diagnostic::DryRunSummary(plan.changes.clone()));
        return MergeOutcome::DryRun(plan.changes);
    }

    MergeOutcome::Merged(plan.lines)
}

/// Read both files from disk and merge them.
pub fn merge_files(
    source: &Path,
    target: &Path,
    options: MergeOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<MergeOutcome, EnvError> {
    let source_text = read_env_file(source)?;
    let target_text = read_env_file(target)?;
    let source_name = source.display().to_string();
    let target_name = target.display().to_string();

    Ok(merge(
        EnvInput::new(&source_name, &source_text),
        EnvInput::new(&target_name, &target_text),
        options,
        sink,
    ))
}
