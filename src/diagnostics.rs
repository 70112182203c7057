//! Advisory diagnostics emitted while parsing and merging
//!
//! Nothing reported here affects the result of a parse or merge. Callers choose
//! where events go by passing a [`DiagnosticSink`].

use crate::merge::ChangeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A line failed the assignment grammar and was kept verbatim.
    MalformedLine { origin: String, line_number: usize },
    /// What a dry run would have changed.
    DryRunSummary(ChangeSet),
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Keeps events in memory, in the order they were reported.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<Diagnostic>,
}

impl DiagnosticSink for RecordingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.events.push(diagnostic);
    }
}

/// Forwards events to `tracing` at INFO, so they show up under `--verbose`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::MalformedLine { origin, line_number } => {
                tracing::info!("Skipping malformed line {} in {}", line_number, origin);
            }
            Diagnostic::DryRunSummary(changes) => {
                if changes.is_empty() {
                    tracing::info!("No changes would be made");
                    return;
                }
                if !changes.updated.is_empty() {
                    tracing::info!("Keys to update: {}", changes.updated.join(", "));
                }
                if !changes.added.is_empty() {
                    tracing::info!("Keys to add: {}", changes.added.join(", "));
                }
            }
        }
    }
}
