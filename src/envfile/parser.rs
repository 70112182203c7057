//! Line classification for environment files
//!
//! Parsing never fails: anything that does not match the assignment grammar is
//! kept verbatim as a [`LineRecord::Blank`] so the file can be reproduced exactly.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::line::{split_terminator, Assignment, LineRecord, QuoteStyle};
use crate::diagnostics::{Diagnostic, DiagnosticSink, NullSink};

// `export` followed by any run of whitespace (spaces or tabs) marks the line exported.
static ASSIGNMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(export\s+)?([A-Za-z_][A-Za-z0-9_]*)=(.*)$").expect("valid regex")
});

/// Keys mapped to their last assignment, iterated in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
    order: Vec<String>,
    entries: HashMap<String, Assignment>,
}

impl KeyIndex {
    /// Insert `assignment`, shadowing any earlier one with the same key.
    /// A shadowed key keeps its original position in iteration order.
    pub fn insert(&mut self, assignment: Assignment) {
        if !self.entries.contains_key(&assignment.key) {
            self.order.push(assignment.key.clone());
        }
        self.entries.insert(assignment.key.clone(), assignment);
    }

    pub fn get(&self, key: &str) -> Option<&Assignment> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }
}

/// A parsed environment file: every physical line plus the key index.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    pub lines: Vec<LineRecord>,
    pub index: KeyIndex,
}

impl EnvFile {
    /// Reassemble the file from its records.
    pub fn to_text(&self) -> String {
        self.lines.iter().map(LineRecord::raw).collect()
    }
}

/// Parse `text` without reporting malformed lines.
pub fn parse(text: &str) -> EnvFile {
    parse_with_diagnostics(text, "<input>", &mut NullSink)
}

/// Parse `text`, reporting each line that fails the assignment grammar to `sink`.
///
/// `origin` names the file in those reports.
pub fn parse_with_diagnostics(text: &str, origin: &str, sink: &mut dyn DiagnosticSink) -> EnvFile {
    let mut env = EnvFile::default();

    for (idx, raw) in physical_lines(text).into_iter().enumerate() {
        let (body, _) = split_terminator(raw);
        let trimmed = body.trim();

        if trimmed.is_empty() {
            env.lines.push(LineRecord::Blank(raw.to_string()));
            continue;
        }
        if trimmed.starts_with('#') {
            env.lines.push(LineRecord::Comment(raw.to_string()));
            continue;
        }

        match parse_assignment(body, raw) {
            Some(assignment) => {
                env.index.insert(assignment.clone());
                env.lines.push(LineRecord::Assignment(assignment));
            }
            None => {
                sink.report(Diagnostic::MalformedLine {
                    origin: origin.to_string(),
                    line_number: idx + 1,
                });
                env.lines.push(LineRecord::Blank(raw.to_string()));
            }
        }
    }

    env
}

fn parse_assignment(body: &str, raw: &str) -> Option<Assignment> {
    let caps = ASSIGNMENT_RE.captures(body)?;
    let key = caps.get(2)?.as_str();
    let span = caps.get(3).map_or("", |m| m.as_str());
    let (quote, value) = QuoteStyle::detect(span);

    Some(Assignment {
        key: key.to_string(),
        value: value.to_string(),
        quote,
        exported: caps.get(1).is_some(),
        raw: raw.to_string(),
    })
}

/// Split `text` into lines ending in `\n`, `\r\n` or a lone `\r`, terminators kept.
fn physical_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..=i]);
                start = i + 1;
            }
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                lines.push(&text[start..=i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}
