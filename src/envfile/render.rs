//! Assignment line rendering

use super::line::QuoteStyle;

/// Format `key` and `value` as a single env line ending in `\n`.
///
/// A missing value renders as empty. Embedded quote characters are not escaped.
pub fn render_line(key: &str, value: Option<&str>, exported: bool, quote: QuoteStyle) -> String {
    let value = value.unwrap_or_default();
    let prefix = if exported { "export " } else { "" };
    match quote.delimiter() {
        Some(q) => format!("{prefix}{key}={q}{value}{q}\n"),
        None => format!("{prefix}{key}={value}\n"),
    }
}
