//! Typed line records for environment files

use super::render::render_line;

/// How an assignment's value was wrapped in the original file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    None,
    Single,
    Double,
}

impl QuoteStyle {
    /// The delimiter character, if any.
    pub fn delimiter(self) -> Option<char> {
        match self {
            QuoteStyle::None => None,
            QuoteStyle::Single => Some('\''),
            QuoteStyle::Double => Some('"'),
        }
    }

    /// Split a raw value span into its quote style and unquoted content.
    ///
    /// Only a span that both starts and ends with the same quote character (and is
    /// at least two characters long) counts as quoted. Nothing inside is unescaped.
    pub fn detect(span: &str) -> (QuoteStyle, &str) {
        for style in [QuoteStyle::Single, QuoteStyle::Double] {
            let Some(quote) = style.delimiter() else { continue };
            if span.len() >= 2 && span.starts_with(quote) && span.ends_with(quote) {
                return (style, &span[1..span.len() - 1]);
            }
        }
        (QuoteStyle::None, span)
    }
}

/// A `KEY=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
    pub quote: QuoteStyle,
    pub exported: bool,
    /// The physical line exactly as read, terminator included.
    pub raw: String,
}

impl Assignment {
    /// Render this assignment in canonical form.
    pub fn render(&self) -> String {
        render_line(&self.key, Some(self.value.as_str()), self.exported, self.quote)
    }

    /// The terminator this line was read with (empty for an unterminated last line).
    pub fn line_ending(&self) -> &str {
        split_terminator(&self.raw).1
    }
}

/// Split a physical line into its body and its terminator (`\r\n`, `\n`, `\r` or none).
pub fn split_terminator(raw: &str) -> (&str, &str) {
    for ending in ["\r\n", "\n", "\r"] {
        if let Some(body) = raw.strip_suffix(ending) {
            return (body, ending);
        }
    }
    (raw, "")
}

/// One physical line of an environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRecord {
    Assignment(Assignment),
    Comment(String),
    /// Empty lines and lines that do not match the assignment grammar.
    Blank(String),
}

impl LineRecord {
    /// The verbatim text of the line, terminator included.
    pub fn raw(&self) -> &str {
        match self {
            LineRecord::Assignment(assignment) => &assignment.raw,
            LineRecord::Comment(raw) | LineRecord::Blank(raw) => raw,
        }
    }

    pub fn as_assignment(&self) -> Option<&Assignment> {
        match self {
            LineRecord::Assignment(assignment) => Some(assignment),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.as_assignment().map(|a| a.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_strips_matching_quotes() {
        assert_eq!(QuoteStyle::detect("'v'"), (QuoteStyle::Single, "v"));
        assert_eq!(QuoteStyle::detect("\"v\""), (QuoteStyle::Double, "v"));
        assert_eq!(QuoteStyle::detect("\"\""), (QuoteStyle::Double, ""));
        assert_eq!(QuoteStyle::detect("v"), (QuoteStyle::None, "v"));
    }

    #[test]
    fn detect_leaves_unbalanced_quotes_alone() {
        assert_eq!(QuoteStyle::detect("'"), (QuoteStyle::None, "'"));
        assert_eq!(QuoteStyle::detect("\"v'"), (QuoteStyle::None, "\"v'"));
        assert_eq!(QuoteStyle::detect("'v"), (QuoteStyle::None, "'v"));
    }

    #[test]
    fn split_terminator_handles_every_line_ending() {
        assert_eq!(split_terminator("A=1\r\n"), ("A=1", "\r\n"));
        assert_eq!(split_terminator("A=1\n"), ("A=1", "\n"));
        assert_eq!(split_terminator("A=1\r"), ("A=1", "\r"));
        assert_eq!(split_terminator("A=1"), ("A=1", ""));
    }

    #[test]
    fn raw_returns_verbatim_text_for_every_variant() {
        let comment = LineRecord::Comment("  # note\n".to_string());
        let blank = LineRecord::Blank("INVALID LINE\n".to_string());
        assert_eq!(comment.raw(), "  # note\n");
        assert_eq!(blank.raw(), "INVALID LINE\n");
        assert!(blank.key().is_none());
    }
}
