//! Environment file model: line records, parsing, and rendering

pub mod line;
pub mod parser;
pub mod render;

pub use line::{Assignment, LineRecord, QuoteStyle};
pub use parser::{parse, parse_with_diagnostics, EnvFile, KeyIndex};
pub use render::render_line;
