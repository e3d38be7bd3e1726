//! Line-level lexing for the annotated lyrics format

pub mod line_classification;
pub mod tokens;

pub use line_classification::{classify_line, LineKind};
pub use tokens::{bracket_tags, effect_line, tokenize, Token};
