//! Parsing for the annotated lyrics format

pub mod section_builder;
pub mod tag;

pub use section_builder::parse_document;
pub use tag::{is_section_header, BracketTag, SECTION_TYPES};
