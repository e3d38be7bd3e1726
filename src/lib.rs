//! # lyrictag
//!
//! A parser for the annotated lyrics format: AI-generated song lyrics
//! interleaved with bracketed metadata tags (`[Verse 1]`, `[Mood: Dark]`)
//! and asterisk-delimited effect cues (`*key change*`).
//!
//! Parsing is a pure function from a text blob to an ordered list of
//! sections; see `parse_document`. Presentation-side color classification
//! and toggle-aware rendering live in the `classify` and `render` modules.
//!
//! ## Testing
//!
//! Structural assertions for parsed documents are provided by the
//! [testing module](lyrictag::testing); integration tests should verify
//! section shape and content through its fluent API rather than raw
//! field pokes.

pub mod lyrictag;

pub use lyrictag::ast::{Document, Section, StyleTag};
pub use lyrictag::classify::{section_color, style_color, ColorBucket};
pub use lyrictag::parsing::parse_document;
pub use lyrictag::render::{render, render_source, RenderOptions, Rendered};
