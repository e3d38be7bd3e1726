//! Testing utilities for document assertions
//!
//! Integration tests should verify parsed documents through the fluent
//! [assert_doc](fn@assert_doc) API rather than pattern-matching struct
//! fields by hand: the assertions carry a context path (`doc:sections[1]`)
//! so a failure names the exact section and field that diverged, and a
//! whole document shape reads as one expression instead of a ladder of
//! `assert_eq!` calls.
//!
//! ```rust-example
//! use lyrictag::lyrictag::testing::assert_doc;
//! use lyrictag::parse_document;
//!
//! let doc = parse_document("[Chorus]\nLa la");
//! assert_doc(&doc).section_count(1).section(0, |s| {
//!     s.section_type("Chorus").lyric_lines(&["La la"]);
//! });
//! ```

pub mod doc_assertions;

pub use doc_assertions::{assert_doc, DocumentAssertion, SectionAssertion};
