//! Document model for parsed lyrics
//!
//! The parse result is a flat, ordered list of sections. Each section keeps
//! its style tags, effect cues, and lyric lines in source order; blank lyric
//! lines are kept as empty strings so stanza spacing survives the round trip
//! to a renderer.
//!
//! All three types are plain data: built once per parse call, never mutated
//! afterwards, never shared across parses. A `StyleTag`'s color bucket is
//! derived from its category on demand rather than stored, so presentation
//! rules can change without touching parsed documents.

use crate::lyrictag::classify::{section_color, style_color, ColorBucket};
use serde::{Deserialize, Serialize};

/// Top-level parse result: an ordered sequence of sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    pub fn with_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// True when the source text carried no recognized section headers.
    ///
    /// Callers are expected to fall back to displaying the raw input
    /// verbatim in this case; it is a documented degenerate result, not an
    /// error.
    pub fn is_unstructured(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}

/// One semantic block of the song (a verse or chorus instance, say).
///
/// `section_type` is the raw header key as authored ("Verse 1", "Chorus"),
/// case-preserved; it doubles as the display title. A section only exists
/// once a header tag has been recognized, so `section_type` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub section_type: String,
    pub style_tags: Vec<StyleTag>,
    pub effect_tags: Vec<String>,
    pub lyric_lines: Vec<String>,
}

impl Section {
    pub fn new(section_type: impl Into<String>) -> Self {
        Self {
            section_type: section_type.into(),
            style_tags: Vec::new(),
            effect_tags: Vec::new(),
            lyric_lines: Vec::new(),
        }
    }

    /// Color bucket for this section's header, derived from its type.
    pub fn color(&self) -> ColorBucket {
        section_color(&self.section_type)
    }

    pub fn has_lyrics(&self) -> bool {
        !self.lyric_lines.is_empty()
    }
}

/// One inline `[Key: Value]` or `[Key]` descriptor attached to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTag {
    pub category: String,
    /// Text after the first `:` in the tag, trimmed; empty when the tag had
    /// no separator.
    pub value: String,
}

impl StyleTag {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }

    /// Color bucket for this tag, recomputed from the category each call.
    ///
    /// Deterministic: two tags with the same category always resolve to the
    /// same bucket.
    pub fn color(&self) -> ColorBucket {
        style_color(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_unstructured() {
        let doc = Document::new();
        assert!(doc.is_unstructured());
        assert_eq!(doc.section_count(), 0);
    }

    #[test]
    fn test_section_starts_empty() {
        let section = Section::new("Chorus");
        assert_eq!(section.section_type, "Chorus");
        assert!(section.style_tags.is_empty());
        assert!(section.effect_tags.is_empty());
        assert!(!section.has_lyrics());
    }

    #[test]
    fn test_style_tag_color_is_stable() {
        let tag = StyleTag::new("Mood", "Dark");
        assert_eq!(tag.color(), tag.color());
    }

    #[test]
    fn test_document_iteration_preserves_order() {
        let doc = Document::with_sections(vec![
            Section::new("Intro"),
            Section::new("Verse 1"),
            Section::new("Chorus"),
        ]);
        let types: Vec<&str> = doc
            .iter_sections()
            .map(|s| s.section_type.as_str())
            .collect();
        assert_eq!(types, vec!["Intro", "Verse 1", "Chorus"]);
    }
}
