//! Display projection for parsed documents
//!
//! A rendered document is what the visual layer consumes: section titles
//! with their color buckets, upper-cased tag chips, and lyric lines with
//! stanza spacing intact. Rendering is a pure projection — the two
//! visibility toggles only filter what the output carries and never touch
//! the parsed document itself.

use crate::lyrictag::ast::{Document, Section};
use crate::lyrictag::classify::{section_color, style_color, ColorBucket};
use crate::lyrictag::parsing::parse_document;
use serde::{Deserialize, Serialize};

/// Caller-supplied visibility toggles, passed explicitly at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub show_style_tags: bool,
    pub show_effect_tags: bool,
}

impl Default for RenderOptions {
    /// Both tag classes start visible.
    fn default() -> Self {
        Self {
            show_style_tags: true,
            show_effect_tags: true,
        }
    }
}

/// A style tag in display form: upper-cased `CATEGORY: VALUE` label plus
/// its derived color bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTag {
    pub label: String,
    pub color: ColorBucket,
}

/// One displayable section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSection {
    pub title: String,
    pub color: ColorBucket,
    pub style_tags: Vec<RenderedTag>,
    pub effect_tags: Vec<String>,
    pub lyric_lines: Vec<String>,
}

/// Result of rendering a raw source blob.
///
/// `Unstructured` is the zero-section fallback: the caller shows the
/// original text verbatim instead of an empty section list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rendered {
    Sections(Vec<RenderedSection>),
    Unstructured(String),
}

/// Project a parsed document through the visibility toggles.
pub fn render(document: &Document, options: RenderOptions) -> Vec<RenderedSection> {
    document
        .iter_sections()
        .map(|section| render_section(section, options))
        .collect()
}

/// Parse and render a raw source blob, falling back to the verbatim text
/// when no sections were recognized.
pub fn render_source(source: &str, options: RenderOptions) -> Rendered {
    let document = parse_document(source);
    if document.is_unstructured() {
        Rendered::Unstructured(source.to_string())
    } else {
        Rendered::Sections(render(&document, options))
    }
}

fn render_section(section: &Section, options: RenderOptions) -> RenderedSection {
    let style_tags = if options.show_style_tags {
        section
            .style_tags
            .iter()
            .map(|tag| RenderedTag {
                label: tag_label(&tag.category, &tag.value),
                color: style_color(&tag.category),
            })
            .collect()
    } else {
        Vec::new()
    };

    let effect_tags = if options.show_effect_tags {
        section
            .effect_tags
            .iter()
            .map(|effect| effect.to_uppercase())
            .collect()
    } else {
        Vec::new()
    };

    RenderedSection {
        title: section.section_type.clone(),
        color: section_color(&section.section_type),
        style_tags,
        effect_tags,
        lyric_lines: section.lyric_lines.clone(),
    }
}

/// Display label for a style tag: `CATEGORY: VALUE`, or just `CATEGORY`
/// when the tag carried no value.
fn tag_label(category: &str, value: &str) -> String {
    if value.is_empty() {
        category.to_uppercase()
    } else {
        format!("{}: {}", category.to_uppercase(), value.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrictag::ast::StyleTag;

    fn sample_section() -> Section {
        let mut section = Section::new("Chorus");
        section.style_tags.push(StyleTag::new("Mood", "Dark"));
        section.effect_tags.push("key change".to_string());
        section.lyric_lines.push("La la".to_string());
        section
    }

    #[test]
    fn test_tag_label_formats() {
        assert_eq!(tag_label("Mood", "Dark"), "MOOD: DARK");
        assert_eq!(tag_label("Acoustic", ""), "ACOUSTIC");
    }

    #[test]
    fn test_render_respects_style_toggle() {
        let doc = Document::with_sections(vec![sample_section()]);
        let options = RenderOptions {
            show_style_tags: false,
            show_effect_tags: true,
        };
        let rendered = render(&doc, options);
        assert!(rendered[0].style_tags.is_empty());
        assert_eq!(rendered[0].effect_tags, vec!["KEY CHANGE"]);
    }

    #[test]
    fn test_render_respects_effect_toggle() {
        let doc = Document::with_sections(vec![sample_section()]);
        let options = RenderOptions {
            show_style_tags: true,
            show_effect_tags: false,
        };
        let rendered = render(&doc, options);
        assert_eq!(rendered[0].style_tags[0].label, "MOOD: DARK");
        assert!(rendered[0].effect_tags.is_empty());
    }

    #[test]
    fn test_render_keeps_lyrics_and_title() {
        let doc = Document::with_sections(vec![sample_section()]);
        let rendered = render(&doc, RenderOptions::default());
        assert_eq!(rendered[0].title, "Chorus");
        assert_eq!(rendered[0].color, ColorBucket::Primary);
        assert_eq!(rendered[0].lyric_lines, vec!["La la"]);
    }

    #[test]
    fn test_render_source_fallback() {
        let rendered = render_source("just prose, no headers", RenderOptions::default());
        assert_eq!(
            rendered,
            Rendered::Unstructured("just prose, no headers".to_string())
        );
    }

    #[test]
    fn test_render_does_not_mutate_document() {
        let doc = Document::with_sections(vec![sample_section()]);
        let before = doc.clone();
        let _ = render(
            &doc,
            RenderOptions {
                show_style_tags: false,
                show_effect_tags: false,
            },
        );
        assert_eq!(doc, before);
    }
}
