//! Section builder
//!
//! Single-pass state machine over a document's lines. The only state is the
//! section currently open (if any); every other decision is line-local.
//!
//! Each trimmed line is handled by the first matching rule:
//! 1. Blank: recorded as an empty lyric line when the open section already
//!    has lyrics (stanza spacing), otherwise ignored.
//! 2. Tag line: the first section-header token closes the open section and
//!    opens a new one; every other token on that line becomes a style tag
//!    of the new section. Header-free tag lines attach all their tokens to
//!    the open section, or are dropped when none is open.
//! 3. Effect line: interior appended to the open section's effect tags.
//! 4. Metadata noise: dropped.
//! 5. Lyric: appended verbatim to the open section; dropped when no section
//!    is open yet.
//!
//! The machine never fails: malformed input is absorbed by the drop rules
//! and a document with no recognized headers parses to zero sections.

use crate::lyrictag::ast::{Document, Section, StyleTag};
use crate::lyrictag::lexing::{bracket_tags, classify_line, effect_line, LineKind};
use crate::lyrictag::parsing::tag::BracketTag;

/// Parse a lyrics text blob into an ordered list of sections.
///
/// Pure and total: every input, including empty or malformed text, yields a
/// valid (possibly empty) document.
pub fn parse_document(source: &str) -> Document {
    let mut document = Document::new();
    let mut current: Option<Section> = None;

    for raw_line in source.lines() {
        let line = raw_line.trim();

        match classify_line(line) {
            LineKind::Blank => {
                if let Some(section) = current.as_mut() {
                    if section.has_lyrics() {
                        section.lyric_lines.push(String::new());
                    }
                }
            }
            LineKind::Tag => {
                let tags: Vec<BracketTag> = bracket_tags(line)
                    .iter()
                    .map(|interior| BracketTag::parse(interior))
                    .collect();
                handle_tag_line(tags, &mut current, &mut document);
            }
            LineKind::Effect => {
                if let Some(section) = current.as_mut() {
                    if let Some(effect) = effect_line(line) {
                        section.effect_tags.push(effect.to_string());
                    }
                }
            }
            LineKind::MetadataNoise => {}
            LineKind::Lyric => {
                if let Some(section) = current.as_mut() {
                    section.lyric_lines.push(line.to_string());
                }
            }
        }
    }

    // End of input flushes the open section
    if let Some(section) = current {
        document.sections.push(section);
    }

    document
}

/// Apply one tag line to the machine.
///
/// The header token is excluded from style-tag attachment by position, so a
/// line like `[Chorus] [Chorus]` still attaches its second token as a tag.
fn handle_tag_line(tags: Vec<BracketTag>, current: &mut Option<Section>, document: &mut Document) {
    match tags.iter().position(BracketTag::is_section_header) {
        Some(header_idx) => {
            if let Some(done) = current.take() {
                document.sections.push(done);
            }
            let mut section = Section::new(tags[header_idx].key.clone());
            for (idx, tag) in tags.into_iter().enumerate() {
                if idx != header_idx {
                    section.style_tags.push(StyleTag::new(tag.key, tag.value));
                }
            }
            *current = Some(section);
        }
        None => {
            // Tags with no open section to attach to are dropped
            if let Some(section) = current.as_mut() {
                for tag in tags {
                    section.style_tags.push(StyleTag::new(tag.key, tag.value));
                }
            }
        }
    }
}
