//! Line Classification
//!
//! Core classification logic for determining what a line of lyrics text is
//! before the section builder acts on it. Lines arrive already trimmed.

use crate::lyrictag::lexing::tokens::{bracket_tags, effect_line};
use once_cell::sync::Lazy;
use regex::Regex;

/// The role a single trimmed line plays in a lyrics document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after trimming; kept as stanza spacing inside a section
    Blank,
    /// Carries at least one complete `[...]` tag
    Tag,
    /// The whole line is one `*...*` effect cue
    Effect,
    /// Prompt/metadata narration that never belongs in lyrics
    MetadataNoise,
    /// Anything else: a lyric line
    Lyric,
}

/// Reserved prefixes that mark generator metadata rather than lyrics.
///
/// The keyword list is authoritative; matching is a case-insensitive
/// starts-with test, with `#` headings and `---` rules treated the same way.
static METADATA_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(#|---|title|description|suno styles|emotional arc|target audience|commercial|technical notes|user prompt|song structure)",
    )
    .expect("metadata prefix pattern is valid")
});

/// Determine the kind of a trimmed line.
///
/// Classification follows this specific order (important for correctness):
/// 1. Blank lines
/// 2. Tag lines (at least one complete bracket token anywhere on the line)
/// 3. Effect lines (the whole line is one `*...*` token)
/// 4. Metadata noise (reserved prefix, `#`, or `---`)
/// 5. Default to lyric
pub fn classify_line(line: &str) -> LineKind {
    if line.is_empty() {
        return LineKind::Blank;
    }

    // A complete bracket tag wins over every other reading of the line,
    // even when the line also starts with `*`, `#`, or a reserved keyword.
    if !bracket_tags(line).is_empty() {
        return LineKind::Tag;
    }

    if effect_line(line).is_some() {
        return LineKind::Effect;
    }

    if is_metadata_noise(line) {
        return LineKind::MetadataNoise;
    }

    LineKind::Lyric
}

/// Check if a line is generator metadata rather than lyric content
pub fn is_metadata_noise(line: &str) -> bool {
    METADATA_PREFIX.is_match(line)
}
