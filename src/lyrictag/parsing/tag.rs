//! Bracket-tag interpretation
//!
//! A bracket token's interior is either a bare key (`Chorus`) or a
//! `key: value` pair (`Mood: Dark`). The split happens on the FIRST colon,
//! so values may themselves contain colons. Keys are then classified as
//! section headers by substring containment against a fixed vocabulary.

/// Section-type vocabulary.
///
/// A key opens a new section when its lowercase form CONTAINS any of these,
/// so "Verse 1" and "Final Chorus" both qualify. The list is authoritative:
/// synonyms outside it ("refrain", say) do not match.
pub const SECTION_TYPES: &[&str] = &[
    "intro",
    "verse",
    "pre-chorus",
    "prechorus",
    "chorus",
    "bridge",
    "outro",
    "hook",
    "breakdown",
    "instrumental",
    "solo",
    "final chorus",
    "post-chorus",
    "interlude",
    "end",
];

/// An interpreted `[Key]` or `[Key: Value]` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTag {
    pub key: String,
    pub value: String,
}

impl BracketTag {
    /// Interpret a bracket token's interior (surrounding `[`/`]` already
    /// stripped), splitting on the first `:` when present.
    pub fn parse(interior: &str) -> Self {
        match interior.split_once(':') {
            Some((key, value)) => Self {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => Self {
                key: interior.trim().to_string(),
                value: String::new(),
            },
        }
    }

    /// Whether this tag's key names a song section
    pub fn is_section_header(&self) -> bool {
        is_section_header(&self.key)
    }
}

/// Check if a tag key denotes a new song section
pub fn is_section_header(key: &str) -> bool {
    let lower = key.to_lowercase();
    SECTION_TYPES.iter().any(|t| lower.contains(t))
}
