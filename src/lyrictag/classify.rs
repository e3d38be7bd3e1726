//! Color-bucket classification for tags and sections
//!
//! Presentation-only: the parser never consults these. Both classifiers are
//! small ordered rule engines over lowercase substring containment — an
//! explicit `(needles, bucket)` table evaluated top to bottom, first match
//! wins — so the priority order stays visible and testable instead of being
//! buried in conditional fallthrough.

use serde::{Deserialize, Serialize};

/// Presentation color bucket for style tags and section headers.
///
/// `Primary` is the theme accent (chorus sections); `Neutral` is the default
/// bucket when no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBucket {
    Red,
    Yellow,
    Cyan,
    Green,
    Purple,
    Blue,
    Orange,
    Pink,
    Primary,
    Neutral,
}

/// One rule: ALL needle groups must match, a group matches when ANY of its
/// alternatives is contained in the lowercased input.
type Needles = &'static [&'static [&'static str]];

/// Style-tag category rules, highest priority first.
///
/// "vocal"+"female" is tested before "vocal"+"male" because "female"
/// contains "male"; reordering would misbucket female vocal tags.
const STYLE_RULES: &[(Needles, ColorBucket)] = &[
    (&[&["vocal"], &["female"]], ColorBucket::Red),
    (&[&["vocal"], &["male"]], ColorBucket::Blue),
    (&[&["vocal quality"]], ColorBucket::Yellow),
    (&[&["vocal style"]], ColorBucket::Cyan),
    (&[&["mood"]], ColorBucket::Purple),
    (&[&["dynamic"]], ColorBucket::Orange),
    (&[&["instrument"]], ColorBucket::Green),
    (&[&["genre"]], ColorBucket::Pink),
];

/// Section-type rules, highest priority first.
///
/// "pre-chorus"/"prechorus" must precede "chorus": every pre-chorus type
/// also contains the plain "chorus" needle.
const SECTION_RULES: &[(Needles, ColorBucket)] = &[
    (&[&["intro"]], ColorBucket::Blue),
    (&[&["verse"]], ColorBucket::Cyan),
    (&[&["pre-chorus", "prechorus"]], ColorBucket::Purple),
    (&[&["chorus"]], ColorBucket::Primary),
    (&[&["bridge"]], ColorBucket::Pink),
    (&[&["outro", "end"]], ColorBucket::Red),
];

fn match_rules(input: &str, rules: &[(Needles, ColorBucket)]) -> ColorBucket {
    let lower = input.to_lowercase();
    for (needles, bucket) in rules {
        let matched = needles
            .iter()
            .all(|group| group.iter().any(|needle| lower.contains(needle)));
        if matched {
            return *bucket;
        }
    }
    ColorBucket::Neutral
}

/// Map a style-tag category to its color bucket.
///
/// Pure and total: deterministic for every input, `Neutral` when nothing
/// matches.
pub fn style_color(category: &str) -> ColorBucket {
    match_rules(category, STYLE_RULES)
}

/// Map a section type to its color bucket.
pub fn section_color(section_type: &str) -> ColorBucket {
    match_rules(section_type, SECTION_RULES)
}
