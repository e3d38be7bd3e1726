//! Bucket tables for the style and section classifiers
//!
//! The classifiers are ordered rule engines; these cases pin both the
//! mapping and the priority order (first match wins).

use lyrictag::{section_color, style_color, ColorBucket};
use rstest::rstest;

#[rstest]
#[case("Female Vocal", ColorBucket::Red)]
#[case("Vocal (female lead)", ColorBucket::Red)]
#[case("Male Vocal", ColorBucket::Blue)]
#[case("Vocal Quality", ColorBucket::Yellow)]
#[case("Vocal Style", ColorBucket::Cyan)]
#[case("Mood", ColorBucket::Purple)]
#[case("Dynamics", ColorBucket::Orange)]
#[case("Instrumentation", ColorBucket::Green)]
#[case("Genre", ColorBucket::Pink)]
#[case("Tempo", ColorBucket::Neutral)]
#[case("", ColorBucket::Neutral)]
fn style_buckets(#[case] category: &str, #[case] expected: ColorBucket) {
    assert_eq!(style_color(category), expected);
}

#[rstest]
#[case("Intro", ColorBucket::Blue)]
#[case("Verse 1", ColorBucket::Cyan)]
#[case("Verse 12", ColorBucket::Cyan)]
#[case("Pre-Chorus", ColorBucket::Purple)]
#[case("Prechorus", ColorBucket::Purple)]
#[case("Chorus", ColorBucket::Primary)]
#[case("Final Chorus", ColorBucket::Primary)]
#[case("Post-Chorus", ColorBucket::Primary)]
#[case("Bridge", ColorBucket::Pink)]
#[case("Outro", ColorBucket::Red)]
#[case("The End", ColorBucket::Red)]
#[case("Hook", ColorBucket::Neutral)]
#[case("Breakdown", ColorBucket::Neutral)]
fn section_buckets(#[case] section_type: &str, #[case] expected: ColorBucket) {
    assert_eq!(section_color(section_type), expected);
}

/// A "vocal quality" category that also mentions gender still hits the
/// gendered rules first; priority order is part of the contract.
#[rstest]
#[case("Female Vocal Quality", ColorBucket::Red)]
#[case("Male Vocal Style", ColorBucket::Blue)]
fn gendered_vocal_rules_win(#[case] category: &str, #[case] expected: ColorBucket) {
    assert_eq!(style_color(category), expected);
}

#[test]
fn style_color_matches_style_tag_color() {
    use lyrictag::StyleTag;

    let tag = StyleTag::new("Mood", "Dark");
    assert_eq!(tag.color(), style_color("Mood"));
}
