//! Token definitions for the annotated lyrics format
//!
//! This module defines the tokens produced when scanning a single line of
//! lyrics text. The tokens are defined using the logos derive macro for
//! efficient tokenization. Scanning is strictly line-local: a bracket tag
//! can never span a line break, so an unclosed `[` simply produces no
//! bracket token on that line.
use logos::Logos;

/// All possible tokens on one line of annotated lyrics
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// A complete non-nested bracket tag: maximal span from `[` to the
    /// next `]` on the same line, interior non-empty.
    #[regex(r"\[[^\]\n]+\]", |lex| lex.slice().to_string())]
    BracketTag(String),

    /// Effect-cue delimiter
    #[token("*")]
    Star,

    // Whitespace (excluding newlines)
    #[regex(r"[ \t]+")]
    Whitespace,

    // Text content (catch-all for non-special characters)
    #[regex(r"[^\[\]*\s]+", |lex| lex.slice().to_string())]
    Text(String),
}

impl Token {
    /// Check if this token is a bracket tag
    pub fn is_bracket_tag(&self) -> bool {
        matches!(self, Token::BracketTag(_))
    }

    /// Interior of a bracket tag (surrounding `[`/`]` stripped)
    pub fn bracket_interior(&self) -> Option<&str> {
        match self {
            Token::BracketTag(raw) => Some(&raw[1..raw.len() - 1]),
            _ => None,
        }
    }
}

/// Convenience function to tokenize a line and collect all tokens
///
/// Stray `]` and unclosed `[` characters lex as errors and are dropped;
/// malformed brackets are ignored at the line level rather than failing
/// the scan.
pub fn tokenize(line: &str) -> Vec<Token> {
    Token::lexer(line)
        .filter_map(|result| result.ok())
        .collect()
}

/// Extract the interiors of all bracket tags on a line, left to right.
pub fn bracket_tags(line: &str) -> Vec<String> {
    tokenize(line)
        .iter()
        .filter_map(|t| t.bracket_interior().map(str::to_string))
        .collect()
}

/// Recognize a whole-line effect cue.
///
/// Returns the trimmed interior when the entire (already trimmed) line is
/// one asterisk-delimited token: starts with `*`, ends with `*`, length at
/// least 2. Anything else returns `None`.
pub fn effect_line(line: &str) -> Option<&str> {
    if line.len() >= 2 && line.starts_with('*') && line.ends_with('*') {
        Some(line[1..line.len() - 1].trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bracket_tag() {
        let tokens = tokenize("[Chorus]");
        assert_eq!(tokens, vec![Token::BracketTag("[Chorus]".to_string())]);
    }

    #[test]
    fn test_bracket_tag_interior() {
        let token = Token::BracketTag("[Mood: Dark]".to_string());
        assert_eq!(token.bracket_interior(), Some("Mood: Dark"));
    }

    #[test]
    fn test_multiple_tags_in_order() {
        let tags = bracket_tags("[Chorus] [Mood: Dark]");
        assert_eq!(tags, vec!["Chorus".to_string(), "Mood: Dark".to_string()]);
    }

    #[test]
    fn test_unclosed_bracket_yields_no_tag() {
        assert!(bracket_tags("[Mood: Dark").is_empty());
    }

    #[test]
    fn test_empty_brackets_yield_no_tag() {
        assert!(bracket_tags("[]").is_empty());
    }

    #[test]
    fn test_stray_close_bracket_is_ignored() {
        let tags = bracket_tags("la la ] [Chorus]");
        assert_eq!(tags, vec!["Chorus".to_string()]);
    }

    #[test]
    fn test_bracket_spans_to_next_close() {
        // Maximal span from `[` to the next `]`, nesting is not a thing
        let tags = bracket_tags("[a[b]");
        assert_eq!(tags, vec!["a[b".to_string()]);
    }

    #[test]
    fn test_plain_text_tokenization() {
        let tokens = tokenize("Hello world");
        assert_eq!(
            tokens,
            vec![
                Token::Text("Hello".to_string()),
                Token::Whitespace,
                Token::Text("world".to_string()),
            ]
        );
    }

    #[test]
    fn test_star_tokens() {
        let tokens = tokenize("*key change*");
        assert_eq!(
            tokens,
            vec![
                Token::Star,
                Token::Text("key".to_string()),
                Token::Whitespace,
                Token::Text("change".to_string()),
                Token::Star,
            ]
        );
    }

    #[test]
    fn test_effect_line_interior_is_trimmed() {
        assert_eq!(effect_line("* key change *"), Some("key change"));
    }

    #[test]
    fn test_effect_line_rejects_lone_star() {
        assert_eq!(effect_line("*"), None);
    }

    #[test]
    fn test_effect_line_accepts_bare_delimiters() {
        assert_eq!(effect_line("**"), Some(""));
    }

    #[test]
    fn test_effect_line_rejects_trailing_text() {
        assert_eq!(effect_line("*loud* now"), None);
    }
}
