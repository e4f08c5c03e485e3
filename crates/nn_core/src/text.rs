//! Text cleanup applied to extracted article bodies.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CONTROL_WHITESPACE: Regex = Regex::new(r"[\n\r\t]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"[\s\x1c-\x1f]+").unwrap();
}

/// Unicode whitespace plus the ASCII separator controls U+001C..U+001F.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Collapse newlines, tabs and whitespace runs into single spaces and trim.
///
/// Total: a missing or empty input yields an empty string.
pub fn normalize(text: Option<&str>) -> String {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return String::new(),
    };
    let cleaned = CONTROL_WHITESPACE.replace_all(text, " ");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    cleaned.trim_matches(is_space).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some(" \n\t\r ")), "");
    }

    #[test]
    fn test_collapses_mixed_whitespace() {
        let input = "  Line one\r\n\tLine   two \n\n\nLine\u{3000}three  ";
        let cleaned = normalize(Some(input));
        assert_eq!(cleaned, "Line one Line two Line three");
        assert!(!cleaned.contains("  "));
        assert!(!cleaned.contains(['\n', '\r', '\t']));
    }

    #[test]
    fn test_collapses_separator_controls() {
        assert_eq!(normalize(Some("a\x1c\x1db\x0b\x0cc\u{85}d")), "a b c d");
        assert_eq!(normalize(Some("\x1f edge \x1e")), "edge");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "plain",
            "  leading and trailing  ",
            "a\tb\nc\rd",
            "한국어   기사\n\n본문",
            "\u{a0}nbsp\u{a0}\u{a0}run",
            "\x1cfile\x1dgroup\x1e\x1f",
        ];
        for sample in samples {
            let once = normalize(Some(sample));
            assert_eq!(normalize(Some(&once)), once, "input: {:?}", sample);
        }
    }

    #[test]
    fn test_keeps_inner_text() {
        assert_eq!(normalize(Some("Hello, world!")), "Hello, world!");
    }
}
