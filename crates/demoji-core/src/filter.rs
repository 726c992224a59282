//! Emoji filter
//!
//! Replaces emoji with spaces and then tidies up the whitespace that the
//! replacement leaves behind.
//!
//! # Rules
//!
//! 1. Every maximal run of emoji becomes a single space.
//! 2. Every run of two or more `' '` collapses to one. Tabs are untouched.
//! 3. A line starting with exactly one space loses that space. Lines starting
//!    with two or more spaces keep them as indentation.
//!
//! Rule 2 applies to all spaces in the document, not only those next to a
//! removed emoji, so pre-existing double spaces are collapsed as well.

use crate::ranges::is_emoji;

/// Remove emoji from `text` and normalize the resulting whitespace.
///
/// # Example
///
/// ```
/// use demoji_core::filter;
///
/// assert_eq!(filter("Hello 🎉 World"), "Hello World");
/// assert_eq!(filter("Grüße 👋"), "Grüße ");
/// ```
pub fn filter(text: &str) -> String {
    let collapsed = replace_and_collapse(text);

    collapsed
        .split('\n')
        .map(strip_debris_space)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rules 1 and 2 in a single pass.
///
/// An emoji run and a space run both emit one space, and a space is never
/// pushed right after another space. This gives the same result as replacing
/// runs first and collapsing afterwards.
fn replace_and_collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;

    for c in text.chars() {
        if c == ' ' || is_emoji(c) {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(c);
            last_was_space = false;
        }
    }

    out
}

/// Rule 3: drop a single leading space, keep multi-space indentation.
fn strip_debris_space(line: &str) -> &str {
    match line.strip_prefix(' ') {
        Some(rest) if !rest.starts_with(' ') => rest,
        _ => line,
    }
}

/// Number of emoji code points in `text`.
pub fn count_emoji(text: &str) -> usize {
    text.chars().filter(|&c| is_emoji(c)).count()
}

/// Returns `true` if `text` has at least one emoji code point.
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(filter(""), "");
    }

    #[test]
    fn test_emoji_between_words() {
        assert_eq!(filter("Hello 🎉 World"), "Hello World");
        assert_eq!(filter("Hello🎉World"), "Hello World");
    }

    #[test]
    fn test_emoji_run_becomes_one_space() {
        assert_eq!(filter("a😀😃😄b"), "a b");
        assert_eq!(filter("a😀 😃 😄b"), "a b");
    }

    #[test]
    fn test_zwj_sequence_removed_entirely() {
        // family: man, ZWJ, woman, ZWJ, girl
        assert_eq!(filter("x\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}y"), "x y");
    }

    #[test]
    fn test_presentation_selector_removed() {
        // U+2764 is inside U+2500..U+2BEF, U+FE0F is listed on its own
        assert_eq!(filter("I \u{2764}\u{FE0F} Rust"), "I Rust");
    }

    #[test]
    fn test_leading_emoji_on_line() {
        assert_eq!(filter("🚀 Launch"), "Launch");
        assert_eq!(filter("## 🚀 Launch"), "## Launch");
    }

    #[test]
    fn test_emoji_only_line_becomes_empty() {
        assert_eq!(filter("🎉"), "");
        assert_eq!(filter("before\n🎉\nafter"), "before\n\nafter");
    }

    #[test]
    fn test_indented_emoji_collapses_to_unindented() {
        // "  🎉 indented" -> "    indented" -> " indented" -> "indented"
        assert_eq!(filter("  🎉 indented"), "indented");
    }

    #[test]
    fn test_existing_double_spaces_collapse() {
        assert_eq!(filter("a  b   c"), "a b c");
        assert_eq!(filter("    - nested item"), "- nested item");
    }

    #[test]
    fn test_tabs_are_preserved() {
        assert_eq!(filter("\tcode\t\there"), "\tcode\t\there");
        assert_eq!(filter("\t🎉 x"), "\t x");
    }

    #[test]
    fn test_trailing_space_is_kept() {
        assert_eq!(filter("done ✅"), "done ");
        assert_eq!(filter("done ✅\nnext"), "done \nnext");
    }

    #[test]
    fn test_umlauts_and_accents_preserved() {
        let text = "Größe, Übermaß, Straße, café, naïve, señor";
        assert_eq!(filter(text), text);
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(filter("🎉 a\r\n🎉 b\r\n"), "a\r\nb\r\n");
    }

    #[test]
    fn test_strip_debris_space() {
        assert_eq!(strip_debris_space(" "), "");
        assert_eq!(strip_debris_space(" x"), "x");
        assert_eq!(strip_debris_space("  x"), "  x");
        assert_eq!(strip_debris_space("x "), "x ");
        assert_eq!(strip_debris_space(""), "");
    }

    #[test]
    fn test_count_and_contains() {
        assert_eq!(count_emoji("a🎉b😀c"), 2);
        assert_eq!(count_emoji("plain"), 0);
        assert!(contains_emoji("ok 👍"));
        assert!(!contains_emoji("Grüße"));
    }

    #[test]
    fn test_idempotent_on_mixed_sample() {
        let text = "# Report 📊\n\n  - item ✅  done\n🎉\n\t tab 🚀🚀 end  \n";
        let once = filter(text);
        assert_eq!(filter(&once), once);
        assert!(!contains_emoji(&once));
    }
}
