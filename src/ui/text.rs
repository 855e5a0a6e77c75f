//! Word-wrapping helpers for the page builders.
//!
//! Sections are built as concrete rows of text (so section offsets and
//! total page height are known exactly); wrapping therefore happens here
//! rather than in Ratatui's `Paragraph`.

use unicode_width::UnicodeWidthStr;

/// Greedy word wrap of `text` into lines no wider than `width` columns.
/// A single word wider than `width` gets its own line rather than being
/// split mid-word.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate `text` to at most `width` columns, appending `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + 2 > width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
        assert!(lines.iter().all(|l| l.width() <= 10));
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        assert_eq!(wrap("", 20), vec![String::new()]);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let lines = wrap("a supercalifragilistic b", 10);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("hello world", 7), "hello …");
        assert_eq!(truncate("short", 10), "short");
    }
}
