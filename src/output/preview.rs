//! Before/after preview of a rewrite.

use std::borrow::Cow;

use crate::config::PreviewConfig;
use crate::constants::ELLIPSIS;

/// The first few lines of the original and rewritten text, already
/// truncated for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Configured line count; shorter texts yield fewer lines.
    pub lines: usize,
    pub original: Vec<String>,
    pub modified: Vec<String>,
}

impl Preview {
    pub fn build(original: &str, modified: &str, config: &PreviewConfig) -> Self {
        Self {
            lines: config.lines,
            original: head_lines(original, config),
            modified: head_lines(modified, config),
        }
    }
}

/// Cut `line` to `width` characters, marking the cut with an ellipsis.
pub fn truncate_line(line: &str, width: usize) -> Cow<'_, str> {
    match line.char_indices().nth(width) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &line[..cut])),
        None => Cow::Borrowed(line),
    }
}

fn head_lines(text: &str, config: &PreviewConfig) -> Vec<String> {
    text.split('\n')
        .take(config.lines)
        .map(|line| truncate_line(line, config.width).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sixty_chars_are_cut_to_fifty() {
        let line = "x".repeat(60);
        assert_eq!(truncate_line(&line, 50), format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn fifty_chars_are_kept() {
        let line = "y".repeat(50);
        assert_eq!(truncate_line(&line, 50), line);
        assert!(matches!(truncate_line(&line, 50), Cow::Borrowed(_)));
    }

    #[test]
    fn short_lines_are_kept() {
        assert_eq!(truncate_line("short", 50), "short");
        assert_eq!(truncate_line("", 50), "");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let line = "é".repeat(55);
        assert_eq!(truncate_line(&line, 50), format!("{}...", "é".repeat(50)));
    }

    #[test]
    fn preview_takes_first_lines_of_each_side() {
        let preview = Preview::build(
            "one\ntwo\nthree\nfour",
            "/* header */\n\nONE\ntwo",
            &PreviewConfig::default(),
        );
        assert_eq!(preview.original, vec!["one", "two", "three"]);
        assert_eq!(preview.modified, vec!["/* header */", "", "ONE"]);
    }

    #[test]
    fn preview_of_empty_text_is_one_empty_line() {
        let preview = Preview::build("", "x", &PreviewConfig::default());
        assert_eq!(preview.original, vec![""]);
    }

    #[test]
    fn preview_respects_config() {
        let config = PreviewConfig { lines: 1, width: 3 };
        let preview = Preview::build("abcdef\nsecond", "ab", &config);
        assert_eq!(preview.lines, 1);
        assert_eq!(preview.original, vec!["abc..."]);
        assert_eq!(preview.modified, vec!["ab"]);
    }
}
