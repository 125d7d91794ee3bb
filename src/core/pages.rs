//! Packs lines of command output into code-block pages that fit in one message.

use crate::errors::{Error, Result};

/// Maximum characters in a single chat message.
pub const MESSAGE_LIMIT: usize = 2000;

const FENCE: &str = "```";

/// Accumulates lines into pages wrapped in a prefix/suffix (a code fence by default).
#[derive(Debug, Clone)]
pub struct TextPages {
    prefix: String,
    suffix: String,
    max_size: usize,
    current: Vec<String>,
    count: usize,
    pages: Vec<String>,
}

impl Default for TextPages {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPages {
    /// Plain code-block pages of at most [`MESSAGE_LIMIT`] characters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fences(FENCE.to_string(), FENCE.to_string(), MESSAGE_LIMIT)
    }

    /// Code-block pages highlighted as `language`.
    #[must_use]
    pub fn with_language(language: &str) -> Self {
        Self::with_fences(format!("{FENCE}{language}"), FENCE.to_string(), MESSAGE_LIMIT)
    }

    /// Custom prefix, suffix and page size.
    #[must_use]
    pub fn with_fences(prefix: String, suffix: String, max_size: usize) -> Self {
        let count = prefix.chars().count() + 1;
        Self {
            current: vec![prefix.clone()],
            prefix,
            suffix,
            max_size,
            count,
            pages: Vec::new(),
        }
    }

    /// Room for a single line on an otherwise empty page.
    #[must_use]
    pub fn max_line_length(&self) -> usize {
        self.max_size
            .saturating_sub(self.prefix.chars().count() + self.suffix.chars().count() + 2)
    }

    /// Appends a line, starting a new page when it would not fit on the current one.
    pub fn add_line(&mut self, line: &str) -> Result<()> {
        let length = line.chars().count();
        let max = self.max_line_length();
        if length > max {
            return Err(Error::LineTooLong { length, max });
        }

        if self.count + length + 1 > self.max_size.saturating_sub(self.suffix.chars().count()) {
            self.close_page();
        }

        self.count += length + 1;
        self.current.push(line.to_string());
        Ok(())
    }

    /// Appends every line of a multi-line string.
    pub fn add_lines(&mut self, text: &str) -> Result<()> {
        text.lines().try_for_each(|line| self.add_line(line))
    }

    /// Finishes the current page, even if it is short. A page without lines is skipped.
    pub fn close_page(&mut self) {
        if self.current.len() <= 1 {
            return;
        }
        self.current.push(self.suffix.clone());
        self.pages.push(self.current.join("\n"));
        self.current = vec![self.prefix.clone()];
        self.count = self.prefix.chars().count() + 1;
    }

    /// All pages, including the one still being filled. No lines means no pages.
    #[must_use]
    pub fn pages(mut self) -> Vec<String> {
        self.close_page();
        self.pages
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_single_page() {
        let mut pages = TextPages::new();
        pages.add_line("hello").unwrap();
        pages.add_line("world").unwrap();
        assert_eq!(pages.pages(), vec!["```\nhello\nworld\n```".to_string()]);
    }

    #[test]
    fn test_no_lines_no_pages() {
        assert!(TextPages::new().pages().is_empty());
    }

    #[test]
    fn test_language_prefix() {
        let mut pages = TextPages::with_language("ansi");
        pages.add_line("x").unwrap();
        assert_eq!(pages.pages(), vec!["```ansi\nx\n```".to_string()]);
    }

    #[test]
    fn test_pages_never_exceed_limit() {
        let mut pages = TextPages::new();
        let line = "a".repeat(99);
        for _ in 0..100 {
            pages.add_line(&line).unwrap();
        }
        let pages = pages.pages();
        assert!(pages.len() > 1);
        for page in &pages {
            assert!(page.chars().count() <= MESSAGE_LIMIT);
            assert!(page.starts_with("```\n") && page.ends_with("\n```"));
        }
        let total_lines: usize = pages.iter().map(|page| page.lines().count() - 2).sum();
        assert_eq!(total_lines, 100);
    }

    #[test]
    fn test_small_page_size_splits() {
        let mut pages = TextPages::with_fences("[".to_string(), "]".to_string(), 10);
        // prefix(1) + 2 newlines + suffix(1) leaves 6 characters for a lone line
        assert_eq!(pages.max_line_length(), 6);
        pages.add_line("abc").unwrap();
        pages.add_line("def").unwrap();
        assert_eq!(pages.pages(), vec!["[\nabc\n]".to_string(), "[\ndef\n]".to_string()]);
    }

    #[test]
    fn test_line_too_long() {
        let mut pages = TextPages::new();
        let line = "b".repeat(MESSAGE_LIMIT);
        assert!(matches!(
            pages.add_line(&line),
            Err(Error::LineTooLong { length: 2000, max: 1992 })
        ));
    }

    #[test]
    fn test_tiny_page_size_does_not_overflow() {
        let mut pages = TextPages::with_fences(FENCE.to_string(), FENCE.to_string(), 2);
        assert_eq!(pages.max_line_length(), 0);
        pages.add_line("").unwrap();
        assert!(matches!(pages.add_line("x"), Err(Error::LineTooLong { length: 1, max: 0 })));
    }

    #[test]
    fn test_close_empty_page_is_skipped() {
        let mut pages = TextPages::new();
        pages.close_page();
        pages.add_line("one").unwrap();
        pages.close_page();
        pages.close_page();
        assert_eq!(pages.pages(), vec!["```\none\n```".to_string()]);
    }

    #[test]
    fn test_close_page_forces_break() {
        let mut pages = TextPages::new();
        pages.add_lines("one\ntwo").unwrap();
        pages.close_page();
        pages.add_line("three").unwrap();
        let pages = pages.pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1], "```\nthree\n```");
    }
}
