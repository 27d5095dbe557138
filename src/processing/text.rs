//! Keyword matching and text helpers shared by the extractors

use regex::Regex;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Whole-term matcher for lower-cased text.
///
/// `\b` does not work for terms such as `c++`, `c#` or `.net`, so the leading
/// boundary is part of the regex and the trailing boundary is checked by hand.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keyword: String,
    regex: Regex,
}

impl KeywordMatcher {
    pub fn new(keyword: &str) -> Self {
        let keyword = keyword.to_lowercase();
        let pattern = format!(r"(?:^|[^\p{{L}}\p{{N}}])({})", regex::escape(&keyword));
        let regex = Regex::new(&pattern).expect("Escaped keyword pattern is always valid");
        Self { keyword, regex }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Byte ranges of every whole-term occurrence.
    pub fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .filter(|m| !text[m.end()..].chars().next().is_some_and(is_word_char))
            .map(|m| m.range())
            .collect()
    }

    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.find_all(text).into_iter().next()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    pub fn count(&self, text: &str) -> usize {
        self.find_all(text).len()
    }
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// One-off whole-term check for terms that are not precompiled.
pub fn contains_term(text: &str, term: &str) -> bool {
    KeywordMatcher::new(term).is_match(text)
}

pub fn word_count(text: &str) -> usize {
    text.unicode_words().count()
}

/// Byte range of the line containing `range`.
pub fn line_bounds(text: &str, range: &Range<usize>) -> Range<usize> {
    let start = text[..range.start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = text[range.end..]
        .find('\n')
        .map(|i| range.end + i)
        .unwrap_or(text.len());
    start..end
}

/// Window of `radius` bytes around `range`, clipped to `limit` and snapped to
/// char boundaries.
pub fn window(text: &str, range: &Range<usize>, radius: usize, limit: &Range<usize>) -> Range<usize> {
    let mut start = range.start.saturating_sub(radius).max(limit.start);
    let mut end = (range.end + radius).min(limit.end);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    start..end
}

/// Surrounding text for a match, on one line, with whitespace collapsed.
pub fn snippet(text: &str, range: &Range<usize>, radius: usize) -> String {
    let line = line_bounds(text, range);
    let span = window(text, range, radius, &line);
    text[span].split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip a leading bullet marker and surrounding whitespace from a line.
pub fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed
        .strip_prefix(|c: char| BULLET_MARKERS.contains(&c))
        .map(str::trim_start)
        .unwrap_or(trimmed)
}

pub const BULLET_MARKERS: &[char] = &['-', '*', '•', '◦', '▪', '‣', '–', '·', '►', '➢'];

/// Push `value` unless an equal entry is already present.
pub fn push_unique(list: &mut Vec<String>, value: impl Into<String>) {
    let value = value.into();
    if !list.contains(&value) {
        list.push(value);
    }
}
