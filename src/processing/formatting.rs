//! Layout signals: bullets, section headers, line lengths

use crate::patterns::library;
use crate::processing::text::{word_count, BULLET_MARKERS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MIN_BULLETS_FOR_CONSISTENCY: usize = 3;
pub const MIN_AVERAGE_LINE_LENGTH: f64 = 10.0;
pub const MAX_AVERAGE_LINE_LENGTH: f64 = 200.0;

/// Header lines longer than this many words are treated as prose.
const MAX_HEADER_WORDS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattingInfo {
    pub bullet_count: usize,
    /// Number of distinct bullet markers in use.
    pub bullet_styles: usize,
    /// Standard sections found, in library order.
    pub sections_present: Vec<String>,
    pub average_line_length: f64,
    pub line_count: usize,
    pub word_count: usize,
    pub consistent: bool,
    pub has_tables: bool,
    pub has_images: bool,
    pub non_ascii_ratio: f64,
}

impl FormattingInfo {
    pub fn has_section(&self, name: &str) -> bool {
        self.sections_present.iter().any(|s| s == name)
    }

    pub fn missing_sections(&self) -> Vec<&'static str> {
        library()
            .section_headers()
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| !self.has_section(name))
            .collect()
    }
}

/// Analyse formatting of lower-cased resume text.
pub fn extract_formatting(text: &str) -> FormattingInfo {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut markers = BTreeSet::new();
    let mut bullet_count = 0;
    for line in &lines {
        if let Some(marker) = line.chars().next().filter(|c| BULLET_MARKERS.contains(c)) {
            bullet_count += 1;
            markers.insert(marker);
        }
    }

    let sections_present = library()
        .section_headers()
        .iter()
        .filter(|(_, aliases)| lines.iter().any(|line| is_header(line, aliases)))
        .map(|(name, _)| name.to_string())
        .collect();

    let line_count = lines.len();
    let average_line_length = if line_count == 0 {
        0.0
    } else {
        lines.iter().map(|l| l.chars().count()).sum::<usize>() as f64 / line_count as f64
    };

    let consistent = bullet_count >= MIN_BULLETS_FOR_CONSISTENCY
        && (MIN_AVERAGE_LINE_LENGTH..=MAX_AVERAGE_LINE_LENGTH).contains(&average_line_length);

    let total_chars = text.chars().count();
    let non_ascii_ratio = if total_chars == 0 {
        0.0
    } else {
        text.chars()
            .filter(|c| !c.is_ascii() && !BULLET_MARKERS.contains(c))
            .count() as f64
            / total_chars as f64
    };

    FormattingInfo {
        bullet_count,
        bullet_styles: markers.len(),
        sections_present,
        average_line_length,
        line_count,
        word_count: word_count(text),
        consistent,
        has_tables: lines.iter().any(|line| looks_like_table_row(line)),
        has_images: has_image_markers(text),
        non_ascii_ratio,
    }
}

fn is_header(line: &str, aliases: &[&str]) -> bool {
    let normalized = line
        .trim_matches(|c: char| c == '#' || c == '*' || c == '=' || c.is_whitespace())
        .trim_end_matches(':')
        .trim();
    // "skills: rust, go" is an inline header whatever its length
    if aliases
        .iter()
        .any(|alias| normalized.starts_with(&format!("{}:", alias)))
    {
        return true;
    }
    if normalized.split_whitespace().count() > MAX_HEADER_WORDS {
        return false;
    }
    aliases
        .iter()
        .any(|alias| normalized == *alias || normalized.starts_with(&format!("{} ", alias)))
}

fn looks_like_table_row(line: &str) -> bool {
    line.matches('|').count() >= 2 || line.matches('\t').count() >= 2
}

fn has_image_markers(text: &str) -> bool {
    ["<img", "![", "[image]", ".png", ".jpg", ".jpeg", ".gif"]
        .iter()
        .any(|marker| text.contains(marker))
}
