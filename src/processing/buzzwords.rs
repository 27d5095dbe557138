//! Buzzword and duty-phrase detection

use crate::model::MAX_BUZZWORDS;
use crate::patterns::library;
use crate::processing::text::{is_word_char, push_unique, KeywordMatcher};
use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

/// More distinct buzzwords than this is penalised.
pub const BUZZWORD_THRESHOLD: usize = 3;

struct BuzzwordMatcher {
    automaton: AhoCorasick,
    phrases: Vec<&'static str>,
}

static BUZZWORD_MATCHER: Lazy<BuzzwordMatcher> = Lazy::new(|| {
    let phrases: Vec<&'static str> = library()
        .buzzword_families()
        .iter()
        .flat_map(|family| family.keywords.iter().copied())
        .collect();
    let automaton = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(&phrases)
        .expect("Failed to build buzzword matcher");
    BuzzwordMatcher { automaton, phrases }
});

static DUTY_PHRASES: Lazy<Vec<KeywordMatcher>> = Lazy::new(|| {
    library()
        .duty_phrases()
        .iter()
        .map(|p| KeywordMatcher::new(p))
        .collect()
});

/// Distinct buzzwords in first-seen order, at most `MAX_BUZZWORDS`.
pub fn detect_buzzwords(text: &str) -> Vec<String> {
    let matcher = &*BUZZWORD_MATCHER;
    let mut found = Vec::new();

    for mat in matcher.automaton.find_iter(text) {
        let before = text[..mat.start()].chars().next_back();
        let after = text[mat.end()..].chars().next();
        if before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
            continue;
        }
        push_unique(&mut found, matcher.phrases[mat.pattern().as_usize()]);
        if found.len() == MAX_BUZZWORDS {
            break;
        }
    }
    found
}

/// Occurrences of duty-oriented phrasing such as "responsible for".
pub fn count_duty_phrases(text: &str) -> usize {
    DUTY_PHRASES.iter().map(|p| p.count(text)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_distinct_buzzwords_in_order() {
        let found = detect_buzzwords(
            "a results-driven team player who can think outside the box. team player again.",
        );
        assert_eq!(found, vec!["results-driven", "team player", "think outside the box"]);
    }

    #[test]
    fn test_requires_word_boundaries() {
        assert!(detect_buzzwords("fetch the sketch").is_empty());
        assert_eq!(detect_buzzwords("tools, etc."), vec!["etc"]);
    }

    #[test]
    fn test_bounded() {
        let all: Vec<&str> = library()
            .buzzword_families()
            .iter()
            .flat_map(|f| f.keywords.iter().copied())
            .collect();
        let text = all.join(". ");
        assert_eq!(detect_buzzwords(&text).len(), MAX_BUZZWORDS);
    }

    #[test]
    fn test_duty_phrases() {
        assert_eq!(
            count_duty_phrases("responsible for billing. duties included filing. responsible for qa."),
            3
        );
    }
}
