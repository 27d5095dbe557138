//! Experience and impact signals.
//!
//! A quantified token only becomes an impact statement when an impact verb
//! and a business keyword both appear within `CONTEXT_RADIUS` bytes of it on
//! the same line. Dates, phone numbers, emails, URLs and street addresses
//! are excluded before that check runs.

use crate::patterns::library;
use crate::processing::contact::contact_spans;
use crate::processing::text::{line_bounds, push_unique, strip_bullet, window, KeywordMatcher};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;

pub const CONTEXT_RADIUS: usize = 100;
pub const POINTS_PER_PATTERN_MATCH: u32 = 4;
pub const CATEGORY_CAP: u32 = 20;
pub const EXPERIENCE_CAP: u32 = 25;

static QUANTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<currency>\$\s?\d[\d,]*(?:\.\d+)?(?:\s*(?:k|m|b|million|billion|thousand)\b)?)",
        r"|(?P<percentage>\d+(?:\.\d+)?\s?(?:%|percent\b))",
        r"|(?P<multiplier>\d+(?:\.\d+)?x\b)",
        r"|(?P<number>\d[\d,]*(?:\.\d+)?)",
    ))
    .expect("Invalid quantity regex")
});

static YEAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid year regex"));

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\b\d{1,2}/(?:\d{1,2}/)?(?:(?:19|20)\d{2}|\d{2})\b",
        r"|\b\d{1,2}-\d{1,2}-(?:\d{4}|\d{2})\b",
        r"|\b(?:19|20)\d{2}-\d{1,2}(?:-\d{1,2})?\b",
    ))
    .expect("Invalid date regex")
});

static ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\b\d{1,5}\s+(?:[a-z]+\s+){1,3}",
        r"(?:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|way|court|ct|suite|apt)\b",
        r"|,\s*[a-z]{2}\s+\d{5}(?:-\d{4})?\b",
    ))
    .expect("Invalid address regex")
});

static IMPACT_CATEGORIES: Lazy<Vec<(&'static str, Vec<Regex>)>> = Lazy::new(|| {
    library()
        .impact_patterns()
        .iter()
        .map(|category| {
            let regexes = category
                .patterns
                .iter()
                .map(|p| Regex::new(p).expect("Invalid impact pattern"))
                .collect();
            (category.name, regexes)
        })
        .collect()
});

static IMPACT_VERBS: Lazy<Vec<KeywordMatcher>> = Lazy::new(|| {
    library()
        .action_verbs()
        .impact_verbs()
        .map(KeywordMatcher::new)
        .collect()
});

static WEAK_VERBS: Lazy<Vec<KeywordMatcher>> = Lazy::new(|| {
    library()
        .action_verbs()
        .low_impact
        .iter()
        .map(|v| KeywordMatcher::new(v))
        .collect()
});

static BUSINESS_KEYWORDS: Lazy<Vec<KeywordMatcher>> = Lazy::new(|| {
    library()
        .business_keywords()
        .iter()
        .map(|k| KeywordMatcher::new(k))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityKind {
    Percentage,
    Currency,
    Multiplier,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantifiedToken {
    pub text: String,
    pub kind: QuantityKind,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub matches: usize,
    pub points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactAnalysis {
    pub categories: Vec<CategoryScore>,
    /// Sum of category points, capped at `EXPERIENCE_CAP`.
    pub experience_score: u32,
    pub quantified_tokens: Vec<QuantifiedToken>,
    /// Lines that carry a verified achievement, in document order.
    pub impact_statements: Vec<String>,
    pub strong_verb_count: usize,
    pub weak_verb_count: usize,
}

impl ImpactAnalysis {
    pub fn category_points(&self, category: &str) -> u32 {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.points)
            .unwrap_or(0)
    }
}

/// Run all experience/impact extractors over lower-cased resume text.
pub fn extract_impact(text: &str) -> ImpactAnalysis {
    let categories: Vec<CategoryScore> = IMPACT_CATEGORIES
        .iter()
        .map(|(name, regexes)| {
            let matches: usize = regexes.iter().map(|r| r.find_iter(text).count()).sum();
            CategoryScore {
                category: name.to_string(),
                matches,
                points: (matches as u32 * POINTS_PER_PATTERN_MATCH).min(CATEGORY_CAP),
            }
        })
        .collect();

    let experience_score = categories
        .iter()
        .map(|c| c.points)
        .sum::<u32>()
        .min(EXPERIENCE_CAP);

    let quantified_tokens = extract_quantified_tokens(text);
    let impact_statements = find_impact_statements(text, &quantified_tokens);

    ImpactAnalysis {
        categories,
        experience_score,
        quantified_tokens,
        impact_statements,
        strong_verb_count: IMPACT_VERBS.iter().map(|v| v.count(text)).sum(),
        weak_verb_count: WEAK_VERBS.iter().map(|v| v.count(text)).sum(),
    }
}

/// Every percentage, currency amount, multiplier and number that is not part
/// of a date, phone number, email, URL or address.
pub fn extract_quantified_tokens(text: &str) -> Vec<QuantifiedToken> {
    let mut excluded = contact_spans(text);
    excluded.extend(DATE_REGEX.find_iter(text).map(|m| m.range()));
    excluded.extend(ADDRESS_REGEX.find_iter(text).map(|m| m.range()));
    let years: Vec<Range<usize>> = YEAR_REGEX.find_iter(text).map(|m| m.range()).collect();

    let mut tokens = Vec::new();
    for caps in QUANTITY_REGEX.captures_iter(text) {
        let (m, kind) = if let Some(m) = caps.name("currency") {
            (m, QuantityKind::Currency)
        } else if let Some(m) = caps.name("percentage") {
            (m, QuantityKind::Percentage)
        } else if let Some(m) = caps.name("multiplier") {
            (m, QuantityKind::Multiplier)
        } else if let Some(m) = caps.name("number") {
            (m, QuantityKind::Number)
        } else {
            continue;
        };

        let range = m.range();
        if text[..range.start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphabetic())
        {
            // part of an identifier such as "v2" or "h264"
            continue;
        }
        if overlaps_any(&range, &excluded) {
            continue;
        }
        if kind == QuantityKind::Number && overlaps_any(&range, &years) {
            continue;
        }

        tokens.push(QuantifiedToken {
            text: m.as_str().trim().to_string(),
            kind,
            start: range.start,
            end: range.end,
        });
    }
    tokens
}

fn find_impact_statements(text: &str, tokens: &[QuantifiedToken]) -> Vec<String> {
    let mut statements = Vec::new();
    for token in tokens {
        let range = token.start..token.end;
        let line = line_bounds(text, &range);
        let context = &text[window(text, &range, CONTEXT_RADIUS, &line)];

        let has_verb = IMPACT_VERBS.iter().any(|v| v.is_match(context));
        let has_business_context = BUSINESS_KEYWORDS.iter().any(|k| k.is_match(context));
        if has_verb && has_business_context {
            push_unique(&mut statements, strip_bullet(&text[line]));
        }
    }
    statements
}

fn overlaps_any(range: &Range<usize>, spans: &[Range<usize>]) -> bool {
    spans
        .iter()
        .any(|span| range.start < span.end && span.start < range.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_with_verb_and_context_is_impact() {
        let analysis = extract_impact("- increased performance by 50%");
        assert_eq!(analysis.impact_statements, vec!["increased performance by 50%"]);
        assert_eq!(analysis.quantified_tokens[0].kind, QuantityKind::Percentage);
    }

    #[test]
    fn test_dates_and_addresses_are_not_impact() {
        let text = "acme corp 2021 - 2023\n123 main street, springfield, il 62704";
        let analysis = extract_impact(text);
        assert!(analysis.impact_statements.is_empty());
        assert!(analysis.quantified_tokens.is_empty());
    }

    #[test]
    fn test_numeric_dates_are_not_impact() {
        let analysis = extract_impact("account manager (06/2018 - 12/2020) managed client revenue");
        assert!(analysis.quantified_tokens.is_empty());
        assert!(analysis.impact_statements.is_empty());

        let text = "sales manager, 01/2019 - 03/2021\nshipped 2020-04-15, reviewed 3/14/22 and 11-02-2019";
        assert!(extract_quantified_tokens(text).is_empty());
    }

    #[test]
    fn test_impact_next_to_a_date_still_counts() {
        let analysis = extract_impact("06/2018 - 12/2020: increased revenue by 30%");
        let kinds: Vec<QuantityKind> = analysis.quantified_tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![QuantityKind::Percentage]);
        assert_eq!(analysis.impact_statements.len(), 1);
    }

    #[test]
    fn test_number_without_business_context_is_not_impact() {
        let analysis = extract_impact("- developed 3 internal tools");
        assert_eq!(analysis.quantified_tokens.len(), 1);
        assert!(analysis.impact_statements.is_empty());
    }

    #[test]
    fn test_phone_digits_are_excluded() {
        let text = "phone: 123-456-7890\n- increased revenue";
        let analysis = extract_impact(text);
        assert!(analysis.quantified_tokens.is_empty());
        assert!(analysis.impact_statements.is_empty());
    }

    #[test]
    fn test_currency_and_multiplier_tokens() {
        let tokens = extract_quantified_tokens("saved $1.2 million and grew traffic 3x");
        let kinds: Vec<QuantityKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![QuantityKind::Currency, QuantityKind::Multiplier]);
    }

    #[test]
    fn test_category_caps() {
        let text = "led ".repeat(30);
        let analysis = extract_impact(&text);
        assert_eq!(analysis.category_points("leadership"), CATEGORY_CAP);
        assert!(analysis.experience_score <= EXPERIENCE_CAP);
    }

    #[test]
    fn test_verb_tiers_counted() {
        let analysis = extract_impact("helped the team. assisted with audits. led the launch.");
        assert_eq!(analysis.weak_verb_count, 2);
        assert_eq!(analysis.strong_verb_count, 1);
    }
}
