//! Parsing free-form provider output into an `AnalysisResult`.
//!
//! Provider text is treated as untrusted: the JSON object is extracted
//! greedily, parsed into an untyped `Value`, and only accepted when `score`
//! and `ats_score` are numeric. Every other field is read leniently.

use crate::error::AnalysisError;
use crate::model::{clamp_score, AnalysisResult, Keywords, LinkedInConsistency, Suggestion};
use crate::patterns::library;
use crate::processing::text::KeywordMatcher;
use once_cell::sync::Lazy;
use serde_json::{Map, Value};

/// Largest score change the sentiment blend may apply.
pub const MAX_SENTIMENT_ADJUSTMENT: i32 = 10;
const POINTS_PER_INDICATOR: i32 = 2;

static POSITIVE: Lazy<Vec<KeywordMatcher>> = Lazy::new(|| {
    library()
        .positive_indicators()
        .iter()
        .map(|w| KeywordMatcher::new(w))
        .collect()
});

static NEGATIVE: Lazy<Vec<KeywordMatcher>> = Lazy::new(|| {
    library()
        .negative_indicators()
        .iter()
        .map(|w| KeywordMatcher::new(w))
        .collect()
});

/// Text from the first `{` to the last `}`, inclusive.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Validate and convert generated text into a bounded result.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let json = extract_json_object(text)
        .ok_or_else(|| AnalysisError::Shape("no JSON object in generated text".to_string()))?;
    let value: Value = serde_json::from_str(json)
        .map_err(|e| AnalysisError::Shape(format!("invalid JSON: {}", e)))?;
    let object = value
        .as_object()
        .ok_or_else(|| AnalysisError::Shape("top-level value is not an object".to_string()))?;

    let score = number_field(object, &["score"])
        .ok_or_else(|| AnalysisError::Shape("missing numeric score".to_string()))?;
    let ats_score = number_field(object, &["ats_score", "atsScore"])
        .ok_or_else(|| AnalysisError::Shape("missing numeric ats_score".to_string()))?;

    let keywords = field(object, &["keywords"])
        .and_then(Value::as_object)
        .map(|k| Keywords {
            matched: strings(k.get("matched")),
            missing: strings(k.get("missing")),
        })
        .unwrap_or_default();

    let suggestions = field(object, &["suggestions"])
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(suggestion).collect())
        .unwrap_or_default();

    let linkedin_consistency = field(object, &["linkedin_consistency", "linkedinConsistency"])
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    Some(LinkedInConsistency {
                        field: item.get("field")?.as_str()?.to_string(),
                        issue: item.get("issue")?.as_str()?.to_string(),
                    })
                })
                .collect()
        });

    Ok(AnalysisResult {
        score: clamp_score(score),
        ats_score: clamp_score(ats_score),
        summary: field(object, &["summary"])
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        suggestions,
        keywords,
        red_flags: strings(field(object, &["red_flags", "redFlags"])),
        buzzwords: strings(field(object, &["buzzwords"])),
        recommended_formats: strings(field(object, &["recommended_formats", "recommendedFormats"])),
        linkedin_consistency,
    }
    .enforce_bounds())
}

/// Coarse score adjustment from indicator words in unparseable output.
pub fn sentiment_adjustment(text: &str) -> i32 {
    let lowered = text.to_lowercase();
    let positive: usize = POSITIVE.iter().map(|m| m.count(&lowered)).sum();
    let negative: usize = NEGATIVE.iter().map(|m| m.count(&lowered)).sum();
    ((positive as i32 - negative as i32) * POINTS_PER_INDICATOR)
        .clamp(-MAX_SENTIMENT_ADJUSTMENT, MAX_SENTIMENT_ADJUSTMENT)
}

/// Shift the local score by `adjustment`, keeping it in range.
pub fn blend(mut local: AnalysisResult, adjustment: i32) -> AnalysisResult {
    local.score = clamp_score(f64::from(local.score) + f64::from(adjustment));
    local
}

fn field<'a>(object: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| object.get(*name))
}

fn number_field(object: &Map<String, Value>, names: &[&str]) -> Option<f64> {
    field(object, names).and_then(Value::as_f64)
}

fn strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn suggestion(item: &Value) -> Option<Suggestion> {
    let text = |key: &str| item.get(key).and_then(Value::as_str).unwrap_or_default();
    let issue = text("issue");
    if issue.is_empty() {
        return None;
    }
    Some(Suggestion::new(text("section"), issue, text("improvement")))
}
