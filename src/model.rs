//! Request and result types exchanged with callers

use serde::{Deserialize, Serialize};

pub const MAX_SUGGESTIONS: usize = 10;
pub const MAX_RED_FLAGS: usize = 8;
pub const MAX_BUZZWORDS: usize = 10;
pub const MAX_LINKEDIN_ISSUES: usize = 5;

/// One resume submission. Built once per user action and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub linkedin_summary: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl AnalysisRequest {
    pub fn new(resume_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            ..Self::default()
        }
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = non_blank(job_title.into());
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = non_blank(industry.into());
        self
    }

    pub fn with_job_description(mut self, job_description: impl Into<String>) -> Self {
        self.job_description = non_blank(job_description.into());
        self
    }

    pub fn with_linkedin_summary(mut self, summary: impl Into<String>) -> Self {
        self.linkedin_summary = non_blank(summary.into());
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = non_blank(user_id.into());
        self
    }

    pub fn has_resume_content(&self) -> bool {
        !self.resume_text.trim().is_empty()
    }

    /// Job description text, if one was supplied and is not blank.
    pub fn job_description_text(&self) -> Option<&str> {
        self.job_description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub section: String,
    pub issue: String,
    pub improvement: String,
}

impl Suggestion {
    pub fn new(
        section: impl Into<String>,
        issue: impl Into<String>,
        improvement: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            issue: issue.into(),
            improvement: improvement.into(),
        }
    }
}

/// Matched and missing keywords, in priority order with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keywords {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInConsistency {
    pub field: String,
    pub issue: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub ats_score: u8,
    pub summary: String,
    pub suggestions: Vec<Suggestion>,
    pub keywords: Keywords,
    pub red_flags: Vec<String>,
    pub buzzwords: Vec<String>,
    pub recommended_formats: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_consistency: Option<Vec<LinkedInConsistency>>,
}

impl AnalysisResult {
    /// Neutral placeholder returned when no strategy produced a result.
    pub fn degraded() -> Self {
        Self {
            score: 50,
            ats_score: 50,
            summary: "We could not complete a full analysis right now. The scores shown are neutral placeholders.".to_string(),
            suggestions: vec![Suggestion::new(
                "General",
                "Analysis service temporarily unavailable",
                "Please try again in a few minutes. Your resume was received but could not be scored.",
            )],
            keywords: Keywords::default(),
            red_flags: Vec::new(),
            buzzwords: Vec::new(),
            recommended_formats: Vec::new(),
            linkedin_consistency: None,
        }
    }

    /// Enforce the list bounds every result must satisfy.
    pub fn enforce_bounds(mut self) -> Self {
        self.score = self.score.min(100);
        self.ats_score = self.ats_score.min(100);
        self.suggestions.truncate(MAX_SUGGESTIONS);
        self.red_flags.truncate(MAX_RED_FLAGS);
        self.buzzwords.truncate(MAX_BUZZWORDS);
        if let Some(entries) = self.linkedin_consistency.as_mut() {
            entries.truncate(MAX_LINKEDIN_ISSUES);
        }
        self
    }
}

/// What the caller receives from a successful `analyze` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<String>,
    /// Name of the strategy that produced the result.
    #[serde(default)]
    pub strategy: String,
}

/// Clamp any computed score into `0..=100`.
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-25.0), 0);
        assert_eq!(clamp_score(142.7), 100);
        assert_eq!(clamp_score(72.4), 72);
        assert_eq!(clamp_score(f64::NAN), 0);
    }

    #[test]
    fn test_builder_drops_blank_optionals() {
        let request = AnalysisRequest::new("Jane Roe")
            .with_job_description("   ")
            .with_user_id("user-1");

        assert!(request.job_description.is_none());
        assert_eq!(request.user_id.as_deref(), Some("user-1"));
        assert!(request.has_resume_content());
        assert!(!AnalysisRequest::new(" \n\t").has_resume_content());
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let request: AnalysisRequest = serde_json::from_str(
            r#"{"resumeText":"text","jobTitle":"Engineer","userId":"u1"}"#,
        )
        .unwrap();

        assert_eq!(request.resume_text, "text");
        assert_eq!(request.job_title.as_deref(), Some("Engineer"));
        assert_eq!(request.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_degraded_result_is_neutral() {
        let result = AnalysisResult::degraded();
        assert_eq!(result.score, 50);
        assert_eq!(result.ats_score, 50);
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.suggestions[0]
            .issue
            .contains("temporarily unavailable"));
    }
}
