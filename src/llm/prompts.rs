//! Structured analysis prompt sent to remote providers

use crate::model::AnalysisRequest;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const SYSTEM_PROMPT: &str = "You are an expert resume reviewer and applicant tracking system specialist. You reply with a single JSON object and nothing else.";

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(job_title|industry|job_description|linkedin|resume)\}")
        .expect("Invalid placeholder regex")
});

/// Prompt template with `{placeholder}` substitution.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub analysis: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            analysis: ANALYSIS_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_analysis(&self, request: &AnalysisRequest) -> String {
        let or_none = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or("Not provided")
                .to_string()
        };

        // Single pass, so braces inside user text are never expanded.
        PLACEHOLDER_REGEX
            .replace_all(&self.analysis, |caps: &Captures| match &caps[1] {
                "job_title" => or_none(&request.job_title),
                "industry" => or_none(&request.industry),
                "job_description" => or_none(&request.job_description),
                "linkedin" => or_none(&request.linkedin_summary),
                _ => request.resume_text.trim().to_string(),
            })
            .into_owned()
    }
}

const ANALYSIS_TEMPLATE: &str = r#"TASK: Score the resume below and explain how to improve it.

TARGET JOB TITLE: {job_title}
INDUSTRY: {industry}

<JOB DESCRIPTION>
{job_description}
</JOB DESCRIPTION>

<LINKEDIN SUMMARY>
{linkedin}
</LINKEDIN SUMMARY>

<RESUME>
{resume}
</RESUME>

Return ONLY a JSON object with exactly these fields:
{
  "score": <integer 0-100, overall quality for the target role>,
  "ats_score": <integer 0-100, applicant tracking system compatibility>,
  "summary": "<two or three sentences>",
  "suggestions": [{"section": "<resume section>", "issue": "<specific problem>", "improvement": "<concrete rewrite or example>"}],
  "keywords": {"matched": ["<keyword>"], "missing": ["<keyword>"]},
  "red_flags": ["<issue a recruiter would notice>"],
  "buzzwords": ["<overused phrase found in the resume>"],
  "recommended_formats": ["<resume format>"],
  "linkedin_consistency": [{"field": "<headline|skills|experience>", "issue": "<mismatch>"}]
}

Rules:
- At most 10 suggestions, most important first.
- At most 8 red flags and 10 buzzwords.
- Omit linkedin_consistency when no LinkedIn summary is provided.
- Reference the actual resume content, not generic advice."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_embeds_all_fields() {
        let request = AnalysisRequest::new("Jane Roe\nRust engineer")
            .with_job_title("Backend Engineer")
            .with_industry("Finance")
            .with_job_description("Rust and Kafka required")
            .with_linkedin_summary("Backend engineer at Acme");

        let prompt = PromptTemplates::default().render_analysis(&request);

        assert!(prompt.contains("TARGET JOB TITLE: Backend Engineer"));
        assert!(prompt.contains("INDUSTRY: Finance"));
        assert!(prompt.contains("Rust and Kafka required"));
        assert!(prompt.contains("Backend engineer at Acme"));
        assert!(prompt.contains("<RESUME>\nJane Roe\nRust engineer\n</RESUME>"));
        assert!(prompt.contains("\"ats_score\""));
    }

    #[test]
    fn test_missing_optionals_are_marked() {
        let prompt = PromptTemplates::default().render_analysis(&AnalysisRequest::new("Jane Roe"));
        assert!(prompt.contains("TARGET JOB TITLE: Not provided"));
        assert!(prompt.contains("<JOB DESCRIPTION>\nNot provided\n</JOB DESCRIPTION>"));
        assert!(!prompt.contains("{resume}"));
    }

    #[test]
    fn test_placeholders_in_user_text_are_left_alone() {
        let request = AnalysisRequest::new("Jane Roe\nRust engineer")
            .with_job_description("Apply now: {linkedin} {resume}")
            .with_linkedin_summary("Backend engineer at Acme");

        let prompt = PromptTemplates::default().render_analysis(&request);

        assert!(prompt.contains("Apply now: {linkedin} {resume}"));
        assert_eq!(prompt.matches("Jane Roe").count(), 1);
        assert_eq!(prompt.matches("Backend engineer at Acme").count(), 1);
    }
}
