//! Local heuristic scorer
//!
//! Combines the extractor signals into the overall score, the ATS checklist
//! score, suggestions and the remaining result fields. Everything here is a
//! pure function of the request.

pub mod ats;
pub mod breakdown;
pub mod findings;
pub mod suggestions;

use crate::error::AnalysisError;
use crate::model::{clamp_score, AnalysisRequest, AnalysisResult};
use crate::processing::{extract_signals, ResumeSignals};
use ats::AtsChecklist;
use breakdown::{compute_breakdown, ScoreBreakdown};
use log::debug;
use serde::Serialize;

/// Intermediate results kept for diagnostics and detailed reports.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub signals: ResumeSignals,
    pub breakdown: ScoreBreakdown,
    pub ats: AtsChecklist,
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer;

impl Scorer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        self.report(request).map(|report| report.result)
    }

    /// Score a request and keep every intermediate value.
    pub fn report(&self, request: &AnalysisRequest) -> Result<ScoreReport, AnalysisError> {
        if !request.has_resume_content() {
            return Err(AnalysisError::Local("no resume text to score".to_string()));
        }

        let signals = extract_signals(request);
        let breakdown = compute_breakdown(&signals);
        let ats = AtsChecklist::evaluate(&signals);

        let score = clamp_score(breakdown.raw_total() as f64);
        let ats_score = ats.score();
        debug!(
            "Local score {} (raw {}), ATS {} ({}/{} factors)",
            score,
            breakdown.raw_total(),
            ats_score,
            ats.passed(),
            ats.factors.len()
        );

        let suggestions = suggestions::generate_suggestions(&signals);
        let result = AnalysisResult {
            score,
            ats_score,
            summary: findings::summary(score, ats_score, &breakdown, &suggestions),
            keywords: findings::keywords(&signals),
            red_flags: findings::red_flags(&signals),
            buzzwords: signals.buzzwords.clone(),
            recommended_formats: findings::recommended_formats(&signals),
            linkedin_consistency: signals.linkedin.clone(),
            suggestions,
        }
        .enforce_bounds();

        Ok(ScoreReport {
            signals,
            breakdown,
            ats,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "John Doe\nSoftware Engineer\nEmail: john@example.com\nPhone: 123-456-7890\n\nExperience:\n- Developed web applications\n- Increased performance by 50%\n\nSkills:\n- JavaScript\n- React\n- Node.js\n\nEducation:\n- BS Computer Science";

    #[test]
    fn test_sample_resume() {
        let report = Scorer::new().report(&AnalysisRequest::new(SAMPLE)).unwrap();
        let result = &report.result;

        assert!(result.score > 0);
        assert!(result.score <= 100);
        assert!(result.ats_score <= 100);
        for skill in ["javascript", "react", "node.js"] {
            assert!(result.keywords.matched.contains(&skill.to_string()));
        }
        assert_eq!(
            report.signals.impact.impact_statements,
            vec!["increased performance by 50%"]
        );
    }

    #[test]
    fn test_minimal_resume() {
        let result = Scorer::new().analyze(&AnalysisRequest::new("John Doe")).unwrap();
        assert_eq!(result.score, 0);
        assert!(result.red_flags.contains(&"Missing email address".to_string()));
        assert!(result.red_flags.contains(&"Missing phone number".to_string()));
        assert!(result.red_flags.iter().any(|f| f.starts_with("Missing standard sections")));
        assert!(!result.suggestions.is_empty());
        assert!(result.linkedin_consistency.is_none());
    }

    #[test]
    fn test_empty_text_is_an_error() {
        assert!(matches!(
            Scorer::new().analyze(&AnalysisRequest::new("   ")),
            Err(AnalysisError::Local(_))
        ));
    }

    #[test]
    fn test_deterministic() {
        let request = AnalysisRequest::new(SAMPLE).with_job_description("React developer, 3 years");
        let first = Scorer::new().analyze(&request).unwrap();
        let second = Scorer::new().analyze(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_linkedin_entries_passed_through() {
        let request = AnalysisRequest::new(SAMPLE).with_linkedin_summary("Pastry chef\nKubernetes");
        let result = Scorer::new().analyze(&request).unwrap();
        let entries = result.linkedin_consistency.unwrap();
        assert!(!entries.is_empty());
    }
}
