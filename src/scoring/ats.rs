//! ATS compatibility checklist

use crate::model::clamp_score;
use crate::patterns::SkillCategory;
use crate::processing::ResumeSignals;
use serde::Serialize;

pub const MAX_NON_ASCII_RATIO: f64 = 0.05;
pub const MIN_STANDARD_SECTIONS: usize = 2;
pub const MIN_KEYWORD_MATCH_PERCENTAGE: f64 = 50.0;
pub const MIN_SKILLS_WITHOUT_JOB: usize = 5;
pub const MIN_BULLETS: usize = 5;
pub const MIN_QUANTIFIED_RESULTS: usize = 3;
pub const MIN_ACTION_VERBS: usize = 5;
pub const MIN_WORDS: usize = 300;
pub const MAX_WORDS: usize = 800;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtsFactor {
    pub name: &'static str,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtsChecklist {
    pub factors: Vec<AtsFactor>,
}

impl AtsChecklist {
    pub fn evaluate(signals: &ResumeSignals) -> Self {
        let formatting = &signals.formatting;
        let keyword_optimized = match signals.job_match_percentage() {
            Some(percentage) => percentage >= MIN_KEYWORD_MATCH_PERCENTAGE,
            None => {
                signals.skill_count(SkillCategory::Technical)
                    + signals.skill_count(SkillCategory::Soft)
                    >= MIN_SKILLS_WITHOUT_JOB
            }
        };
        let all_sections = formatting.missing_sections().is_empty();

        let factors = vec![
            ("simple formatting", formatting.non_ascii_ratio < MAX_NON_ASCII_RATIO),
            (
                "standard section headers",
                formatting.sections_present.len() >= MIN_STANDARD_SECTIONS,
            ),
            ("no embedded images", !formatting.has_images),
            ("keyword optimization", keyword_optimized),
            ("complete contact information", signals.contact.is_complete()),
            (
                "consistent bullet usage",
                formatting.bullet_count > 0 && formatting.bullet_styles == 1,
            ),
            ("clear section headers", all_sections),
            (
                "appropriate length",
                (MIN_WORDS..=MAX_WORDS).contains(&formatting.word_count),
            ),
            ("sufficient bullet points", formatting.bullet_count >= MIN_BULLETS),
            (
                "sufficient quantified results",
                signals.impact.quantified_tokens.len() >= MIN_QUANTIFIED_RESULTS,
            ),
            (
                "sufficient action verbs",
                signals.impact.strong_verb_count >= MIN_ACTION_VERBS,
            ),
            ("no tables", !formatting.has_tables),
        ]
        .into_iter()
        .map(|(name, passed)| AtsFactor { name, passed })
        .collect();

        Self { factors }
    }

    pub fn passed(&self) -> usize {
        self.factors.iter().filter(|f| f.passed).count()
    }

    /// `passed / total × 100`, rounded.
    pub fn score(&self) -> u8 {
        if self.factors.is_empty() {
            return 0;
        }
        clamp_score(self.passed() as f64 / self.factors.len() as f64 * 100.0)
    }

    pub fn failed(&self) -> impl Iterator<Item = &AtsFactor> {
        self.factors.iter().filter(|f| !f.passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalysisRequest;
    use crate::processing::extract_signals;

    #[test]
    fn test_twelve_factors() {
        let checklist = AtsChecklist::evaluate(&extract_signals(&AnalysisRequest::new("John Doe")));
        assert_eq!(checklist.factors.len(), 12);
    }

    #[test]
    fn test_minimal_resume_score() {
        let checklist = AtsChecklist::evaluate(&extract_signals(&AnalysisRequest::new("John Doe")));
        // simple formatting, no images, no tables
        assert_eq!(checklist.passed(), 3);
        assert_eq!(checklist.score(), 25);
    }

    #[test]
    fn test_keyword_optimization_follows_job_match() {
        let resume = "skills: javascript, react";
        let request = AnalysisRequest::new(resume)
            .with_job_description("JavaScript developer with React experience");
        let checklist = AtsChecklist::evaluate(&extract_signals(&request));
        let factor = checklist
            .factors
            .iter()
            .find(|f| f.name == "keyword optimization")
            .unwrap();
        assert!(factor.passed);

        let request = AnalysisRequest::new(resume).with_job_description("Kubernetes and Terraform");
        let checklist = AtsChecklist::evaluate(&extract_signals(&request));
        assert!(checklist.failed().any(|f| f.name == "keyword optimization"));
    }
}
