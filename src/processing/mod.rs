//! Extractors: turn resume and job text into structured findings

pub mod buzzwords;
pub mod contact;
pub mod formatting;
pub mod impact;
pub mod job_match;
pub mod linkedin;
pub mod skills;
pub mod text;

use crate::model::{AnalysisRequest, LinkedInConsistency};
use crate::patterns::{library, SkillCategory};
use contact::ContactInfo;
use formatting::FormattingInfo;
use impact::ImpactAnalysis;
use job_match::JobMatch;
use serde::Serialize;
use skills::SkillInventory;
use text::KeywordMatcher;

/// A technical role is also assumed when the resume lists this many technical skills.
const TECHNICAL_SKILLS_FOR_TECH_ROLE: usize = 3;

/// Everything the scorer and suggestion generator need about one request.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSignals {
    pub contact: ContactInfo,
    pub formatting: FormattingInfo,
    pub impact: ImpactAnalysis,
    pub skills: SkillInventory,
    pub buzzwords: Vec<String>,
    pub duty_phrase_count: usize,
    /// Present only when a job description was supplied.
    pub job_match: Option<JobMatch>,
    pub linkedin: Option<Vec<LinkedInConsistency>>,
    pub technical_role: bool,
    pub career_progression: bool,
    pub expertise_indicators: usize,
}

impl ResumeSignals {
    pub fn word_count(&self) -> usize {
        self.formatting.word_count
    }

    pub fn skill_count(&self, category: SkillCategory) -> usize {
        self.skills.count(category)
    }

    pub fn impact_statement_count(&self) -> usize {
        self.impact.impact_statements.len()
    }

    /// Job match percentage when requirements could be extracted.
    pub fn job_match_percentage(&self) -> Option<f64> {
        self.job_match
            .as_ref()
            .filter(|m| m.has_requirements())
            .map(|m| m.match_percentage)
    }
}

/// Run every extractor over a request.
pub fn extract_signals(request: &AnalysisRequest) -> ResumeSignals {
    let resume = normalize(&request.resume_text);

    let contact = contact::extract_contact(&resume);
    let formatting = formatting::extract_formatting(&resume);
    let impact = impact::extract_impact(&resume);
    let skills = skills::extract_skills(&resume);
    let buzzwords = buzzwords::detect_buzzwords(&resume);
    let duty_phrase_count = buzzwords::count_duty_phrases(&resume);

    let job_match = request
        .job_description_text()
        .map(|job| job_match::match_job(&resume, &normalize(job)));

    let linkedin = request
        .linkedin_summary
        .as_deref()
        .filter(|summary| !summary.trim().is_empty())
        .map(|summary| linkedin::check_consistency(&resume, &normalize(summary)));

    let technical_role = is_technical_role(request, &resume, &skills);

    ResumeSignals {
        contact,
        formatting,
        impact,
        skills,
        buzzwords,
        duty_phrase_count,
        job_match,
        linkedin,
        technical_role,
        career_progression: has_career_progression(&resume),
        expertise_indicators: count_matches(&resume, library().expertise_indicators()),
    }
}

/// Lower-case and unify line endings.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").to_lowercase()
}

fn is_technical_role(request: &AnalysisRequest, resume: &str, skills: &SkillInventory) -> bool {
    let markers = library().technical_role_markers();
    let mentions_marker = |text: &str| count_matches(text, markers) > 0;

    if let Some(title) = request.job_title.as_deref() {
        return mentions_marker(&title.to_lowercase());
    }
    mentions_marker(resume) || skills.count(SkillCategory::Technical) >= TECHNICAL_SKILLS_FOR_TECH_ROLE
}

/// Two or more distinct seniority levels, or an explicit promotion.
fn has_career_progression(resume: &str) -> bool {
    let levels = count_matches(resume, library().seniority_markers());
    levels >= 2 || KeywordMatcher::new("promoted").is_match(resume)
}

/// Number of distinct terms that occur at least once.
fn count_matches(text: &str, terms: &[&str]) -> usize {
    terms
        .iter()
        .filter(|term| KeywordMatcher::new(term).is_match(text))
        .count()
}
