//! Weighted component scores with penalties and bonuses

use crate::patterns::SkillCategory;
use crate::processing::buzzwords::BUZZWORD_THRESHOLD;
use crate::processing::impact::EXPERIENCE_CAP;
use crate::processing::ResumeSignals;
use serde::Serialize;

// Contact weights
pub const EMAIL_POINTS: i32 = 10;
pub const PHONE_POINTS: i32 = 8;
pub const LINKEDIN_POINTS: i32 = 5;
pub const LINKEDIN_POINTS_TECHNICAL: i32 = 7;
pub const GITHUB_POINTS: i32 = 2;
pub const GITHUB_POINTS_TECHNICAL: i32 = 8;

// Component caps and multipliers
pub const POINTS_PER_IMPACT_STATEMENT: i32 = 8;
pub const ACHIEVEMENTS_CAP: i32 = 40;
pub const TECHNICAL_SKILL_POINTS: i32 = 3;
pub const SOFT_SKILL_POINTS: i32 = 2;
pub const INDUSTRY_SKILL_POINTS: i32 = 2;
pub const SKILLS_CAP: i32 = 50;
pub const JOB_MATCH_SCALE: f64 = 0.4;
pub const JOB_MATCH_CAP: i32 = 40;
pub const JOB_MATCH_WITHOUT_DESCRIPTION: i32 = 20;

// Format bonuses
pub const CONSISTENT_FORMAT_POINTS: i32 = 5;
pub const SECTIONS_POINTS: i32 = 5;
pub const MIN_SECTIONS_FOR_BONUS: usize = 3;
pub const IDEAL_LENGTH_POINTS: i32 = 5;
pub const IDEAL_MIN_WORDS: usize = 300;
pub const IDEAL_MAX_WORDS: usize = 800;

// Penalties
pub const CRITICAL_MISSING_PENALTY: i32 = 8;
pub const NO_IMPACT_PENALTY: i32 = 15;
pub const MISSING_EMAIL_PENALTY: i32 = 20;
pub const INCONSISTENT_FORMAT_PENALTY: i32 = 10;
pub const EXCESS_BUZZWORD_PENALTY: i32 = 8;

// Bonuses
pub const MANY_IMPACT_STATEMENTS: usize = 5;
pub const MANY_IMPACT_BONUS: i32 = 10;
pub const CAREER_PROGRESSION_BONUS: i32 = 8;
pub const INDUSTRY_DEPTH_SKILLS: usize = 3;
pub const INDUSTRY_DEPTH_BONUS: i32 = 5;
pub const SEMANTIC_MATCH_BONUS: i32 = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub contact: i32,
    pub experience: i32,
    pub achievements: i32,
    pub skills: i32,
    pub job_match: i32,
    pub format: i32,
    pub penalties: i32,
    pub bonuses: i32,
}

impl ScoreBreakdown {
    /// Unclamped total; callers clamp into `0..=100`.
    pub fn raw_total(&self) -> i32 {
        self.contact + self.experience + self.achievements + self.skills + self.job_match
            + self.format
            - self.penalties
            + self.bonuses
    }

    /// (name, points, cap) for every component, used to name strengths.
    pub fn components(&self) -> [(&'static str, i32, i32); 6] {
        [
            ("contact information", self.contact, EMAIL_POINTS + PHONE_POINTS + LINKEDIN_POINTS_TECHNICAL + GITHUB_POINTS_TECHNICAL),
            ("experience", self.experience, EXPERIENCE_CAP as i32),
            ("quantified achievements", self.achievements, ACHIEVEMENTS_CAP),
            ("skills", self.skills, SKILLS_CAP),
            ("job match", self.job_match, JOB_MATCH_CAP),
            ("formatting", self.format, CONSISTENT_FORMAT_POINTS + SECTIONS_POINTS + IDEAL_LENGTH_POINTS),
        ]
    }
}

pub fn compute_breakdown(signals: &ResumeSignals) -> ScoreBreakdown {
    ScoreBreakdown {
        contact: contact_points(signals),
        experience: signals.impact.experience_score as i32,
        achievements: (signals.impact_statement_count() as i32 * POINTS_PER_IMPACT_STATEMENT)
            .min(ACHIEVEMENTS_CAP),
        skills: skill_points(signals),
        job_match: job_match_points(signals),
        format: format_points(signals),
        penalties: penalties(signals),
        bonuses: bonuses(signals),
    }
}

fn contact_points(signals: &ResumeSignals) -> i32 {
    let contact = &signals.contact;
    let (linkedin, github) = if signals.technical_role {
        (LINKEDIN_POINTS_TECHNICAL, GITHUB_POINTS_TECHNICAL)
    } else {
        (LINKEDIN_POINTS, GITHUB_POINTS)
    };

    [
        (contact.has_email, EMAIL_POINTS),
        (contact.has_phone, PHONE_POINTS),
        (contact.has_linkedin, linkedin),
        (contact.has_github, github),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, points)| points)
    .sum()
}

fn skill_points(signals: &ResumeSignals) -> i32 {
    let weighted = signals.skill_count(SkillCategory::Technical) as i32 * TECHNICAL_SKILL_POINTS
        + signals.skill_count(SkillCategory::Soft) as i32 * SOFT_SKILL_POINTS
        + signals.skill_count(SkillCategory::Industry) as i32 * INDUSTRY_SKILL_POINTS;
    weighted.min(SKILLS_CAP)
}

fn job_match_points(signals: &ResumeSignals) -> i32 {
    match signals.job_match_percentage() {
        Some(percentage) => ((percentage * JOB_MATCH_SCALE).round() as i32).min(JOB_MATCH_CAP),
        None => JOB_MATCH_WITHOUT_DESCRIPTION,
    }
}

fn format_points(signals: &ResumeSignals) -> i32 {
    let formatting = &signals.formatting;
    let mut points = 0;
    if formatting.consistent {
        points += CONSISTENT_FORMAT_POINTS;
    }
    if formatting.sections_present.len() >= MIN_SECTIONS_FOR_BONUS {
        points += SECTIONS_POINTS;
    }
    if (IDEAL_MIN_WORDS..=IDEAL_MAX_WORDS).contains(&formatting.word_count) {
        points += IDEAL_LENGTH_POINTS;
    }
    points
}

fn penalties(signals: &ResumeSignals) -> i32 {
    let mut total = 0;
    if let Some(job) = &signals.job_match {
        total += job.critical_missing.len() as i32 * CRITICAL_MISSING_PENALTY;
    }
    if signals.impact_statement_count() == 0 {
        total += NO_IMPACT_PENALTY;
    }
    if !signals.contact.has_email {
        total += MISSING_EMAIL_PENALTY;
    }
    if !signals.formatting.consistent {
        total += INCONSISTENT_FORMAT_PENALTY;
    }
    if signals.buzzwords.len() > BUZZWORD_THRESHOLD {
        total += EXCESS_BUZZWORD_PENALTY;
    }
    total
}

fn bonuses(signals: &ResumeSignals) -> i32 {
    let mut total = 0;
    if signals.impact_statement_count() >= MANY_IMPACT_STATEMENTS {
        total += MANY_IMPACT_BONUS;
    }
    if signals.career_progression {
        total += CAREER_PROGRESSION_BONUS;
    }
    if signals.skill_count(SkillCategory::Industry) >= INDUSTRY_DEPTH_SKILLS {
        total += INDUSTRY_DEPTH_BONUS;
    }
    if let Some(job) = &signals.job_match {
        total += job.semantic_matches as i32 * SEMANTIC_MATCH_BONUS;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalysisRequest;
    use crate::processing::extract_signals;

    const SAMPLE: &str = "John Doe\nSoftware Engineer\nEmail: john@example.com\nPhone: 123-456-7890\n\nExperience:\n- Developed web applications\n- Increased performance by 50%\n\nSkills:\n- JavaScript\n- React\n- Node.js\n\nEducation:\n- BS Computer Science";

    #[test]
    fn test_sample_breakdown() {
        let signals = extract_signals(&AnalysisRequest::new(SAMPLE));
        let breakdown = compute_breakdown(&signals);

        assert_eq!(breakdown.contact, EMAIL_POINTS + PHONE_POINTS);
        assert_eq!(breakdown.achievements, POINTS_PER_IMPACT_STATEMENT);
        assert_eq!(breakdown.skills, 3 * TECHNICAL_SKILL_POINTS);
        assert_eq!(breakdown.job_match, JOB_MATCH_WITHOUT_DESCRIPTION);
        assert_eq!(breakdown.format, CONSISTENT_FORMAT_POINTS + SECTIONS_POINTS);
        assert_eq!(breakdown.penalties, 0);
        assert!(breakdown.raw_total() > 0);
    }

    #[test]
    fn test_minimal_resume_penalties() {
        let signals = extract_signals(&AnalysisRequest::new("John Doe"));
        let breakdown = compute_breakdown(&signals);
        assert_eq!(
            breakdown.penalties,
            NO_IMPACT_PENALTY + MISSING_EMAIL_PENALTY + INCONSISTENT_FORMAT_PENALTY
        );
        assert!(breakdown.raw_total() < 0);
    }

    #[test]
    fn test_technical_role_weights_github() {
        let request = AnalysisRequest::new("Jane Roe\ngithub.com/jane")
            .with_job_title("Software Engineer");
        let breakdown = compute_breakdown(&extract_signals(&request));
        assert_eq!(breakdown.contact, GITHUB_POINTS_TECHNICAL);

        let request = AnalysisRequest::new("Jane Roe\ngithub.com/jane").with_job_title("Nurse");
        let breakdown = compute_breakdown(&extract_signals(&request));
        assert_eq!(breakdown.contact, GITHUB_POINTS);
    }

    #[test]
    fn test_critical_missing_penalty() {
        let request = AnalysisRequest::new(SAMPLE)
            .with_job_description("Kubernetes and Terraform are required.");
        let breakdown = compute_breakdown(&extract_signals(&request));
        assert_eq!(breakdown.penalties, 2 * CRITICAL_MISSING_PENALTY);
        assert_eq!(breakdown.job_match, 0);
    }
}
