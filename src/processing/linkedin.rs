//! Resume vs LinkedIn summary consistency

use crate::model::{LinkedInConsistency, MAX_LINKEDIN_ISSUES};
use crate::patterns::SkillCategory;
use crate::processing::job_match::max_years_claimed;
use crate::processing::skills::extract_skills;
use strsim::jaro_winkler;

pub const HEADLINE_SIMILARITY_THRESHOLD: f64 = 0.75;
const MAX_LISTED_SKILLS: usize = 5;

/// Compare lower-cased resume text with a lower-cased LinkedIn summary.
pub fn check_consistency(resume_text: &str, linkedin_text: &str) -> Vec<LinkedInConsistency> {
    let mut issues = Vec::new();

    if let (Some(resume_headline), Some(linkedin_headline)) =
        (resume_headline(resume_text), first_line(linkedin_text))
    {
        let similarity = jaro_winkler(resume_headline, linkedin_headline);
        if similarity < HEADLINE_SIMILARITY_THRESHOLD {
            issues.push(LinkedInConsistency {
                field: "headline".to_string(),
                issue: format!(
                    "Resume headline \"{}\" does not match LinkedIn headline \"{}\"",
                    resume_headline, linkedin_headline
                ),
            });
        }
    }

    let resume_skills = extract_skills(resume_text).names(SkillCategory::Technical);
    let linkedin_skills = extract_skills(linkedin_text).names(SkillCategory::Technical);

    let only_linkedin: Vec<&str> = linkedin_skills
        .iter()
        .filter(|s| !resume_skills.contains(s))
        .take(MAX_LISTED_SKILLS)
        .map(String::as_str)
        .collect();
    if !only_linkedin.is_empty() {
        issues.push(LinkedInConsistency {
            field: "skills".to_string(),
            issue: format!(
                "Listed on LinkedIn but missing from the resume: {}",
                only_linkedin.join(", ")
            ),
        });
    }

    let only_resume: Vec<&str> = resume_skills
        .iter()
        .filter(|s| !linkedin_skills.contains(s))
        .take(MAX_LISTED_SKILLS)
        .map(String::as_str)
        .collect();
    if !only_resume.is_empty() && !linkedin_skills.is_empty() {
        issues.push(LinkedInConsistency {
            field: "skills".to_string(),
            issue: format!(
                "On the resume but not mentioned on LinkedIn: {}",
                only_resume.join(", ")
            ),
        });
    }

    if let (Some(resume_years), Some(linkedin_years)) =
        (max_years_claimed(resume_text), max_years_claimed(linkedin_text))
    {
        if resume_years != linkedin_years {
            issues.push(LinkedInConsistency {
                field: "experience".to_string(),
                issue: format!(
                    "Resume claims {} years of experience while LinkedIn says {}",
                    resume_years, linkedin_years
                ),
            });
        }
    }

    issues.truncate(MAX_LINKEDIN_ISSUES);
    issues
}

/// The title line under the candidate's name, if the resume has one.
pub fn resume_headline(text: &str) -> Option<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(5)
        .skip(1)
        .find(|line| {
            line.chars().count() <= 60
                && !line.contains('@')
                && !line.chars().any(|c| c.is_ascii_digit())
                && !line.ends_with(':')
        })
}

fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}
