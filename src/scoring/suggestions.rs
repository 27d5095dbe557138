//! Prioritized improvement suggestions

use crate::model::{Suggestion, MAX_SUGGESTIONS};
use crate::patterns::SkillCategory;
use crate::processing::ResumeSignals;

const LOW_MATCH_PERCENTAGE: f64 = 50.0;
const MIN_STRONG_VERBS: usize = 3;
const MIN_TECHNICAL_SKILLS_TECH_ROLE: usize = 5;
const MIN_TECHNICAL_SKILLS: usize = 2;
const MIN_WORDS: usize = 300;
const MIN_BULLETS: usize = 5;
const LISTED_MISSING_TERMS: usize = 5;

/// Build suggestions from weak signals, most consequential first.
pub fn generate_suggestions(signals: &ResumeSignals) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let contact = &signals.contact;

    match (contact.has_email, contact.has_phone) {
        (false, false) => suggestions.push(Suggestion::new(
            "Contact Information",
            "Missing email address and phone number",
            "Add both at the top of the resume, e.g. \"jane.doe@email.com | (555) 123-4567\".",
        )),
        (false, true) => suggestions.push(Suggestion::new(
            "Contact Information",
            "Missing email address",
            "Add a professional email address under your name, e.g. \"jane.doe@email.com\".",
        )),
        (true, false) => suggestions.push(Suggestion::new(
            "Contact Information",
            "Missing phone number",
            "Add a phone number next to your email, e.g. \"(555) 123-4567\".",
        )),
        (true, true) => {}
    }

    if signals.impact_statement_count() == 0 {
        suggestions.push(Suggestion::new(
            "Experience",
            "No quantified achievements found",
            "Pair an action verb with a measurable result, e.g. \"Reduced page load time by 40%, lifting conversion revenue by $120K\".",
        ));
    }

    if signals.technical_role && !contact.has_github {
        suggestions.push(Suggestion::new(
            "Contact Information",
            "Missing GitHub profile for a technical role",
            "Link a GitHub profile with pinned projects, e.g. \"github.com/janedoe\".",
        ));
    }

    if let Some(job) = signals.job_match.as_ref().filter(|j| j.has_requirements()) {
        if job.match_percentage < LOW_MATCH_PERCENTAGE {
            let listed: Vec<&str> = job
                .missing
                .iter()
                .take(LISTED_MISSING_TERMS)
                .map(String::as_str)
                .collect();
            suggestions.push(Suggestion::new(
                "Keywords",
                format!(
                    "Low job description match ({:.0}%)",
                    job.match_percentage
                ),
                format!(
                    "Mirror the posting's language where it is true for you. Missing terms: {}.",
                    listed.join(", ")
                ),
            ));
        }
    }

    let impact = &signals.impact;
    if impact.strong_verb_count < MIN_STRONG_VERBS || impact.weak_verb_count > impact.strong_verb_count {
        suggestions.push(Suggestion::new(
            "Experience",
            "Weak action verbs",
            "Open bullets with strong verbs such as \"led\", \"launched\" or \"optimized\" instead of \"helped with\" or \"worked on\".",
        ));
    }

    let technical_skills = signals.skill_count(SkillCategory::Technical);
    let required = if signals.technical_role {
        MIN_TECHNICAL_SKILLS_TECH_ROLE
    } else {
        MIN_TECHNICAL_SKILLS
    };
    if technical_skills < required {
        suggestions.push(Suggestion::new(
            "Skills",
            format!("Only {} technical skills listed", technical_skills),
            "Add a Skills section grouping tools by area, e.g. \"Languages: Python, SQL | Tools: Git, Docker, Jira\".",
        ));
    }

    if signals.word_count() < MIN_WORDS {
        suggestions.push(Suggestion::new(
            "Length",
            format!("Resume is short ({} words)", signals.word_count()),
            "Expand each role to 3-5 bullets describing scope, actions and results; aim for 300-800 words.",
        ));
    }

    if signals.formatting.bullet_count < MIN_BULLETS {
        suggestions.push(Suggestion::new(
            "Formatting",
            "Too few bullet points",
            "Break paragraphs into bullets starting with \"-\", one accomplishment per line.",
        ));
    }

    if !contact.has_linkedin {
        suggestions.push(Suggestion::new(
            "Contact Information",
            "Missing LinkedIn profile",
            "Add your LinkedIn URL to the header, e.g. \"linkedin.com/in/janedoe\".",
        ));
    }

    if signals.expertise_indicators == 0 {
        suggestions.push(Suggestion::new(
            "Skills",
            "No expertise levels stated",
            "Qualify key skills with a level, e.g. \"Python (expert)\" or \"Spanish (proficient)\".",
        ));
    }

    if signals.skill_count(SkillCategory::Industry) == 0 {
        suggestions.push(Suggestion::new(
            "Keywords",
            "No industry terminology",
            "Use the vocabulary of your field, e.g. \"HIPAA compliance\" in healthcare or \"risk management\" in finance.",
        ));
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
