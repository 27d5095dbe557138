//! Red flags, keyword lists, recommended formats and the summary line

use crate::model::{Keywords, Suggestion, MAX_RED_FLAGS};
use crate::patterns::SkillCategory;
use crate::processing::buzzwords::BUZZWORD_THRESHOLD;
use crate::processing::text::push_unique;
use crate::processing::ResumeSignals;
use crate::scoring::breakdown::ScoreBreakdown;

pub const MIN_WORDS: usize = 150;
pub const MAX_WORDS: usize = 1000;
pub const DUTY_PHRASE_LIMIT: usize = 2;
const MAX_FORMATS: usize = 3;

pub fn red_flags(signals: &ResumeSignals) -> Vec<String> {
    let mut flags = Vec::new();

    if !signals.contact.has_email {
        flags.push("Missing email address".to_string());
    }
    if !signals.contact.has_phone {
        flags.push("Missing phone number".to_string());
    }
    let missing = signals.formatting.missing_sections();
    if !missing.is_empty() {
        flags.push(format!("Missing standard sections: {}", missing.join(", ")));
    }
    if signals.impact_statement_count() == 0 {
        flags.push("No quantified achievements".to_string());
    }
    if signals.buzzwords.len() > BUZZWORD_THRESHOLD {
        flags.push(format!(
            "Excessive buzzwords ({} found)",
            signals.buzzwords.len()
        ));
    }
    let words = signals.word_count();
    if words < MIN_WORDS {
        flags.push(format!("Resume is too short ({} words)", words));
    } else if words > MAX_WORDS {
        flags.push(format!("Resume is too long ({} words)", words));
    }
    if let Some(job) = signals.job_match.as_ref().filter(|j| !j.critical_missing.is_empty()) {
        flags.push(format!(
            "Missing critical requirements: {}",
            job.critical_missing.join(", ")
        ));
    }
    if signals.duty_phrase_count >= DUTY_PHRASE_LIMIT {
        flags.push("Duty-focused phrasing instead of achievements".to_string());
    }

    flags.truncate(MAX_RED_FLAGS);
    flags
}

/// Job-match terms when a job description was given, detected skills otherwise.
pub fn keywords(signals: &ResumeSignals) -> Keywords {
    match &signals.job_match {
        Some(job) => Keywords {
            matched: job.matched.clone(),
            missing: job.missing.clone(),
        },
        None => {
            let mut matched = signals.skills.names(SkillCategory::Technical);
            for skill in signals.skills.names(SkillCategory::Soft) {
                push_unique(&mut matched, skill);
            }
            Keywords {
                matched,
                missing: Vec::new(),
            }
        }
    }
}

pub fn recommended_formats(signals: &ResumeSignals) -> Vec<String> {
    let has_experience = signals.formatting.has_section("experience")
        || signals.impact.experience_score > 0
        || signals.impact_statement_count() > 0;

    let mut formats = Vec::new();
    if has_experience {
        formats.push("Reverse-chronological".to_string());
    } else {
        formats.push("Functional".to_string());
    }
    if signals.career_progression || signals.job_match.is_some() {
        push_unique(&mut formats, "Combination");
    }
    if signals.technical_role {
        push_unique(&mut formats, "Technical (skills-first)");
    }
    formats.truncate(MAX_FORMATS);
    formats
}

pub fn summary(
    score: u8,
    ats_score: u8,
    breakdown: &ScoreBreakdown,
    suggestions: &[Suggestion],
) -> String {
    let verdict = match score {
        80..=100 => "Strong resume.",
        60..=79 => "Solid resume with room to improve.",
        40..=59 => "This resume needs work before it is competitive.",
        _ => "This resume needs significant revision.",
    };

    let mut text = format!(
        "{} Overall score {}/100, ATS compatibility {}/100.",
        verdict, score, ats_score
    );

    let strongest = breakdown
        .components()
        .into_iter()
        .filter(|(_, points, cap)| *points > 0 && *cap > 0)
        .max_by(|a, b| {
            let ra = a.1 as f64 / a.2 as f64;
            let rb = b.1 as f64 / b.2 as f64;
            ra.total_cmp(&rb)
        });
    if let Some((name, ..)) = strongest {
        text.push_str(&format!(" Strongest area: {}.", name));
    }
    if let Some(first) = suggestions.first() {
        text.push_str(&format!(" Top priority: {}.", first.issue.to_lowercase()));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalysisRequest;
    use crate::processing::extract_signals;

    #[test]
    fn test_minimal_resume_red_flags() {
        let flags = red_flags(&extract_signals(&AnalysisRequest::new("John Doe")));
        assert_eq!(flags[0], "Missing email address");
        assert_eq!(flags[1], "Missing phone number");
        assert_eq!(
            flags[2],
            "Missing standard sections: experience, education, skills"
        );
        assert!(flags.len() <= MAX_RED_FLAGS);
    }

    #[test]
    fn test_duty_phrasing_flag() {
        let text = "responsible for billing.\nresponsible for filing.";
        let flags = red_flags(&extract_signals(&AnalysisRequest::new(text)));
        assert!(flags.iter().any(|f| f.starts_with("Duty-focused")));
    }

    #[test]
    fn test_keywords_without_job_description() {
        let signals = extract_signals(&AnalysisRequest::new("skills: rust, python, leadership"));
        let keywords = keywords(&signals);
        assert_eq!(keywords.matched, vec!["python", "rust", "leadership"]);
        assert!(keywords.missing.is_empty());
    }

    #[test]
    fn test_recommended_formats() {
        let formats = recommended_formats(&extract_signals(&AnalysisRequest::new("John Doe")));
        assert_eq!(formats, vec!["Functional"]);

        let request = AnalysisRequest::new("Experience:\n- built apis")
            .with_job_title("Backend Developer")
            .with_job_description("rust");
        let formats = recommended_formats(&extract_signals(&request));
        assert_eq!(
            formats,
            vec!["Reverse-chronological", "Combination", "Technical (skills-first)"]
        );
    }

    #[test]
    fn test_summary_mentions_scores_and_priority() {
        let suggestions = vec![Suggestion::new("Contact", "Missing email address", "Add one")];
        let text = summary(35, 25, &ScoreBreakdown::default(), &suggestions);
        assert!(text.starts_with("This resume needs significant revision."));
        assert!(text.contains("35/100"));
        assert!(text.contains("missing email address"));
    }
}
