//! Job description requirement extraction and resume matching

use crate::patterns::{library, SkillCategory};
use crate::processing::text::{contains_term, push_unique, KeywordMatcher};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static YEARS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(library().experience_years_pattern()).expect("Invalid experience years regex")
});

static EDUCATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(library().education_pattern()).expect("Invalid education regex"));

static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?;\n]+(?:\s|$)|\n").expect("Invalid sentence regex"));

static REQUIREMENT_MATCHERS: Lazy<Vec<(RequirementKind, KeywordMatcher)>> = Lazy::new(|| {
    [
        (RequirementKind::Technical, SkillCategory::Technical),
        (RequirementKind::SoftSkill, SkillCategory::Soft),
        (RequirementKind::Industry, SkillCategory::Industry),
    ]
    .into_iter()
    .flat_map(|(kind, category)| {
        library()
            .skill_families(category)
            .iter()
            .flat_map(|family| family.keywords.iter())
            .map(move |keyword| (kind, KeywordMatcher::new(keyword)))
    })
    .collect()
});

/// Requirement classes, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RequirementKind {
    Technical,
    ExperienceYears,
    Education,
    SoftSkill,
    Industry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub term: String,
    pub kind: RequirementKind,
    /// The sentence stating it also says "required", "must have", ...
    pub critical: bool,
    /// Minimum years, for `ExperienceYears` requirements.
    pub years: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchStatus {
    Literal,
    /// Satisfied through the related term carried here.
    Semantic(String),
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementMatch {
    pub requirement: Requirement,
    pub status: MatchStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub requirements: Vec<RequirementMatch>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub critical_missing: Vec<String>,
    pub semantic_matches: usize,
    /// Share of requirements satisfied, 0–100. Zero when nothing was extracted.
    pub match_percentage: f64,
}

impl JobMatch {
    pub fn has_requirements(&self) -> bool {
        !self.requirements.is_empty()
    }
}

/// Pull the five requirement classes out of lower-cased job text.
pub fn extract_requirements(job_text: &str) -> Vec<Requirement> {
    let mut requirements: Vec<Requirement> = Vec::new();

    for sentence in SENTENCE_SPLIT.split(job_text) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        let critical = library()
            .criticality_markers()
            .iter()
            .any(|marker| sentence.contains(marker));

        // (position in sentence, term, kind, years)
        let mut found: Vec<(usize, String, RequirementKind, Option<u32>)> = Vec::new();

        for (kind, matcher) in REQUIREMENT_MATCHERS.iter() {
            if let Some(range) = matcher.find(sentence) {
                found.push((range.start, matcher.keyword().to_string(), *kind, None));
            }
        }
        for caps in YEARS_REGEX.captures_iter(sentence) {
            if let Some(m) = caps.get(1) {
                if let Ok(years) = m.as_str().parse::<u32>() {
                    found.push((
                        m.start(),
                        format!("{}+ years experience", years),
                        RequirementKind::ExperienceYears,
                        Some(years),
                    ));
                }
            }
        }
        for caps in EDUCATION_REGEX.captures_iter(sentence) {
            if let Some(degree) = caps.get(1) {
                found.push((
                    degree.start(),
                    normalize_degree(degree.as_str()),
                    RequirementKind::Education,
                    None,
                ));
            }
        }
        found.sort_by_key(|(position, ..)| *position);

        for (_, term, kind, years) in found {
            match requirements.iter_mut().find(|r| r.term == term) {
                Some(existing) => existing.critical |= critical,
                None => requirements.push(Requirement {
                    term,
                    kind,
                    critical,
                    years,
                }),
            }
        }
    }

    requirements.sort_by_key(|r| r.kind);
    requirements
}

/// Check each job requirement against lower-cased resume text.
pub fn match_job(resume_text: &str, job_text: &str) -> JobMatch {
    let requirements = extract_requirements(job_text);
    let resume_years = max_years_claimed(resume_text);

    let mut result = JobMatch::default();
    for requirement in requirements {
        let status = match requirement.kind {
            RequirementKind::ExperienceYears => match (requirement.years, resume_years) {
                (Some(required), Some(claimed)) if claimed >= required => MatchStatus::Literal,
                _ => MatchStatus::Missing,
            },
            _ => match_term(resume_text, &requirement.term),
        };

        match &status {
            MatchStatus::Literal => push_unique(&mut result.matched, requirement.term.clone()),
            MatchStatus::Semantic(_) => {
                result.semantic_matches += 1;
                push_unique(&mut result.matched, requirement.term.clone());
            }
            MatchStatus::Missing => {
                push_unique(&mut result.missing, requirement.term.clone());
                if requirement.critical {
                    push_unique(&mut result.critical_missing, requirement.term.clone());
                }
            }
        }
        result.requirements.push(RequirementMatch { requirement, status });
    }

    if result.has_requirements() {
        result.match_percentage =
            result.matched.len() as f64 / result.requirements.len() as f64 * 100.0;
    }
    result
}

fn match_term(resume_text: &str, term: &str) -> MatchStatus {
    if contains_term(resume_text, term) {
        return MatchStatus::Literal;
    }
    library()
        .synonyms_for(term)
        .iter()
        .find(|related| contains_term(resume_text, related))
        .map(|related| MatchStatus::Semantic(related.to_string()))
        .unwrap_or(MatchStatus::Missing)
}

/// Largest "N years" figure mentioned in the text.
pub fn max_years_claimed(text: &str) -> Option<u32> {
    YEARS_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
}

fn normalize_degree(raw: &str) -> String {
    let cleaned = raw.trim_end_matches("'s").replace('.', "");
    match cleaned.as_str() {
        "doctorate" => "phd".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_javascript_react_match() {
        let job = match_job(
            "skills: javascript, react, node.js",
            "javascript developer with react experience",
        );
        assert_eq!(job.matched, vec!["javascript", "react"]);
        assert!(job.missing.is_empty());
        assert_eq!(job.match_percentage, 100.0);
    }

    #[test]
    fn test_semantic_match_through_synonym() {
        let job = match_job("built services with express and nestjs", "strong node.js skills");
        assert_eq!(job.semantic_matches, 1);
        assert!(job.matched.contains(&"node.js".to_string()));
        assert!(matches!(
            job.requirements[0].status,
            MatchStatus::Semantic(ref related) if related == "express"
        ));
    }

    #[test]
    fn test_critical_missing_requires_marker() {
        let job = match_job(
            "python developer",
            "kubernetes experience is required. terraform is a plus.",
        );
        assert_eq!(job.missing, vec!["kubernetes", "terraform"]);
        assert_eq!(job.critical_missing, vec!["kubernetes"]);
    }

    #[test]
    fn test_experience_years_requirement() {
        let requirements = extract_requirements("minimum 5+ years of experience with rust.");
        let years = requirements
            .iter()
            .find(|r| r.kind == RequirementKind::ExperienceYears)
            .unwrap();
        assert_eq!(years.term, "5+ years experience");
        assert!(years.critical);

        let job = match_job("7 years building rust services", "minimum 5+ years of experience with rust.");
        assert!(job.missing.is_empty());

        let job = match_job("3 years building rust services", "minimum 5+ years of experience with rust.");
        assert_eq!(job.missing, vec!["5+ years experience"]);
    }

    #[test]
    fn test_education_requirement_with_synonym() {
        let job = match_job("b.s. computer science", "bachelor's degree in computer science required");
        assert!(job.matched.contains(&"bachelor".to_string()));
        assert!(job.critical_missing.is_empty());
    }

    #[test]
    fn test_requirements_ordered_by_kind() {
        let requirements = extract_requirements("excellent communication. 3 years with python.");
        let kinds: Vec<RequirementKind> = requirements.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![RequirementKind::Technical, RequirementKind::ExperienceYears, RequirementKind::SoftSkill]
        );
    }

    #[test]
    fn test_no_requirements() {
        let job = match_job("anything", "we are a friendly company");
        assert!(!job.has_requirements());
        assert_eq!(job.match_percentage, 0.0);
    }
}
