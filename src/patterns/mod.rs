//! Pattern library: the category to keyword/regex tables every extractor reads.
//!
//! The tables are process-wide and immutable. Scoring code goes through
//! [`PatternLibrary`] instead of embedding literals, so the library can be
//! tested on its own and extended by editing `catalog.rs` only.

mod catalog;

use serde::Serialize;

/// A named group of keywords, e.g. the "cloud" technical skills.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KeywordFamily {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// A named group of regular expressions, e.g. "leadership" impact patterns.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatternCategory {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

/// A requirement term and the related terms that count as a semantic match.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SynonymEntry {
    pub term: &'static str,
    pub related: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionVerbTiers {
    pub high_impact: &'static [&'static str],
    pub medium_impact: &'static [&'static str],
    pub low_impact: &'static [&'static str],
    pub leadership: &'static [&'static str],
}

impl ActionVerbTiers {
    /// Verbs that signal a real achievement: everything except the low tier.
    pub fn impact_verbs(&self) -> impl Iterator<Item = &'static str> {
        self.high_impact
            .iter()
            .chain(self.medium_impact)
            .chain(self.leadership)
            .copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkillCategory {
    Technical,
    Soft,
    Industry,
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SkillCategory::Technical => write!(f, "technical"),
            SkillCategory::Soft => write!(f, "soft"),
            SkillCategory::Industry => write!(f, "industry"),
        }
    }
}

/// Read-only view over the static tables.
#[derive(Debug)]
pub struct PatternLibrary {
    technical_skills: &'static [KeywordFamily],
    soft_skills: &'static [KeywordFamily],
    industry_terms: &'static [KeywordFamily],
    buzzwords: &'static [KeywordFamily],
    action_verbs: ActionVerbTiers,
    impact_patterns: &'static [PatternCategory],
    business_keywords: &'static [&'static str],
    synonyms: &'static [SynonymEntry],
    criticality_markers: &'static [&'static str],
    section_headers: &'static [(&'static str, &'static [&'static str])],
    seniority_markers: &'static [&'static str],
    expertise_indicators: &'static [&'static str],
    technical_role_markers: &'static [&'static str],
    duty_phrases: &'static [&'static str],
    positive_indicators: &'static [&'static str],
    negative_indicators: &'static [&'static str],
}

static LIBRARY: PatternLibrary = PatternLibrary {
    technical_skills: catalog::TECHNICAL_SKILLS,
    soft_skills: catalog::SOFT_SKILLS,
    industry_terms: catalog::INDUSTRY_TERMS,
    buzzwords: catalog::BUZZWORDS,
    action_verbs: catalog::ACTION_VERBS,
    impact_patterns: catalog::IMPACT_PATTERNS,
    business_keywords: catalog::BUSINESS_KEYWORDS,
    synonyms: catalog::SEMANTIC_SYNONYMS,
    criticality_markers: catalog::CRITICALITY_MARKERS,
    section_headers: catalog::SECTION_HEADERS,
    seniority_markers: catalog::SENIORITY_MARKERS,
    expertise_indicators: catalog::EXPERTISE_INDICATORS,
    technical_role_markers: catalog::TECHNICAL_ROLE_MARKERS,
    duty_phrases: catalog::DUTY_PHRASES,
    positive_indicators: catalog::POSITIVE_INDICATORS,
    negative_indicators: catalog::NEGATIVE_INDICATORS,
};

/// The process-wide pattern library.
pub fn library() -> &'static PatternLibrary {
    &LIBRARY
}

impl PatternLibrary {
    pub fn skill_families(&self, category: SkillCategory) -> &'static [KeywordFamily] {
        match category {
            SkillCategory::Technical => self.technical_skills,
            SkillCategory::Soft => self.soft_skills,
            SkillCategory::Industry => self.industry_terms,
        }
    }

    pub fn buzzword_families(&self) -> &'static [KeywordFamily] {
        self.buzzwords
    }

    pub fn action_verbs(&self) -> &ActionVerbTiers {
        &self.action_verbs
    }

    pub fn impact_patterns(&self) -> &'static [PatternCategory] {
        self.impact_patterns
    }

    pub fn business_keywords(&self) -> &'static [&'static str] {
        self.business_keywords
    }

    pub fn synonyms(&self) -> &'static [SynonymEntry] {
        self.synonyms
    }

    /// Related terms for a requirement, or an empty slice when the table has none.
    pub fn synonyms_for(&self, term: &str) -> &'static [&'static str] {
        self.synonyms
            .iter()
            .find(|entry| entry.term == term)
            .map(|entry| entry.related)
            .unwrap_or(&[])
    }

    pub fn criticality_markers(&self) -> &'static [&'static str] {
        self.criticality_markers
    }

    pub fn section_headers(&self) -> &'static [(&'static str, &'static [&'static str])] {
        self.section_headers
    }

    pub fn seniority_markers(&self) -> &'static [&'static str] {
        self.seniority_markers
    }

    pub fn expertise_indicators(&self) -> &'static [&'static str] {
        self.expertise_indicators
    }

    pub fn technical_role_markers(&self) -> &'static [&'static str] {
        self.technical_role_markers
    }

    pub fn duty_phrases(&self) -> &'static [&'static str] {
        self.duty_phrases
    }

    pub fn positive_indicators(&self) -> &'static [&'static str] {
        self.positive_indicators
    }

    pub fn negative_indicators(&self) -> &'static [&'static str] {
        self.negative_indicators
    }

    pub fn experience_years_pattern(&self) -> &'static str {
        catalog::EXPERIENCE_YEARS_PATTERN
    }

    pub fn education_pattern(&self) -> &'static str {
        catalog::EDUCATION_PATTERN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_library_has_all_families() {
        let lib = library();
        let technical: Vec<&str> = lib
            .skill_families(SkillCategory::Technical)
            .iter()
            .map(|f| f.name)
            .collect();
        for expected in [
            "frontend", "backend", "languages", "databases", "cloud", "devops", "data_science",
            "mobile", "tools",
        ] {
            assert!(technical.contains(&expected), "missing family {}", expected);
        }

        assert_eq!(lib.skill_families(SkillCategory::Soft).len(), 5);
        assert_eq!(lib.skill_families(SkillCategory::Industry).len(), 5);
        assert_eq!(lib.buzzword_families().len(), 5);
        assert_eq!(lib.impact_patterns().len(), 5);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        let lib = library();
        let families = [SkillCategory::Technical, SkillCategory::Soft, SkillCategory::Industry]
            .iter()
            .flat_map(|c| lib.skill_families(*c))
            .chain(lib.buzzword_families());

        for family in families {
            for keyword in family.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "{} in {}", keyword, family.name);
            }
        }
    }

    #[test]
    fn test_impact_patterns_compile() {
        for category in library().impact_patterns() {
            for pattern in category.patterns {
                assert!(regex::Regex::new(pattern).is_ok(), "bad pattern {}", pattern);
            }
        }
        assert!(regex::Regex::new(library().experience_years_pattern()).is_ok());
        assert!(regex::Regex::new(library().education_pattern()).is_ok());
    }

    #[test]
    fn test_synonym_lookup() {
        let lib = library();
        assert!(lib.synonyms_for("javascript").contains(&"node.js"));
        assert!(lib.synonyms_for("cobol").is_empty());

        let terms: HashSet<&str> = lib.synonyms().iter().map(|e| e.term).collect();
        assert_eq!(terms.len(), lib.synonyms().len(), "duplicate synonym terms");
    }

    #[test]
    fn test_impact_verbs_exclude_low_tier() {
        let verbs: Vec<&str> = library().action_verbs().impact_verbs().collect();
        assert!(verbs.contains(&"increased"));
        assert!(verbs.contains(&"led"));
        assert!(!verbs.contains(&"helped"));
    }
}
