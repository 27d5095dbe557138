//! Skill detection across the technical, soft and industry families

use crate::patterns::{library, SkillCategory};
use crate::processing::text::{snippet, KeywordMatcher};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const CONTEXT_RADIUS: usize = 40;

struct CompiledSkill {
    category: SkillCategory,
    family: &'static str,
    matcher: KeywordMatcher,
}

static SKILL_MATCHERS: Lazy<Vec<CompiledSkill>> = Lazy::new(|| {
    let lib = library();
    [SkillCategory::Technical, SkillCategory::Soft, SkillCategory::Industry]
        .into_iter()
        .flat_map(|category| {
            lib.skill_families(category).iter().flat_map(move |family| {
                family.keywords.iter().map(move |keyword| CompiledSkill {
                    category,
                    family: family.name,
                    matcher: KeywordMatcher::new(keyword),
                })
            })
        })
        .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillMatch {
    pub skill: String,
    pub category: SkillCategory,
    pub family: String,
    /// Text around the first occurrence, as evidence.
    pub context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillInventory {
    pub matches: Vec<SkillMatch>,
}

impl SkillInventory {
    pub fn count(&self, category: SkillCategory) -> usize {
        self.matches.iter().filter(|m| m.category == category).count()
    }

    pub fn names(&self, category: SkillCategory) -> Vec<String> {
        self.matches
            .iter()
            .filter(|m| m.category == category)
            .map(|m| m.skill.clone())
            .collect()
    }
}

/// Scan lower-cased text for every keyword in the library. A keyword listed
/// in more than one family is reported once, under its first family.
pub fn extract_skills(text: &str) -> SkillInventory {
    let mut seen = HashSet::new();
    let mut matches = Vec::new();

    for compiled in SKILL_MATCHERS.iter() {
        let keyword = compiled.matcher.keyword();
        if seen.contains(keyword) {
            continue;
        }
        if let Some(range) = compiled.matcher.find(text) {
            seen.insert(keyword.to_string());
            matches.push(SkillMatch {
                skill: keyword.to_string(),
                category: compiled.category,
                family: compiled.family.to_string(),
                context: snippet(text, &range, CONTEXT_RADIUS),
            });
        }
    }

    SkillInventory { matches }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_technical_skills_with_context() {
        let inventory = extract_skills("skills:\n- javascript\n- react\n- node.js");
        let technical = inventory.names(SkillCategory::Technical);
        assert!(technical.contains(&"javascript".to_string()));
        assert!(technical.contains(&"react".to_string()));
        assert!(technical.contains(&"node.js".to_string()));
        assert!(!technical.contains(&"java".to_string()));

        let react = inventory.matches.iter().find(|m| m.skill == "react").unwrap();
        assert_eq!(react.family, "frontend");
        assert_eq!(react.context, "- react");
    }

    #[test]
    fn test_soft_and_industry_categories() {
        let inventory =
            extract_skills("strong communication and problem solving in banking compliance");
        assert_eq!(inventory.count(SkillCategory::Soft), 2);
        assert_eq!(inventory.count(SkillCategory::Industry), 2);
    }

    #[test]
    fn test_no_skills() {
        let inventory = extract_skills("john doe");
        assert!(inventory.matches.is_empty());
    }
}
