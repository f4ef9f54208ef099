//! Skill classification into canonical categories

use crate::error::{Result, ResumeStudioError};
use crate::processing::document::SkillGroup;
use crate::processing::normalizer::{self, limits};
use aho_corasick::AhoCorasick;

/// Canonical categories and the keywords that map an item into them.
/// Order matters: classification tries categories top to bottom and the
/// first containing match wins.
const CATEGORY_KEYWORDS: [(&str, &[&str]); 5] = [
    (
        "Programming Languages",
        &[
            "javascript",
            "python",
            "java",
            "c++",
            "ruby",
            "php",
            "typescript",
            "golang",
            "rust",
            "swift",
            "kotlin",
            "scala",
        ],
    ),
    (
        "Frontend Development",
        &[
            "react",
            "vue",
            "angular",
            "html",
            "css",
            "sass",
            "less",
            "webpack",
            "babel",
            "jquery",
            "bootstrap",
            "tailwind",
        ],
    ),
    (
        "Backend Development",
        &[
            "node",
            "express",
            "django",
            "flask",
            "spring",
            "laravel",
            "postgresql",
            "mysql",
            "mongodb",
            "redis",
            "graphql",
            "rest",
        ],
    ),
    (
        "DevOps & Tools",
        &[
            "git",
            "docker",
            "kubernetes",
            "jenkins",
            "aws",
            "azure",
            "linux",
            "ci/cd",
            "terraform",
            "ansible",
        ],
    ),
    (
        "Soft Skills",
        &[
            "leadership",
            "communication",
            "teamwork",
            "problem solving",
            "time management",
            "project management",
            "agile",
            "scrum",
        ],
    ),
];

/// Category assigned when no keyword set matches.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Classifies free-form skill items and re-partitions skill groups.
pub struct SkillOrganizer {
    matchers: Vec<(&'static str, AhoCorasick)>,
}

impl SkillOrganizer {
    pub fn new() -> Result<Self> {
        let mut matchers = Vec::with_capacity(CATEGORY_KEYWORDS.len());

        for (category, keywords) in CATEGORY_KEYWORDS {
            let matcher = AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(keywords)
                .map_err(|e| {
                    ResumeStudioError::Processing(format!("Failed to build skill matcher: {}", e))
                })?;
            matchers.push((category, matcher));
        }

        Ok(Self { matchers })
    }

    /// Resolve the canonical category for one skill item by substring
    /// keyword match, first category wins.
    pub fn classify(&self, item: &str) -> &'static str {
        for (category, matcher) in &self.matchers {
            if matcher.is_match(item) {
                return category;
            }
        }

        FALLBACK_CATEGORY
    }

    /// Re-partition skill groups by resolved category.
    ///
    /// Items keep their group's stated category when one is present;
    /// unlabeled items are classified by keyword. Duplicates collapse within
    /// a category, and both categories and items keep first-insertion order.
    /// Input group boundaries are not preserved.
    pub fn organize(&self, groups: &[SkillGroup]) -> Vec<SkillGroup> {
        let mut grouped: Vec<(String, Vec<String>)> = Vec::new();

        for group in groups {
            for item in &group.items {
                let category = if group.category.is_empty() {
                    self.classify(item).to_string()
                } else {
                    group.category.clone()
                };

                match grouped.iter_mut().find(|(name, _)| *name == category) {
                    Some((_, items)) => {
                        if !items.contains(item) {
                            items.push(item.clone());
                        }
                    }
                    None => grouped.push((category, vec![item.clone()])),
                }
            }
        }

        grouped
            .into_iter()
            .map(|(category, items)| SkillGroup {
                category: normalizer::normalize_field(&category, limits::SKILL_CATEGORY),
                items: items
                    .iter()
                    .map(|item| normalizer::normalize_field(item, limits::SKILL_ITEM))
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organizer() -> SkillOrganizer {
        SkillOrganizer::new().unwrap()
    }

    #[test]
    fn test_classify_known_keywords() {
        let organizer = organizer();
        assert_eq!(organizer.classify("python"), "Programming Languages");
        assert_eq!(organizer.classify("React Hooks"), "Frontend Development");
        assert_eq!(organizer.classify("PostgreSQL"), "Backend Development");
        assert_eq!(organizer.classify("Docker"), "DevOps & Tools");
        assert_eq!(organizer.classify("leadership"), "Soft Skills");
    }

    #[test]
    fn test_classify_unknown_falls_back_to_other() {
        assert_eq!(organizer().classify("underwater basket weaving"), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_classify_first_category_wins() {
        // matches both Programming Languages and Frontend Development;
        // declaration order decides
        assert_eq!(organizer().classify("python and react"), "Programming Languages");
    }

    #[test]
    fn test_organize_splits_unlabeled_group() {
        let groups = vec![SkillGroup::new(
            "",
            vec!["python".to_string(), "leadership".to_string()],
        )];

        let organized = organizer().organize(&groups);

        assert_eq!(organized.len(), 2);
        assert_eq!(organized[0].category, "Programming Languages");
        assert_eq!(organized[0].items, vec!["python".to_string()]);
        assert_eq!(organized[1].category, "Soft Skills");
        assert_eq!(organized[1].items, vec!["leadership".to_string()]);
    }

    #[test]
    fn test_organize_keeps_stated_category() {
        let groups = vec![SkillGroup::new(
            "Core Strengths",
            vec!["python".to_string(), "communication".to_string()],
        )];

        let organized = organizer().organize(&groups);

        assert_eq!(organized.len(), 1);
        assert_eq!(organized[0].category, "Core Strengths");
        assert_eq!(
            organized[0].items,
            vec!["python".to_string(), "communication".to_string()]
        );
    }

    #[test]
    fn test_organize_deduplicates_within_category() {
        let groups = vec![
            SkillGroup::new("Tools", vec!["git".to_string(), "docker".to_string()]),
            SkillGroup::new("Tools", vec!["git".to_string(), "jenkins".to_string()]),
        ];

        let organized = organizer().organize(&groups);

        assert_eq!(organized.len(), 1);
        assert_eq!(
            organized[0].items,
            vec!["git".to_string(), "docker".to_string(), "jenkins".to_string()]
        );
    }

    #[test]
    fn test_organize_merges_reclassified_items_across_groups() {
        let groups = vec![
            SkillGroup::new("", vec!["rust".to_string()]),
            SkillGroup::new("", vec!["kotlin".to_string()]),
        ];

        let organized = organizer().organize(&groups);

        assert_eq!(organized.len(), 1);
        assert_eq!(organized[0].category, "Programming Languages");
        assert_eq!(organized[0].items, vec!["rust".to_string(), "kotlin".to_string()]);
    }

    #[test]
    fn test_organize_is_idempotent() {
        let groups = vec![
            SkillGroup::new("", vec!["python".to_string(), "docker".to_string()]),
            SkillGroup::new("Soft Skills", vec!["teamwork".to_string()]),
        ];

        let organizer = organizer();
        let once = organizer.organize(&groups);
        let twice = organizer.organize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_organize_caps_category_and_item_lengths() {
        let long_category = "X".repeat(64);
        let long_item = "y".repeat(80);
        let groups = vec![SkillGroup::new(long_category, vec![long_item])];

        let organized = organizer().organize(&groups);

        assert_eq!(organized[0].category.len(), limits::SKILL_CATEGORY);
        assert_eq!(organized[0].items[0].len(), limits::SKILL_ITEM);
    }
}
