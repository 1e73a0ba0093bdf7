//! Content category classification for file paths.

use crate::config::{CategoryRule, DEFAULT_COLOR, FALLBACK_CATEGORY};

/// Classifies file paths into content categories using ordered substring
/// rules.
///
/// Rule order is significant: the first category whose pattern set contains
/// a substring of the path wins. A path matching no rule falls back to the
/// reserved `"code"` category. A deliberate linear scan, adequate at the
/// expected scale of tens of categories.
pub struct CategoryClassifier<'a> {
    rules: &'a [CategoryRule],
}

impl<'a> CategoryClassifier<'a> {
    /// Create a classifier over an ordered rule list.
    pub fn new(rules: &'a [CategoryRule]) -> Self {
        Self { rules }
    }

    /// Classify one path. First matching rule wins.
    pub fn classify(&self, path: &str) -> &'a str {
        for rule in self.rules {
            if rule.patterns.iter().any(|p| path.contains(p.as_str())) {
                return &rule.name;
            }
        }
        FALLBACK_CATEGORY
    }

    /// The most frequent category among the given paths.
    ///
    /// Ties are broken by first-encounter order among the tied categories,
    /// so the result is stable for a fixed path order. An empty collection
    /// yields `"code"`.
    pub fn dominant_category<I, S>(&self, paths: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Counts keyed in first-encounter order.
        let mut counts: Vec<(&str, usize)> = Vec::new();

        for path in paths {
            let category = self.classify(path.as_ref());
            match counts.iter_mut().find(|(name, _)| *name == category) {
                Some((_, count)) => *count += 1,
                None => counts.push((category, 1)),
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (name, count) in counts {
            match best {
                // Strictly greater only, so earlier categories win ties.
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((name, count)),
            }
        }

        best.map_or_else(|| FALLBACK_CATEGORY.to_string(), |(name, _)| name.to_string())
    }

    /// Display color for a category, falling back to the default when the
    /// category has no rule (including the reserved `"code"` fallback).
    pub fn color_for(&self, category: &str) -> &'a str {
        self.rules
            .iter()
            .find(|r| r.name == category)
            .map_or(DEFAULT_COLOR, |r| r.color.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<CategoryRule> {
        vec![
            CategoryRule {
                name: "docs".to_string(),
                patterns: vec!["README".to_string(), "docs/".to_string()],
                color: "#60a5fa".to_string(),
            },
            CategoryRule {
                name: "shader".to_string(),
                patterns: vec![".glsl".to_string(), "shader".to_string()],
                color: "#f472b6".to_string(),
            },
        ]
    }

    #[test]
    fn test_first_match_wins() {
        let rules = vec![
            CategoryRule {
                name: "docs".to_string(),
                patterns: vec!["README".to_string()],
                color: "#60a5fa".to_string(),
            },
            CategoryRule {
                name: "markdown".to_string(),
                patterns: vec![".md".to_string()],
                color: "#34d399".to_string(),
            },
        ];
        let classifier = CategoryClassifier::new(&rules);

        // README.md matches both rule sets; rule order decides.
        assert_eq!(classifier.classify("README.md"), "docs");
    }

    #[test]
    fn test_unmatched_path_is_code() {
        let rules = rules();
        let classifier = CategoryClassifier::new(&rules);
        assert_eq!(classifier.classify("foo.bin"), "code");
    }

    #[test]
    fn test_no_rules_everything_is_code() {
        let classifier = CategoryClassifier::new(&[]);
        assert_eq!(classifier.classify("src/main.rs"), "code");
    }

    #[test]
    fn test_dominant_category_by_count() {
        let rules = rules();
        let classifier = CategoryClassifier::new(&rules);

        let dominant = classifier.dominant_category([
            "README.md",
            "docs/intro.md",
            "src/water.glsl",
        ]);
        assert_eq!(dominant, "docs");
    }

    #[test]
    fn test_dominant_category_tie_breaks_by_first_encounter() {
        let rules = rules();
        let classifier = CategoryClassifier::new(&rules);

        // One shader path, one docs path: the shader category is seen first.
        let dominant = classifier.dominant_category(["src/water.glsl", "README.md"]);
        assert_eq!(dominant, "shader");
    }

    #[test]
    fn test_dominant_category_empty_is_code() {
        let rules = rules();
        let classifier = CategoryClassifier::new(&rules);
        assert_eq!(classifier.dominant_category(Vec::<String>::new()), "code");
    }

    #[test]
    fn test_color_lookup() {
        let rules = rules();
        let classifier = CategoryClassifier::new(&rules);
        assert_eq!(classifier.color_for("shader"), "#f472b6");
        assert_eq!(classifier.color_for("code"), DEFAULT_COLOR);
    }
}
