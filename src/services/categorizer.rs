use anyhow::Context;
use serde::Deserialize;

use crate::domain::ContentType;

/// Suffix table for the second phase. Only consulted when no keyword set
/// matched the description.
const URL_SUFFIXES: [(&str, ContentType); 4] = [
    (".com", ContentType::News),
    (".blog", ContentType::Blog),
    (".store", ContentType::Shop),
    (".edu", ContentType::Edu),
];

/// The keyword sets driving the first categorization phase, loaded from a
/// versioned rules file at startup so the lists can change without a
/// rebuild. The embedded `Default` mirrors the shipped `category_rules.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRules {
    pub news: Vec<String>,
    pub blog: Vec<String>,
    pub shop: Vec<String>,
    pub edu: Vec<String>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        fn owned(keywords: &[&str]) -> Vec<String> {
            keywords.iter().map(|kw| kw.to_string()).collect()
        }

        Self {
            news: owned(&["news", "article", "report", "breaking", "חדשות", "כתבה", "דיווח"]),
            blog: owned(&["blog", "post", "wordpress", "פוסט", "בלוג", "פוסטים", "בלוגים"]),
            shop: owned(&[
                "shop", "store", "buy", "sale", "קניה", "חנות", "מכירה", "מכירות", "קניות",
                "מוצרים", "מוצר", "קניית", "קנית",
            ]),
            edu: owned(&[
                "edu", "course", "tutorial", "ללמוד", "לימודים", "קורס", "הדרכה", "הדרכות",
                "לימוד", "למידה",
            ]),
        }
    }
}

impl CategoryRules {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read category rules from {path}"))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("category rules in {path} are malformed"))
    }

    /// Maps a result to its category. Total: every input lands in one of the
    /// five buckets, with `Other` as the default.
    ///
    /// Keyword sets are checked in fixed order (News, Blog, Shop, Edu) as
    /// case-sensitive substring membership over the description; the first
    /// non-empty intersection wins and the suffix phase never runs. Keyword
    /// precedence over the structurally more reliable suffix table is
    /// deliberate, inherited behavior.
    pub fn categorize(&self, url: &str, description: &str) -> ContentType {
        let keyword_sets = [
            (&self.news, ContentType::News),
            (&self.blog, ContentType::Blog),
            (&self.shop, ContentType::Shop),
            (&self.edu, ContentType::Edu),
        ];

        for (keywords, category) in keyword_sets {
            if keywords.iter().any(|kw| description.contains(kw.as_str())) {
                return category;
            }
        }

        for (suffix, category) in URL_SUFFIXES {
            if url.ends_with(suffix) {
                return category;
            }
        }

        ContentType::Other
    }
}

#[cfg(test)]
mod tests {
    use super::CategoryRules;
    use crate::domain::ContentType;

    #[test]
    fn every_input_lands_in_a_valid_bucket() {
        let rules = CategoryRules::default();
        let inputs = [
            ("", ""),
            ("https://example.com", "latest news report"),
            ("https://x.store", ""),
            ("not a url at all", "random text"),
            ("https://example.org/path?q=1", "חנות מקוונת"),
        ];

        for (url, description) in inputs {
            let id = rules.categorize(url, description).id();
            assert!((1..=5).contains(&id), "got {id} for ({url}, {description})");
        }
    }

    #[test]
    fn news_keywords_win_over_blog_keywords() {
        let rules = CategoryRules::default();
        let category = rules.categorize("https://example.org", "breaking coverage on a blog post");
        assert_eq!(category, ContentType::News);
    }

    #[test]
    fn suffix_phase_is_exact() {
        let rules = CategoryRules::default();
        assert_eq!(rules.categorize("https://x.store", ""), ContentType::Shop);
        assert_eq!(rules.categorize("https://x.edu", ""), ContentType::Edu);
        assert_eq!(rules.categorize("https://x.biz", ""), ContentType::Other);
    }

    #[test]
    fn keywords_beat_suffixes() {
        let rules = CategoryRules::default();
        let category = rules.categorize("https://x.store", "breaking news report");
        assert_eq!(category, ContentType::News);
    }

    #[test]
    fn hebrew_keywords_match() {
        let rules = CategoryRules::default();
        assert_eq!(
            rules.categorize("https://example.org", "קורס מקוון למתחילים"),
            ContentType::Edu
        );
    }

    #[test]
    fn no_match_defaults_to_other() {
        let rules = CategoryRules::default();
        assert_eq!(
            rules.categorize("https://example.io", "nothing relevant here"),
            ContentType::Other
        );
    }
}
