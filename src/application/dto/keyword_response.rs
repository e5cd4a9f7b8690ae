use crate::keyword_aggregation::domain::{CategoryKeywords, CategorySlug, KeywordCount};

/// KeywordResponse - Response DTO mirroring the requested scope
#[derive(Debug, Clone, PartialEq)]
pub enum KeywordResponse {
    All(Vec<KeywordCount>),
    Category {
        slug: CategorySlug,
        keywords: Vec<KeywordCount>,
    },
    Grouped(Vec<CategoryKeywords>),
}

impl KeywordResponse {
    /// Number of distinct keywords across the response
    ///
    /// In grouped mode a keyword used by two categories is counted once.
    pub fn distinct_keyword_count(&self) -> usize {
        match self {
            KeywordResponse::All(keywords) | KeywordResponse::Category { keywords, .. } => {
                keywords.len()
            }
            KeywordResponse::Grouped(categories) => categories
                .iter()
                .flat_map(|c| c.keywords().iter().map(KeywordCount::keyword))
                .collect::<std::collections::HashSet<_>>()
                .len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.distinct_keyword_count() == 0
    }
}
