use crate::keyword_aggregation::domain::{CategoryKeywords, CategorySlug, KeywordCount};
use crate::shared::Result;
use async_trait::async_trait;

/// KeywordQueryPort - Inbound port for keyword statistics
///
/// Each operation performs one store read and returns a fresh result; nothing
/// is cached between calls. Store errors are propagated unchanged.
#[async_trait]
pub trait KeywordQueryPort {
    /// Keyword counts over every visible component in the catalog
    async fn get_all_keywords(&self) -> Result<Vec<KeywordCount>>;

    /// Keyword counts over the visible components of one category
    ///
    /// An unknown slug yields an empty list.
    async fn get_keywords_for_category(&self, slug: &CategorySlug) -> Result<Vec<KeywordCount>>;

    /// Keyword counts per category, in store order, omitting categories with no keywords
    async fn get_keywords_grouped_by_category(&self) -> Result<Vec<CategoryKeywords>>;
}
