use crate::keyword_aggregation::domain::CategorySlug;

/// Granularity of a keyword query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordScope {
    /// Every visible component in the catalog
    All,
    /// Visible components of a single category
    Category(CategorySlug),
    /// One keyword list per category
    GroupedByCategory,
}

/// KeywordRequest - Request DTO for the keyword aggregation use case
#[derive(Debug, Clone)]
pub struct KeywordRequest {
    pub scope: KeywordScope,
}

impl KeywordRequest {
    pub fn new(scope: KeywordScope) -> Self {
        Self { scope }
    }

    pub fn all() -> Self {
        Self::new(KeywordScope::All)
    }

    pub fn for_category(slug: CategorySlug) -> Self {
        Self::new(KeywordScope::Category(slug))
    }

    pub fn grouped() -> Self {
        Self::new(KeywordScope::GroupedByCategory)
    }
}
