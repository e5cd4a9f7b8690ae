use crate::keyword_aggregation::domain::{CategoryRecord, CategorySlug, ComponentRecord};
use crate::shared::Result;
use async_trait::async_trait;

/// Filter for `ComponentStore::find_components`
///
/// `None` fields do not constrain the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentQuery {
    pub show: Option<bool>,
    pub category_slug: Option<CategorySlug>,
}

impl ComponentQuery {
    /// Visible components across every category
    pub fn visible() -> Self {
        Self {
            show: Some(true),
            category_slug: None,
        }
    }

    /// Visible components of the category with the given slug
    pub fn visible_in(slug: CategorySlug) -> Self {
        Self {
            show: Some(true),
            category_slug: Some(slug),
        }
    }
}

/// ComponentStore port for reading catalog components and categories
///
/// This port abstracts the relational store backing the marketplace. The
/// aggregator issues exactly one call per operation and never retries, so
/// implementations own any timeout or reconnection behaviour.
///
/// # Async Support
/// Implementations must be `Send + Sync` so a single store can serve
/// concurrent requests.
#[async_trait]
pub trait ComponentStore: Send + Sync {
    /// Returns components matching the filter
    ///
    /// An unknown `category_slug` yields an empty list, not an error.
    ///
    /// # Errors
    /// Returns an error if the store cannot be reached or returns malformed data
    async fn find_components(&self, query: &ComponentQuery) -> Result<Vec<ComponentRecord>>;

    /// Returns every category, in store order, with its visible components
    ///
    /// # Errors
    /// Returns an error if the store cannot be reached or returns malformed data
    async fn find_categories(&self) -> Result<Vec<CategoryRecord>>;
}
