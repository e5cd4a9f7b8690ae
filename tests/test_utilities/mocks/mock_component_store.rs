use catalog_keywords::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock ComponentStore backed by a builder-style category list
///
/// Counts round-trips and can be switched into a failing mode.
#[derive(Default, Clone)]
pub struct MockComponentStore {
    categories: Vec<CategoryRecord>,
    fail_with: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category; components are `(id, show, keywords)` triples
    pub fn with_category(
        mut self,
        name: &str,
        slug: &str,
        components: &[(&str, bool, &[&str])],
    ) -> Self {
        let components = components
            .iter()
            .map(|(id, show, keywords)| {
                ComponentRecord::new(
                    ComponentId::new(*id).unwrap(),
                    *show,
                    keywords.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect();
        self.categories.push(CategoryRecord::new(
            name.to_string(),
            CategorySlug::new(slug).unwrap(),
            components,
        ));
        self
    }

    /// Makes every query fail with `CatalogError::StoreUnavailable`
    pub fn failing(mut self, details: &str) -> Self {
        self.fail_with = Some(details.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<InMemoryComponentStore> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(details) => Err(CatalogError::StoreUnavailable {
                source_name: "mock-store".to_string(),
                details: details.clone(),
            }
            .into()),
            None => Ok(InMemoryComponentStore::new(self.categories.clone())),
        }
    }
}

#[async_trait::async_trait]
impl ComponentStore for MockComponentStore {
    async fn find_components(&self, query: &ComponentQuery) -> Result<Vec<ComponentRecord>> {
        self.record_call()?.find_components(query).await
    }

    async fn find_categories(&self) -> Result<Vec<CategoryRecord>> {
        self.record_call()?.find_categories().await
    }
}
