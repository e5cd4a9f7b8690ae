use crate::keyword_aggregation::domain::{CategoryRecord, ComponentRecord};
use crate::ports::outbound::{ComponentQuery, ComponentStore};
use crate::shared::Result;
use async_trait::async_trait;

/// InMemoryComponentStore adapter serving a catalog snapshot held in memory
///
/// Useful when the caller already loaded categories from its own data layer,
/// and as the reference behaviour for `ComponentStore` implementations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryComponentStore {
    categories: Vec<CategoryRecord>,
}

impl InMemoryComponentStore {
    pub fn new(categories: Vec<CategoryRecord>) -> Self {
        Self { categories }
    }
}

/// Applies a `ComponentQuery` to a set of categories
fn select_components(
    categories: &[CategoryRecord],
    query: &ComponentQuery,
) -> Vec<ComponentRecord> {
    categories
        .iter()
        .filter(|category| match &query.category_slug {
            Some(slug) => category.slug() == slug,
            None => true,
        })
        .flat_map(|category| category.components().iter())
        .filter(|component| match query.show {
            Some(show) => component.is_visible() == show,
            None => true,
        })
        .cloned()
        .collect()
}

#[async_trait]
impl ComponentStore for InMemoryComponentStore {
    async fn find_components(&self, query: &ComponentQuery) -> Result<Vec<ComponentRecord>> {
        Ok(select_components(&self.categories, query))
    }

    async fn find_categories(&self) -> Result<Vec<CategoryRecord>> {
        Ok(self
            .categories
            .iter()
            .cloned()
            .map(CategoryRecord::into_visible)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword_aggregation::domain::{CategorySlug, ComponentId};

    fn store() -> InMemoryComponentStore {
        let component = |id: &str, show: bool| {
            ComponentRecord::new(ComponentId::new(id).unwrap(), show, vec!["k".to_string()])
        };
        InMemoryComponentStore::new(vec![
            CategoryRecord::new(
                "Buttons".to_string(),
                CategorySlug::new("buttons").unwrap(),
                vec![component("b1", true), component("b2", false)],
            ),
            CategoryRecord::new(
                "Forms".to_string(),
                CategorySlug::new("forms").unwrap(),
                vec![component("f1", true)],
            ),
        ])
    }

    fn ids(components: &[ComponentRecord]) -> Vec<&str> {
        components.iter().map(|c| c.id().as_str()).collect()
    }

    #[tokio::test]
    async fn test_find_components_unfiltered() {
        let result = store()
            .find_components(&ComponentQuery::default())
            .await
            .unwrap();
        assert_eq!(ids(&result), vec!["b1", "b2", "f1"]);
    }

    #[tokio::test]
    async fn test_find_components_visible_only() {
        let result = store()
            .find_components(&ComponentQuery::visible())
            .await
            .unwrap();
        assert_eq!(ids(&result), vec!["b1", "f1"]);
    }

    #[tokio::test]
    async fn test_find_components_hidden_only() {
        let query = ComponentQuery {
            show: Some(false),
            category_slug: None,
        };
        let result = store().find_components(&query).await.unwrap();
        assert_eq!(ids(&result), vec!["b2"]);
    }

    #[tokio::test]
    async fn test_find_components_by_category() {
        let query = ComponentQuery::visible_in(CategorySlug::new("forms").unwrap());
        let result = store().find_components(&query).await.unwrap();
        assert_eq!(ids(&result), vec!["f1"]);
    }

    #[tokio::test]
    async fn test_find_components_unknown_category_is_empty() {
        let query = ComponentQuery::visible_in(CategorySlug::new("nope").unwrap());
        assert!(store().find_components(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_categories_prefilters_visible() {
        let categories = store().find_categories().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name(), "Buttons");
        assert_eq!(ids(categories[0].components()), vec!["b1"]);
    }
}
