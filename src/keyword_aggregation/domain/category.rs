use super::component::ComponentRecord;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// NewType wrapper for a category's URL-safe identifier.
///
/// Only emptiness is checked here; whether a slug matches anything is up to the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn new(slug: impl Into<String>) -> Result<Self> {
        let slug = slug.into();
        if slug.is_empty() {
            return Err(CatalogError::Validation {
                message: "Category slug cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CategorySlug {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// A category together with the components it owns
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    name: String,
    slug: CategorySlug,
    components: Vec<ComponentRecord>,
}

impl CategoryRecord {
    pub fn new(name: String, slug: CategorySlug, components: Vec<ComponentRecord>) -> Self {
        Self {
            name,
            slug,
            components,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &CategorySlug {
        &self.slug
    }

    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }

    /// Consumes the record, keeping only visible components
    pub fn into_visible(self) -> Self {
        Self {
            components: self
                .components
                .into_iter()
                .filter(ComponentRecord::is_visible)
                .collect(),
            ..self
        }
    }
}
