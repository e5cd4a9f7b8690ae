use crate::adapters::outbound::memory::InMemoryComponentStore;
use crate::keyword_aggregation::domain::{
    CategoryRecord, CategorySlug, ComponentId, ComponentRecord,
};
use crate::ports::outbound::{ComponentQuery, ComponentStore};
use crate::shared::error::CatalogError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<CatalogCategory>,
}

#[derive(Debug, Deserialize)]
struct CatalogCategory {
    name: String,
    slug: String,
    #[serde(default)]
    components: Vec<CatalogComponent>,
}

#[derive(Debug, Deserialize)]
struct CatalogComponent {
    id: String,
    show: bool,
    #[serde(default)]
    keywords: Vec<String>,
}

/// CatalogFileStore adapter answering store queries from a JSON catalog export
///
/// The file is re-read on every query, so edits are picked up without
/// restarting and no state is shared between calls.
pub struct CatalogFileStore {
    path: PathBuf,
}

impl CatalogFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads and validates the catalog, returning an in-memory snapshot
    fn load(&self) -> Result<InMemoryComponentStore> {
        // A dangling symlink is not missing; read_checked_file rejects it
        let missing = matches!(
            fs::symlink_metadata(&self.path),
            Err(ref e) if e.kind() == io::ErrorKind::NotFound
        );
        if missing {
            return Err(CatalogError::CatalogNotFound {
                path: self.path.clone(),
                suggestion: "Export the catalog to JSON and pass its location with --catalog, \
                             or set `catalog` in catalog-keywords.config.yml."
                    .to_string(),
            }
            .into());
        }

        let content = read_checked_file(&self.path, "catalog file").with_context(|| {
            CatalogError::StoreUnavailable {
                source_name: self.path.display().to_string(),
                details: "The catalog file could not be read".to_string(),
            }
        })?;

        let catalog: CatalogFile =
            serde_json::from_str(&content).map_err(|e| CatalogError::QueryFailed {
                details: format!("Malformed catalog file {}: {}", self.path.display(), e),
            })?;

        let categories = catalog
            .categories
            .into_iter()
            .map(Self::to_record)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| CatalogError::QueryFailed {
                details: format!("Invalid record in {}: {}", self.path.display(), e),
            })?;

        Ok(InMemoryComponentStore::new(categories))
    }

    fn to_record(category: CatalogCategory) -> Result<CategoryRecord> {
        let components = category
            .components
            .into_iter()
            .map(|c| -> Result<ComponentRecord> {
                Ok(ComponentRecord::new(ComponentId::new(c.id)?, c.show, c.keywords))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CategoryRecord::new(
            category.name,
            CategorySlug::new(category.slug)?,
            components,
        ))
    }
}

#[async_trait]
impl ComponentStore for CatalogFileStore {
    async fn find_components(&self, query: &ComponentQuery) -> Result<Vec<ComponentRecord>> {
        self.load()?.find_components(query).await
    }

    async fn find_categories(&self) -> Result<Vec<CategoryRecord>> {
        self.load()?.find_categories().await
    }
}
