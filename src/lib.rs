//! catalog-keywords - keyword usage statistics for component catalogs
//!
//! Answers three questions over a catalog of UI components: how many visible
//! components use each keyword, the same for one category, and the same per
//! category. Follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`keyword_aggregation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use catalog_keywords::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let store = CatalogFileStore::new(PathBuf::from("catalog.json"));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AggregateKeywordsUseCase::new(store, progress_reporter);
//!
//! // Query
//! let slug = CategorySlug::new("buttons")?;
//! for entry in use_case.get_keywords_for_category(&slug).await? {
//!     println!("{}: {}", entry.keyword(), entry.count());
//! }
//!
//! // Or run a request and format the response
//! let response = use_case.execute(KeywordRequest::grouped()).await?;
//! let output = MarkdownFormatter::new().format(&response, &ReportMetadata::generate())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod keyword_aggregation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CatalogFileStore, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::memory::InMemoryComponentStore;
    pub use crate::application::dto::{KeywordRequest, KeywordResponse, KeywordScope, OutputFormat};
    pub use crate::application::use_cases::AggregateKeywordsUseCase;
    pub use crate::keyword_aggregation::domain::{
        CategoryKeywords, CategoryRecord, CategorySlug, ComponentId, ComponentRecord,
        KeywordCount, ReportMetadata,
    };
    pub use crate::keyword_aggregation::services::KeywordCounter;
    pub use crate::ports::inbound::KeywordQueryPort;
    pub use crate::ports::outbound::{
        ComponentQuery, ComponentStore, KeywordFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::CatalogError;
    pub use crate::shared::Result;
}
