use crate::application::dto::{KeywordRequest, KeywordResponse, KeywordScope};
use crate::keyword_aggregation::domain::{CategoryKeywords, CategorySlug, KeywordCount};
use crate::keyword_aggregation::services::KeywordCounter;
use crate::ports::inbound::KeywordQueryPort;
use crate::ports::outbound::{ComponentQuery, ComponentStore, ProgressReporter};
use crate::shared::Result;
use async_trait::async_trait;

/// AggregateKeywordsUseCase - counts distinct visible components per keyword
///
/// Stateless apart from its injected dependencies: every call issues one store
/// read and aggregates the result in a map local to that call.
///
/// # Type Parameters
/// * `S` - ComponentStore implementation
/// * `PR` - ProgressReporter implementation
pub struct AggregateKeywordsUseCase<S, PR> {
    store: S,
    progress_reporter: PR,
}

impl<S, PR> AggregateKeywordsUseCase<S, PR>
where
    S: ComponentStore,
    PR: ProgressReporter,
{
    /// Creates a new AggregateKeywordsUseCase with injected dependencies
    pub fn new(store: S, progress_reporter: PR) -> Self {
        Self {
            store,
            progress_reporter,
        }
    }

    /// Runs the query selected by `request.scope`
    pub async fn execute(&self, request: KeywordRequest) -> Result<KeywordResponse> {
        let response = match request.scope {
            KeywordScope::All => KeywordResponse::All(self.get_all_keywords().await?),
            KeywordScope::Category(slug) => {
                let keywords = self.get_keywords_for_category(&slug).await?;
                KeywordResponse::Category { slug, keywords }
            }
            KeywordScope::GroupedByCategory => {
                KeywordResponse::Grouped(self.get_keywords_grouped_by_category().await?)
            }
        };

        if response.is_empty() {
            self.progress_reporter
                .report_completion("⚠️  No keywords found for the requested scope");
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ Aggregated {} distinct keyword(s)",
                response.distinct_keyword_count()
            ));
        }

        Ok(response)
    }

    async fn count_components(&self, query: ComponentQuery) -> Result<Vec<KeywordCount>> {
        self.progress_reporter
            .report_waiting("🔍 Querying visible components...");

        let components = self
            .store
            .find_components(&query)
            .await
            .inspect_err(|_| self.report_store_failure())?;

        self.progress_reporter.report(&format!(
            "📦 Loaded {} component(s)",
            components.len()
        ));

        Ok(KeywordCounter::aggregate(&components))
    }

    /// Ends the waiting indicator before a store error is returned as-is
    fn report_store_failure(&self) {
        self.progress_reporter
            .report_error("❌ Component store query failed");
    }
}

#[async_trait]
impl<S, PR> KeywordQueryPort for AggregateKeywordsUseCase<S, PR>
where
    S: ComponentStore,
    PR: ProgressReporter,
{
    async fn get_all_keywords(&self) -> Result<Vec<KeywordCount>> {
        self.count_components(ComponentQuery::visible()).await
    }

    async fn get_keywords_for_category(&self, slug: &CategorySlug) -> Result<Vec<KeywordCount>> {
        self.count_components(ComponentQuery::visible_in(slug.clone()))
            .await
    }

    async fn get_keywords_grouped_by_category(&self) -> Result<Vec<CategoryKeywords>> {
        self.progress_reporter
            .report_waiting("🔍 Querying categories...");

        let categories = self
            .store
            .find_categories()
            .await
            .inspect_err(|_| self.report_store_failure())?;

        self.progress_reporter.report(&format!(
            "📦 Loaded {} category(ies)",
            categories.len()
        ));

        let grouped = KeywordCounter::group_by_category(&categories);

        let skipped = categories.len() - grouped.len();
        if skipped > 0 {
            self.progress_reporter.report(&format!(
                "   - Skipped {} category(ies) without visible keywords",
                skipped
            ));
        }

        Ok(grouped)
    }
}
