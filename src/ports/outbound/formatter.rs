use crate::application::dto::KeywordResponse;
use crate::keyword_aggregation::domain::ReportMetadata;
use crate::shared::Result;

/// KeywordFormatter port for rendering aggregation results
///
/// This port abstracts the output format (JSON, Markdown, etc.).
pub trait KeywordFormatter {
    /// Formats a keyword response together with report metadata
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &KeywordResponse, metadata: &ReportMetadata) -> Result<String>;
}
