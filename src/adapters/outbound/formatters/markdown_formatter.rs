use crate::application::dto::KeywordResponse;
use crate::keyword_aggregation::domain::{CategoryKeywords, KeywordCount, ReportMetadata};
use crate::ports::outbound::KeywordFormatter;
use crate::shared::Result;

/// Markdown table header for keyword counts
const TABLE_HEADER: &str = "| Keyword | Components |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|------------|\n";

const EMPTY_MESSAGE: &str = "No keywords found.\n";

/// MarkdownFormatter adapter rendering keyword reports as Markdown tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and flattens newlines in table cells
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, scope: &str, metadata: &ReportMetadata) {
        output.push_str("# Component Keywords\n\n");
        output.push_str(&format!("Scope: {}\n\n", scope));
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp()
        ));
    }

    fn render_table(&self, output: &mut String, keywords: &[KeywordCount]) {
        if keywords.is_empty() {
            output.push_str(EMPTY_MESSAGE);
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for keyword in keywords {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(keyword.keyword()),
                keyword.count()
            ));
        }
    }

    fn render_categories(&self, output: &mut String, categories: &[CategoryKeywords]) {
        if categories.is_empty() {
            output.push_str(EMPTY_MESSAGE);
            return;
        }

        for (index, category) in categories.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            output.push_str(&format!("## {}\n\n", category.category()));
            self.render_table(output, category.keywords());
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordFormatter for MarkdownFormatter {
    fn format(&self, response: &KeywordResponse, metadata: &ReportMetadata) -> Result<String> {
        let mut output = String::new();

        match response {
            KeywordResponse::All(keywords) => {
                self.render_header(&mut output, "all visible components", metadata);
                self.render_table(&mut output, keywords);
            }
            KeywordResponse::Category { slug, keywords } => {
                self.render_header(&mut output, &format!("category `{}`", slug), metadata);
                self.render_table(&mut output, keywords);
            }
            KeywordResponse::Grouped(categories) => {
                self.render_header(&mut output, "grouped by category", metadata);
                self.render_categories(&mut output, categories);
            }
        }

        Ok(output)
    }
}
