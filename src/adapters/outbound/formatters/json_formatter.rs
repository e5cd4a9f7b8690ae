use crate::application::dto::KeywordResponse;
use crate::keyword_aggregation::domain::{CategoryKeywords, KeywordCount, ReportMetadata};
use crate::ports::outbound::KeywordFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tool_name: &'a str,
    tool_version: &'a str,
}

#[derive(Serialize)]
struct KeywordEntry<'a> {
    keyword: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct CategoryEntry<'a> {
    category: &'a str,
    keywords: Vec<KeywordEntry<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Document<'a> {
    Keywords {
        metadata: Metadata<'a>,
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<&'a str>,
        keywords: Vec<KeywordEntry<'a>>,
    },
    Grouped {
        metadata: Metadata<'a>,
        categories: Vec<CategoryEntry<'a>>,
    },
}

/// JsonFormatter adapter rendering keyword reports as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_metadata(metadata: &ReportMetadata) -> Metadata<'_> {
        Metadata {
            timestamp: metadata.timestamp(),
            tool_name: metadata.tool_name(),
            tool_version: metadata.tool_version(),
        }
    }

    fn build_keywords(keywords: &[KeywordCount]) -> Vec<KeywordEntry<'_>> {
        keywords
            .iter()
            .map(|k| KeywordEntry {
                keyword: k.keyword(),
                count: k.count(),
            })
            .collect()
    }

    fn build_categories(categories: &[CategoryKeywords]) -> Vec<CategoryEntry<'_>> {
        categories
            .iter()
            .map(|c| CategoryEntry {
                category: c.category(),
                keywords: Self::build_keywords(c.keywords()),
            })
            .collect()
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordFormatter for JsonFormatter {
    fn format(&self, response: &KeywordResponse, metadata: &ReportMetadata) -> Result<String> {
        let metadata = Self::build_metadata(metadata);
        let document = match response {
            KeywordResponse::All(keywords) => Document::Keywords {
                metadata,
                category: None,
                keywords: Self::build_keywords(keywords),
            },
            KeywordResponse::Category { slug, keywords } => Document::Keywords {
                metadata,
                category: Some(slug.as_str()),
                keywords: Self::build_keywords(keywords),
            },
            KeywordResponse::Grouped(categories) => Document::Grouped {
                metadata,
                categories: Self::build_categories(categories),
            },
        };

        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword_aggregation::domain::CategorySlug;
    use serde_json::{json, Value};

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "catalog-keywords".to_string(),
            "0.1.0".to_string(),
        )
    }

    fn render(response: &KeywordResponse) -> Value {
        let output = JsonFormatter::new().format(response, &metadata()).unwrap();
        assert!(output.ends_with('\n'));
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_format_all_keywords() {
        let value = render(&KeywordResponse::All(vec![
            KeywordCount::new("animated", 1),
            KeywordCount::new("rounded", 2),
        ]));

        assert_eq!(
            value,
            json!({
                "metadata": {
                    "timestamp": "2024-01-01T00:00:00Z",
                    "tool_name": "catalog-keywords",
                    "tool_version": "0.1.0"
                },
                "keywords": [
                    { "keyword": "animated", "count": 1 },
                    { "keyword": "rounded", "count": 2 }
                ]
            })
        );
    }

    #[test]
    fn test_format_category_includes_slug() {
        let value = render(&KeywordResponse::Category {
            slug: CategorySlug::new("buttons").unwrap(),
            keywords: vec![KeywordCount::new("flat", 1)],
        });

        assert_eq!(value["category"], "buttons");
        assert_eq!(value["keywords"][0]["keyword"], "flat");
    }

    #[test]
    fn test_format_empty_keywords_is_empty_array() {
        let value = render(&KeywordResponse::All(vec![]));
        assert_eq!(value["keywords"], json!([]));
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_format_grouped_keeps_category_order() {
        let value = render(&KeywordResponse::Grouped(vec![
            CategoryKeywords::new("Buttons", vec![KeywordCount::new("rounded", 2)]),
            CategoryKeywords::new("Alerts", vec![KeywordCount::new("dismissible", 1)]),
        ]));

        let names: Vec<&str> = value["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["category"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Buttons", "Alerts"]);
        assert_eq!(value["categories"][0]["keywords"][0]["count"], 2);
        assert!(value.get("keywords").is_none());
    }
}
