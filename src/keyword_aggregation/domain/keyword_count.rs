/// Number of distinct visible components tagged with a keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    keyword: String,
    count: usize,
}

impl KeywordCount {
    pub fn new(keyword: impl Into<String>, count: usize) -> Self {
        Self {
            keyword: keyword.into(),
            count,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Keyword counts scoped to one category, in ascending keyword order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryKeywords {
    category: String,
    keywords: Vec<KeywordCount>,
}

impl CategoryKeywords {
    pub fn new(category: impl Into<String>, keywords: Vec<KeywordCount>) -> Self {
        Self {
            category: category.into(),
            keywords,
        }
    }

    /// Display name of the category
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn keywords(&self) -> &[KeywordCount] {
        &self.keywords
    }
}
