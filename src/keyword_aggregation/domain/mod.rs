pub mod category;
pub mod component;
pub mod keyword_count;
pub mod report_metadata;

pub use category::{CategoryRecord, CategorySlug};
pub use component::{ComponentId, ComponentRecord};
pub use keyword_count::{CategoryKeywords, KeywordCount};
pub use report_metadata::ReportMetadata;
