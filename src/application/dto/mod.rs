/// Data Transfer Objects for application layer
///
/// DTOs carry requests and results between adapters and the use case,
/// keeping the domain layer isolated.
mod keyword_request;
mod keyword_response;
mod output_format;

pub use keyword_request::{KeywordRequest, KeywordScope};
pub use keyword_response::KeywordResponse;
pub use output_format::OutputFormat;
