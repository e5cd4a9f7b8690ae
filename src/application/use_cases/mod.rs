/// Use cases module containing application business logic orchestration
mod aggregate_keywords;

pub use aggregate_keywords::AggregateKeywordsUseCase;
