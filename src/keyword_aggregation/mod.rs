/// Keyword aggregation domain - value objects and the counting service
pub mod domain;
pub mod services;
