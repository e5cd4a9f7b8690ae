/// Result alias with anyhow::Error as the error type.
/// Typed `CatalogError` values are carried inside the anyhow chain.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
