/// Filesystem adapters for the catalog file and report output
mod catalog_file_store;
mod file_writer;

pub use catalog_file_store::CatalogFileStore;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
