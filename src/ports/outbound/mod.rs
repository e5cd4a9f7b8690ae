/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (component store, console, output).
pub mod component_store;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use component_store::{ComponentQuery, ComponentStore};
pub use formatter::KeywordFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
