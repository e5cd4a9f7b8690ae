/// Mock implementations for testing
mod mock_component_store;
mod mock_progress_reporter;

pub use mock_component_store::MockComponentStore;
pub use mock_progress_reporter::MockProgressReporter;
