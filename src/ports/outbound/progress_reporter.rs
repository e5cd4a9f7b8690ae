/// ProgressReporter port for reporting progress during keyword aggregation
///
/// Progress goes to a side channel (stderr in the CLI) so it never mixes
/// with the formatted report.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports that a potentially slow operation (a store round-trip) has started
    ///
    /// The indicator ends at the next `report`, `report_error` or `report_completion`.
    fn report_waiting(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
