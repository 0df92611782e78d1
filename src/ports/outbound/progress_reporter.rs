/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts user-facing feedback (e.g., to stderr) during
/// inventory loading and the network-bound enrichment phase.
pub trait ProgressReporter {
    /// Reports a step message
    fn report(&self, message: &str);

    /// Reports enrichment progress
    ///
    /// # Arguments
    /// * `current` - Dependencies processed so far
    /// * `total` - Dependencies to process
    /// * `message` - Optional detail, typically the dependency name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
