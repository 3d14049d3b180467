/// ProgressReporter port for user feedback during generation
///
/// All human-readable status goes through this port so stdout stays
/// reserved for the SBOM document.
pub trait ProgressReporter {
    /// Reports a step message
    fn report(&self, message: &str);

    /// Reports progress through a fixed number of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total number of steps
    /// * `message` - Optional message shown next to the bar
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error
    fn report_error(&self, message: &str);

    /// Reports a recoverable problem; generation continues
    fn report_warning(&self, message: &str) {
        self.report_error(&format!("⚠️  Warning: {}", message));
    }

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
