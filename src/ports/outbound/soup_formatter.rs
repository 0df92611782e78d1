use crate::shared::Result;
use crate::soup_report::domain::EnrichedDependency;

/// SoupFormatter port for rendering the dependency table
pub trait SoupFormatter {
    /// Renders already-sorted entries as table text
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, entries: &[EnrichedDependency]) -> Result<String>;
}
