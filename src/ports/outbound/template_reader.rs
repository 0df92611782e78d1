use crate::shared::Result;
use crate::soup_report::domain::ReportTemplate;
use std::path::Path;

/// TemplateReader port for loading the report template
pub trait TemplateReader {
    /// Loads the template document
    ///
    /// # Errors
    /// Returns an error if the template does not exist or cannot be read.
    /// A missing template is fatal for the run.
    fn read_template(&self, template_path: &Path) -> Result<ReportTemplate>;
}
