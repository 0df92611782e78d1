use crate::ports::outbound::{OutputPresenter, ProgressReporter, SoupFormatter, TemplateReader};
use crate::shared::Result;
use crate::soup_report::domain::{EnrichedDependency, ReportTemplate, TABLE_PLACEHOLDER};
use std::path::Path;

/// RenderReportUseCase - Injects the dependency table into the report template
///
/// Loading and rendering are separate steps so the template can be checked
/// before any network traffic happens.
///
/// # Type Parameters
/// * `TR` - TemplateReader implementation
/// * `F` - SoupFormatter implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderReportUseCase<TR, F, PR> {
    template_reader: TR,
    formatter: F,
    progress_reporter: PR,
}

impl<TR, F, PR> RenderReportUseCase<TR, F, PR>
where
    TR: TemplateReader,
    F: SoupFormatter,
    PR: ProgressReporter,
{
    pub fn new(template_reader: TR, formatter: F, progress_reporter: PR) -> Self {
        Self {
            template_reader,
            formatter,
            progress_reporter,
        }
    }

    /// Loads the template, warning when it lacks the table placeholder
    ///
    /// # Errors
    /// Returns an error if the template does not exist or cannot be read
    pub fn load_template(&self, template_path: &Path) -> Result<ReportTemplate> {
        let template = self.template_reader.read_template(template_path)?;

        if !template.has_placeholder() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Template {} has no {} placeholder. The dependency table will not appear in the report.",
                template_path.display(),
                TABLE_PLACEHOLDER
            ));
        }

        Ok(template)
    }

    /// Renders the entries into the template and hands the document to the presenter
    ///
    /// # Returns
    /// The rendered document
    pub fn execute(
        &self,
        template: &ReportTemplate,
        entries: &[EnrichedDependency],
        presenter: &dyn OutputPresenter,
    ) -> Result<String> {
        let table = self.formatter.format(entries)?;
        let document = template.render(&table);
        presenter.present(&document)?;
        Ok(document)
    }
}
