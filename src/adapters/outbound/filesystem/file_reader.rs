use crate::ports::outbound::TemplateReader;
use crate::shared::error::SoupError;
use crate::shared::security::read_file_following_symlinks;
use crate::shared::Result;
use crate::soup_report::domain::ReportTemplate;
use std::path::Path;

/// FileSystemReader adapter for reading the report template
///
/// Symlinks are followed, since the template usually lives in a linked
/// workflows checkout. Directories and oversized files are refused.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateReader for FileSystemReader {
    fn read_template(&self, template_path: &Path) -> Result<ReportTemplate> {
        if !template_path.exists() {
            return Err(SoupError::TemplateNotFound {
                path: template_path.to_path_buf(),
                suggestion: format!(
                    "Template \"{}\" does not exist.\n   \
                     Check out the workflows repository or pass --template with the correct path.",
                    template_path.display()
                ),
            }
            .into());
        }

        let content = read_file_following_symlinks(template_path, "report template").map_err(|e| {
            SoupError::TemplateReadError {
                path: template_path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        Ok(ReportTemplate::new(content))
    }
}
