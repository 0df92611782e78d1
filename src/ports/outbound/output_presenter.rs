use crate::shared::Result;

/// OutputPresenter port for presenting the final report
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered SOUP document is presented.
pub trait OutputPresenter {
    /// Presents the rendered document to the output destination
    ///
    /// # Arguments
    /// * `content` - The rendered SOUP document
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The output path is a symlink or its directory does not exist
    fn present(&self, content: &str) -> Result<()>;
}
