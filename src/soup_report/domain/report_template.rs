/// Placeholder token replaced by the rendered dependency table
pub const TABLE_PLACEHOLDER: &str = "{{DEPENDENCY_TABLE}}";

/// ReportTemplate value object wrapping the raw template document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    content: String,
}

impl ReportTemplate {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn has_placeholder(&self) -> bool {
        self.content.contains(TABLE_PLACEHOLDER)
    }

    /// Substitutes every placeholder occurrence with `table`.
    /// A template without the placeholder is returned unchanged.
    pub fn render(&self, table: &str) -> String {
        self.content.replace(TABLE_PLACEHOLDER, table)
    }
}
