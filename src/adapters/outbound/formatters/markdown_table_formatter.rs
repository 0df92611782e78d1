use crate::ports::outbound::SoupFormatter;
use crate::shared::Result;
use crate::soup_report::domain::EnrichedDependency;

/// Markdown table header for the SOUP report
const TABLE_HEADER: &str =
    "| Risk Level | Component Name | Version | License | License Requirements | Notes | GitHub Repo URL |";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|------------|---------------|---------|---------|----------------------|-------|-----------------|";

/// MarkdownTableFormatter adapter rendering the dependency table
///
/// Emits the header, the divider and one row per entry, joined with `\n`
/// and without a trailing newline so the table drops cleanly into the
/// template placeholder. Entries are rendered in the order given.
pub struct MarkdownTableFormatter;

impl MarkdownTableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace("\r\n", " ").replace(['\n', '\r'], " ")
    }

    fn render_row(entry: &EnrichedDependency) -> String {
        let record = entry.record();
        let cells = [
            entry.risk_level().to_string(),
            Self::escape_markdown_table_cell(record.name()),
            Self::escape_markdown_table_cell(record.version()),
            Self::escape_markdown_table_cell(record.license()),
            entry.license_requirement().to_string(),
            entry.notes(),
            Self::escape_markdown_table_cell(record.url()),
        ];
        format!("| {} |", cells.join(" | "))
    }
}

impl Default for MarkdownTableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SoupFormatter for MarkdownTableFormatter {
    fn format(&self, entries: &[EnrichedDependency]) -> Result<String> {
        let mut lines = Vec::with_capacity(entries.len() + 2);
        lines.push(TABLE_HEADER.to_string());
        lines.push(TABLE_SEPARATOR.to_string());
        lines.extend(entries.iter().map(Self::render_row));
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soup_report::domain::{DependencyRecord, RiskAssessment, RiskLevel, RiskNote};

    #[test]
    fn test_format_empty_table() {
        let table = MarkdownTableFormatter::new().format(&[]).unwrap();
        assert_eq!(table, format!("{}\n{}", TABLE_HEADER, TABLE_SEPARATOR));
    }

    #[test]
    fn test_format_row_column_order() {
        let entry = EnrichedDependency::new(
            DependencyRecord::new(
                "lodash",
                "4.17.21",
                "https://github.com/lodash/lodash",
                "MIT",
            ),
            "Include License File".to_string(),
            RiskAssessment::new(
                RiskLevel::Medium,
                3,
                vec![RiskNote::InfrequentCommits, RiskNote::LowPopularity],
            ),
        );

        let table = MarkdownTableFormatter::new().format(&[entry]).unwrap();
        let rows: Vec<&str> = table.lines().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[2],
            "| Medium | lodash | 4.17.21 | mit | Include License File | \
             Infrequent Commits, Low Popularity | https://github.com/lodash/lodash |"
        );
        assert!(!table.ends_with('\n'));
    }

    #[test]
    fn test_format_row_with_empty_notes_and_url() {
        let entry = EnrichedDependency::new(
            DependencyRecord::new("left-pad", "1.3.0", "", "MIT"),
            "Include License File".to_string(),
            RiskAssessment::unscored(),
        );

        let table = MarkdownTableFormatter::new().format(&[entry]).unwrap();

        assert!(table.ends_with("| Low | left-pad | 1.3.0 | mit | Include License File |  |  |"));
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        let escaped =
            MarkdownTableFormatter::escape_markdown_table_cell("Text with | pipe and\nnewline");
        assert_eq!(escaped, "Text with \\| pipe and newline");
    }

    #[test]
    fn test_pipe_in_license_does_not_break_row() {
        let entry = EnrichedDependency::new(
            DependencyRecord::new("dual", "1.0.0", "", "MIT|Apache-2.0"),
            "No License File Required".to_string(),
            RiskAssessment::unscored().unknown_license_override(),
        );

        let table = MarkdownTableFormatter::new().format(&[entry]).unwrap();
        let row = table.lines().nth(2).unwrap();

        assert!(row.contains("mit\\|apache-2.0"));
        assert_eq!(row.matches(" | ").count(), 6);
    }
}
