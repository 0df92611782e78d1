use crate::soup_report::domain::EnrichedDependency;
use crate::soup_report::services::RiskSummary;

/// SoupResponse - Internal response DTO from the SOUP aggregation use case
#[derive(Debug, Clone)]
pub struct SoupResponse {
    /// Enriched entries in report order (High first, then by name)
    pub entries: Vec<EnrichedDependency>,
    /// Entry counts per risk level
    pub summary: RiskSummary,
}

impl SoupResponse {
    pub fn new(entries: Vec<EnrichedDependency>) -> Self {
        let summary = RiskSummary::from_entries(&entries);
        Self { entries, summary }
    }
}
