use crate::soup_report::domain::{EnrichedDependency, RiskLevel};

/// Per-level entry counts of a finished report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskSummary {
    pub fn from_entries(entries: &[EnrichedDependency]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut summary, entry| {
                match entry.risk_level() {
                    RiskLevel::High => summary.high += 1,
                    RiskLevel::Medium => summary.medium += 1,
                    RiskLevel::Low => summary.low += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    pub fn has_high_risk(&self) -> bool {
        self.high > 0
    }
}
