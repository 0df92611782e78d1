use super::dependency::DependencyRecord;
use super::risk::{RiskAssessment, RiskLevel};

/// EnrichedDependency couples a dependency record with its license
/// requirement text and risk assessment.
///
/// Built once per unique record by the aggregation pipeline; the original
/// record is carried unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedDependency {
    record: DependencyRecord,
    license_requirement: String,
    assessment: RiskAssessment,
}

impl EnrichedDependency {
    pub fn new(
        record: DependencyRecord,
        license_requirement: String,
        assessment: RiskAssessment,
    ) -> Self {
        Self {
            record,
            license_requirement,
            assessment,
        }
    }

    pub fn record(&self) -> &DependencyRecord {
        &self.record
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.assessment.level()
    }

    pub fn license_requirement(&self) -> &str {
        &self.license_requirement
    }

    pub fn assessment(&self) -> &RiskAssessment {
        &self.assessment
    }

    pub fn notes(&self) -> String {
        self.assessment.notes_text()
    }
}
