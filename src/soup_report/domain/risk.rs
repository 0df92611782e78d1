use std::fmt;

/// Coarse risk category of a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Report ordering rank: High sorts first, Low last
    pub fn precedence(&self) -> u8 {
        match self {
            RiskLevel::High => 1,
            RiskLevel::Medium => 2,
            RiskLevel::Low => 3,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::Low => write!(f, "Low"),
        }
    }
}

/// A triggered risk signal, rendered in the "Notes" column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskNote {
    InfrequentCommits,
    LowPopularity,
    VersionBehindLatest,
    ExcessiveOpenIssues,
    StaleRelease,
    KnownVulnerabilities,
    UnknownLicense,
}

impl RiskNote {
    pub fn label(&self) -> &'static str {
        match self {
            RiskNote::InfrequentCommits => "Infrequent Commits",
            RiskNote::LowPopularity => "Low Popularity",
            RiskNote::VersionBehindLatest => "Version Behind Latest",
            RiskNote::ExcessiveOpenIssues => "Excessive Open Issues",
            RiskNote::StaleRelease => "Stale Release (>2y)",
            RiskNote::KnownVulnerabilities => "Known CVE/CWEs",
            RiskNote::UnknownLicense => "Unknown License, Manual Review Required",
        }
    }
}

impl fmt::Display for RiskNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of assessing one dependency: a category plus the notes that led there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    level: RiskLevel,
    score: u32,
    notes: Vec<RiskNote>,
}

impl RiskAssessment {
    pub fn new(level: RiskLevel, score: u32, notes: Vec<RiskNote>) -> Self {
        Self {
            level,
            score,
            notes,
        }
    }

    /// Assessment for repositories that cannot be scored (non-GitHub or empty URL)
    pub fn unscored() -> Self {
        Self::new(RiskLevel::Low, 0, Vec::new())
    }

    /// Policy override for dependencies without a recognizable license.
    ///
    /// Replaces whatever the scorer computed, keeping only the raw score.
    pub fn unknown_license_override(self) -> Self {
        Self::new(RiskLevel::High, self.score, vec![RiskNote::UnknownLicense])
    }

    pub fn level(&self) -> RiskLevel {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn notes(&self) -> &[RiskNote] {
        &self.notes
    }

    /// Notes joined in trigger order, empty when nothing fired
    pub fn notes_text(&self) -> String {
        self.notes
            .iter()
            .map(RiskNote::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_orders_high_first() {
        assert!(RiskLevel::High.precedence() < RiskLevel::Medium.precedence());
        assert!(RiskLevel::Medium.precedence() < RiskLevel::Low.precedence());
    }

    #[test]
    fn test_risk_level_display() {
        assert_eq!(RiskLevel::High.to_string(), "High");
        assert_eq!(RiskLevel::Medium.to_string(), "Medium");
        assert_eq!(RiskLevel::Low.to_string(), "Low");
    }

    #[test]
    fn test_notes_text_joins_in_order() {
        let assessment = RiskAssessment::new(
            RiskLevel::Medium,
            3,
            vec![RiskNote::InfrequentCommits, RiskNote::LowPopularity],
        );
        assert_eq!(assessment.notes_text(), "Infrequent Commits, Low Popularity");
    }

    #[test]
    fn test_unscored_is_low_without_notes() {
        let assessment = RiskAssessment::unscored();
        assert_eq!(assessment.level(), RiskLevel::Low);
        assert_eq!(assessment.notes_text(), "");
    }

    #[test]
    fn test_unknown_license_override_replaces_notes() {
        let assessment = RiskAssessment::new(RiskLevel::Low, 0, vec![])
            .unknown_license_override();
        assert_eq!(assessment.level(), RiskLevel::High);
        assert_eq!(
            assessment.notes_text(),
            "Unknown License, Manual Review Required"
        );

        let assessment = RiskAssessment::new(
            RiskLevel::Medium,
            2,
            vec![RiskNote::LowPopularity],
        )
        .unknown_license_override();
        assert_eq!(assessment.notes(), &[RiskNote::UnknownLicense]);
    }
}
