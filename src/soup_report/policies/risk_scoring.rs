use crate::soup_report::domain::{RepositoryMetadata, RiskAssessment, RiskLevel, RiskNote};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Days without a push before a repository counts as infrequently maintained
const INFREQUENT_COMMIT_DAYS: i64 = 365;

/// Days since the latest release before it counts as stale
const STALE_RELEASE_DAYS: i64 = 730;

/// Popularity floor (stars)
const LOW_POPULARITY_STARS: u64 = 100;

/// Open issues per 100 stars above which the issue load is excessive
const EXCESSIVE_ISSUES_PER_100_STARS: u64 = 50;

/// Point schedule for the weighted risk score.
///
/// The defaults are the implemented weights of the scoring rules:
/// open issues and stale releases weigh 1 point each (an older, documented
/// schedule gave them 2 points). Category bounds are `score < medium_threshold`
/// for Low, `score < high_threshold` for Medium, High otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub infrequent_commits: u32,
    pub low_popularity: u32,
    pub version_behind: u32,
    pub excessive_open_issues: u32,
    pub stale_release: u32,
    pub known_vulnerabilities: u32,
    pub medium_threshold: u32,
    pub high_threshold: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            infrequent_commits: 1,
            low_popularity: 2,
            version_behind: 2,
            excessive_open_issues: 1,
            stale_release: 1,
            known_vulnerabilities: 3,
            medium_threshold: 2,
            high_threshold: 4,
        }
    }
}

/// RiskScorer policy turning repository signals into a risk category
///
/// Pure: the same metadata, local version and evaluation time always give the
/// same assessment.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    weights: ScoringWeights,
}

impl RiskScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Scores a repository against the local version in use.
    ///
    /// Rules are independent and cumulative; notes are reported in rule order.
    /// The total saturates at `u32::MAX`, so oversized configured weights
    /// can only raise the category.
    pub fn score(
        &self,
        metadata: &RepositoryMetadata,
        local_version: &str,
        now: DateTime<Utc>,
    ) -> RiskAssessment {
        let mut score: u32 = 0;
        let mut notes = Vec::new();
        let mut apply = |triggered: bool, points: u32, note: RiskNote| {
            if triggered {
                score = score.saturating_add(points);
                notes.push(note);
            }
        };

        apply(
            older_than(metadata.last_commit_date, now, INFREQUENT_COMMIT_DAYS),
            self.weights.infrequent_commits,
            RiskNote::InfrequentCommits,
        );
        apply(
            metadata.stars < LOW_POPULARITY_STARS,
            self.weights.low_popularity,
            RiskNote::LowPopularity,
        );
        apply(
            is_significantly_older(Some(local_version), metadata.latest_version.as_deref()),
            self.weights.version_behind,
            RiskNote::VersionBehindLatest,
        );
        apply(
            has_excessive_open_issues(metadata.open_issues_count, metadata.stars),
            self.weights.excessive_open_issues,
            RiskNote::ExcessiveOpenIssues,
        );
        apply(
            older_than(metadata.last_release_date, now, STALE_RELEASE_DAYS),
            self.weights.stale_release,
            RiskNote::StaleRelease,
        );
        apply(
            metadata.has_known_cve,
            self.weights.known_vulnerabilities,
            RiskNote::KnownVulnerabilities,
        );

        RiskAssessment::new(self.category(score), score, notes)
    }

    /// Maps a total score onto a category
    pub fn category(&self, score: u32) -> RiskLevel {
        if score >= self.weights.high_threshold {
            RiskLevel::High
        } else if score >= self.weights.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

fn older_than(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>, days: i64) -> bool {
    timestamp
        .map(|at| (now - at).num_days() > days)
        .unwrap_or(false)
}

/// `open_issues * 100 / max(stars, 1) > 50`, evaluated without division
fn has_excessive_open_issues(open_issues: u64, stars: u64) -> bool {
    open_issues.saturating_mul(100)
        > EXCESSIVE_ISSUES_PER_100_STARS.saturating_mul(stars.max(1))
}

fn leading_major_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)").expect("major version pattern is valid"))
}

/// Leading major version number; a leading `v` is ignored and anything
/// non-numeric parses as 0.
///
/// The digits need not be followed by a dot: a bare tag such as `"7"` is
/// major 7, not 0.
pub fn parse_major(version: &str) -> u64 {
    let trimmed = version.trim().trim_start_matches(['v', 'V']);
    leading_major_pattern()
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Whether `local_version` is at least one major version behind `latest_version`.
///
/// Missing or empty versions on either side never count as behind.
pub fn is_significantly_older(local_version: Option<&str>, latest_version: Option<&str>) -> bool {
    let (Some(local), Some(latest)) = (local_version, latest_version) else {
        return false;
    };
    if local.trim().is_empty() || latest.trim().is_empty() {
        return false;
    }
    parse_major(latest) > parse_major(local)
}
