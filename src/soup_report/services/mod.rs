mod dependency_deduplicator;
mod risk_ordering;
mod risk_summary;

pub use dependency_deduplicator::DependencyDeduplicator;
pub use risk_ordering::RiskOrdering;
pub use risk_summary::RiskSummary;
