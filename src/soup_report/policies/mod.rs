pub mod license_registry;
pub mod risk_scoring;

pub use license_registry::LicenseRegistry;
pub use risk_scoring::{is_significantly_older, parse_major, RiskScorer, ScoringWeights};
