pub mod dependency;
pub mod enriched_dependency;
pub mod license_info;
pub mod report_template;
pub mod repository;
pub mod risk;

pub use dependency::{DependencyKey, DependencyRecord};
pub use enriched_dependency::EnrichedDependency;
pub use license_info::{normalize_license, LicenseInfo, UNKNOWN_LICENSE};
pub use report_template::{ReportTemplate, TABLE_PLACEHOLDER};
pub use repository::{RepositoryCoordinates, RepositoryMetadata};
pub use risk::{RiskAssessment, RiskLevel, RiskNote};
