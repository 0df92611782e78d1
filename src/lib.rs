//! cook-soup - SOUP report generator
//!
//! Aggregates the license inventories produced by `license-checker` (npm) and
//! `pip-licenses` (Python) into a "Software of Unknown Provenance" report:
//! one Markdown table row per unique dependency with its license obligations
//! and a heuristic supply-chain risk level derived from GitHub repository
//! signals.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`soup_report`): Records, license registry, risk scoring policy
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cook_soup::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let client = GitHubMetadataClient::new(GitHubClientConfig::default())?;
//! let risk_assessor = AssessRepositoryRiskUseCase::new(
//!     CachingMetadataProvider::new(client),
//!     RiskScorer::default(),
//! );
//!
//! let readers: Vec<Box<dyn InventoryReader>> = vec![
//!     Box::new(NpmInventoryReader::new(PathBuf::from("licenses-npm.json"))),
//!     Box::new(PoetryInventoryReader::new(PathBuf::from("licenses-poetry.json"))),
//! ];
//! let use_case = CookSoupUseCase::new(readers, risk_assessor, StderrProgressReporter::new());
//! let response = use_case
//!     .execute(SoupRequest::new(chrono::Utc::now(), 1))
//!     .await?;
//!
//! let renderer = RenderReportUseCase::new(
//!     FileSystemReader::new(),
//!     MarkdownTableFormatter::new(),
//!     StderrProgressReporter::new(),
//! );
//! let template = renderer.load_template(Path::new("cook_soup_template.md"))?;
//! renderer.execute(&template, &response.entries, &StdoutPresenter::new())?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod soup_report;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{format_risk_summary, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::MarkdownTableFormatter;
    pub use crate::adapters::outbound::inventory::{NpmInventoryReader, PoetryInventoryReader};
    pub use crate::adapters::outbound::network::{
        CachingMetadataProvider, GitHubClientConfig, GitHubMetadataClient,
    };
    pub use crate::application::dto::{SoupRequest, SoupResponse};
    pub use crate::application::use_cases::{
        AssessRepositoryRiskUseCase, CookSoupUseCase, RenderReportUseCase,
    };
    pub use crate::ports::outbound::{
        InventoryReader, OutputPresenter, ProgressReporter, RepositoryMetadataProvider,
        SoupFormatter, TemplateReader,
    };
    pub use crate::soup_report::domain::{
        DependencyRecord, EnrichedDependency, LicenseInfo, ReportTemplate, RepositoryCoordinates,
        RepositoryMetadata, RiskAssessment, RiskLevel, RiskNote,
    };
    pub use crate::soup_report::policies::{LicenseRegistry, RiskScorer, ScoringWeights};
    pub use crate::soup_report::services::{DependencyDeduplicator, RiskOrdering, RiskSummary};
    pub use crate::shared::Result;
}
