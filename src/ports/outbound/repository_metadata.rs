use crate::soup_report::domain::{RepositoryCoordinates, RepositoryMetadata};
use async_trait::async_trait;

/// RepositoryMetadataProvider port for fetching repository health signals
///
/// This port abstracts the repository-hosting API (e.g., GitHub).
///
/// # Best effort
/// Fetching never fails from the caller's point of view. Implementations
/// recover every network or parse failure internally and leave the affected
/// fields of [`RepositoryMetadata`] at their defaults.
///
/// # Async Support
/// Implementations must be `Send + Sync` to support concurrent enrichment.
#[async_trait]
pub trait RepositoryMetadataProvider: Send + Sync {
    /// Fetches popularity, activity, release and advisory signals
    ///
    /// # Arguments
    /// * `coordinates` - Owner and repository name on the hosting service
    async fn fetch_metadata(&self, coordinates: &RepositoryCoordinates) -> RepositoryMetadata;
}
