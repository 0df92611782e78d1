use crate::ports::outbound::RepositoryMetadataProvider;
use crate::soup_report::domain::{RepositoryCoordinates, RiskAssessment};
use crate::soup_report::policies::RiskScorer;
use chrono::{DateTime, Utc};
use tracing::debug;

/// AssessRepositoryRiskUseCase - Scores the source repository of one dependency
///
/// Resolves GitHub coordinates from the declared URL, fetches repository
/// metadata and hands it to the [`RiskScorer`]. URLs that do not point at
/// GitHub are not scored: they come back as Low with no notes and never
/// reach the metadata provider.
pub struct AssessRepositoryRiskUseCase<MP> {
    metadata_provider: MP,
    scorer: RiskScorer,
}

impl<MP> AssessRepositoryRiskUseCase<MP>
where
    MP: RepositoryMetadataProvider,
{
    pub fn new(metadata_provider: MP, scorer: RiskScorer) -> Self {
        Self {
            metadata_provider,
            scorer,
        }
    }

    pub fn metadata_provider(&self) -> &MP {
        &self.metadata_provider
    }

    /// Assesses a repository against the version in use
    ///
    /// # Arguments
    /// * `repository_url` - URL declared by the inventory, possibly empty
    /// * `local_version` - Version of the dependency in use
    /// * `evaluated_at` - Reference time for the recency rules
    pub async fn execute(
        &self,
        repository_url: &str,
        local_version: &str,
        evaluated_at: DateTime<Utc>,
    ) -> RiskAssessment {
        let Some(coordinates) = RepositoryCoordinates::from_url(repository_url) else {
            debug!(url = repository_url, "not a GitHub repository, skipping risk scoring");
            return RiskAssessment::unscored();
        };

        let metadata = self.metadata_provider.fetch_metadata(&coordinates).await;
        let assessment = self.scorer.score(&metadata, local_version, evaluated_at);

        debug!(
            repository = %coordinates,
            score = assessment.score(),
            level = %assessment.level(),
            "scored repository"
        );
        assessment
    }
}
