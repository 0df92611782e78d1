/// Network adapters for external API calls
mod caching_metadata_provider;
mod github_client;

pub use caching_metadata_provider::CachingMetadataProvider;
pub use github_client::{GitHubClientConfig, GitHubMetadataClient, DEFAULT_GITHUB_API_URL};
