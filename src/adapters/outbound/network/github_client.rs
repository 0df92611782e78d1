use crate::ports::outbound::RepositoryMetadataProvider;
use crate::shared::Result;
use crate::soup_report::domain::{RepositoryCoordinates, RepositoryMetadata};
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Public GitHub REST API endpoint
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Connection settings for [`GitHubMetadataClient`]
///
/// The token is read once by the caller (typically from `GITHUB_TOKEN`) and
/// handed over explicitly; the client never touches the environment.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl GitHubClientConfig {
    /// An empty or whitespace-only token is treated as absent
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: token.filter(|t| !t.trim().is_empty()),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GITHUB_API_URL, None)
    }
}

#[derive(Debug, Deserialize)]
struct RepositoryResponse {
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    open_issues_count: u64,
    #[serde(default)]
    pushed_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReleaseResponse {
    #[serde(default)]
    tag_name: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
}

/// Outcome of one isolated API call
#[derive(Debug)]
enum SubFetch<T> {
    Fetched(T),
    /// A tolerated status such as 404 on the latest-release endpoint
    Absent(StatusCode),
    Failed(String),
}

/// GitHubMetadataClient adapter querying the GitHub REST API
///
/// Issues three independent calls per repository (repository info, latest
/// release, security advisories). Each one fails in isolation: a failed
/// call is logged and leaves only its own fields at their defaults.
pub struct GitHubMetadataClient {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubMetadataClient {
    pub fn new(config: GitHubClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        if let Some(token) = config.token.as_deref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .context("GITHUB_TOKEN contains characters not allowed in an HTTP header")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("cook-soup/{}", version))
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn repository_path(coordinates: &RepositoryCoordinates) -> String {
        format!(
            "/repos/{}/{}",
            urlencoding::encode(coordinates.owner()),
            urlencoding::encode(coordinates.repo())
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        tolerated: &[StatusCode],
    ) -> SubFetch<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return SubFetch::Failed(format!("request failed: {}", e)),
        };

        let status = response.status();
        if tolerated.contains(&status) {
            return SubFetch::Absent(status);
        }
        if !status.is_success() {
            return SubFetch::Failed(format!("unexpected status {}", status));
        }

        match response.json::<T>().await {
            Ok(body) => SubFetch::Fetched(body),
            Err(e) => SubFetch::Failed(format!("malformed response: {}", e)),
        }
    }

    async fn fetch_repository_info(
        &self,
        coordinates: &RepositoryCoordinates,
        metadata: &mut RepositoryMetadata,
    ) {
        let path = Self::repository_path(coordinates);
        match self.get_json::<RepositoryResponse>(&path, &[]).await {
            SubFetch::Fetched(info) => {
                metadata.stars = info.stargazers_count;
                metadata.open_issues_count = info.open_issues_count;
                metadata.last_commit_date = info.pushed_at.as_deref().and_then(parse_timestamp);
            }
            SubFetch::Absent(_) => {}
            SubFetch::Failed(reason) => {
                warn!(repository = %coordinates, %reason, "repository info unavailable");
            }
        }
    }

    async fn fetch_latest_release(
        &self,
        coordinates: &RepositoryCoordinates,
        metadata: &mut RepositoryMetadata,
    ) {
        let path = format!("{}/releases/latest", Self::repository_path(coordinates));
        match self
            .get_json::<ReleaseResponse>(&path, &[StatusCode::NOT_FOUND])
            .await
        {
            SubFetch::Fetched(release) => {
                metadata.latest_version = release.tag_name.filter(|tag| !tag.trim().is_empty());
                metadata.last_release_date =
                    release.published_at.as_deref().and_then(parse_timestamp);
            }
            SubFetch::Absent(status) => {
                debug!(repository = %coordinates, %status, "no published release");
            }
            SubFetch::Failed(reason) => {
                warn!(repository = %coordinates, %reason, "latest release unavailable");
            }
        }
    }

    async fn fetch_advisories(
        &self,
        coordinates: &RepositoryCoordinates,
        metadata: &mut RepositoryMetadata,
    ) {
        let path = format!("{}/security/advisories", Self::repository_path(coordinates));
        match self
            .get_json::<Vec<serde_json::Value>>(
                &path,
                &[StatusCode::FORBIDDEN, StatusCode::NOT_FOUND],
            )
            .await
        {
            SubFetch::Fetched(advisories) => {
                metadata.has_known_cve = !advisories.is_empty();
            }
            SubFetch::Absent(status) => {
                debug!(repository = %coordinates, %status, "security advisories not accessible");
            }
            SubFetch::Failed(reason) => {
                warn!(repository = %coordinates, %reason, "security advisories unavailable");
            }
        }
    }
}

/// Parses an ISO-8601 timestamp such as `2024-01-15T10:30:00Z` into UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            warn!(timestamp = raw, error = %e, "ignoring malformed timestamp");
            None
        }
    }
}

#[async_trait]
impl RepositoryMetadataProvider for GitHubMetadataClient {
    async fn fetch_metadata(&self, coordinates: &RepositoryCoordinates) -> RepositoryMetadata {
        let mut metadata = RepositoryMetadata::default();

        self.fetch_repository_info(coordinates, &mut metadata).await;
        self.fetch_latest_release(coordinates, &mut metadata).await;
        self.fetch_advisories(coordinates, &mut metadata).await;

        debug!(repository = %coordinates, ?metadata, "fetched repository metadata");
        metadata
    }
}
