use chrono::{DateTime, Utc};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn github_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"github\.com/([^/\s]+)/([^/\s#?]+)").expect("GitHub URL pattern is valid")
    })
}

/// Owner and repository name of a GitHub-hosted source repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryCoordinates {
    owner: String,
    repo: String,
}

impl RepositoryCoordinates {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Extracts coordinates from any URL containing `github.com/<owner>/<repo>`.
    ///
    /// Accepts `https://`, `git+https://` and `git://` spellings and drops a
    /// trailing `.git` from the repository segment. SSH-style
    /// `git@github.com:owner/repo` does not match. Returns `None` for empty,
    /// non-GitHub or truncated URLs.
    pub fn from_url(url: &str) -> Option<Self> {
        let captures = github_url_pattern().captures(url)?;
        let owner = captures.get(1)?.as_str();
        let repo = captures.get(2)?.as_str();
        let repo = repo.strip_suffix(".git").unwrap_or(repo);

        if owner.is_empty() || repo.is_empty() {
            return None;
        }

        Some(Self::new(owner, repo))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl fmt::Display for RepositoryCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Popularity, activity, release and vulnerability signals for a repository.
///
/// Every field has a conservative default so a partially failed fetch still
/// yields a usable value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryMetadata {
    pub stars: u64,
    pub last_commit_date: Option<DateTime<Utc>>,
    pub latest_version: Option<String>,
    pub open_issues_count: u64,
    pub last_release_date: Option<DateTime<Utc>>,
    pub has_known_cve: bool,
}
