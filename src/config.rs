//! Configuration file support for cook-soup.
//!
//! Provides YAML-based configuration through `cook-soup.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::error::SoupError;
use crate::shared::Result;
use crate::soup_report::policies::ScoringWeights;

pub const CONFIG_FILENAME: &str = "cook-soup.config.yml";

/// Upper bound for `max_concurrent_fetches`, keeps the API rate limit in reach
pub const MAX_CONCURRENT_FETCHES_LIMIT: usize = 16;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub npm_inventory: Option<String>,
    pub poetry_inventory: Option<String>,
    pub template: Option<String>,
    pub output: Option<String>,
    pub api_url: Option<String>,
    pub max_concurrent_fetches: Option<usize>,
    pub fail_on_high: Option<bool>,
    pub scoring: Option<ScoringConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Overrides for the risk score schedule; unset keys keep their default.
#[derive(Debug, Deserialize, Default)]
pub struct ScoringConfig {
    pub infrequent_commits: Option<u32>,
    pub low_popularity: Option<u32>,
    pub version_behind: Option<u32>,
    pub excessive_open_issues: Option<u32>,
    pub stale_release: Option<u32>,
    pub known_vulnerabilities: Option<u32>,
    pub medium_threshold: Option<u32>,
    pub high_threshold: Option<u32>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ScoringConfig {
    /// Applies the overrides on top of `base`
    pub fn apply_to(&self, base: ScoringWeights) -> ScoringWeights {
        ScoringWeights {
            infrequent_commits: self.infrequent_commits.unwrap_or(base.infrequent_commits),
            low_popularity: self.low_popularity.unwrap_or(base.low_popularity),
            version_behind: self.version_behind.unwrap_or(base.version_behind),
            excessive_open_issues: self
                .excessive_open_issues
                .unwrap_or(base.excessive_open_issues),
            stale_release: self.stale_release.unwrap_or(base.stale_release),
            known_vulnerabilities: self
                .known_vulnerabilities
                .unwrap_or(base.known_vulnerabilities),
            medium_threshold: self.medium_threshold.unwrap_or(base.medium_threshold),
            high_threshold: self.high_threshold.unwrap_or(base.high_threshold),
        }
    }
}

impl ConfigFile {
    /// Effective scoring schedule: defaults overlaid with the `scoring` section
    pub fn scoring_weights(&self) -> ScoringWeights {
        match &self.scoring {
            Some(scoring) => scoring.apply_to(ScoringWeights::default()),
            None => ScoringWeights::default(),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(max) = config.max_concurrent_fetches {
        validate_max_concurrent_fetches(max)?;
    }

    if let Some(ref api_url) = config.api_url {
        if api_url.trim().is_empty() {
            return Err(validation_error(
                "Invalid config: api_url must not be empty.\n\n\
                 💡 Hint: Remove the key to use https://api.github.com."
                    .to_string(),
            ));
        }
    }

    validate_scoring_weights(&config.scoring_weights())
}

/// Checks a concurrency setting from either the config file or the CLI
pub fn validate_max_concurrent_fetches(max: usize) -> Result<()> {
    if max == 0 || max > MAX_CONCURRENT_FETCHES_LIMIT {
        return Err(validation_error(format!(
            "Invalid max_concurrent_fetches: {} (must be between 1 and {}).\n\n\
             💡 Hint: Use 1 for strictly sequential fetching.",
            max, MAX_CONCURRENT_FETCHES_LIMIT
        )));
    }
    Ok(())
}

fn validate_scoring_weights(weights: &ScoringWeights) -> Result<()> {
    if weights.medium_threshold == 0 {
        return Err(validation_error(
            "Invalid config: scoring.medium_threshold must be at least 1.\n\n\
             💡 Hint: A threshold of 0 would rate every dependency Medium or worse."
                .to_string(),
        ));
    }
    if weights.medium_threshold >= weights.high_threshold {
        return Err(validation_error(format!(
            "Invalid config: scoring.medium_threshold ({}) must be lower than scoring.high_threshold ({}).",
            weights.medium_threshold, weights.high_threshold
        )));
    }
    Ok(())
}

fn validation_error(message: String) -> anyhow::Error {
    SoupError::Validation { message }.into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
    if let Some(ref scoring) = config.scoring {
        for key in scoring.unknown_fields.keys() {
            eprintln!(
                "⚠️  Warning: Unknown config field 'scoring.{}' will be ignored.",
                key
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
npm_inventory: reports/npm.json
poetry_inventory: reports/poetry.json
template: docs/soup_template.md
output: docs/SOUP.md
api_url: https://github.example.com/api/v3
max_concurrent_fetches: 4
fail_on_high: true
scoring:
  excessive_open_issues: 2
  stale_release: 2
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.npm_inventory.as_deref(), Some("reports/npm.json"));
        assert_eq!(config.poetry_inventory.as_deref(), Some("reports/poetry.json"));
        assert_eq!(config.template.as_deref(), Some("docs/soup_template.md"));
        assert_eq!(config.output.as_deref(), Some("docs/SOUP.md"));
        assert_eq!(
            config.api_url.as_deref(),
            Some("https://github.example.com/api/v3")
        );
        assert_eq!(config.max_concurrent_fetches, Some(4));
        assert_eq!(config.fail_on_high, Some(true));

        let weights = config.scoring_weights();
        assert_eq!(weights.excessive_open_issues, 2);
        assert_eq!(weights.stale_release, 2);
        assert_eq!(weights.low_popularity, 2);
        assert_eq!(weights.high_threshold, 4);
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "output: REPORT.md\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().output.as_deref(), Some("REPORT.md"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "max_concurrent_fetches: 0\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("max_concurrent_fetches"));
    }

    #[test]
    fn test_validate_max_concurrent_fetches_bounds() {
        assert!(validate_max_concurrent_fetches(1).is_ok());
        assert!(validate_max_concurrent_fetches(MAX_CONCURRENT_FETCHES_LIMIT).is_ok());
        assert!(validate_max_concurrent_fetches(MAX_CONCURRENT_FETCHES_LIMIT + 1).is_err());
    }

    #[test]
    fn test_inverted_thresholds_are_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
scoring:
  medium_threshold: 5
  high_threshold: 3
"#,
        );

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must be lower than"));
    }

    #[test]
    fn test_validation_failures_are_typed() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "max_concurrent_fetches: 99
");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SoupError>(),
            Some(SoupError::Validation { .. })
        ));
        assert!(err.to_string().starts_with("Validation error:"));
    }

    #[test]
    fn test_huge_weight_still_rates_high() {
        use crate::soup_report::domain::{RepositoryMetadata, RiskLevel};
        use crate::soup_report::policies::RiskScorer;

        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "scoring:\n  known_vulnerabilities: 4294967295\n");
        let config = load_config_from_path(&config_path).unwrap();

        let metadata = RepositoryMetadata {
            stars: 10,
            has_known_cve: true,
            ..RepositoryMetadata::default()
        };
        let assessment =
            RiskScorer::new(config.scoring_weights()).score(&metadata, "1.0.0", chrono::Utc::now());

        assert_eq!(assessment.level(), RiskLevel::High);
        assert_eq!(assessment.score(), u32::MAX);
    }

    #[test]
    fn test_zero_medium_threshold_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "scoring:\n  medium_threshold: 0\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("at least 1"));
    }

    #[test]
    fn test_empty_api_url_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "api_url: \"  \"\n");

        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
output: SOUP.md
format: json
scoring:
  popularity: 5
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("format"));
        let scoring = config.scoring.unwrap();
        assert!(scoring.unknown_fields.contains_key("popularity"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.npm_inventory.is_none());
        assert!(config.template.is_none());
        assert!(config.max_concurrent_fetches.is_none());
        assert!(config.fail_on_high.is_none());
        assert!(config.unknown_fields.is_empty());
        assert_eq!(config.scoring_weights(), ScoringWeights::default());
    }
}
