use anyhow::Context;
use clap::Parser;
use cook_soup::adapters::outbound::network::DEFAULT_GITHUB_API_URL;
use cook_soup::config::{validate_max_concurrent_fetches, ConfigFile};
use cook_soup::shared::Result;
use cook_soup::soup_report::policies::ScoringWeights;
use std::path::{Path, PathBuf};

pub const DEFAULT_NPM_INVENTORY: &str = "licenses-npm.json";
pub const DEFAULT_POETRY_INVENTORY: &str = "licenses-poetry.json";
pub const DEFAULT_TEMPLATE: &str = ".workflowsRepo/scripts/cook_soup_template.md";
pub const DEFAULT_OUTPUT: &str = "SOUP.md";

/// Generate a risk-annotated SOUP report from npm and pip license inventories
#[derive(Parser, Debug)]
#[command(name = "cook-soup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Generate a risk-annotated SOUP report from npm and pip license inventories",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory holding the inventories (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// npm inventory produced by `license-checker --json` [default: licenses-npm.json]
    #[arg(long, value_name = "FILE")]
    pub npm_inventory: Option<String>,

    /// pip inventory produced by `pip-licenses --format=json` [default: licenses-poetry.json]
    #[arg(long, value_name = "FILE")]
    pub poetry_inventory: Option<String>,

    /// Report template containing the {{DEPENDENCY_TABLE}} placeholder
    /// [default: .workflowsRepo/scripts/cook_soup_template.md]
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<String>,

    /// Output report path [default: SOUP.md]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Print the report to stdout instead of writing the output file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Configuration file (defaults to cook-soup.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Base URL of the GitHub REST API [default: https://api.github.com]
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Number of dependencies assessed at the same time [default: 1]
    #[arg(short = 'j', long, value_name = "N")]
    pub max_concurrent_fetches: Option<usize>,

    /// Exit with code 1 when the report contains High risk entries
    #[arg(long)]
    pub fail_on_high: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Effective run settings after merging CLI flags, config file and defaults.
///
/// Precedence: CLI flag > config file > built-in default. Relative file
/// paths are resolved against the project directory.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub npm_inventory: PathBuf,
    pub poetry_inventory: PathBuf,
    pub template: PathBuf,
    pub output: Option<PathBuf>,
    pub api_url: String,
    pub max_concurrent_fetches: usize,
    pub fail_on_high: bool,
    pub scoring_weights: ScoringWeights,
}

impl RunSettings {
    /// Merges the sources
    ///
    /// # Errors
    /// Returns an error if the CLI concurrency value is out of range
    pub fn resolve(args: &Args, config: Option<&ConfigFile>, project_path: &Path) -> Result<Self> {
        let npm_inventory = resolve_path(
            project_path,
            args.npm_inventory.as_deref(),
            config.and_then(|c| c.npm_inventory.as_deref()),
            DEFAULT_NPM_INVENTORY,
        );
        let poetry_inventory = resolve_path(
            project_path,
            args.poetry_inventory.as_deref(),
            config.and_then(|c| c.poetry_inventory.as_deref()),
            DEFAULT_POETRY_INVENTORY,
        );
        let template = resolve_path(
            project_path,
            args.template.as_deref(),
            config.and_then(|c| c.template.as_deref()),
            DEFAULT_TEMPLATE,
        );
        let output = if args.stdout {
            None
        } else {
            Some(resolve_path(
                project_path,
                args.output.as_deref(),
                config.and_then(|c| c.output.as_deref()),
                DEFAULT_OUTPUT,
            ))
        };

        let api_url = args
            .api_url
            .clone()
            .or_else(|| config.and_then(|c| c.api_url.clone()))
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string());

        let max_concurrent_fetches = match args.max_concurrent_fetches {
            Some(max) => {
                validate_max_concurrent_fetches(max).context("Invalid --max-concurrent-fetches")?;
                max
            }
            None => config.and_then(|c| c.max_concurrent_fetches).unwrap_or(1),
        };

        let fail_on_high =
            args.fail_on_high || config.and_then(|c| c.fail_on_high).unwrap_or(false);

        let scoring_weights = config
            .map(ConfigFile::scoring_weights)
            .unwrap_or_default();

        Ok(Self {
            npm_inventory,
            poetry_inventory,
            template,
            output,
            api_url,
            max_concurrent_fetches,
            fail_on_high,
            scoring_weights,
        })
    }
}

fn resolve_path(
    project_path: &Path,
    cli: Option<&str>,
    configured: Option<&str>,
    default: &str,
) -> PathBuf {
    project_path.join(cli.or(configured).unwrap_or(default))
}
