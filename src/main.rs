mod cli;

use chrono::Utc;
use cli::{Args, RunSettings};
use cook_soup::adapters::outbound::console::{format_risk_summary, StderrProgressReporter};
use cook_soup::adapters::outbound::filesystem::FileSystemReader;
use cook_soup::adapters::outbound::formatters::MarkdownTableFormatter;
use cook_soup::adapters::outbound::inventory::{NpmInventoryReader, PoetryInventoryReader};
use cook_soup::adapters::outbound::network::{
    CachingMetadataProvider, GitHubClientConfig, GitHubMetadataClient,
};
use cook_soup::application::dto::SoupRequest;
use cook_soup::application::factories::{PresenterFactory, PresenterType};
use cook_soup::application::use_cases::{
    AssessRepositoryRiskUseCase, CookSoupUseCase, RenderReportUseCase,
};
use cook_soup::config::{self, ConfigFile};
use cook_soup::ports::outbound::{InventoryReader, ProgressReporter};
use cook_soup::shared::error::{ExitCode, SoupError};
use cook_soup::shared::Result;
use cook_soup::soup_report::policies::RiskScorer;
use std::path::{Path, PathBuf};
use std::process;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Environment variable holding the optional GitHub API token
const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    // A subscriber installed by an embedding process takes precedence
    let _ = tracing::subscriber::set_global_default(subscriber);
}

async fn run(args: Args) -> Result<ExitCode> {
    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?;
    let settings = RunSettings::resolve(&args, config.as_ref(), &project_path)?;

    // Fail on a missing template before any network traffic
    let renderer = RenderReportUseCase::new(
        FileSystemReader::new(),
        MarkdownTableFormatter::new(),
        StderrProgressReporter::new(),
    );
    let template = renderer.load_template(&settings.template)?;

    // Create adapters (Dependency Injection)
    let token = std::env::var(GITHUB_TOKEN_ENV).ok();
    let client_config = GitHubClientConfig::new(settings.api_url.clone(), token);
    let metadata_provider =
        CachingMetadataProvider::new(GitHubMetadataClient::new(client_config)?);
    let risk_assessor = AssessRepositoryRiskUseCase::new(
        metadata_provider,
        RiskScorer::new(settings.scoring_weights),
    );

    let inventory_readers: Vec<Box<dyn InventoryReader>> = vec![
        Box::new(NpmInventoryReader::new(settings.npm_inventory.clone())),
        Box::new(PoetryInventoryReader::new(settings.poetry_inventory.clone())),
    ];

    let use_case = CookSoupUseCase::new(
        inventory_readers,
        risk_assessor,
        StderrProgressReporter::new(),
    );

    // Execute use case
    let request = SoupRequest::new(Utc::now(), settings.max_concurrent_fetches);
    let response = use_case.execute(request).await?;

    // Present output
    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report("📝 Rendering SOUP report...");

    let presenter_type = match &settings.output {
        Some(path) => PresenterType::File(path.clone()),
        None => PresenterType::Stdout,
    };
    let presenter = PresenterFactory::create(presenter_type);
    renderer.execute(&template, &response.entries, presenter.as_ref())?;

    if let Some(output) = &settings.output {
        progress_reporter.report(&format!("✅ Output complete: {}", output.display()));
    }
    progress_reporter.report_completion(&format!(
        "📊 Risk summary: {}",
        format_risk_summary(&response.summary)
    ));

    if settings.fail_on_high && response.summary.has_high_risk() {
        progress_reporter.report_error(&format!(
            "❌ {} High risk dependenc{} found (--fail-on-high)",
            response.summary.high,
            if response.summary.high == 1 { "y" } else { "ies" }
        ));
        return Ok(ExitCode::HighRiskDetected);
    }

    Ok(ExitCode::Success)
}

/// Loads the explicit `--config` file, or the auto-discovered one in the project directory
fn load_config(args: &Args, project_path: &Path) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(Path::new(path)).map(Some),
        None => config::discover_config(project_path),
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SoupError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SoupError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SoupError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SoupError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
