/// Use cases module containing application business logic orchestration
mod assess_repository_risk;
mod cook_soup;
mod render_report;

pub use assess_repository_risk::AssessRepositoryRiskUseCase;
pub use cook_soup::CookSoupUseCase;
pub use render_report::RenderReportUseCase;
