mod progress_reporter;
mod summary;

pub use progress_reporter::StderrProgressReporter;
pub use summary::format_risk_summary;
