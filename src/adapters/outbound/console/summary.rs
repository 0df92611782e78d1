use crate::soup_report::services::RiskSummary;
use owo_colors::OwoColorize;

/// Renders the per-level counts as `High: h, Medium: m, Low: l`,
/// coloured red, yellow and green for the terminal.
pub fn format_risk_summary(summary: &RiskSummary) -> String {
    format!(
        "{} {}, {} {}, {} {}",
        "High:".red().bold(),
        summary.high,
        "Medium:".yellow().bold(),
        summary.medium,
        "Low:".green().bold(),
        summary.low
    )
}
