use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a report that
/// merely contains high-risk entries and a run that failed outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report written
    Success = 0,
    /// Report written, but High-risk entries were found and `--fail-on-high` was given
    HighRiskDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed inventory, missing template, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::HighRiskDetected => write!(f, "High Risk Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SOUP report generation.
///
/// Only fatal conditions live here. Network trouble while enriching a
/// dependency is recovered locally and never becomes a `SoupError`.
#[derive(Debug, Error)]
pub enum SoupError {
    #[error("Failed to read license inventory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is readable and is a regular file")]
    InventoryReadError { path: PathBuf, details: String },

    #[error("Failed to parse license inventory: {path}\nDetails: {details}\n\n💡 Hint: Re-run the license scanner with JSON output enabled")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Report template not found: {path}\n\n💡 Hint: {suggestion}")]
    TemplateNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read report template: {path}\nDetails: {details}")]
    TemplateReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
