// Rust guideline compliant 2026-10-14

//! Error types for the `otc` command-line tool.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors raised by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error while writing output or opening a log file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the progress library.
    #[error("Progress error: {0}")]
    Progress(#[from] otc_progress::Error),

    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Invalid per-item duration.
    #[error("Invalid item duration: {0} ms")]
    InvalidItemDuration(f64),
}
