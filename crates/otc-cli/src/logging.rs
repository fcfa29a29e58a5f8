// Rust guideline compliant 2026-10-14

//! Diagnostic logging setup.
//!
//! Standard output carries the report lines, so diagnostics go to standard
//! error or, when requested, to a JSON log file.

use crate::error::{CliError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// # Arguments
///
/// * `level` - One of `error`, `warn`, `info`, `debug`, `trace`
/// * `log_file` - Append JSON logs to this file instead of standard error
///
/// # Returns
///
/// A guard that flushes the file writer when dropped, if a file is used.
///
/// # Errors
///
/// Returns an error if the level is unknown or the file cannot be opened.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let builder = fmt().with_max_level(parse_log_level(level)?).with_target(false);

    let (installed, guard) = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let subscriber = builder.json().with_writer(writer).finish();
            (tracing::subscriber::set_global_default(subscriber), Some(guard))
        }
        None => {
            let subscriber = builder.with_writer(std::io::stderr).finish();
            (tracing::subscriber::set_global_default(subscriber), None)
        }
    };

    // Embedding callers and test binaries may already own the global slot.
    if let Err(err) = installed {
        tracing::debug!(%err, "keeping the existing tracing subscriber");
    }
    Ok(guard)
}

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns [`CliError::InvalidLogLevel`] for unknown names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    level
        .parse::<Level>()
        .map_err(|_| CliError::InvalidLogLevel(level.to_string()))
}
