// Rust guideline compliant 2026-10-14

//! OTC CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

pub use error::{CliError, Result};
pub use output::{create_sink, JsonSink};
