// Rust guideline compliant 2026-10-14

//! Command implementations for the `otc` CLI.

pub mod format;
pub mod plan;
pub mod simulate;
