// Rust guideline compliant 2026-10-14

//! Format a duration the way progress reports do.

use crate::error::Result;
use otc_progress::{format_estimate, Precision};
use serde_json::json;
use std::io::Write;

/// Writes the formatted estimate for `seconds` and the seconds it stands for.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn execute(
    seconds: u64,
    sig_figs: u32,
    emphasize: bool,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let formatted = format_estimate(seconds, emphasize, Precision::from_sig_figs(sig_figs));

    if json {
        let value = json!({
            "input": seconds,
            "text": formatted.text,
            "seconds": formatted.seconds,
        });
        writeln!(out, "{value}")?;
    } else {
        writeln!(out, "{} ({}s)", formatted.text, formatted.seconds)?;
    }

    Ok(())
}
