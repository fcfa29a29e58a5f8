// Rust guideline compliant 2026-10-14

//! Print the print-point plan for a run.

use crate::error::Result;
use serde_json::json;
use std::io::Write;

/// Writes the plan for `events` items, one index per line or as JSON.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn execute(events: u64, max_decades: u32, json: bool, out: &mut dyn Write) -> Result<()> {
    let plan = otc_progress::plan(events, max_decades);

    if json {
        let points: Vec<u64> = plan.iter().collect();
        let value = json!({
            "total": events,
            "points": points,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        for point in plan.iter() {
            writeln!(out, "{point}")?;
        }
    }

    Ok(())
}
