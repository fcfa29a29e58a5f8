// Rust guideline compliant 2026-10-12

//! The values assembled for one emitted progress report.

use crate::status::Trend;
use serde::Serialize;

/// Fraction bands and the percentage precision regime they select. A band
/// applies when the fraction is below its lower edge or above its upper
/// edge; the first match wins.
const PRECISION_BANDS: [(f64, f64, u32); 8] = [
    (0.000_000_009_9, 0.999_999_99, 8),
    (0.000_000_099, 0.999_999_9, 7),
    (0.000_000_99, 0.999_999, 6),
    (0.000_009_9, 0.999_99, 5),
    (0.000_099, 0.999_9, 4),
    (0.000_99, 0.999, 3),
    (0.009_9, 0.99, 2),
    (0.099, 0.9, 1),
];

/// One emitted progress report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Caller-supplied task label.
    pub label: String,
    /// Index of the item that triggered the report.
    pub index: u64,
    /// Number of items in the run.
    pub total: u64,
    /// `index / total`.
    pub fraction: f64,
    /// Completed percentage, already rounded for display.
    pub percent: f64,
    /// Decimals to show for `percent`.
    pub percent_decimals: usize,
    /// Seconds since the tracker started.
    pub elapsed_seconds: f64,
    /// Elapsed time as shown.
    pub elapsed: String,
    /// Seconds represented by the displayed ETA.
    pub eta_seconds: u64,
    /// Remaining time as shown.
    pub eta: String,
    /// Estimated total running time as shown; `None` on the final report,
    /// where it would equal the elapsed time.
    pub estimated_total: Option<String>,
    /// Direction of the estimate since the previous report.
    pub trend: Trend,
    /// Whether this is the report for the last item.
    pub is_final: bool,
}

/// Chooses the percentage precision regime for a fraction.
///
/// Near both ends of a run each additional decade reached earns one more
/// digit. The final report bypasses this and always reads `100%`.
pub fn precision_regime(fraction: f64) -> u32 {
    PRECISION_BANDS
        .iter()
        .find(|(low, high, _)| fraction < *low || fraction > *high)
        .map_or(0, |&(_, _, regime)| regime)
}

/// Rounds a fraction to a display percentage in the given regime.
///
/// # Returns
///
/// The percentage and the number of decimals to print it with.
pub fn display_percent(fraction: f64, regime: u32) -> (f64, usize) {
    let regime = regime as i32;
    let percent = (10f64.powi(regime + 1) * fraction).round() / 10f64.powi(regime - 1);
    (percent, (regime - 1).max(0) as usize)
}
