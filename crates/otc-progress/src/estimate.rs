// Rust guideline compliant 2026-10-12

//! Remaining-time estimation.
//!
//! Two naive estimates are blended:
//!
//! - the *average* estimate assumes the rest of the run proceeds at the mean
//!   rate since the start;
//! - the *recent* estimate assumes it proceeds at the rate observed since the
//!   previous report.
//!
//! Early in a run either one can be wildly off, so their geometric mean is
//! used, which leans toward the smaller. Past the halfway point the recent
//! rate gets a linearly growing share of the weight, up to [`RECENT_WEIGHT_MAX`].

/// Weight of the recent estimate at the very end of a run.
pub const RECENT_WEIGHT_MAX: f64 = 0.75;

/// Timing inputs observed at one report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSample {
    /// Seconds since the tracker started.
    pub elapsed_total: f64,
    /// Seconds since the previous emitted report (or the start).
    pub elapsed_since_last: f64,
    /// Fraction of the run completed now.
    pub fraction: f64,
    /// Fraction completed at the previous emitted report.
    pub last_fraction: f64,
}

impl RateSample {
    /// Remaining seconds at the average rate since the start.
    pub fn remaining_by_average(&self) -> f64 {
        self.elapsed_total / self.fraction - self.elapsed_total
    }

    /// Remaining seconds at the rate since the previous report, or `None`
    /// when the fraction did not advance.
    pub fn remaining_by_recent(&self) -> Option<f64> {
        let advanced = self.fraction - self.last_fraction;
        (advanced > 0.0)
            .then(|| (1.0 - self.fraction) * self.elapsed_since_last / advanced)
    }

    /// Blended remaining-time estimate in whole seconds.
    pub fn eta_seconds(&self) -> u64 {
        eta_seconds(
            self.remaining_by_recent(),
            self.remaining_by_average(),
            self.fraction,
        )
    }
}

/// Blends the recent and average remaining-time estimates.
///
/// # Arguments
///
/// * `recent` - Remaining seconds at the most recent rate, if available
/// * `average` - Remaining seconds at the average rate since the start
/// * `fraction` - Fraction of the run completed
///
/// # Returns
///
/// The estimate rounded to whole seconds. Negative or non-finite blends
/// yield 0; values beyond `u64::MAX` saturate.
pub fn eta_seconds(recent: Option<f64>, average: f64, fraction: f64) -> u64 {
    let blended = match recent {
        None => average,
        Some(recent) if fraction < 0.5 => (average * recent).sqrt(),
        Some(recent) => {
            let weight = recent_weight(fraction);
            weight * recent + (1.0 - weight) * average
        }
    };

    // Float to integer casts saturate and map NaN to zero.
    blended.round() as u64
}

/// Weight given to the recent estimate, growing linearly from
/// `1 - RECENT_WEIGHT_MAX` at `fraction = 0` to `RECENT_WEIGHT_MAX` at 1.
fn recent_weight(fraction: f64) -> f64 {
    1.0 - RECENT_WEIGHT_MAX + (2.0 * RECENT_WEIGHT_MAX - 1.0) * fraction
}
