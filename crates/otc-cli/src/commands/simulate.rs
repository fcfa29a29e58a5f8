// Rust guideline compliant 2026-10-14

//! Drive a tracker over a synthetic loop.
//!
//! By default time is simulated: a manual clock advances by the per-item
//! duration, so a run of days finishes instantly. With `real_time` the loop
//! sleeps instead.

use crate::error::{CliError, Result};
use otc_progress::{
    Clock, ManualClock, MonotonicClock, ProgressConfig, ProgressTracker, ReportSink,
};
use std::time::Duration;

/// Options for a simulated run.
#[derive(Debug, Clone)]
pub struct SimulateOptions {
    /// Number of items in the loop.
    pub events: u64,
    /// Finest print-point decade.
    pub max_decades: u32,
    /// Duration of one item in milliseconds.
    pub item_ms: f64,
    /// Label shown on each report.
    pub label: String,
    /// Sleep for real instead of advancing a simulated clock.
    pub real_time: bool,
}

/// Outcome of a simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSummary {
    /// Items processed.
    pub events: u64,
    /// Reports emitted.
    pub reports: usize,
}

/// Runs the simulation, delivering reports to `sink`.
///
/// # Errors
///
/// Returns an error if `events` is zero or `item_ms` is negative, not
/// finite or too large for a [`Duration`].
pub fn execute<S: ReportSink>(options: &SimulateOptions, sink: S) -> Result<SimulationSummary> {
    let item = Duration::try_from_secs_f64(options.item_ms / 1_000.0)
        .map_err(|_| CliError::InvalidItemDuration(options.item_ms))?;
    let config = ProgressConfig::with_max_decades(options.max_decades);

    let summary = if options.real_time {
        let tracker =
            ProgressTracker::with_parts(options.events, &config, MonotonicClock::new(), sink)?;
        drive(tracker, &options.label, || std::thread::sleep(item))
    } else {
        let clock = ManualClock::new();
        let tracker = ProgressTracker::with_parts(options.events, &config, clock.clone(), sink)?;
        drive(tracker, &options.label, || clock.advance(item))
    };

    tracing::info!(
        events = summary.events,
        reports = summary.reports,
        "simulation finished"
    );
    Ok(summary)
}

fn drive<C: Clock, S: ReportSink>(
    mut tracker: ProgressTracker<C, S>,
    label: &str,
    mut work: impl FnMut(),
) -> SimulationSummary {
    let events = tracker.total();
    let mut reports = 0;
    for index in 0..events {
        work();
        if tracker.tick(index, label).is_some() {
            reports += 1;
        }
    }
    SimulationSummary { events, reports }
}
