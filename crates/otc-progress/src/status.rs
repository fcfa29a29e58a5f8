// Rust guideline compliant 2026-10-12

//! Trend classification of successive estimates.
//!
//! The newest displayed ETA, plus the time spent since the previous report,
//! is compared against the previously displayed ETA. A drop below 75% is an
//! improvement and a rise above 133% is a deterioration.
//!
//! An ETA that creeps upward a little at every report is never flagged.
//! Throughput usually changes abruptly (another job grabs the machine, a
//! buffer fills up), so this blind spot is accepted.

use serde::{Deserialize, Serialize};

const IMPROVING_RATIO: f64 = 0.75;
const WORSENING_RATIO: f64 = 1.33;

/// Direction of the estimate compared with the previous report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// No significant change, or nothing to compare with.
    #[default]
    Neutral,
    /// The run is expected to finish noticeably sooner than last reported.
    Improving,
    /// The run is expected to finish noticeably later than last reported.
    Worsening,
}

/// Classifies a displayed ETA against the previous one.
///
/// # Arguments
///
/// * `displayed_eta` - Seconds represented by the ETA being shown now
/// * `elapsed_since_last` - Seconds since the previous report
/// * `previous` - Seconds represented by the previously shown ETA, if any
pub fn classify(displayed_eta: u64, elapsed_since_last: f64, previous: Option<u64>) -> Trend {
    let Some(previous) = previous else {
        return Trend::Neutral;
    };
    if displayed_eta < 2 {
        return Trend::Neutral;
    }

    let projected = displayed_eta as f64 + elapsed_since_last;
    let previous = previous as f64;
    if projected < IMPROVING_RATIO * previous {
        Trend::Improving
    } else if projected > WORSENING_RATIO * previous {
        Trend::Worsening
    } else {
        Trend::Neutral
    }
}

/// Remembers the last displayed ETA between reports.
#[derive(Debug, Clone, Default)]
pub struct TrendClassifier {
    previous: Option<u64>,
}

impl TrendClassifier {
    /// Creates a classifier with no previous estimate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `displayed_eta` and records it as the previous estimate.
    pub fn observe(&mut self, displayed_eta: u64, elapsed_since_last: f64) -> Trend {
        let trend = classify(displayed_eta, elapsed_since_last, self.previous);
        self.previous = Some(displayed_eta);
        trend
    }

    /// The last recorded estimate.
    pub fn previous(&self) -> Option<u64> {
        self.previous
    }
}
