// Rust guideline compliant 2026-10-12

//! The progress tracker.
//!
//! Call [`ProgressTracker::tick`] once per loop iteration, after the
//! iteration's work is done. Unless the index is the next planned print
//! point, `tick` compares two integers and returns.

use crate::clock::{Clock, MonotonicClock};
use crate::config::ProgressConfig;
use crate::estimate::RateSample;
use crate::format::{format_elapsed, format_estimate, Precision};
use crate::plan::{plan, PrintPointPlan};
use crate::render::{LineSink, ReportSink};
use crate::report::{display_percent, precision_regime, Report};
use crate::sigfig::choose_total_sig_figs;
use crate::status::TrendClassifier;
use crate::{Error, Result};
use std::io::Stdout;
use std::time::Duration;

/// Below this fraction of the run the ETA is shown with one figure.
const ONE_FIGURE_ETA_FRACTION: f64 = 0.1;

/// Tracks one loop and reports its progress at planned indices.
///
/// A tracker belongs to a single loop. Concurrent loops each need their own.
pub struct ProgressTracker<C: Clock = MonotonicClock, S: ReportSink = LineSink<Stdout>> {
    total: u64,
    plan: PrintPointPlan,
    warmup: f64,
    min_interval: f64,
    clock: C,
    sink: S,
    start: Duration,
    last_report: Duration,
    last_fraction: f64,
    trend: TrendClassifier,
}

impl ProgressTracker {
    /// Creates a tracker that prints to standard output.
    ///
    /// Colour is enabled when standard output is a terminal.
    ///
    /// # Arguments
    ///
    /// * `total` - Number of items in the loop
    /// * `max_decades` - Finest decade to plan print points for, clamped
    ///   into `1..=9`
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRun`] if `total` is zero.
    pub fn init(total: u64, max_decades: u32) -> Result<Self> {
        let config = ProgressConfig::with_max_decades(max_decades);
        let sink = LineSink::stdout(config.color.resolve());
        Self::with_parts(total, &config, MonotonicClock::new(), sink)
    }
}

impl<C: Clock, S: ReportSink> ProgressTracker<C, S> {
    /// Creates a tracker from explicit parts.
    ///
    /// The clock is read once here to fix the start of the run. The
    /// configuration's colour choice is not consulted; colour belongs to
    /// the sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRun`] if `total` is zero.
    pub fn with_parts(total: u64, config: &ProgressConfig, clock: C, sink: S) -> Result<Self> {
        if total == 0 {
            return Err(Error::EmptyRun);
        }

        let config = config.validated();
        let start = clock.now();
        Ok(Self {
            total,
            plan: plan(total, config.max_decades),
            warmup: config.warmup_secs,
            min_interval: config.min_interval_secs,
            clock,
            sink,
            start,
            last_report: start,
            last_fraction: 0.0,
            trend: TrendClassifier::new(),
        })
    }

    /// Number of items in the run.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Print points not yet reached.
    pub fn remaining_points(&self) -> &PrintPointPlan {
        &self.plan
    }

    /// The sink reports are delivered to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the tracker, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Reports progress if `index` is the next planned print point.
    ///
    /// Every planned point is visited at most once: reaching it consumes it
    /// even when the report is then suppressed. Indices that skip over a
    /// planned point leave it unreachable.
    ///
    /// # Arguments
    ///
    /// * `index` - Index of the item just processed, in `0..total`
    /// * `label` - Task name shown at the start of the line
    ///
    /// # Returns
    ///
    /// The report that was emitted, if any.
    #[inline]
    pub fn tick(&mut self, index: u64, label: &str) -> Option<Report> {
        if self.plan.peek() != Some(index) {
            return None;
        }
        self.plan.pop();
        self.report(index, label)
    }

    fn report(&mut self, index: u64, label: &str) -> Option<Report> {
        let now = self.clock.now();
        let elapsed_total = now.saturating_sub(self.start).as_secs_f64();
        let elapsed_since_last = now.saturating_sub(self.last_report).as_secs_f64();
        let fraction = index as f64 / self.total as f64;
        let is_final = index == self.total - 1;

        if !is_final && (elapsed_total < self.warmup || elapsed_since_last < self.min_interval) {
            tracing::debug!(index, elapsed_total, elapsed_since_last, "report too early");
            return None;
        }
        if fraction == 0.0 || fraction == self.last_fraction {
            tracing::debug!(index, fraction, "fraction did not advance; report skipped");
            return None;
        }

        let sample = RateSample {
            elapsed_total,
            elapsed_since_last,
            fraction,
            last_fraction: self.last_fraction,
        };
        let eta = sample.eta_seconds();

        let eta_precision = if fraction < ONE_FIGURE_ETA_FRACTION {
            Precision::One
        } else {
            Precision::Two
        };
        let shown_eta = format_estimate(eta, false, eta_precision);
        let trend = self.trend.observe(shown_eta.seconds, elapsed_since_last);

        let estimated_total = (!is_final).then(|| {
            let elapsed = elapsed_total as u64;
            let sig_figs = choose_total_sig_figs(eta, elapsed);
            format_estimate(
                eta.saturating_add(elapsed),
                true,
                Precision::from_sig_figs(sig_figs),
            )
            .text
        });

        let (percent, percent_decimals) = if is_final {
            (100.0, 0)
        } else {
            display_percent(fraction, precision_regime(fraction))
        };

        let report = Report {
            label: label.to_string(),
            index,
            total: self.total,
            fraction,
            percent,
            percent_decimals,
            elapsed_seconds: elapsed_total,
            elapsed: format_elapsed(elapsed_total),
            eta_seconds: shown_eta.seconds,
            eta: shown_eta.text,
            estimated_total,
            trend,
            is_final,
        };

        if let Err(err) = self.sink.emit(&report) {
            let err = Error::from(err);
            tracing::warn!(%err, index, "failed to write progress report");
        }

        self.last_report = now;
        self.last_fraction = fraction;
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::render::Renderer;
    use crate::status::Trend;

    /// Tracker with a one-decade plan: 1, 2, every tenth, and the last item.
    fn tracker(total: u64) -> (ProgressTracker<ManualClock, LineSink<Vec<u8>>>, ManualClock) {
        let clock = ManualClock::new();
        let sink = LineSink::new(Vec::new(), Renderer::new(false));
        let config = ProgressConfig::with_max_decades(1);
        let tracker = ProgressTracker::with_parts(total, &config, clock.clone(), sink).unwrap();
        (tracker, clock)
    }

    fn skip_first_points(t: &mut ProgressTracker<ManualClock, LineSink<Vec<u8>>>) {
        assert!(t.tick(1, "job").is_none());
        assert!(t.tick(2, "job").is_none());
    }

    #[test]
    fn test_empty_run_rejected() {
        let clock = ManualClock::new();
        let sink = LineSink::new(Vec::new(), Renderer::new(false));
        let result = ProgressTracker::with_parts(0, &ProgressConfig::default(), clock, sink);
        assert!(matches!(result, Err(Error::EmptyRun)));
    }

    #[test]
    fn test_unplanned_index_is_ignored() {
        let (mut t, clock) = tracker(100);
        clock.advance(Duration::from_secs(60));
        assert!(t.tick(3, "job").is_none());
        assert_eq!(t.remaining_points().peek(), Some(1));
    }

    #[test]
    fn test_early_points_are_consumed_but_silent() {
        let (mut t, clock) = tracker(100);
        clock.advance(Duration::from_secs(1));
        assert!(t.tick(1, "job").is_none());
        assert!(t.tick(1, "job").is_none());
        assert_eq!(t.remaining_points().peek(), Some(2));
        assert!(t.sink().get_ref().is_empty());
    }

    #[test]
    fn test_report_after_warmup() {
        let (mut t, clock) = tracker(100);
        skip_first_points(&mut t);
        clock.advance(Duration::from_secs(20));
        let report = t.tick(10, "job").expect("report emitted");
        assert_eq!(report.index, 10);
        assert_eq!(report.eta_seconds, 180);
        assert_eq!(report.eta, "3m00s");
        assert_eq!(report.elapsed, "20s");
        assert_eq!(report.estimated_total.as_deref(), Some("3m20s"));
        assert_eq!(report.trend, Trend::Neutral);
        assert!(!report.is_final);
    }

    #[test]
    fn test_min_interval_between_reports() {
        let (mut t, clock) = tracker(100);
        skip_first_points(&mut t);
        clock.advance(Duration::from_secs(10));
        assert!(t.tick(10, "job").is_some());
        clock.advance(Duration::from_secs(1));
        assert!(t.tick(20, "job").is_none());
        clock.advance(Duration::from_secs(10));
        assert!(t.tick(30, "job").is_some());
    }

    #[test]
    fn test_final_item_always_reported() {
        let (mut t, clock) = tracker(100);
        clock.advance(Duration::from_millis(500));
        let report = t.tick(99, "job");
        assert!(report.is_none(), "99 is not the head of the plan yet");

        let (mut t, clock) = tracker(3);
        clock.advance(Duration::from_millis(500));
        assert!(t.tick(1, "job").is_none());
        let report = t.tick(2, "job").expect("final report");
        assert!(report.is_final);
        assert_eq!(report.estimated_total, None);
        assert_eq!(report.percent, 100.0);
        assert_eq!(report.percent_decimals, 0);
    }

    #[test]
    fn test_writes_one_line_per_report() {
        let (mut t, clock) = tracker(10);
        for i in 0..10 {
            clock.advance(Duration::from_secs(3));
            t.tick(i, "lines");
        }
        let out = String::from_utf8(t.into_sink().into_inner()).unwrap();
        assert!(!out.is_empty());
        for line in out.lines() {
            assert!(line.starts_with("*lines:"));
            assert!(line.ends_with('*'));
        }
    }

    #[test]
    fn test_sink_failure_does_not_stop_tracking() {
        struct FailingSink;
        impl ReportSink for FailingSink {
            fn emit(&mut self, _report: &Report) -> std::io::Result<()> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        let clock = ManualClock::new();
        let config = ProgressConfig::default();
        let mut t = ProgressTracker::with_parts(100, &config, clock.clone(), FailingSink).unwrap();
        clock.advance(Duration::from_secs(10));
        assert!(t.tick(1, "job").is_some());
        clock.advance(Duration::from_secs(10));
        assert!(t.tick(2, "job").is_some());
    }
}
