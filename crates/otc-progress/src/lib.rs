// Rust guideline compliant 2026-10-12

//! OTC Progress Library
//!
//! Adaptive progress and ETA reporting for long batch loops over a known
//! number of items:
//! - Print-point planning (which indices are worth a look)
//! - Report gating (warm-up, minimum interval, final item)
//! - Remaining-time estimation blending average and recent rates
//! - Duration formatting with adaptive significant figures
//! - Trend classification and star-delimited line rendering
//!
//! ```no_run
//! use otc_progress::ProgressTracker;
//!
//! let total = 1_000_000;
//! let mut progress = ProgressTracker::init(total, 6)?;
//! for event in 0..total {
//!     // ... process the event ...
//!     progress.tick(event, "correcting");
//! }
//! # Ok::<(), otc_progress::Error>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod estimate;
pub mod format;
pub mod plan;
pub mod render;
pub mod report;
pub mod sigfig;
pub mod status;
pub mod tracker;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{ColorChoice, ProgressConfig};
pub use error::{Error, Result};
pub use estimate::{eta_seconds, RateSample};
pub use format::{format_elapsed, format_estimate, FormattedDuration, Precision};
pub use plan::{plan, PrintPointPlan};
pub use render::{LineSink, Renderer, ReportSink};
pub use report::Report;
pub use sigfig::{choose_total_sig_figs, sigfigs};
pub use status::{classify, Trend, TrendClassifier};
pub use tracker::ProgressTracker;
