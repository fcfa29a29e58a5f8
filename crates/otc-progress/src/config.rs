// Rust guideline compliant 2026-10-12

//! Tracker configuration.
//!
//! The library never reads configuration on its own. Callers build a
//! [`ProgressConfig`] (or deserialize one as part of their own settings) and
//! pass it to [`crate::ProgressTracker::with_parts`].

use crate::plan::clamp_decades;
use serde::{Deserialize, Serialize};

/// When to colour the trend part of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorChoice {
    /// Colour when standard output is an interactive terminal.
    #[default]
    Auto,
    /// Always emit colour escapes.
    Always,
    /// Never emit colour escapes.
    Never,
}

impl ColorChoice {
    /// Resolves the choice to a flag. `Auto` inspects standard output, so
    /// call this once, at construction time.
    pub fn resolve(self) -> bool {
        match self {
            Self::Auto => atty::is(atty::Stream::Stdout),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Settings for one progress tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Finest decade of the print-point plan (1-9).
    #[serde(default = "default_max_decades")]
    pub max_decades: u32,

    /// Seconds after start during which only the final item is reported.
    #[serde(default = "default_warmup_secs")]
    pub warmup_secs: f64,

    /// Minimum seconds between two reports, except for the final item.
    #[serde(default = "default_min_interval_secs")]
    pub min_interval_secs: f64,

    /// Colour mode for the line renderer.
    #[serde(default)]
    pub color: ColorChoice,
}

fn default_max_decades() -> u32 {
    6
}

/// Files are typically still being opened during the first seconds.
fn default_warmup_secs() -> f64 {
    4.0
}

fn default_min_interval_secs() -> f64 {
    2.0
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            max_decades: default_max_decades(),
            warmup_secs: default_warmup_secs(),
            min_interval_secs: default_min_interval_secs(),
            color: ColorChoice::default(),
        }
    }
}

impl ProgressConfig {
    /// Creates a configuration with the given decade count and defaults
    /// for everything else.
    pub fn with_max_decades(max_decades: u32) -> Self {
        Self {
            max_decades,
            ..Self::default()
        }
    }

    /// Returns a copy with every out-of-range value replaced.
    ///
    /// `max_decades` is clamped into `1..=9`; negative or non-finite
    /// intervals are reset to their defaults. Each correction is logged as a
    /// warning.
    pub fn validated(&self) -> Self {
        Self {
            max_decades: clamp_decades(self.max_decades),
            warmup_secs: valid_interval("warmup_secs", self.warmup_secs, default_warmup_secs()),
            min_interval_secs: valid_interval(
                "min_interval_secs",
                self.min_interval_secs,
                default_min_interval_secs(),
            ),
            color: self.color,
        }
    }
}

fn valid_interval(name: &str, value: f64, default: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        tracing::warn!(name, value, default, "invalid interval; using default");
        default
    }
}
