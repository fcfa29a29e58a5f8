// Rust guideline compliant 2026-10-12

//! Human-readable duration formatting.
//!
//! [`format_estimate`] renders an *estimated* duration with a requested number
//! of significant figures, choosing the coarsest units that still carry that
//! precision (`4h10m` rather than `4h09m37s` at two figures). Each precision
//! level has its own threshold table; thresholds sit where rounding at the
//! finer regime would reach the first value of the next one, so the displayed
//! value never decreases as the input grows.
//!
//! [`format_elapsed`] renders an *exact* elapsed time with fixed units.

use crate::sigfig::{sigfigs, SIG_FIG_CAP};
use serde::{Deserialize, Serialize};

const MINUTE: u64 = 60;
const HOUR: u64 = 3_600;
const DAY: u64 = 86_400;

/// Text shown for durations that do not fit in a signed 32-bit integer.
pub const OVERFLOW_TEXT: &str = "more than 68 years";

/// Number of significant figures used to render an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// One significant figure.
    One,
    /// Two significant figures.
    Two,
    /// Three significant figures.
    Three,
    /// Four significant figures.
    Four,
}

impl Precision {
    /// Maps a significant-figure count to a precision level.
    ///
    /// Counts of 1 to 3 map to their level; anything else, including the
    /// "exact" count of 9, uses [`Precision::Four`], the finest available.
    pub fn from_sig_figs(sig_figs: u32) -> Self {
        match sig_figs {
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            _ => Self::Four,
        }
    }

    /// The next finer level; [`Precision::Four`] is its own successor.
    pub fn finer(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::Three,
            Self::Three | Self::Four => Self::Four,
        }
    }
}

/// A rendered estimate together with the duration it actually represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDuration {
    /// Display text, e.g. `2h30m` or `12d (!)`.
    pub text: String,
    /// Seconds represented by `text` after rounding.
    pub seconds: u64,
}

impl FormattedDuration {
    fn new(text: String, seconds: u64) -> Self {
        Self { text, seconds }
    }
}

/// Concern markers appended to long estimates when emphasis is requested.
#[derive(Debug, Clone, Copy)]
enum Concern {
    Mild,
    Serious,
    Severe,
    Absurd,
}

impl Concern {
    fn suffix(self, emphasize: bool) -> &'static str {
        if !emphasize {
            return "";
        }
        match self {
            Self::Mild => " (!)",
            Self::Serious => " (!!!)",
            Self::Severe => " (!!!!!)",
            Self::Absurd => " (!!!!!!!)",
        }
    }
}

/// Formats an estimated duration at the requested precision.
///
/// # Arguments
///
/// * `seconds` - Duration to render
/// * `emphasize` - Append concern markers to very long durations
/// * `precision` - Significant figures to keep
///
/// # Returns
///
/// The text and the number of seconds the text stands for. Durations beyond
/// the 32-bit range render as [`OVERFLOW_TEXT`] and report [`SIG_FIG_CAP`].
pub fn format_estimate(seconds: u64, emphasize: bool, precision: Precision) -> FormattedDuration {
    if seconds > SIG_FIG_CAP {
        tracing::warn!(seconds, "duration too large to format");
        return FormattedDuration::new(OVERFLOW_TEXT.to_string(), SIG_FIG_CAP);
    }

    match precision {
        Precision::One => one_figure(seconds, emphasize),
        Precision::Two => two_figures(seconds, emphasize),
        Precision::Three => three_figures(seconds, emphasize),
        Precision::Four => four_figures(seconds, emphasize),
    }
}

/// Re-renders at the next finer level. Used where one figure would print the
/// first value of a unit (`10s`, `1m`, `1h`, ...), which hides whether the
/// value was rounded up or down.
fn escalate(seconds: u64, emphasize: bool, from: Precision) -> FormattedDuration {
    format_estimate(seconds, emphasize, from.finer())
}

fn one_figure(sec: u64, emphasize: bool) -> FormattedDuration {
    let ambiguous = |sec| escalate(sec, emphasize, Precision::One);

    if sec < 5 {
        FormattedDuration::new(format!("{sec}s"), sec)
    } else if sec < 55 {
        let ts = (sec + 5) / 10 * 10;
        if ts == 10 {
            return ambiguous(sec);
        }
        FormattedDuration::new(format!("{ts}s"), ts)
    } else if sec < 570 {
        let tm = (sec + 30) / MINUTE;
        if tm == 1 {
            return ambiguous(sec);
        }
        FormattedDuration::new(format!("{tm}m"), tm * MINUTE)
    } else if sec < 3_570 {
        let tm = (sec + 300) / 600 * 10;
        if tm == 10 {
            return ambiguous(sec);
        }
        FormattedDuration::new(format!("{tm}m"), tm * MINUTE)
    } else if sec < 34_200 {
        let th = (sec + 1_800) / HOUR;
        if th == 1 {
            return ambiguous(sec);
        }
        FormattedDuration::new(format!("{th}h"), th * HOUR)
    } else if sec < 84_600 {
        let th = (sec + 1_800) / 36_000 * 10;
        if th == 10 {
            return ambiguous(sec);
        }
        FormattedDuration::new(format!("{th}h"), th * HOUR)
    } else if sec < 856_800 {
        let td = (sec + 43_200) / DAY;
        if td == 1 {
            return ambiguous(sec);
        }
        let mark = Concern::Mild.suffix(emphasize);
        FormattedDuration::new(format!("{td}d{mark}"), td * DAY)
    } else {
        days_only(sec, 1, Concern::Serious.suffix(emphasize))
    }
}

fn two_figures(sec: u64, emphasize: bool) -> FormattedDuration {
    if sec < 55 {
        FormattedDuration::new(format!("{sec}s"), sec)
    } else if sec < 570 {
        let tm = (sec + 5) / MINUTE;
        let ts = (sec + 5) % MINUTE / 10 * 10;
        FormattedDuration::new(format!("{tm}m{ts:02}s"), tm * MINUTE + ts)
    } else if sec < 3_570 {
        let tm = (sec + 30) / MINUTE;
        FormattedDuration::new(format!("{tm}m"), tm * MINUTE)
    } else if sec < 34_200 {
        let th = (sec + 300) / HOUR;
        let tm = (sec + 300) % HOUR / 600 * 10;
        FormattedDuration::new(format!("{th}h{tm:02}m"), th * HOUR + tm * MINUTE)
    } else if sec < 84_600 {
        let th = (sec + 1_800) / HOUR;
        FormattedDuration::new(format!("{th}h"), th * HOUR)
    } else if sec < 856_800 {
        // A tenth of a day is close to two hours.
        let td = (sec + HOUR) / DAY;
        let th = (sec + HOUR) % DAY / 7_200 * 2;
        let mark = Concern::Mild.suffix(emphasize);
        FormattedDuration::new(format!("{td}d{th:02}h{mark}"), td * DAY + th * HOUR)
    } else {
        days_only(sec, 2, Concern::Serious.suffix(emphasize))
    }
}

fn three_figures(sec: u64, emphasize: bool) -> FormattedDuration {
    if sec < 60 {
        FormattedDuration::new(format!("{sec}s"), sec)
    } else if sec < 599 {
        FormattedDuration::new(format!("{}m{:02}s", sec / MINUTE, sec % MINUTE), sec)
    } else if sec < 3_595 {
        let ts = (sec + 5) / 10 * 10;
        FormattedDuration::new(format!("{}m{:02}s", ts / MINUTE, ts % MINUTE), ts)
    } else if sec < 35_970 {
        let tm = (sec + 30) / MINUTE;
        FormattedDuration::new(format!("{}h{:02}m", tm / 60, tm % 60), tm * MINUTE)
    } else if sec < 86_100 {
        let tm = (sec + 300) / 600 * 10;
        FormattedDuration::new(format!("{}h{:02}m", tm / 60, tm % 60), tm * MINUTE)
    } else if sec < 856_800 {
        let th = (sec + 1_800) / HOUR;
        let mark = Concern::Mild.suffix(emphasize);
        FormattedDuration::new(format!("{}d{:02}h{mark}", th / 24, th % 24), th * HOUR)
    } else if sec < 8_640_000 {
        let th = (sec + 18_000) / 36_000 * 10;
        let mark = Concern::Serious.suffix(emphasize);
        FormattedDuration::new(format!("{}d{:02}h{mark}", th / 24, th % 24), th * HOUR)
    } else {
        days_only(sec, 3, Concern::Severe.suffix(emphasize))
    }
}

fn four_figures(sec: u64, emphasize: bool) -> FormattedDuration {
    if sec < 60 {
        FormattedDuration::new(format!("{sec}s"), sec)
    } else if sec < 3_599 {
        FormattedDuration::new(format!("{}m{:02}s", sec / MINUTE, sec % MINUTE), sec)
    } else if sec < 35_995 {
        let ts = (sec + 5) / 10 * 10;
        FormattedDuration::new(
            format!("{}h{:02}m{:02}s", ts / HOUR, ts % HOUR / MINUTE, ts % MINUTE),
            ts,
        )
    } else if sec < 86_370 {
        let tm = (sec + 30) / MINUTE;
        FormattedDuration::new(format!("{}h{:02}m", tm / 60, tm % 60), tm * MINUTE)
    } else if sec < 863_700 {
        let tm = (sec + 300) / 600 * 10;
        let mark = Concern::Mild.suffix(emphasize);
        FormattedDuration::new(
            format!("{}d{:02}h{:02}m{mark}", tm / 1_440, tm % 1_440 / 60, tm % 60),
            tm * MINUTE,
        )
    } else if sec < 8_638_200 {
        let th = (sec + 1_800) / HOUR;
        let mark = Concern::Serious.suffix(emphasize);
        FormattedDuration::new(format!("{}d{:02}h{mark}", th / 24, th % 24), th * HOUR)
    } else if sec < 1_000 * DAY {
        let th = (sec + 18_000) / 36_000 * 10;
        let mark = Concern::Severe.suffix(emphasize);
        FormattedDuration::new(format!("{}d{:02}h{mark}", th / 24, th % 24), th * HOUR)
    } else {
        days_only(sec, 4, Concern::Absurd.suffix(emphasize))
    }
}

fn days_only(sec: u64, digits: u32, mark: &str) -> FormattedDuration {
    let td = sigfigs(sec as f64 / DAY as f64, digits);
    match td.checked_mul(DAY) {
        Some(rounded) if rounded <= SIG_FIG_CAP => {
            FormattedDuration::new(format!("{td}d{mark}"), rounded)
        }
        // Rounding up near the cap must not land past it.
        _ => {
            tracing::warn!(sec, days = td, "rounded duration too large to format");
            FormattedDuration::new(OVERFLOW_TEXT.to_string(), SIG_FIG_CAP)
        }
    }
}

/// Formats an exact elapsed time with fixed units.
///
/// Produces `7s`, `5m07s`, `1h 05m03s` or, once days are involved,
/// `2d 03h04m` without seconds. Every unit after the first is zero-padded.
/// Fractional seconds are truncated.
pub fn format_elapsed(seconds: f64) -> String {
    if seconds >= SIG_FIG_CAP as f64 + 1.0 {
        tracing::warn!(seconds, "elapsed time too large to format");
        return OVERFLOW_TEXT.to_string();
    }

    let mut t = seconds.max(0.0) as u64;
    let mut out = String::new();
    let mut padded = false;
    let mut show_seconds = true;

    if t >= DAY {
        out.push_str(&format!("{}d ", t / DAY));
        t %= DAY;
        padded = true;
        show_seconds = false;
    }

    if t >= HOUR || padded {
        if padded {
            out.push_str(&format!("{:02}h", t / HOUR));
        } else {
            out.push_str(&format!("{}h ", t / HOUR));
        }
        t %= HOUR;
        padded = true;
    }

    if t >= MINUTE || padded {
        out.push_str(&format!("{:0width$}m", t / MINUTE, width = if padded { 2 } else { 1 }));
        t %= MINUTE;
        padded = true;
    }

    if show_seconds {
        out.push_str(&format!("{:0width$}s", t, width = if padded { 2 } else { 1 }));
    }

    out
}
