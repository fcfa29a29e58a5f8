// Rust guideline compliant 2026-10-12

//! Significant-figure arithmetic.

use crate::{Error, Result};

/// Largest value representable in a signed 32-bit integer; results are
/// capped here.
pub const SIG_FIG_CAP: u64 = i32::MAX as u64;

/// Significant-figure count meaning "do not round".
pub const EXACT_SIG_FIGS: u32 = 9;

/// Significant figures an ETA is considered to carry once past the first
/// tenth of a run.
const ETA_SIG_FIGS: u32 = 2;

/// Rounds `value` to `digits` leading significant digits.
///
/// The value is first rounded to an integer. If it has more than `digits`
/// digits, the excess digits are dropped and the first dropped digit decides
/// whether to round up.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if `value` does not fit in a signed 32-bit
/// integer, and [`Error::UnreasonableSigFigs`] if `digits` is outside
/// `1..=9`.
pub fn try_sigfigs(value: f64, digits: u32) -> Result<u64> {
    if value >= SIG_FIG_CAP as f64 + 1.0 {
        return Err(Error::Overflow(value));
    }
    if !(1..=EXACT_SIG_FIGS).contains(&digits) {
        return Err(Error::UnreasonableSigFigs(digits));
    }

    let limit = 10u64.pow(digits);
    let mut n = round_to_integer(value);
    if n < limit {
        return Ok(n);
    }

    let mut dropped = 0;
    let mut last_digit = n % 10;
    n /= 10;
    while n >= limit {
        last_digit = n % 10;
        n /= 10;
        dropped += 1;
    }
    if last_digit >= 5 {
        n += 1;
    }
    Ok(n * 10u64.pow(dropped + 1))
}

/// Rounds `value` to `digits` significant digits, recovering from bad input.
///
/// Values too large for the 32-bit cap yield [`SIG_FIG_CAP`]; unreasonable
/// digit counts fall back to plain integer rounding. Both cases are logged.
pub fn sigfigs(value: f64, digits: u32) -> u64 {
    match try_sigfigs(value, digits) {
        Ok(n) => n,
        Err(err @ Error::Overflow(_)) => {
            tracing::warn!(%err, "capping at {}", SIG_FIG_CAP);
            SIG_FIG_CAP
        }
        Err(err) => {
            tracing::warn!(%err, "falling back to plain rounding");
            round_to_integer(value)
        }
    }
}

/// Chooses how many significant figures the sum `elapsed + eta` carries.
///
/// The elapsed time is exact while the ETA is worth about two significant
/// figures. Once the elapsed part dominates the sum, the sum inherits the
/// extra digits: `12345 + 670` has 4, `9876 + 7700` has 2.
///
/// # Arguments
///
/// * `eta` - Estimated remaining seconds
/// * `elapsed` - Elapsed seconds
///
/// # Returns
///
/// [`EXACT_SIG_FIGS`] when nothing remains, 1 when the elapsed time is
/// negligible, otherwise at least 2.
pub fn choose_total_sig_figs(eta: u64, elapsed: u64) -> u32 {
    if eta == 0 {
        return EXACT_SIG_FIGS;
    }
    if elapsed == 0 || eta > elapsed.saturating_mul(10) {
        return 1;
    }

    let extra = elapsed.ilog10() as i64 - eta.ilog10() as i64;
    (extra + ETA_SIG_FIGS as i64).max(ETA_SIG_FIGS as i64) as u32
}

fn round_to_integer(value: f64) -> u64 {
    (value + 0.5) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values_unchanged() {
        assert_eq!(sigfigs(7.2, 1), 7);
        assert_eq!(sigfigs(99.4, 2), 99);
        assert_eq!(sigfigs(1234.0, 4), 1234);
    }

    #[test]
    fn test_rounds_to_leading_digits() {
        assert_eq!(sigfigs(104.0, 2), 100);
        assert_eq!(sigfigs(105.0, 2), 110);
        assert_eq!(sigfigs(123_456.0, 2), 120_000);
        assert_eq!(sigfigs(149.0, 1), 100);
        assert_eq!(sigfigs(150.0, 1), 200);
        assert_eq!(sigfigs(96.0, 1), 100);
    }

    #[test]
    fn test_boundary_at_power_of_ten() {
        assert_eq!(sigfigs(10.0, 1), 10);
        assert_eq!(sigfigs(109.0, 1), 100);
        assert_eq!(sigfigs(110.0, 1), 100);
        assert_eq!(sigfigs(1000.0, 3), 1000);
    }

    #[test]
    fn test_overflow_is_capped() {
        assert!(matches!(try_sigfigs(3e9, 2), Err(Error::Overflow(_))));
        assert_eq!(sigfigs(3e9, 2), SIG_FIG_CAP);
    }

    #[test]
    fn test_unreasonable_digits_fall_back() {
        assert!(matches!(
            try_sigfigs(12345.0, 10),
            Err(Error::UnreasonableSigFigs(10))
        ));
        assert_eq!(sigfigs(12345.4, 10), 12345);
        assert_eq!(sigfigs(12345.6, 0), 12346);
    }

    #[test]
    fn test_choose_exact_when_nothing_remains() {
        assert_eq!(choose_total_sig_figs(0, 500), EXACT_SIG_FIGS);
    }

    #[test]
    fn test_choose_one_when_elapsed_negligible() {
        assert_eq!(choose_total_sig_figs(5000, 10), 1);
        assert_eq!(choose_total_sig_figs(30, 0), 1);
    }

    #[test]
    fn test_choose_grows_with_elapsed() {
        assert_eq!(choose_total_sig_figs(670, 12_345), 4);
        assert_eq!(choose_total_sig_figs(7_700, 9_876), 2);
        assert_eq!(choose_total_sig_figs(870, 99), 2);
    }
}
