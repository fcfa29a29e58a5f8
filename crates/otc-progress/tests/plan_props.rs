// Rust guideline compliant 2026-10-12

//! Property-based tests for print-point planning.

use otc_progress::plan;
use proptest::prelude::*;

proptest! {
    /// Plans are strictly increasing, end on the last item and never
    /// contain index 0.
    #[test]
    fn prop_plan_shape(total in 2u64..10_000_000_000, max_decades in 1u32..=9) {
        let points: Vec<u64> = plan(total, max_decades).iter().collect();

        prop_assert!(points.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(points.last().copied(), Some(total - 1));
        prop_assert!(!points.contains(&0));
        prop_assert!(points.iter().all(|&p| p < total));
    }

    /// The first indices of a run are always attempted.
    #[test]
    fn prop_plan_starts_early(total in 3u64..1_000_000, max_decades in 1u32..=9) {
        let points: Vec<u64> = plan(total, max_decades).iter().take(2).collect();
        prop_assert_eq!(points, vec![1, 2]);
    }

    /// Every tenth of the run is planned.
    #[test]
    fn prop_plan_contains_tenths(total in 10u64..1_000_000_000, max_decades in 1u32..=9) {
        let p = plan(total, max_decades);
        for i in 1..=9 {
            let tenth = i * (total / 10);
            prop_assert!(p.iter().any(|x| x == tenth), "missing {}", tenth);
        }
    }

    /// More decades never remove points.
    #[test]
    fn prop_plan_grows_with_decades(total in 2u64..100_000_000, max_decades in 1u32..9) {
        let coarse: Vec<u64> = plan(total, max_decades).iter().collect();
        let fine: Vec<u64> = plan(total, max_decades + 1).iter().collect();
        prop_assert!(coarse.iter().all(|p| fine.contains(p)));
    }

    /// Out-of-range decade counts behave like the nearest valid one.
    #[test]
    fn prop_plan_clamps_decades(total in 2u64..1_000_000, max_decades in 10u32..1_000) {
        prop_assert_eq!(plan(total, max_decades), plan(total, 9));
        prop_assert_eq!(plan(total, 0), plan(total, 1));
    }
}
