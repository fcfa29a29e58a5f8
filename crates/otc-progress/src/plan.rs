// Rust guideline compliant 2026-10-12

//! Print-point planning.
//!
//! A run of `total` items is only inspected at a few hundred pre-computed
//! indices. The plan is dense near both ends of the run, where each report
//! shows one more decimal of the percentage, and sparse in the middle.

use std::collections::VecDeque;

/// Smallest accepted decade count.
pub const MIN_DECADES: u32 = 1;

/// Largest accepted decade count.
pub const MAX_DECADES: u32 = 9;

/// Ordered, strictly increasing indices at which a report is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintPointPlan {
    points: VecDeque<u64>,
}

impl PrintPointPlan {
    /// Returns the next planned index without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u64> {
        self.points.front().copied()
    }

    /// Consumes and returns the next planned index.
    pub fn pop(&mut self) -> Option<u64> {
        self.points.pop_front()
    }

    /// Number of planned indices not yet reached.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` once every planned index has been consumed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the remaining indices in order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.iter().copied()
    }
}

/// Clamps a decade count into `MIN_DECADES..=MAX_DECADES`, warning when the
/// requested value was out of range.
pub fn clamp_decades(max_decades: u32) -> u32 {
    if max_decades > MAX_DECADES {
        tracing::warn!(
            max_decades,
            "max decades may not exceed {}; using {}",
            MAX_DECADES,
            MAX_DECADES
        );
        MAX_DECADES
    } else if max_decades < MIN_DECADES {
        tracing::warn!(
            max_decades,
            "max decades may not be below {}; using {}",
            MIN_DECADES,
            MIN_DECADES
        );
        MIN_DECADES
    } else {
        max_decades
    }
}

/// Builds the print-point plan for a run of `total` items.
///
/// The plan contains the first indices of the run (so a slow start is
/// visible), the last index (so the run always closes with a report), every
/// tenth of the run and, for each decade `d` in `2..=max_decades`, the
/// `1/10^d` steps next to both 0% and 100%. Index 0 is never planned: there
/// is no meaningful rate estimate at the first item, and callers that start
/// counting at 1 would otherwise never match it.
///
/// # Arguments
///
/// * `total` - Number of items in the run
/// * `max_decades` - Finest decade to plan for, clamped into `1..=9`
///
/// # Returns
///
/// The plan. It is empty when `total <= 1`.
pub fn plan(total: u64, max_decades: u32) -> PrintPointPlan {
    let max_decades = clamp_decades(max_decades);
    let mut points: Vec<u64> = vec![0, 1, 2, total.saturating_sub(1)];

    let tenth = total / 10;
    points.extend((1..=9).map(|i| i * tenth));

    for decade in 2..=max_decades {
        let step = total / 10u64.pow(decade);
        for i in 1..=9 {
            points.push(i * step);
            points.push(total - i * step);
        }
    }

    points.retain(|&p| p != 0 && p < total);
    points.sort_unstable();
    points.dedup();

    tracing::trace!(
        total,
        max_decades,
        points = points.len(),
        "built print-point plan"
    );

    PrintPointPlan {
        points: points.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_small_total() {
        let p: Vec<u64> = plan(5, 3).iter().collect();
        assert_eq!(p, vec![1, 2, 4]);
    }

    #[test]
    fn test_plan_single_item_is_empty() {
        assert!(plan(1, 6).is_empty());
    }

    #[test]
    fn test_plan_hundred_items_one_decade() {
        let p: Vec<u64> = plan(100, 1).iter().collect();
        assert_eq!(p, vec![1, 2, 10, 20, 30, 40, 50, 60, 70, 80, 90, 99]);
    }

    #[test]
    fn test_plan_hundred_items_two_decades() {
        let p: Vec<u64> = plan(100, 2).iter().collect();
        let expected: Vec<u64> = (1..=10)
            .chain((2..=9).map(|i| i * 10))
            .chain(91..=99)
            .collect();
        assert_eq!(p, expected);
    }

    #[test]
    fn test_plan_million_contains_fine_bands() {
        let p: Vec<u64> = plan(1_000_000, 6).iter().collect();
        assert!(p.contains(&1));
        assert!(p.contains(&2));
        assert!(p.contains(&9));
        assert!(p.contains(&100_000));
        assert!(p.contains(&999_991));
        assert!(p.contains(&999_999));
        assert!(!p.contains(&0));
    }

    #[test]
    fn test_plan_clamps_decades() {
        assert_eq!(plan(1_000, 0), plan(1_000, 1));
        assert_eq!(plan(10_000_000_000, 42), plan(10_000_000_000, 9));
    }

    #[test]
    fn test_pop_consumes_front() {
        let mut p = plan(100, 1);
        assert_eq!(p.peek(), Some(1));
        assert_eq!(p.pop(), Some(1));
        assert_eq!(p.peek(), Some(2));
        assert_eq!(p.len(), 11);
    }
}
