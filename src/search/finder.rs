//! Circular binary search for the minimum of a rotated sorted sequence
//!
//! The input is a non-decreasing sequence shifted cyclically by an unknown
//! offset, possibly with repeated values. Both strategies work on indices
//! with modulo wraparound and never copy the data.
//!
//! # Pivot strategy
//!
//! The pivot is the one index whose circular predecessor is strictly
//! greater. The search keeps the pivot inside `[start, end]`:
//!
//! - `seq[mid] > seq[end]`: the descent lies in `(mid, end]`
//! - `seq[mid] < seq[end]`: `mid..=end` is sorted, so the pivot is left of `mid`
//! - tie: nothing is known about `mid`, but `end` can be tested and dropped
//!
//! If the window collapses on a tie no strict descent exists, so every value
//! is equal and any index is a minimum.

use std::cmp::Ordering;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::invariant::{check_rotation, RotationCheck};
use super::outcome::{SearchOutcome, SearchStats};
use crate::errors::{FinderError, Result};

/// Search algorithm used by [`RotatedMinimumFinder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Circular pivot search with an early exit on the pivot
    #[default]
    Pivot,
    /// Lower-bound bisection against the right end
    Bisect,
}

impl Strategy {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Pivot => "pivot",
            Strategy::Bisect => "bisect",
        }
    }
}

/// Locates the minimum of a rotated sorted sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct RotatedMinimumFinder {
    strategy: Strategy,
    validate: bool,
}

impl RotatedMinimumFinder {
    /// Create a finder using the pivot strategy without validation
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the search strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Verify the rotation invariant in O(n) before searching
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Find the index of a minimum element
    pub fn find<T: Ord>(&self, sequence: &[T]) -> Result<SearchOutcome> {
        self.search_with_stats(sequence).map(|(outcome, _)| outcome)
    }

    /// Find the index of a minimum element and report how the search went
    pub fn search_with_stats<T: Ord>(&self, sequence: &[T]) -> Result<(SearchOutcome, SearchStats)> {
        let n = sequence.len();
        if n == 0 {
            return Err(FinderError::EmptySequence);
        }

        let mut stats = SearchStats::default();

        if self.validate {
            if let RotationCheck::Invalid { descents } = check_rotation(sequence) {
                log::warn!(
                    "Rejected sequence of length {}: {} circular descents, expected at most 1",
                    n,
                    descents
                );
                return Ok((SearchOutcome::InvariantViolation, stats));
            }
        }

        let outcome = if sequence[0] < sequence[n - 1] {
            stats.fast_path = true;
            SearchOutcome::Found(0)
        } else {
            match self.strategy {
                Strategy::Pivot => pivot_search(sequence, &mut stats),
                Strategy::Bisect => bisect_search(sequence, &mut stats),
            }
        };

        match outcome {
            SearchOutcome::Found(index) => log::debug!(
                "{} search found minimum at index {} of {} ({} probes, {} tie shrinks)",
                self.strategy.as_str(),
                index,
                n,
                stats.probes,
                stats.tie_shrinks
            ),
            SearchOutcome::InvariantViolation => log::warn!(
                "{} search exhausted {} elements without locating a pivot",
                self.strategy.as_str(),
                n
            ),
        }

        Ok((outcome, stats))
    }
}

/// Find the index of a minimum element with the default finder
pub fn find_minimum_index<T: Ord>(sequence: &[T]) -> Result<SearchOutcome> {
    RotatedMinimumFinder::new().find(sequence)
}

fn pivot_search<T: Ord>(sequence: &[T], stats: &mut SearchStats) -> SearchOutcome {
    let n = sequence.len();
    let is_pivot = |i: usize| {
        let next = (i + 1) % n;
        let prev = (i + n - 1) % n;
        sequence[i] <= sequence[next] && sequence[prev] > sequence[i]
    };

    let (mut start, mut end) = (0, n - 1);
    while start <= end {
        stats.probes += 1;
        let mid = start + (end - start) / 2;
        log::trace!("probe start={} mid={} end={}", start, mid, end);

        if is_pivot(mid) {
            return SearchOutcome::Found(mid);
        }

        match sequence[mid].cmp(&sequence[end]) {
            Ordering::Greater => start = mid + 1,
            Ordering::Less => match mid.checked_sub(1) {
                Some(left) => end = left,
                None => break,
            },
            Ordering::Equal => {
                if is_pivot(end) {
                    return SearchOutcome::Found(end);
                }
                if start == end {
                    return SearchOutcome::Found(start);
                }
                stats.tie_shrinks += 1;
                end -= 1;
            }
        }
    }

    SearchOutcome::InvariantViolation
}

fn bisect_search<T: Ord>(sequence: &[T], stats: &mut SearchStats) -> SearchOutcome {
    let (mut lo, mut hi) = (0, sequence.len() - 1);
    while lo < hi {
        stats.probes += 1;
        let mid = lo + (hi - lo) / 2;
        log::trace!("probe lo={} mid={} hi={}", lo, mid, hi);

        match sequence[mid].cmp(&sequence[hi]) {
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => {
                stats.tie_shrinks += 1;
                hi -= 1;
            }
        }
    }

    SearchOutcome::Found(lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both() -> [RotatedMinimumFinder; 2] {
        [
            RotatedMinimumFinder::new(),
            RotatedMinimumFinder::new().with_strategy(Strategy::Bisect),
        ]
    }

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(find_minimum_index(&[2, 2, 2, 0, 2, 2]).unwrap(), SearchOutcome::Found(3));
        assert_eq!(
            find_minimum_index(&[5, 6, 7, 7, 8, 1, 1, 2, 3, 4, 4]).unwrap(),
            SearchOutcome::Found(5)
        );
        assert_eq!(find_minimum_index(&[1, 2, 3, 4, 5]).unwrap(), SearchOutcome::Found(0));
        assert_eq!(find_minimum_index(&[1]).unwrap(), SearchOutcome::Found(0));
        assert_eq!(find_minimum_index(&[2, 1]).unwrap(), SearchOutcome::Found(1));
    }

    #[test]
    fn test_plateau_around_minimum() {
        // A plateau index has non-smaller neighbours on both sides but is not the minimum
        let seq = [1, 1, 1, 0, 1];
        assert_eq!(find_minimum_index(&seq).unwrap(), SearchOutcome::Found(3));
    }

    #[test]
    fn test_bisect_with_ties() {
        let finder = RotatedMinimumFinder::new().with_strategy(Strategy::Bisect);
        let seq = [1, 0, 1, 1, 1];
        let index = finder.find(&seq).unwrap().index().unwrap();
        assert_eq!(seq[index], 0);
    }

    #[test]
    fn test_empty_sequence() {
        for finder in both() {
            let result = finder.find::<i64>(&[]);
            assert!(matches!(result, Err(FinderError::EmptySequence)));
        }
    }

    #[test]
    fn test_all_equal() {
        for finder in both() {
            let index = finder.find(&[7, 7, 7, 7]).unwrap().index().unwrap();
            assert!(index < 4);
        }
    }

    #[test]
    fn test_fast_path_stats() {
        let (outcome, stats) = RotatedMinimumFinder::new()
            .search_with_stats(&[1, 2, 3, 4, 5])
            .unwrap();
        assert_eq!(outcome, SearchOutcome::Found(0));
        assert!(stats.fast_path);
        assert_eq!(stats.probes, 0);
    }

    #[test]
    fn test_tie_shrinks_counted() {
        let (_, stats) = RotatedMinimumFinder::new()
            .search_with_stats(&[2, 2, 2, 0, 2, 2])
            .unwrap();
        assert!(!stats.fast_path);
        assert_eq!(stats.tie_shrinks, 2);
    }

    #[test]
    fn test_validation_rejects_garbage() {
        let finder = RotatedMinimumFinder::new().with_validation(true);
        assert_eq!(finder.find(&[3, 1, 2, 0]).unwrap(), SearchOutcome::InvariantViolation);
        assert_eq!(finder.find(&[3, 4, 1, 2]).unwrap(), SearchOutcome::Found(2));
    }

    #[test]
    fn test_works_on_strings() {
        let seq = ["pear", "plum", "apple", "fig"];
        assert_eq!(find_minimum_index(&seq).unwrap(), SearchOutcome::Found(2));
    }

    #[test]
    fn test_builder_accessors() {
        let finder = RotatedMinimumFinder::new()
            .with_strategy(Strategy::Bisect)
            .with_validation(true);
        assert_eq!(finder.strategy(), Strategy::Bisect);
        assert!(finder.validates());
        assert_eq!(Strategy::default(), Strategy::Pivot);
    }
}
