//! Stable merge sort over random-access sequences.
//!
//! # Algorithm
//!
//! 1. A range of length 0 or 1 is sorted.
//! 2. Split at `begin + (end - begin) / 2`.
//! 3. Sort both halves.
//! 4. Merge the halves through two scratch buffers; on a tie the left
//!    element is written first.
//!
//! Complexity:
//! - comparisons: O(n log n) in every case, with no shortcut for sorted input
//! - moves: O(n log n)
//! - scratch: at most O(n) alive at once, released when each merge returns
//!
//! # Strategies
//!
//! `Strategy::Recursive` is the plain top-down recursion. `Strategy::Iterative`
//! replays the same splits and merges from a heap-allocated work stack and
//! gives byte-for-byte the same result.

mod iterative;
mod merge_step;
mod recursive;

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use tracing::trace;

use crate::error::ParseStrategyError;
use crate::error::SortError;
use crate::error::check_range;
use crate::ordering::Ascending;
use crate::ordering::ByKey;
use crate::ordering::Precedes;
use crate::sequence::RandomAccess;

pub use merge_step::INLINE_SCRATCH;

/// How the engine walks the split tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Top-down recursion, depth `ceil(log2(n))`.
    #[default]
    Recursive,
    /// Explicit work stack, same visiting order as `Recursive`.
    Iterative,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Recursive => "recursive",
            Strategy::Iterative => "iterative",
        };
        return f.write_str(name);
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Strategy, ParseStrategyError> {
        return match s {
            "recursive" => Ok(Strategy::Recursive),
            "iterative" => Ok(Strategy::Iterative),
            other => Err(ParseStrategyError(other.to_string())),
        };
    }
}

/// A configured merge sort.
///
/// ```
/// use sortkit::{MergeSort, Strategy};
/// use sortkit::ordering::Descending;
///
/// let engine = MergeSort::with_strategy(Strategy::Iterative);
/// let mut v = vec![5, 3, 1, 4, 2];
/// engine.sort(&mut v, Descending);
/// assert_eq!(v, vec![5, 4, 3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSort {
    strategy: Strategy,
}

impl MergeSort {
    /// An engine using the recursive strategy.
    pub fn new() -> MergeSort {
        return MergeSort { strategy: Strategy::Recursive };
    }

    pub fn with_strategy(strategy: Strategy) -> MergeSort {
        return MergeSort { strategy };
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        return self.strategy;
    }

    /// Sort the whole sequence in place.
    pub fn sort<S, P>(&self, sequence: &mut S, ordering: P)
    where
        S: RandomAccess + ?Sized,
        S::Item: Clone,
        P: Precedes<S::Item>,
    {
        let len = sequence.len();
        self.run(sequence, 0, len, &ordering);
    }

    /// Sort `range` in place, leaving every other position untouched.
    ///
    /// Fails without modifying anything if the range does not lie inside
    /// the sequence.
    pub fn sort_range<S, P>(&self, sequence: &mut S, range: Range<usize>, ordering: P) -> Result<(), SortError>
    where
        S: RandomAccess + ?Sized,
        S::Item: Clone,
        P: Precedes<S::Item>,
    {
        check_range(range.start, range.end, sequence.len())?;
        self.run(sequence, range.start, range.end, &ordering);
        return Ok(());
    }

    fn run<S, P>(&self, sequence: &mut S, begin: usize, end: usize, ordering: &P)
    where
        S: RandomAccess + ?Sized,
        S::Item: Clone,
        P: Precedes<S::Item>,
    {
        trace!(begin, end, strategy = %self.strategy, "merge sort");
        match self.strategy {
            Strategy::Recursive => recursive::sort_recursive(sequence, begin, end, ordering),
            Strategy::Iterative => iterative::sort_iterative(sequence, begin, end, ordering),
        }
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Sort the whole sequence in place with the given ordering.
///
/// Stable: elements the ordering cannot tell apart keep their input order.
///
/// ```
/// let mut pairs = vec![(1, "a"), (1, "b"), (0, "c")];
/// sortkit::sort(&mut pairs, |x: &(i32, &str), y: &(i32, &str)| x.0 < y.0);
/// assert_eq!(pairs, vec![(0, "c"), (1, "a"), (1, "b")]);
/// ```
pub fn sort<S, P>(sequence: &mut S, ordering: P)
where
    S: RandomAccess + ?Sized,
    S::Item: Clone,
    P: Precedes<S::Item>,
{
    MergeSort::new().sort(sequence, ordering);
}

/// Like [`sort`], for closures whose argument types should be inferred.
///
/// ```
/// use std::collections::VecDeque;
///
/// let mut d: VecDeque<i32> = VecDeque::from(vec![5, 3, 1, 4, 2]);
/// sortkit::sort_by(&mut d, |a, b| a > b);
/// assert_eq!(d, VecDeque::from(vec![5, 4, 3, 2, 1]));
/// ```
pub fn sort_by<S, F>(sequence: &mut S, ordering: F)
where
    S: RandomAccess + ?Sized,
    S::Item: Clone,
    F: Fn(&S::Item, &S::Item) -> bool,
{
    sort(sequence, ordering);
}

/// Sort by the natural order of a projected key.
pub fn sort_by_key<S, F, K>(sequence: &mut S, key: F)
where
    S: RandomAccess + ?Sized,
    S::Item: Clone,
    F: Fn(&S::Item) -> K,
    K: PartialOrd,
{
    sort(sequence, ByKey(key));
}

/// Sort smallest first by `PartialOrd`.
pub fn sort_ascending<S>(sequence: &mut S)
where
    S: RandomAccess + ?Sized,
    S::Item: Clone + PartialOrd,
{
    sort(sequence, Ascending);
}

/// Sort only `range`; see [`MergeSort::sort_range`].
pub fn sort_range<S, P>(sequence: &mut S, range: Range<usize>, ordering: P) -> Result<(), SortError>
where
    S: RandomAccess + ?Sized,
    S::Item: Clone,
    P: Precedes<S::Item>,
{
    return MergeSort::new().sort_range(sequence, range, ordering);
}

/// Merge the sorted runs `[begin, middle)` and `[middle, end)` in place.
///
/// Both runs must already be sorted under `ordering`; otherwise the result
/// is some permutation of the range. Bounds are checked up front.
pub fn merge<S, P>(sequence: &mut S, begin: usize, middle: usize, end: usize, ordering: P) -> Result<(), SortError>
where
    S: RandomAccess + ?Sized,
    S::Item: Clone,
    P: Precedes<S::Item>,
{
    check_range(begin, end, sequence.len())?;
    if middle < begin || middle > end {
        return Err(SortError::InvalidSplit { begin, middle, end });
    }
    merge_step::merge_runs(sequence, begin, middle, end, &ordering);
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::Descending;

    #[test]
    fn strategy_round_trips_through_strings() {
        assert_eq!("iterative".parse::<Strategy>(), Ok(Strategy::Iterative));
        assert_eq!(Strategy::Recursive.to_string(), "recursive");
        assert!("quick".parse::<Strategy>().is_err());
    }

    #[test]
    fn default_engine_is_recursive() {
        assert_eq!(MergeSort::default().strategy(), Strategy::Recursive);
        assert_eq!(MergeSort::new(), MergeSort::default());
    }

    #[test]
    fn sort_range_rejects_before_touching() {
        let mut v = vec![3, 2, 1];
        let err = sort_range(&mut v, 1..4, Ascending).unwrap_err();
        assert_eq!(err, SortError::InvalidRange { begin: 1, end: 4, len: 3 });
        assert_eq!(v, vec![3, 2, 1]);
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn sort_range_rejects_reversed_range() {
        let mut v = vec![3, 2, 1];
        assert!(sort_range(&mut v, 2..1, Ascending).is_err());
    }

    #[test]
    fn merge_rejects_split_outside_range() {
        let mut v = vec![1, 3, 2, 4];
        let err = merge(&mut v, 1, 0, 3, Ascending).unwrap_err();
        assert_eq!(err, SortError::InvalidSplit { begin: 1, middle: 0, end: 3 });
    }

    #[test]
    fn merge_public_entry_point() {
        let mut v = vec![0, 1, 3, 2, 4, 0];
        merge(&mut v, 1, 3, 5, Ascending).unwrap();
        assert_eq!(v, vec![0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn sort_by_key_is_stable() {
        let mut words = vec!["ccc", "a", "bb", "d", "ee"];
        sort_by_key(&mut words, |w| w.len());
        assert_eq!(words, vec!["a", "d", "bb", "ee", "ccc"]);
    }

    #[test]
    fn sort_ascending_on_array() {
        let mut a = [2.5, -1.0, 0.0];
        sort_ascending(&mut a);
        assert_eq!(a, [-1.0, 0.0, 2.5]);
    }

    #[test]
    fn sort_on_slice_of_larger_vector() {
        let mut v = vec![9, 8, 7, 6, 5];
        sort(&mut v[1..4], Ascending);
        assert_eq!(v, vec![9, 6, 7, 8, 5]);
    }

    #[test]
    fn engines_agree() {
        let input: Vec<i64> = (0..200).map(|i| (i * 37 % 23) - 11).collect();
        let mut a = input.clone();
        let mut b = input;
        MergeSort::with_strategy(Strategy::Recursive).sort(&mut a, Descending);
        MergeSort::with_strategy(Strategy::Iterative).sort(&mut b, Descending);
        assert_eq!(a, b);
    }
}
