//! The merge step.
//!
//! Both halves are copied out to scratch buffers and written back one
//! element at a time. The right element wins only if it strictly precedes
//! the left one, so equal elements leave in input order.

use smallvec::SmallVec;

use crate::ordering::Precedes;
use crate::sequence::RandomAccess;

/// Runs up to this many elements are merged without touching the heap.
pub const INLINE_SCRATCH: usize = 16;

/// Temporary copy of one half, owned by a single merge call.
pub(crate) type Scratch<T> = SmallVec<[T; INLINE_SCRATCH]>;

/// Merge the sorted runs `[begin, middle)` and `[middle, end)` in place.
///
/// Bounds must already be valid. Reads and writes stay inside
/// `[begin, end)` whatever the predicate answers.
pub(crate) fn merge_runs<S, P>(seq: &mut S, begin: usize, middle: usize, end: usize, ordering: &P)
where
    S: RandomAccess + ?Sized,
    S::Item: Clone,
    P: Precedes<S::Item> + ?Sized,
{
    if begin == middle || middle == end {
        return;
    }

    let left: Scratch<S::Item> = (begin..middle).map(|i| seq.get(i).clone()).collect();
    let right: Scratch<S::Item> = (middle..end).map(|i| seq.get(i).clone()).collect();

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    let mut dest = begin;

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => ordering.precedes(r, l),
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        if let Some(value) = next {
            seq.set(dest, value);
            dest += 1;
        }
    }

    // One side is exhausted; the other is already in order.
    for value in left.chain(right) {
        seq.set(dest, value);
        dest += 1;
    }

    debug_assert_eq!(dest, end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::Ascending;

    #[test]
    fn merges_two_sorted_runs() {
        let mut v = vec![1, 4, 7, 2, 3, 9];
        merge_runs(&mut v, 0, 3, 6, &Ascending);
        assert_eq!(v, vec![1, 2, 3, 4, 7, 9]);
    }

    #[test]
    fn leaves_outside_of_range_alone() {
        let mut v = vec![9, 5, 6, 1, 2, 0];
        merge_runs(&mut v, 1, 3, 5, &Ascending);
        assert_eq!(v, vec![9, 1, 2, 5, 6, 0]);
    }

    #[test]
    fn empty_half_is_a_no_op() {
        let mut v = vec![3, 1, 2];
        merge_runs(&mut v, 0, 0, 3, &Ascending);
        merge_runs(&mut v, 0, 3, 3, &Ascending);
        assert_eq!(v, vec![3, 1, 2]);
    }

    #[test]
    fn ties_take_the_left_element_first() {
        let by_key = |a: &(u8, char), b: &(u8, char)| a.0 < b.0;
        let mut v = vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
        merge_runs(&mut v, 0, 2, 4, &by_key);
        assert_eq!(v, vec![(1, 'a'), (1, 'c'), (2, 'b'), (2, 'd')]);
    }

    #[test]
    fn runs_longer_than_inline_scratch() {
        let mut v: Vec<u32> = (0..40).step_by(2).chain((1..40).step_by(2)).collect();
        let n = v.len();
        merge_runs(&mut v, 0, 20, n, &Ascending);
        assert_eq!(v, (0..40).collect::<Vec<u32>>());
    }

    #[test]
    fn always_true_predicate_stays_in_bounds() {
        let mut v = vec![5, 1, 4, 2];
        merge_runs(&mut v, 0, 2, 4, &|_: &i32, _: &i32| true);
        let mut seen = v.clone();
        seen.sort();
        assert_eq!(seen, vec![1, 2, 4, 5]);
    }

    #[test]
    fn panic_mid_merge_leaves_input_values() {
        let input: Vec<String> = ["a", "c", "e", "b", "d", "f"].map(String::from).to_vec();
        let mut v = input.clone();
        let calls = std::cell::Cell::new(0);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            merge_runs(&mut v, 0, 3, 6, &|a: &String, b: &String| {
                calls.set(calls.get() + 1);
                assert!(calls.get() < 3, "third comparison");
                return a < b;
            });
        }));
        assert!(result.is_err());
        assert_eq!(v.len(), input.len());
        assert!(v.iter().all(|s| input.contains(s)));
        // Two values were written back before the panic; "b" is now duplicated.
        assert_eq!(v, ["a", "b", "e", "b", "d", "f"]);
    }
}
