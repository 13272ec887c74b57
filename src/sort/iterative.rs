//! Iterative driver with an explicit work stack.
//!
//! Replays exactly the splits and merges of the recursive driver, in the
//! same order, so the two produce identical output for any predicate,
//! including inconsistent ones. Only the call stack is traded for a heap
//! stack of at most `2 * ceil(log2(n)) + 1` frames.

use crate::ordering::Precedes;
use crate::sequence::RandomAccess;
use crate::sort::merge_step::merge_runs;

/// A pending unit of work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
    /// Sort `[begin, end)`.
    Split { begin: usize, end: usize },
    /// Both halves of `[begin, end)` are sorted; merge them.
    Merge { begin: usize, middle: usize, end: usize },
}

pub(crate) fn sort_iterative<S, P>(seq: &mut S, begin: usize, end: usize, ordering: &P)
where
    S: RandomAccess + ?Sized,
    S::Item: Clone,
    P: Precedes<S::Item> + ?Sized,
{
    let mut stack = vec![Frame::Split { begin, end }];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Split { begin, end } => {
                if end - begin <= 1 {
                    continue;
                }
                let middle = begin + (end - begin) / 2;
                // Pushed in reverse: left half runs first, merge runs last.
                stack.push(Frame::Merge { begin, middle, end });
                stack.push(Frame::Split { begin: middle, end });
                stack.push(Frame::Split { begin, end: middle });
            }
            Frame::Merge { begin, middle, end } => {
                merge_runs(seq, begin, middle, end, ordering);
            }
        }
    }
}
