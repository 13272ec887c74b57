//! Top-down recursive driver.

use crate::ordering::Precedes;
use crate::sequence::RandomAccess;
use crate::sort::merge_step::merge_runs;

/// Sort `[begin, end)` by halving, sorting each half, then merging.
///
/// The right half gets the extra element when the length is odd. Recursion
/// depth is `ceil(log2(end - begin))`.
pub(crate) fn sort_recursive<S, P>(seq: &mut S, begin: usize, end: usize, ordering: &P)
where
    S: RandomAccess + ?Sized,
    S::Item: Clone,
    P: Precedes<S::Item> + ?Sized,
{
    if end - begin <= 1 {
        return;
    }

    let middle = begin + (end - begin) / 2;
    sort_recursive(seq, begin, middle, ordering);
    sort_recursive(seq, middle, end, ordering);
    merge_runs(seq, begin, middle, end, ordering);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{Ascending, Descending};

    #[test]
    fn sorts_whole_vector() {
        let mut v = vec![5, 3, 1, 4, 2];
        sort_recursive(&mut v, 0, 5, &Ascending);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorts_subrange_only() {
        let mut v = vec![9, 3, 2, 1, 0];
        sort_recursive(&mut v, 1, 4, &Descending);
        assert_eq!(v, vec![9, 3, 2, 1, 0]);
        sort_recursive(&mut v, 1, 4, &Ascending);
        assert_eq!(v, vec![9, 1, 2, 3, 0]);
    }

    #[test]
    fn single_element_range() {
        let mut v = vec![2, 1];
        sort_recursive(&mut v, 1, 2, &Ascending);
        assert_eq!(v, vec![2, 1]);
    }
}
