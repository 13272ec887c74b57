//! Checks for the guarantees a sort makes.
//!
//! - order: no adjacent pair `(a, b)` has `b` strictly before `a`
//! - permutation: output holds the same multiset as the input
//! - stability: equal elements keep their input order, checked on elements
//!   tagged with their input position

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ordering::Precedes;
use crate::sequence::RandomAccess;

/// Position `i` of the first adjacent pair where `seq[i + 1]` strictly
/// precedes `seq[i]`, or `None` if the sequence is in order.
pub fn first_inversion<S, P>(seq: &S, ordering: &P) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    P: Precedes<S::Item> + ?Sized,
{
    let len = seq.len();
    for i in 1..len {
        if ordering.precedes(seq.get(i), seq.get(i - 1)) {
            return Some(i - 1);
        }
    }
    return None;
}

/// True if the sequence is non-decreasing under `ordering`.
pub fn is_sorted_by<S, P>(seq: &S, ordering: &P) -> bool
where
    S: RandomAccess + ?Sized,
    P: Precedes<S::Item> + ?Sized,
{
    return first_inversion(seq, ordering).is_none();
}

/// True if `a` and `b` hold the same elements with the same multiplicities.
pub fn is_permutation<A, B>(a: &A, b: &B) -> bool
where
    A: RandomAccess + ?Sized,
    B: RandomAccess<Item = A::Item> + ?Sized,
    A::Item: Hash + Eq,
{
    if a.len() != b.len() {
        return false;
    }

    let mut counts: FxHashMap<&A::Item, isize> = FxHashMap::default();
    for i in 0..a.len() {
        *counts.entry(a.get(i)).or_insert(0) += 1;
    }
    for i in 0..b.len() {
        match counts.get_mut(b.get(i)) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    return true;
}

/// True if a sorted sequence of `(value, input_position)` pairs keeps equal
/// values in ascending position order.
///
/// `ordering` compares values only. Under a strict weak ordering equal
/// values sit next to each other once sorted, so adjacent pairs suffice.
pub fn is_stable_tagged<S, T, P>(seq: &S, ordering: &P) -> bool
where
    S: RandomAccess<Item = (T, usize)> + ?Sized,
    P: Precedes<T> + ?Sized,
{
    for i in 1..seq.len() {
        let (prev, prev_pos) = seq.get(i - 1);
        let (next, next_pos) = seq.get(i);
        let equal = !ordering.precedes(prev, next) && !ordering.precedes(next, prev);
        if equal && prev_pos > next_pos {
            return false;
        }
    }
    return true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{Ascending, ByKey};

    #[test]
    fn finds_first_inversion() {
        assert_eq!(first_inversion(&vec![1, 2, 2, 3], &Ascending), None);
        assert_eq!(first_inversion(&vec![1, 3, 2, 0], &Ascending), Some(1));
        assert_eq!(first_inversion(&Vec::<i32>::new(), &Ascending), None);
    }

    #[test]
    fn sorted_check() {
        assert!(is_sorted_by(&[3, 2, 1], &|a: &i32, b: &i32| a > b));
        assert!(!is_sorted_by(&[1, 2, 1], &Ascending));
    }

    #[test]
    fn permutation_counts_duplicates() {
        assert!(is_permutation(&vec![1, 2, 2, 3], &vec![2, 3, 1, 2]));
        assert!(!is_permutation(&vec![1, 2, 2, 3], &vec![1, 2, 3, 3]));
        assert!(!is_permutation(&vec![1, 2], &vec![1, 2, 3]));
        assert!(is_permutation(&Vec::<u8>::new(), &Vec::<u8>::new()));
    }

    #[test]
    fn stability_check_on_tags() {
        let stable = vec![(0, 2), (1, 0), (1, 1)];
        let unstable = vec![(0, 2), (1, 1), (1, 0)];
        assert!(is_stable_tagged(&stable, &Ascending));
        assert!(!is_stable_tagged(&unstable, &Ascending));
    }

    #[test]
    fn stability_check_ignores_order_between_distinct_values() {
        let by_parity = ByKey(|x: &i32| x % 2);
        let out = vec![(4, 3), (2, 5), (3, 0), (1, 4)];
        assert!(is_stable_tagged(&out, &by_parity));
    }
}
