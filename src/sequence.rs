//! Random-access sequences.
//!
//! The merge sort only needs three things from a container: its length,
//! a shared reference to the element at a position, and the ability to
//! overwrite the element at a position. Containers that cannot do this in
//! constant time (linked lists, iterator-only sources) do not implement
//! [`RandomAccess`] and so cannot be handed to the sort at all:
//!
//! ```compile_fail
//! use std::collections::LinkedList;
//!
//! let mut list: LinkedList<i32> = [3, 1, 2].into_iter().collect();
//! sortkit::sort(&mut list, |a: &i32, b: &i32| a < b);
//! ```
//!
//! Complexity (for every provided impl):
//! - len: O(1)
//! - get: O(1)
//! - set: O(1)

use std::collections::VecDeque;

use smallvec::Array;
use smallvec::SmallVec;

/// A mutable, fixed-length sequence with O(1) positional read and write.
///
/// Positions are `0..len()`. Implementations may panic on an out-of-range
/// position; the sort never produces one.
pub trait RandomAccess {
    /// The element type.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Borrow the element at `index`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Overwrite the element at `index`, dropping the previous value.
    fn set(&mut self, index: usize, value: Self::Item);

    /// Check if the sequence has no elements.
    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

impl<T> RandomAccess for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        return <[T]>::len(self);
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        return &self[index];
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        return N;
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        return &self[index];
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        return Vec::len(self);
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        return &self[index];
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T> RandomAccess for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        return VecDeque::len(self);
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        return &self[index];
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<A: Array> RandomAccess for SmallVec<A> {
    type Item = A::Item;

    #[inline]
    fn len(&self) -> usize {
        return SmallVec::len(self);
    }

    #[inline]
    fn get(&self, index: usize) -> &A::Item {
        return &self[index];
    }

    #[inline]
    fn set(&mut self, index: usize, value: A::Item) {
        self[index] = value;
    }
}

impl<S: RandomAccess + ?Sized> RandomAccess for &mut S {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        return (**self).len();
    }

    #[inline]
    fn get(&self, index: usize) -> &S::Item {
        return (**self).get(index);
    }

    #[inline]
    fn set(&mut self, index: usize, value: S::Item) {
        (**self).set(index, value);
    }
}
