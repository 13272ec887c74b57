//! Containers admitted by capability: a size query and positional access.
//!
//! Anything implementing [`Indexed`] can be wrapped in a
//! [`ContainerAdapter`] or sorted with [`exchange_sort`]. Containers without
//! positional access are turned away by the compiler:
//!
//! ```compile_fail
//! use std::collections::LinkedList;
//! use pedagogy::capability::exchange_sort;
//!
//! let mut list: LinkedList<i32> = [5, 3, 1].into_iter().collect();
//! exchange_sort(&mut list);
//! ```

use std::collections::VecDeque;
use std::fmt::Display;
use std::ops::Index;
use std::ops::IndexMut;

/// A container with a size and positional read/write.
pub trait Indexed: IndexMut<usize> {
    fn size(&self) -> usize;

    /// Exchange the elements at two positions.
    fn swap_at(&mut self, a: usize, b: usize);
}

impl<T> Indexed for Vec<T> {
    fn size(&self) -> usize {
        return self.len();
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T, const N: usize> Indexed for [T; N] {
    fn size(&self) -> usize {
        return N;
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T> Indexed for VecDeque<T> {
    fn size(&self) -> usize {
        return self.len();
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

/// Owns a copy of an [`Indexed`] container and renders it.
#[derive(Clone, Debug)]
pub struct ContainerAdapter<C: Indexed> {
    data: C,
}

impl<C: Indexed> ContainerAdapter<C> {
    pub fn new(container: C) -> ContainerAdapter<C> {
        return ContainerAdapter { data: container };
    }

    pub fn get(&self) -> &C {
        return &self.data;
    }

    pub fn into_inner(self) -> C {
        return self.data;
    }
}

impl<C> ContainerAdapter<C>
where
    C: Indexed,
    <C as Index<usize>>::Output: Display,
{
    /// Elements separated by single spaces.
    pub fn render(&self) -> String {
        let parts: Vec<String> = (0..self.data.size()).map(|i| self.data[i].to_string()).collect();
        return parts.join(" ");
    }
}

/// Sort ascending by repeated exchanges. O(n^2); for small inputs only.
///
/// Position `i` is fixed by swapping in any later element that is smaller.
pub fn exchange_sort<C>(container: &mut C)
where
    C: Indexed + ?Sized,
    <C as Index<usize>>::Output: PartialOrd,
{
    let n = container.size();
    for i in 0..n {
        for j in (i + 1)..n {
            if container[i] > container[j] {
                container.swap_at(i, j);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_vector_and_array() {
        let mut v = vec![5, 3, 1, 4, 2];
        exchange_sort(&mut v);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);

        let mut a = [5, 3, 1, 4, 2];
        exchange_sort(&mut a);
        assert_eq!(a, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorts_deque() {
        let mut d: VecDeque<char> = "dcab".chars().collect();
        exchange_sort(&mut d);
        assert_eq!(d.iter().collect::<String>(), "abcd");
    }

    #[test]
    fn adapter_keeps_its_own_copy() {
        let mut v = vec![5, 3, 1, 4, 2];
        let adapter = ContainerAdapter::new(v.clone());
        exchange_sort(&mut v);
        assert_eq!(adapter.render(), "5 3 1 4 2");
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn adapter_over_array() {
        let adapter = ContainerAdapter::new([1.5, 2.0]);
        assert_eq!(adapter.render(), "1.5 2");
        assert_eq!(adapter.get().size(), 2);
        assert_eq!(adapter.into_inner(), [1.5, 2.0]);
    }

    #[test]
    fn empty_container() {
        let mut v: Vec<i32> = Vec::new();
        exchange_sort(&mut v);
        assert_eq!(ContainerAdapter::new(v).render(), "");
    }
}
