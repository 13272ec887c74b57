//! Ordering predicates.
//!
//! A predicate answers one question: must `a` come before `b`? It has to be
//! a strict weak ordering (irreflexive, transitive, with transitive
//! incomparability). The sort never checks this; an inconsistent predicate
//! produces some permutation of the input and nothing worse.
//!
//! Any `Fn(&T, &T) -> bool` is a predicate, so closures, function pointers
//! and hand-written functor structs all work.

/// A strict weak ordering over `T`.
pub trait Precedes<T: ?Sized> {
    /// Returns true iff `a` must be placed before `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Precedes<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        return self(a, b);
    }
}

/// Natural order, smallest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascending;

impl<T: PartialOrd + ?Sized> Precedes<T> for Ascending {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        return a < b;
    }
}

/// Natural order, largest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Descending;

impl<T: PartialOrd + ?Sized> Precedes<T> for Descending {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        return b < a;
    }
}

/// Orders elements by the natural order of a projected key.
///
/// Elements with equal keys are incomparable, so a stable sort keeps them
/// in input order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByKey<F>(pub F);

impl<T, F, K> Precedes<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        return (self.0)(a) < (self.0)(b);
    }
}

/// Flips another predicate: `b` before `a` whenever the inner says so.
///
/// Equal elements stay equal, so reversing does not reverse their order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<P>(pub P);

impl<T: ?Sized, P: Precedes<T>> Precedes<T> for Reversed<P> {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        return self.0.precedes(b, a);
    }
}
