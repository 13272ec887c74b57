//! LIFO stack adapters.
//!
//! `Stack<T, C>` puts a push/pop/top interface over any container that can
//! grow and shrink at its back. The default backing is a `VecDeque`.
//! `CharStack` is the string-backed variant: it stores characters in a
//! `String` and hands out `top()` by value since a `String` cannot lend a
//! `&char`.
//!
//! Complexity:
//! - push: amortised O(1)
//! - pop / top: O(1)

use std::collections::VecDeque;

use crate::error::StackError;

/// A container a [`Stack`] can sit on.
pub trait Backing<T>: Default {
    fn push_back(&mut self, value: T);
    fn pop_back(&mut self) -> Option<T>;
    fn back(&self) -> Option<&T>;
    fn back_mut(&mut self) -> Option<&mut T>;
    fn len(&self) -> usize;
}

impl<T> Backing<T> for VecDeque<T> {
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        return VecDeque::pop_back(self);
    }

    fn back(&self) -> Option<&T> {
        return VecDeque::back(self);
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        return VecDeque::back_mut(self);
    }

    fn len(&self) -> usize {
        return VecDeque::len(self);
    }
}

impl<T> Backing<T> for Vec<T> {
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        return self.pop();
    }

    fn back(&self) -> Option<&T> {
        return self.last();
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        return self.last_mut();
    }

    fn len(&self) -> usize {
        return Vec::len(self);
    }
}

/// A last-in first-out stack over a [`Backing`] container.
pub struct Stack<T, C: Backing<T> = VecDeque<T>> {
    data: C,
    _item: std::marker::PhantomData<T>,
}

impl<T, C: Backing<T>> Stack<T, C> {
    pub fn new() -> Stack<T, C> {
        return Stack {
            data: C::default(),
            _item: std::marker::PhantomData,
        };
    }

    pub fn push(&mut self, value: T) {
        self.data.push_back(value);
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T, StackError> {
        return self.data.pop_back().ok_or(StackError::Empty { operation: "pop" });
    }

    /// Borrow the top element.
    pub fn top(&self) -> Result<&T, StackError> {
        return self.data.back().ok_or(StackError::Empty { operation: "top" });
    }

    pub fn top_mut(&mut self) -> Result<&mut T, StackError> {
        return self.data.back_mut().ok_or(StackError::Empty { operation: "top" });
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.data.len() == 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.data.len();
    }
}

// Written by hand so the bounds fall on the backing container only.
impl<T, C: Backing<T>> Default for Stack<T, C> {
    fn default() -> Stack<T, C> {
        return Stack::new();
    }
}

impl<T, C: Backing<T> + Clone> Clone for Stack<T, C> {
    fn clone(&self) -> Stack<T, C> {
        return Stack {
            data: self.data.clone(),
            _item: std::marker::PhantomData,
        };
    }
}

impl<T, C: Backing<T> + std::fmt::Debug> std::fmt::Debug for Stack<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.debug_struct("Stack").field("data", &self.data).finish();
    }
}

/// A stack of characters stored in a `String`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharStack {
    data: String,
}

impl CharStack {
    pub fn new() -> CharStack {
        return CharStack { data: String::new() };
    }

    pub fn push(&mut self, c: char) {
        self.data.push(c);
    }

    pub fn pop(&mut self) -> Result<char, StackError> {
        return self.data.pop().ok_or(StackError::Empty { operation: "pop" });
    }

    pub fn top(&self) -> Result<char, StackError> {
        return self.data.chars().next_back().ok_or(StackError::Empty { operation: "top" });
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.data.is_empty();
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        return self.data.chars().count();
    }

    /// Contents from bottom to top.
    pub fn as_str(&self) -> &str {
        return &self.data;
    }
}
