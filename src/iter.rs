// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`TextStack`](crate::TextStack).
//!
//! Both iterators walk from the top down, the order [`TextStack::pop`] would
//! return elements, and support `DoubleEndedIterator`, `ExactSizeIterator`,
//! and `FusedIterator`.
//!
//! - `Iter<'a>` borrows and yields `&str`.
//! - `IntoIter` owns the stack and yields `String`.

// Crate imports
use crate::stack::TextStack;

// Alloc imports
use alloc::string::String;

// Core imports
use core::{iter::FusedIterator, slice};

/// Borrowing iterator returned by [`TextStack::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    pub(crate) inner: slice::Iter<'a, Option<String>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next_back().and_then(Option::as_deref)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<&'a str> {
        self.inner.next().and_then(Option::as_deref)
    }
}
impl FusedIterator for Iter<'_> {}
impl ExactSizeIterator for Iter<'_> {}

/// Owned iterator returned by `TextStack::into_iter()`.
///
/// Yields elements by value from the top down; [`DoubleEndedIterator`]
/// yields from the bottom up.
#[derive(Debug)]
pub struct IntoIter {
    pub(crate) v: TextStack,
    pub(crate) bottom: usize,
    pub(crate) top: usize, // exclusive
}

impl Iterator for IntoIter {
    type Item = String;
    fn next(&mut self) -> Option<String> {
        if self.bottom < self.top {
            self.top -= 1;
            self.v.buf[self.top].take()
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.top - self.bottom;
        (rem, Some(rem))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<String> {
        if self.bottom < self.top {
            let i = self.bottom;
            self.bottom += 1;
            self.v.buf[i].take()
        } else {
            None
        }
    }
}
impl FusedIterator for IntoIter {}
impl ExactSizeIterator for IntoIter {}

impl<'a> IntoIterator for &'a TextStack {
    type Item = &'a str;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl IntoIterator for TextStack {
    type Item = String;
    type IntoIter = IntoIter;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            bottom: 0,
            top: self.top,
            v: self,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::TextStack;
    use alloc::{string::String, vec::Vec};

    #[test]
    fn test_iter_matches_pop_order() {
        let mut s: TextStack = ["a", "b", "c"].into_iter().collect();
        let seen: Vec<String> = s.iter().map(String::from).collect();
        let mut popped = Vec::new();
        while let Ok(v) = s.pop() {
            popped.push(v);
        }
        assert_eq!(seen, popped);
    }

    #[test]
    fn test_iter_double_ended() {
        let s: TextStack = ["1", "2", "3", "4"].into_iter().collect();
        let mut it = s.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some("4"));
        assert_eq!(it.next_back(), Some("1"));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next(), Some("3"));
        assert_eq!(it.next(), Some("2"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_ref_into_iter() {
        let s: TextStack = ["x", "y"].into_iter().collect();
        let mut out = Vec::new();
        for v in &s {
            out.push(v);
        }
        assert_eq!(out, ["y", "x"]);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let s: TextStack = ["10", "20", "30", "40"].into_iter().collect();
        let mut it = s.into_iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.next().as_deref(), Some("40"));
        assert_eq!(it.next_back().as_deref(), Some("10"));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.next().as_deref(), Some("30"));
        assert_eq!(it.next().as_deref(), Some("20"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_iter_empty() {
        let mut it = TextStack::new().into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn test_into_iter_collect_reverses_push_order() {
        let s: TextStack = ["a", "b", "c"].into_iter().collect();
        let v: Vec<String> = s.into_iter().collect();
        assert_eq!(v, ["c", "b", "a"]);
    }
}
