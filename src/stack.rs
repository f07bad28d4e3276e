// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `TextStack` type and its inherent API.
//!
//! `TextStack` is a growable LIFO container specialized for strings. It owns a
//! boxed slice of `Option<String>` slots and tracks a logical top. Methods
//! generally mirror `Vec` semantics where they fit, with explicit errors in
//! place of panics.

mod duplicate;
mod extend;
mod new;
mod pop;
mod push;
mod resize;

// Crate imports
use crate::iter::Iter;

// Alloc imports
use alloc::{boxed::Box, string::String};

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
    mem,
};

/// A growable, heap-backed, last-in-first-out stack of strings.
///
/// # Layout and invariants
///
/// Internally, `TextStack` maintains:
///
/// - a backing buffer `buf` whose length is the capacity;
/// - a logical top `top` with `0 <= top <= capacity`;
/// - a `floor`, the smallest capacity the stack will shrink to.
///
/// Slots `buf[..top]` are always `Some`; slots `buf[top..]` are always `None`.
/// The capacity never drops below `floor`.
///
/// # Complexity characteristics
///
/// - [`push`](TextStack::push) and [`pop`](TextStack::pop) are amortized
///   `O(1)`; a single call that resizes costs `O(len)`.
/// - [`peek`](TextStack::peek), [`len`](TextStack::len) and
///   [`is_empty`](TextStack::is_empty) are `O(1)`.
/// - [`duplicate`](TextStack::duplicate) is `O(capacity)` and copies every
///   string.
///
/// # Example
///
/// ```rust
/// use text_stack::TextStack;
///
/// let mut s = TextStack::with_capacity(2).unwrap();
/// s.push("a").unwrap();
/// s.push("b").unwrap();
/// s.push("c").unwrap(); // grows to 4
/// assert_eq!(s.capacity(), 4);
/// assert_eq!(s.iter().collect::<Vec<_>>(), ["c", "b", "a"]);
/// ```
pub struct TextStack {
    pub(crate) buf: Box<[Option<String>]>,
    pub(crate) top: usize,
    pub(crate) floor: usize,
}

impl TextStack {
    /// Capacity (and floor) of a stack built with [`TextStack::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Smallest capacity accepted by [`TextStack::with_capacity`].
    pub const MIN_REQUESTED_CAPACITY: usize = 2;

    /// Largest slot count a buffer of `Option<String>` can represent.
    pub const MAX_CAPACITY: usize = isize::MAX as usize / mem::size_of::<Option<String>>();

    /// Returns the number of allocated slots, occupied or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the smallest capacity this stack will ever shrink to.
    #[inline]
    pub const fn min_capacity(&self) -> usize {
        self.floor
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.top
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Returns `true` if `len == capacity`; the next push will grow.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.top == self.buf.len()
    }

    /// Returns the element `depth` positions below the top (`0` is the top).
    #[inline]
    pub fn get(&self, depth: usize) -> Option<&str> {
        if depth >= self.top {
            return None;
        }
        self.buf[self.top - 1 - depth].as_deref()
    }

    /// Returns `true` if any occupied slot equals `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.iter().any(|s| s == value)
    }

    /// Iterates from the top down, in the order [`pop`](TextStack::pop)
    /// would return elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.buf[..self.top].iter(),
        }
    }
}

impl fmt::Debug for TextStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextStack")
            .field("len", &self.top)
            .field("capacity", &self.capacity())
            .field("elements", &&self.buf[..self.top])
            .finish()
    }
}

// Equality looks only at occupied slots; capacity is not observable content.
impl PartialEq for TextStack {
    fn eq(&self, other: &Self) -> bool {
        self.buf[..self.top] == other.buf[..other.top]
    }
}
impl Eq for TextStack {}
impl Hash for TextStack {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buf[..self.top].hash(state);
    }
}
