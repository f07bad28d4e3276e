// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `text-stack`
//!
//! A `no_std` (with `alloc`), growable, last-in-first-out stack of strings.
//!
//! The core type, [`TextStack`], owns a contiguous buffer of slots and tracks
//! a logical `top ∈ 0..=capacity`. Slots below `top` hold live values; slots
//! at or above it are always empty, so popped strings are released right away.
//!
//! ## Resizing
//!
//! - **Growth**: a push onto a full stack doubles the capacity first. When
//!   doubling would exceed [`TextStack::MAX_CAPACITY`], the push fails with
//!   [`Error::FullCapacity`] and the stack is left unchanged.
//! - **Shrink**: after a pop, if at most a quarter of the slots are occupied
//!   and the capacity is above the stack's floor, the capacity halves
//!   (never below the floor).
//!
//! Both are amortized `O(1)` per operation, exactly like a dynamic array.
//! Resizing never reorders elements.
//!
//! The floor is the capacity the stack was built with: a default stack never
//! shrinks below 10 slots, and a stack built with
//! [`TextStack::with_capacity(n)`](TextStack::with_capacity) never below `n`.
//!
//! ## Errors
//!
//! Every fallible operation returns [`Error`]; nothing panics on bad input
//! and nothing is logged on failure:
//!
//! - [`Error::InvalidArgument`]: construction capacity outside `2..MAX_CAPACITY`.
//! - [`Error::NullArgument`]: [`TextStack::push_option`] received `None`.
//! - [`Error::EmptyContainer`]: [`TextStack::pop`] / [`TextStack::peek`] on an empty stack.
//! - [`Error::FullCapacity`]: growth would overflow [`TextStack::MAX_CAPACITY`].
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `TextStack`, encoded as a
//!     sequence from bottom to top (push order).
//!
//! Resize events are reported through [`tracing`] at `trace` level. The crate
//! never installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use text_stack::TextStack;
//!
//! let mut s = TextStack::new();
//! s.push("Hello").unwrap();
//! s.push("World").unwrap();
//! assert_eq!(s.len(), 2);
//! assert_eq!(s.peek(), Ok("World"));
//! assert_eq!(s.pop().as_deref(), Ok("World"));
//! assert_eq!(s.pop().as_deref(), Ok("Hello"));
//! assert!(s.is_empty());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod stack;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::{IntoIter, Iter};
pub use stack::TextStack;
