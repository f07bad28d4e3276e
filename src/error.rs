// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `TextStack`.
//!
//! These errors represent argument, emptiness, and capacity conditions.
//! They are `Copy` and implement `core::error::Error`.

// Crate imports
use crate::stack::TextStack;

// External imports - thiserror
use thiserror::Error as ThisError;

/// Errors returned by operations on [`TextStack`](crate::TextStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// The requested construction capacity is too small to be useful or too
    /// large to represent.
    #[error("invalid capacity {requested}: must be in 2..{}", TextStack::MAX_CAPACITY)]
    InvalidArgument {
        /// The capacity the caller asked for.
        requested: usize,
    },
    /// An absent value was offered where a string is required.
    #[error("expected a string, not an absent value")]
    NullArgument,
    /// The operation needs at least one element.
    #[error("stack is empty")]
    EmptyContainer,
    /// Doubling the capacity would exceed [`TextStack::MAX_CAPACITY`].
    #[error("capacity {capacity} cannot grow further")]
    FullCapacity {
        /// The capacity at the time growth was attempted.
        capacity: usize,
    },
}
