// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::TextStack};

// Alloc imports
use alloc::{boxed::Box, string::String};

// Core imports
use core::iter;

impl TextStack {
    /// Constructs an empty stack with [`TextStack::DEFAULT_CAPACITY`] slots.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_validated_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs an empty stack with `capacity` slots.
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity < 2` or
    /// `capacity >= MAX_CAPACITY`.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        validated_capacity(capacity).map(Self::with_validated_capacity)
    }

    fn with_validated_capacity(capacity: usize) -> Self {
        Self {
            buf: empty_slots(capacity),
            top: 0,
            floor: capacity,
        }
    }
}

impl Default for TextStack {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validated_capacity(capacity: usize) -> Result<usize, Error> {
    if capacity < TextStack::MIN_REQUESTED_CAPACITY || capacity >= TextStack::MAX_CAPACITY {
        return Err(Error::InvalidArgument {
            requested: capacity,
        });
    }
    Ok(capacity)
}

pub(crate) fn empty_slots(capacity: usize) -> Box<[Option<String>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}
