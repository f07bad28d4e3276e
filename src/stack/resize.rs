// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Geometric grow/shrink policy.
//!
//! The capacity arithmetic lives in free functions so the overflow edge can be
//! exercised without allocating a buffer anywhere near [`TextStack::MAX_CAPACITY`].

// Crate imports
use crate::{
    error::Error,
    stack::{TextStack, new::empty_slots},
};

/// Capacity after doubling `capacity`, or [`Error::FullCapacity`] if that would
/// exceed `max`.
pub(crate) fn grown_capacity(capacity: usize, max: usize) -> Result<usize, Error> {
    match capacity.checked_mul(2) {
        Some(next) if next <= max => Ok(next),
        _ => Err(Error::FullCapacity { capacity }),
    }
}

/// Capacity after a pop leaves `len` occupied slots, or `None` if no shrink is due.
pub(crate) fn shrunk_capacity(len: usize, capacity: usize, floor: usize) -> Option<usize> {
    if capacity > floor && len <= capacity / 4 {
        Some((capacity / 2).max(floor))
    } else {
        None
    }
}

impl TextStack {
    /// Doubles the buffer unless that would exceed `max`. Leaves `self`
    /// unchanged on error.
    pub(crate) fn grow_with_max(&mut self, max: usize) -> Result<(), Error> {
        let next = grown_capacity(self.capacity(), max)?;
        self.reallocate(next);
        Ok(())
    }

    /// Halves the buffer if occupancy has dropped to a quarter or less.
    pub(crate) fn shrink_if_sparse(&mut self) {
        if let Some(next) = shrunk_capacity(self.top, self.capacity(), self.floor) {
            self.reallocate(next);
        }
    }

    /// Moves the occupied prefix into a fresh buffer of `capacity` slots.
    pub(crate) fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.top);
        tracing::trace!(
            from = self.capacity(),
            to = capacity,
            len = self.top,
            "resizing text stack"
        );
        let mut next = empty_slots(capacity);
        for (dst, src) in next.iter_mut().zip(&mut self.buf[..self.top]) {
            *dst = src.take();
        }
        self.buf = next;
    }
}
