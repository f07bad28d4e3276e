// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    stack::{TextStack, new::empty_slots},
};

// Alloc imports
use alloc::string::String;

impl TextStack {
    /// Removes and returns the top element, clearing its slot.
    ///
    /// Returns [`Error::EmptyContainer`] if the stack is empty. May halve the
    /// buffer afterwards (see the crate docs).
    #[inline]
    pub fn pop(&mut self) -> Result<String, Error> {
        let last = self.top.checked_sub(1).ok_or(Error::EmptyContainer)?;
        let value = self.buf[last].take().ok_or(Error::EmptyContainer)?;
        self.top = last;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Returns the top element without removing it.
    ///
    /// Returns [`Error::EmptyContainer`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&str, Error> {
        self.get(0).ok_or(Error::EmptyContainer)
    }

    /// Drops every element and resets the buffer to the floor capacity.
    pub fn clear(&mut self) {
        self.buf = empty_slots(self.floor);
        self.top = 0;
    }
}
