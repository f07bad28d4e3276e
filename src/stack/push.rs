// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::TextStack};

// Alloc imports
use alloc::string::String;

impl TextStack {
    /// Pushes `value` as the new top, doubling the buffer first if full.
    ///
    /// Returns [`Error::FullCapacity`] only when doubling would exceed
    /// [`TextStack::MAX_CAPACITY`]; the stack is unchanged in that case.
    #[inline]
    pub fn push(&mut self, value: impl Into<String>) -> Result<(), Error> {
        self.push_with_max(value, Self::MAX_CAPACITY)
    }

    pub(crate) fn push_with_max(
        &mut self,
        value: impl Into<String>,
        max: usize,
    ) -> Result<(), Error> {
        if self.is_full() {
            self.grow_with_max(max)?;
        }
        self.buf[self.top] = Some(value.into());
        self.top += 1;
        Ok(())
    }

    /// Pushes `value` if present; returns [`Error::NullArgument`] for `None`.
    ///
    /// The stack is unchanged on error.
    #[inline]
    pub fn push_option<S: Into<String>>(&mut self, value: Option<S>) -> Result<(), Error> {
        let value = value.ok_or(Error::NullArgument)?;
        self.push(value)
    }
}
