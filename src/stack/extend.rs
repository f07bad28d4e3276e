// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::TextStack};

// Alloc imports
use alloc::string::String;

impl TextStack {
    /// Pushes each element of `src` in order; the last one ends up on top.
    ///
    /// Stops at the first error, keeping the elements pushed before it.
    #[inline]
    pub fn extend_from_slice<S: AsRef<str>>(&mut self, src: &[S]) -> Result<(), Error> {
        self.try_extend(src.iter().map(<S as AsRef<str>>::as_ref))
    }

    /// Pushes every item yielded by `iter` in order.
    ///
    /// Stops at the first error, keeping the elements pushed before it. The
    /// source iterator may be partially consumed on error.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for item in iter {
            self.push(item)?;
        }
        Ok(())
    }
}

impl TextStack {
    /// Pushes every item, panicking on the first error.
    pub(crate) fn extend_with_max<I>(&mut self, iter: I, max: usize)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for item in iter {
            if let Err(e) = self.push_with_max(item, max) {
                panic!("TextStack::extend: {e}");
            }
        }
    }
}

/// # Panics
///
/// Panics with [`Error::FullCapacity`] if growth would exceed
/// [`TextStack::MAX_CAPACITY`]. Use [`TextStack::try_extend`] to handle that
/// case instead.
impl Extend<String> for TextStack {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.extend_with_max(iter, Self::MAX_CAPACITY);
    }
}

/// # Panics
///
/// Same as `Extend<String>`.
impl<'a> Extend<&'a str> for TextStack {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.extend_with_max(iter, Self::MAX_CAPACITY);
    }
}

/// # Panics
///
/// Same as `Extend<String>`.
impl FromIterator<String> for TextStack {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

/// # Panics
///
/// Same as `Extend<String>`.
impl<'a> FromIterator<&'a str> for TextStack {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}
