// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::{TextStack, new::empty_slots};

impl TextStack {
    /// Returns an independent deep copy: a fresh buffer of the same capacity
    /// holding copies of every occupied slot, with the same floor.
    ///
    /// Mutating either stack afterwards never affects the other.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        let mut buf = empty_slots(self.capacity());
        for (dst, src) in buf.iter_mut().zip(&self.buf[..self.top]) {
            *dst = src.clone();
        }
        Self {
            buf,
            top: self.top,
            floor: self.floor,
        }
    }
}

impl Clone for TextStack {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::TextStack;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn test_duplicate_matches_source() {
        let mut s = TextStack::with_capacity(3).unwrap();
        s.extend_from_slice(&["a", "b", "c", "d"]).unwrap();
        let d = s.duplicate();
        assert_eq!(d.len(), s.len());
        assert_eq!(d.capacity(), s.capacity());
        assert_eq!(d.min_capacity(), s.min_capacity());
        assert_eq!(d, s);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut s = TextStack::new();
        s.extend_from_slice(&["x", "y"]).unwrap();
        let mut d = s.duplicate();

        d.push("only in copy").unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.peek(), Ok("y"));

        s.pop().unwrap();
        s.pop().unwrap();
        assert_eq!(d.len(), 3);
        assert_eq!(d.pop().unwrap(), "only in copy");
        assert_eq!(d.pop().unwrap(), "y");
    }

    #[test]
    fn test_clone_delegates_to_duplicate() {
        let s: TextStack = ["1", "2"].into_iter().collect();
        let c = s.clone();
        assert_eq!(c.capacity(), s.capacity());
        assert_eq!(c.iter().collect::<Vec<_>>(), ["2", "1"]);
    }

    #[test]
    fn test_duplicate_empty() {
        let s = TextStack::with_capacity(2).unwrap();
        let d = s.duplicate();
        assert!(d.is_empty());
        assert_eq!(d.capacity(), 2);
    }

    proptest! {
        #[test]
        fn prop_duplicate_pops_in_same_order(values in proptest::collection::vec("[a-z]{0,6}", 0..40)) {
            let mut s = TextStack::new();
            s.extend_from_slice(&values).unwrap();
            let mut d = s.duplicate();
            while let Ok(v) = s.pop() {
                prop_assert_eq!(d.pop().unwrap(), v);
            }
            prop_assert!(d.is_empty());
        }
    }
}
