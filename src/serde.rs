// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`TextStack`](crate::TextStack).
//!
//! - **Serialize**: as a sequence of strings from the bottom up (push order).
//! - **Deserialize**: from any sequence of strings, pushed in order, so a
//!   round trip preserves pop order. `null` elements are rejected.
//!
//! Capacity is not part of the encoding; a deserialized stack starts from
//! [`TextStack::DEFAULT_CAPACITY`] and grows as needed.

// Crate imports
use crate::{error::Error, stack::TextStack};

// Alloc imports
use alloc::string::String;

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl Serialize for TextStack {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self.iter().rev() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct StackVisitor;

impl<'de> de::Visitor<'de> for StackVisitor {
    type Value = TextStack;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of strings")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = TextStack::new();
        while let Some(elem) = a.next_element::<Option<String>>()? {
            out.push_option(elem).map_err(de_error)?;
        }
        Ok(out)
    }
}

fn de_error<E: de::Error>(e: Error) -> E {
    E::custom(e)
}

impl<'de> Deserialize<'de> for TextStack {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(StackVisitor)
    }
}
