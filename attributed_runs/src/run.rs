// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A contiguous span of text sharing one attribute value.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<A> {
    pub(crate) start: usize,
    pub(crate) len: usize,
    pub(crate) attributes: A,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "Runs stored in a buffer are never empty."
)]
impl<A> Run<A> {
    /// Creates a run starting at byte `start` spanning `len` bytes.
    #[inline]
    pub fn new(start: usize, len: usize, attributes: A) -> Self {
        Self {
            start,
            len,
            attributes,
        }
    }

    /// The start byte offset.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The length of the run in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The end byte offset (exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The byte range covered by this run.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The attributes carried by this run.
    #[inline]
    pub fn attributes(&self) -> &A {
        &self.attributes
    }

    /// Consumes the run, returning its attributes.
    #[inline]
    pub fn into_attributes(self) -> A {
        self.attributes
    }
}
