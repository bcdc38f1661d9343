// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A selected byte range. A zero length is a caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Start byte offset.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
}

impl Selection {
    /// A selection of `len` bytes from `start`.
    #[inline]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// A caret at `index`.
    #[inline]
    pub const fn caret(index: usize) -> Self {
        Self::new(index, 0)
    }

    /// Returns `true` if nothing is selected.
    #[inline]
    pub const fn is_caret(self) -> bool {
        self.len == 0
    }

    /// The end byte offset (exclusive).
    ///
    /// Saturates at `usize::MAX`, so a selection whose end overflows is reported as out of
    /// bounds by validation rather than wrapping.
    #[inline]
    pub const fn end(self) -> usize {
        self.start.saturating_add(self.len)
    }

    /// The selected byte range.
    #[inline]
    pub fn range(self) -> Range<usize> {
        self.start..self.end()
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn end_saturates() {
        let selection = Selection::new(usize::MAX, 2);
        assert_eq!(selection.end(), usize::MAX);
        assert_eq!(selection.range(), usize::MAX..usize::MAX);
        assert_eq!(Selection::from(3..1), Selection::caret(3));
    }
}
