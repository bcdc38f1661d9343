// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::text_range::validate_range;
use crate::{Error, Run, TextRange};

/// A text buffer partitioned into attributed runs.
///
/// The runs are contiguous, non-overlapping, and cover `0..len` in buffer order. An empty buffer
/// has no runs. Adjacent runs may carry equal attributes; [`coalesce`](Self::coalesce) merges
/// them, but nothing here requires the runs to be maximal.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedRuns<A> {
    text: String,
    runs: Vec<Run<A>>,
}

impl<A: Clone + PartialEq> AttributedRuns<A> {
    /// Create a buffer with a single run carrying `attributes`.
    pub fn new(text: impl Into<String>, attributes: A) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run::new(0, text.len(), attributes)]
        };
        Self { text, runs }
    }

    /// Create a buffer from an explicit partition.
    ///
    /// The ranges must be in buffer order, start at `0`, and each must begin where the previous
    /// one ended, finishing at the text length. Empty ranges are skipped.
    pub fn from_runs<I>(text: impl Into<String>, runs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Range<usize>, A)>,
    {
        let text = text.into();
        let mut out = Vec::new();
        let mut cursor = 0;
        for (range, attributes) in runs {
            validate_range(&text, &range)?;
            if range.start != cursor {
                return Err(Error::discontiguous(range.start, range.end, text.len()));
            }
            if range.is_empty() {
                continue;
            }
            cursor = range.end;
            out.push(Run::new(range.start, range.len(), attributes));
        }
        if cursor != text.len() {
            return Err(Error::discontiguous(cursor, text.len(), text.len()));
        }
        Ok(Self { text, runs: out })
    }

    /// Borrow the underlying text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The runs, in buffer order.
    #[inline]
    pub fn runs(&self) -> &[Run<A>] {
        &self.runs
    }

    /// Validates a byte `range` against this text and returns a [`TextRange`].
    #[inline]
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.text, range)
    }

    /// The attributes of the run containing byte `index`.
    pub fn attributes_at(&self, index: usize) -> Option<&A> {
        self.runs
            .get(self.runs.partition_point(|run| run.end() <= index))
            .map(Run::attributes)
    }

    /// The attributes that text inserted at `index` would naturally continue.
    ///
    /// This is the run holding the character before `index`, or the first run at the start of
    /// the buffer. Returns `None` for an empty buffer.
    pub fn attributes_before(&self, index: usize) -> Option<&A> {
        self.attributes_at(index.saturating_sub(1))
            .or_else(|| self.runs.last().map(Run::attributes))
    }

    /// Iterate over the runs overlapping `range`, clipped to it, from left to right.
    ///
    /// An empty range yields nothing. The iterator can be cloned to restart it.
    pub fn runs_in(&self, range: TextRange) -> RunsIn<'_, A> {
        let (start, end) = self.clip(range);
        let runs = if start == end {
            &self.runs[..0]
        } else {
            let first = self.runs.partition_point(|run| run.end() <= start);
            let last = self.runs.partition_point(|run| run.start < end);
            &self.runs[first..last]
        };
        RunsIn {
            runs: runs.iter(),
            start,
            end,
        }
    }

    /// Returns `true` if `key` yields the same value for every run overlapping `range`.
    ///
    /// Stops at the first run that differs. An empty range is trivially uniform.
    pub fn is_uniform_by<K, F>(&self, range: TextRange, mut key: F) -> bool
    where
        K: PartialEq,
        F: FnMut(&A) -> K,
    {
        let mut values = self.runs_in(range).map(|(_, attributes)| key(attributes));
        let Some(first) = values.next() else {
            return true;
        };
        values.all(|value| value == first)
    }

    /// Apply `f` to the attributes of every run inside `range`.
    ///
    /// Runs straddling either end of the range are split first, so text outside the range keeps
    /// its attributes. An empty range does nothing. The range is checked again against the
    /// current text, so a range made stale by an edit is rejected rather than clipped.
    pub fn update(&mut self, range: TextRange, mut f: impl FnMut(&mut A)) -> Result<(), Error> {
        validate_range(&self.text, &range.as_range())?;
        if range.is_empty() {
            return Ok(());
        }
        let first = self.split_at(range.start());
        let last = self.split_at(range.end());
        for run in &mut self.runs[first..last] {
            f(&mut run.attributes);
        }
        Ok(())
    }

    /// Apply `f` to the runs inside the byte `range`, after validating it.
    pub fn update_bytes(
        &mut self,
        range: Range<usize>,
        f: impl FnMut(&mut A),
    ) -> Result<(), Error> {
        let range = self.range(range)?;
        self.update(range, f)
    }

    /// Apply `f` to the attributes of every run.
    pub fn update_all(&mut self, mut f: impl FnMut(&mut A)) {
        for run in &mut self.runs {
            f(&mut run.attributes);
        }
    }

    /// Insert `text` at byte `index` as a new run carrying `attributes`.
    ///
    /// The new run is merged with equal neighbours. Returns the range of the inserted text.
    pub fn insert(&mut self, index: usize, text: &str, attributes: A) -> Result<TextRange, Error> {
        validate_range(&self.text, &(index..index))?;
        if text.is_empty() {
            return Ok(TextRange::new_unchecked(index, index));
        }
        let ix = self.split_at(index);
        let inserted = text.len();
        self.text.insert_str(index, text);
        for run in &mut self.runs[ix..] {
            run.start += inserted;
        }
        self.runs.insert(ix, Run::new(index, inserted, attributes));
        self.merge_around(ix);
        Ok(TextRange::new_unchecked(index, index + inserted))
    }

    /// Remove the text in byte `range` along with its runs.
    pub fn delete(&mut self, range: Range<usize>) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        if range.is_empty() {
            return Ok(());
        }
        let first = self.split_at(range.start);
        let last = self.split_at(range.end);
        self.runs.drain(first..last);
        let removed = range.len();
        for run in &mut self.runs[first..] {
            run.start -= removed;
        }
        self.text.replace_range(range, "");
        self.merge_around(first);
        Ok(())
    }

    /// Replace the text in byte `range` with `text` carrying `attributes`.
    pub fn replace(
        &mut self,
        range: Range<usize>,
        text: &str,
        attributes: A,
    ) -> Result<TextRange, Error> {
        validate_range(&self.text, &range)?;
        let start = range.start;
        self.delete(range)?;
        self.insert(start, text, attributes)
    }

    /// Merge adjacent runs with equal attributes.
    pub fn coalesce(&mut self) {
        self.runs.dedup_by(|next, prev| {
            if next.attributes == prev.attributes {
                prev.len += next.len;
                true
            } else {
                false
            }
        });
    }

    /// Clip a possibly stale range to the current text.
    fn clip(&self, range: TextRange) -> (usize, usize) {
        let end = range.end().min(self.text.len());
        (range.start().min(end), end)
    }

    /// Ensure a run boundary at `offset`, returning the index of the run starting there.
    ///
    /// Returns `runs.len()` when `offset` is the end of the buffer.
    fn split_at(&mut self, offset: usize) -> usize {
        let ix = self.runs.partition_point(|run| run.end() <= offset);
        let Some(run) = self.runs.get_mut(ix) else {
            return ix;
        };
        if run.start == offset {
            return ix;
        }
        let head = offset - run.start;
        let tail = Run::new(offset, run.len - head, run.attributes.clone());
        run.len = head;
        self.runs.insert(ix + 1, tail);
        ix + 1
    }

    /// Merge the run at `ix` with equal neighbours on either side.
    fn merge_around(&mut self, ix: usize) {
        if ix + 1 < self.runs.len() && self.runs[ix].attributes == self.runs[ix + 1].attributes {
            let next = self.runs.remove(ix + 1);
            self.runs[ix].len += next.len;
        }
        if ix > 0
            && ix < self.runs.len()
            && self.runs[ix - 1].attributes == self.runs[ix].attributes
        {
            let this = self.runs.remove(ix);
            self.runs[ix - 1].len += this.len;
        }
    }
}

/// Iterator over the runs overlapping a range, clipped to that range.
///
/// Created by [`AttributedRuns::runs_in`].
#[derive(Clone, Debug)]
pub struct RunsIn<'a, A> {
    runs: core::slice::Iter<'a, Run<A>>,
    start: usize,
    end: usize,
}

impl<'a, A> Iterator for RunsIn<'a, A> {
    type Item = (Range<usize>, &'a A);

    fn next(&mut self) -> Option<Self::Item> {
        let run = self.runs.next()?;
        Some((
            run.start.max(self.start)..run.end().min(self.end),
            &run.attributes,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.runs.size_hint()
    }
}

impl<A> ExactSizeIterator for RunsIn<'_, A> {}
