// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use attributed_runs::{AttributedRuns, Error, Run, RunsIn, TextRange};

use crate::{Alignment, Attributes, StyleKey, StyleProperty};

/// A text buffer with styled runs and one paragraph alignment.
///
/// This is the authoritative model behind an editor instance. It is created once and mutated in
/// place; every mutating call either succeeds completely or returns an [`Error`] and leaves the
/// document unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedDocument {
    runs: AttributedRuns<Attributes>,
    alignment: Alignment,
}

impl AttributedDocument {
    /// Create a document whose text carries `attributes` throughout.
    pub fn new(text: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            runs: AttributedRuns::new(text, attributes),
            alignment: Alignment::default(),
        }
    }

    /// Create a document from an explicit run partition.
    ///
    /// See [`AttributedRuns::from_runs`] for the requirements on `runs`.
    pub fn from_runs<I>(text: impl Into<String>, runs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Range<usize>, Attributes)>,
    {
        Ok(Self {
            runs: AttributedRuns::from_runs(text, runs)?,
            alignment: Alignment::default(),
        })
    }

    /// The document text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.runs.as_str()
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if the document has no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The runs, in buffer order.
    #[inline]
    pub fn runs(&self) -> &[Run<Attributes>] {
        self.runs.runs()
    }

    /// The paragraph alignment.
    #[inline]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Sets the paragraph alignment.
    #[inline]
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Validates a byte `range` against this document.
    #[inline]
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        self.runs.range(range)
    }

    /// Returns `true` if every run overlapping `range` has the same value for `key`.
    ///
    /// A run without the style counts as a distinct value from any run with it, so a range
    /// where no run carries the style is uniform too. Stops at the first mismatch.
    pub fn attributes_uniform(&self, range: Range<usize>, key: StyleKey) -> Result<bool, Error> {
        let range = self.range(range)?;
        Ok(self.runs.is_uniform_by(range, |attrs| attrs.get(key)))
    }

    /// Returns `true` if every run overlapping a non-empty `range` carries `key`.
    pub fn all_carry(&self, range: Range<usize>, key: StyleKey) -> Result<bool, Error> {
        let range = self.range(range)?;
        let mut runs = self.runs.runs_in(range).peekable();
        Ok(runs.peek().is_some() && runs.all(|(_, attrs)| attrs.has(key)))
    }

    /// Set `property` on every run inside `range`.
    ///
    /// Runs that straddle the range ends are split first. An empty range does nothing; caret
    /// styling belongs to the editor's pending typing style.
    pub fn set_attribute(
        &mut self,
        range: Range<usize>,
        property: StyleProperty,
    ) -> Result<(), Error> {
        self.update(range, |attrs| attrs.insert(property))
    }

    /// Remove `key` from every run inside `range`, with the same splitting as
    /// [`set_attribute`](Self::set_attribute).
    pub fn remove_attribute(&mut self, range: Range<usize>, key: StyleKey) -> Result<(), Error> {
        self.update(range, |attrs| attrs.remove(key))
    }

    /// Rewrite every run inside `range` with `f`.
    pub fn update(
        &mut self,
        range: Range<usize>,
        f: impl FnMut(&mut Attributes),
    ) -> Result<(), Error> {
        self.runs.update_bytes(range, f)
    }

    /// Iterate over `(range, attributes)` for the runs overlapping `range`, clipped to it.
    pub fn enumerate(&self, range: Range<usize>) -> Result<RunsIn<'_, Attributes>, Error> {
        let range = self.range(range)?;
        Ok(self.runs.runs_in(range))
    }

    /// Attributes of every run overlapping `range`, merged so later runs win.
    ///
    /// Fields absent from every run stay absent. Used to summarize a selection for display.
    pub fn merged_attributes(&self, range: Range<usize>) -> Result<Attributes, Error> {
        let mut merged = Attributes::default();
        for (_, attrs) in self.enumerate(range)? {
            merge_into(&mut merged, attrs);
        }
        Ok(merged)
    }

    /// The attributes of the run containing byte `index`.
    pub fn attributes_at(&self, index: usize) -> Option<&Attributes> {
        self.runs.attributes_at(index)
    }

    /// The attributes text typed at `index` should continue.
    pub fn attributes_before(&self, index: usize) -> Option<&Attributes> {
        self.runs.attributes_before(index)
    }

    /// Insert `text` at byte `index` carrying `attributes`.
    pub fn insert(
        &mut self,
        index: usize,
        text: &str,
        attributes: Attributes,
    ) -> Result<TextRange, Error> {
        self.runs.insert(index, text, attributes)
    }

    /// Remove the text in `range`.
    pub fn delete(&mut self, range: Range<usize>) -> Result<(), Error> {
        self.runs.delete(range)
    }

    /// Replace the text in `range` with `text` carrying `attributes`.
    pub fn replace(
        &mut self,
        range: Range<usize>,
        text: &str,
        attributes: Attributes,
    ) -> Result<TextRange, Error> {
        self.runs.replace(range, text, attributes)
    }

    /// Replace the whole text with a single run.
    pub fn set_text(&mut self, text: impl Into<String>, attributes: Attributes) {
        self.runs = AttributedRuns::new(text, attributes);
    }

    /// Merge adjacent runs with equal attributes.
    pub fn coalesce(&mut self) {
        self.runs.coalesce();
    }

    /// Make every font's weight agree with its bold trait.
    ///
    /// Content imported from another representation may carry bold fonts at a lighter weight.
    pub fn normalize_fonts(&mut self) {
        self.runs.update_all(|attrs| {
            if let Some(font) = &mut attrs.font {
                *font = font.normalized();
            }
        });
        self.runs.coalesce();
    }
}

fn merge_into(merged: &mut Attributes, attrs: &Attributes) {
    let Attributes {
        font,
        underline,
        strikethrough,
        baseline_offset,
        foreground,
        background,
        attachment,
    } = attrs;
    if font.is_some() {
        merged.font.clone_from(font);
    }
    merged.underline = underline.or(merged.underline);
    merged.strikethrough = strikethrough.or(merged.strikethrough);
    merged.baseline_offset = baseline_offset.or(merged.baseline_offset);
    merged.foreground = foreground.or(merged.foreground);
    merged.background = background.or(merged.background);
    merged.attachment = attachment.or(merged.attachment);
}
