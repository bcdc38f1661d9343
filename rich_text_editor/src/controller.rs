// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolbar toggles over a document and a selection.

use core::ops::Range;

use peniko::Color;
use rich_text::{
    AttributedDocument, DecorationStyle, Error, FontResolver, Script, StyleKey, StyleProperty,
    SymbolicTraits,
};

use crate::{EditorConfig, PendingTypingStyle, Selection};

/// Direction of a font size step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontSizeStep {
    /// One point larger.
    Increase,
    /// One point smaller.
    Decrease,
}

/// Which color a color pick applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    /// Text color.
    Foreground,
    /// Highlight color.
    Background,
}

/// What a controller operation changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change {
    /// Nothing changed.
    None,
    /// Runs inside this byte range were restyled.
    Document(Range<usize>),
    /// Only the pending typing style changed.
    TypingStyle,
    /// The paragraph alignment changed.
    Alignment,
}

/// Applies toolbar toggles and tracks the pending typing style.
///
/// A caret selection only ever touches the pending style. A non-empty selection decides the
/// toggle direction from the runs it covers and rewrites them. Every operation validates the
/// selection before touching anything, so an out of bounds selection leaves both the document
/// and the pending style untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleToggleController {
    pending: PendingTypingStyle,
    min_font_size: f32,
    max_font_size: f32,
}

impl StyleToggleController {
    /// A controller whose pending style starts from the configured defaults.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            pending: PendingTypingStyle::new(
                config.default_font.clone(),
                config.text_color,
                config.background_color,
            ),
            min_font_size: config.min_font_size,
            max_font_size: config.max_font_size,
        }
    }

    /// The style text typed at the caret will carry.
    pub fn typing_style(&self) -> &PendingTypingStyle {
        &self.pending
    }

    /// Re-seed the pending style from the text before the caret.
    ///
    /// Called when the caret moves. An empty document keeps the current style.
    pub fn reseed(&mut self, document: &AttributedDocument, caret: usize) {
        if let Some(attrs) = document.attributes_before(caret) {
            self.pending = self.pending.continuing(attrs);
        }
    }

    /// The inclusive font size bounds.
    pub fn font_size_bounds(&self) -> (f32, f32) {
        (self.min_font_size, self.max_font_size)
    }

    /// Toggle the style for `key`.
    ///
    /// Only the six on/off styles toggle. Value styles return [`Change::None`]; use
    /// [`step_font_size`](Self::step_font_size) and [`set_color`](Self::set_color) for them.
    pub fn toggle(
        &mut self,
        document: &mut AttributedDocument,
        selection: Selection,
        key: StyleKey,
    ) -> Result<Change, Error> {
        document.range(selection.range())?;
        let change = match key {
            StyleKey::Bold => self.toggle_traits(document, selection, SymbolicTraits::BOLD)?,
            StyleKey::Italic => self.toggle_traits(document, selection, SymbolicTraits::ITALIC)?,
            StyleKey::Underline | StyleKey::Strikethrough => {
                self.toggle_decoration(document, selection, key)?
            }
            StyleKey::Superscript => self.toggle_script(document, selection, Script::Superscript)?,
            StyleKey::Subscript => self.toggle_script(document, selection, Script::Subscript)?,
            StyleKey::FontSize
            | StyleKey::ForegroundColor
            | StyleKey::BackgroundColor
            | StyleKey::BaselineOffset => {
                log::debug!("{key:?} is not a toggle");
                return Ok(Change::None);
            }
        };
        log::debug!("toggled {key:?} over {:?}", selection.range());
        Ok(change)
    }

    fn toggle_traits(
        &mut self,
        document: &mut AttributedDocument,
        selection: Selection,
        traits: SymbolicTraits,
    ) -> Result<Change, Error> {
        if selection.is_caret() {
            self.pending.font = self.pending.font.toggled(traits);
            return Ok(Change::TypingStyle);
        }
        let key = if traits == SymbolicTraits::BOLD {
            StyleKey::Bold
        } else {
            StyleKey::Italic
        };
        let all_on = document.all_carry(selection.range(), key)?;
        document.update(selection.range(), |attrs| attrs.set_traits(traits, !all_on))?;
        document.coalesce();
        Ok(Change::Document(selection.range()))
    }

    fn toggle_decoration(
        &mut self,
        document: &mut AttributedDocument,
        selection: Selection,
        key: StyleKey,
    ) -> Result<Change, Error> {
        let underline = key == StyleKey::Underline;
        if selection.is_caret() {
            let flag = if underline {
                &mut self.pending.underline
            } else {
                &mut self.pending.strikethrough
            };
            *flag = !*flag;
            return Ok(Change::TypingStyle);
        }
        // Partially decorated ranges are overwritten with a single line throughout.
        if document.all_carry(selection.range(), key)? {
            document.remove_attribute(selection.range(), key)?;
        } else {
            let property = if underline {
                StyleProperty::Underline(DecorationStyle::Single)
            } else {
                StyleProperty::Strikethrough(DecorationStyle::Single)
            };
            document.set_attribute(selection.range(), property)?;
        }
        document.coalesce();
        Ok(Change::Document(selection.range()))
    }

    fn toggle_script(
        &mut self,
        document: &mut AttributedDocument,
        selection: Selection,
        script: Script,
    ) -> Result<Change, Error> {
        if selection.is_caret() {
            self.pending.toggle_script(script);
            return Ok(Change::TypingStyle);
        }
        // Bring every run back to the baseline first. If all of them were scripted the toggle
        // ends there; otherwise the whole range is raised or lowered uniformly.
        let mut all_scripted = true;
        document.update(selection.range(), |attrs| {
            all_scripted &= attrs.clear_script();
        })?;
        if !all_scripted {
            document.update(selection.range(), |attrs| attrs.apply_script(script))?;
        }
        document.coalesce();
        Ok(Change::Document(selection.range()))
    }

    /// Step the font size by one point, within the configured bounds.
    ///
    /// Sizes are rounded to whole points. Scripted text steps its nominal size and stays
    /// scripted. A size already at the bound is left alone.
    pub fn step_font_size(
        &mut self,
        document: &mut AttributedDocument,
        selection: Selection,
        step: FontSizeStep,
    ) -> Result<Change, Error> {
        document.range(selection.range())?;
        let bounds = self.font_size_bounds();
        if selection.is_caret() {
            return Ok(match stepped_size(self.pending.font.size, step, bounds) {
                Some(size) => {
                    self.pending.font.size = size;
                    Change::TypingStyle
                }
                None => Change::None,
            });
        }
        document.update(selection.range(), |attrs| {
            let font = attrs.font_or_body();
            if let Some(size) = stepped_size(font.size, step, bounds) {
                attrs.font = Some(font.normalized().with_size(size));
            }
        })?;
        document.coalesce();
        log::debug!("{step:?} font size over {:?}", selection.range());
        Ok(Change::Document(selection.range()))
    }

    /// Apply a picked color.
    ///
    /// At a caret, picking the color already pending resets it to the default.
    pub fn set_color(
        &mut self,
        document: &mut AttributedDocument,
        selection: Selection,
        target: ColorTarget,
        color: Color,
    ) -> Result<Change, Error> {
        document.range(selection.range())?;
        if selection.is_caret() {
            match target {
                ColorTarget::Foreground => self.pending.toggle_foreground(color),
                ColorTarget::Background => self.pending.toggle_background(color),
            }
            return Ok(Change::TypingStyle);
        }
        let property = match target {
            ColorTarget::Foreground => StyleProperty::ForegroundColor(color),
            ColorTarget::Background => StyleProperty::BackgroundColor(color),
        };
        document.set_attribute(selection.range(), property)?;
        document.coalesce();
        Ok(Change::Document(selection.range()))
    }

    /// Switch the font family, falling back to the body font if `resolver` can't provide it.
    pub fn set_font_family(
        &mut self,
        document: &mut AttributedDocument,
        selection: Selection,
        family: &str,
        resolver: &dyn FontResolver,
    ) -> Result<Change, Error> {
        document.range(selection.range())?;
        if selection.is_caret() {
            let mut font = self.pending.font.clone();
            font.family = family.into();
            self.pending.font = font.resolve_or_body(resolver);
            return Ok(Change::TypingStyle);
        }
        document.update(selection.range(), |attrs| {
            let mut font = attrs.font_or_body();
            font.family = family.into();
            attrs.font = Some(font.resolve_or_body(resolver));
        })?;
        document.coalesce();
        Ok(Change::Document(selection.range()))
    }

    /// Advance the paragraph alignment: left, center, right, then left again.
    pub fn cycle_alignment(&mut self, document: &mut AttributedDocument) -> Change {
        let alignment = document.alignment().cycled();
        document.set_alignment(alignment);
        log::debug!("alignment is now {alignment:?}");
        Change::Alignment
    }
}

/// The size one step from `size`, or `None` if `size` is already at the bound in that direction.
pub fn stepped_size(size: f32, step: FontSizeStep, (min, max): (f32, f32)) -> Option<f32> {
    let next = match step {
        FontSizeStep::Increase if size < max => size + 1.0,
        FontSizeStep::Decrease if size > min => size - 1.0,
        _ => return None,
    };
    Some(next.round().clamp(min, max))
}
