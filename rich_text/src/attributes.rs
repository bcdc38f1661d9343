// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::{
    Attachment, DecorationStyle, FontDescriptor, Script, StyleKey, StyleProperty, SymbolicTraits,
    DEFAULT_FONT_SIZE, SCRIPT_SCALE,
};

/// The attributes carried by one run.
///
/// Every field is optional; an absent field means the host default applies (body font, label
/// color, clear background, no decoration, no baseline offset).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    /// Font, including bold/italic traits and the displayed point size.
    pub font: Option<FontDescriptor>,
    /// Underline decoration.
    pub underline: Option<DecorationStyle>,
    /// Strikethrough decoration.
    pub strikethrough: Option<DecorationStyle>,
    /// Baseline offset in points. Positive is superscript, negative is subscript.
    pub baseline_offset: Option<f32>,
    /// Text color.
    pub foreground: Option<Color>,
    /// Background color.
    pub background: Option<Color>,
    /// Inline image. Only set on [`OBJECT_REPLACEMENT`](crate::OBJECT_REPLACEMENT) text.
    pub attachment: Option<Attachment>,
}

impl Attributes {
    /// Attributes with only a font set.
    pub fn with_font(font: FontDescriptor) -> Self {
        Self {
            font: Some(font),
            ..Self::default()
        }
    }

    /// The value for `key`, or `None` if the style is absent.
    pub fn get(&self, key: StyleKey) -> Option<StyleProperty> {
        match key {
            StyleKey::Bold => self
                .font
                .as_ref()
                .filter(|font| font.is_bold())
                .map(|_| StyleProperty::Bold),
            StyleKey::Italic => self
                .font
                .as_ref()
                .filter(|font| font.is_italic())
                .map(|_| StyleProperty::Italic),
            StyleKey::Underline => self.underline.map(StyleProperty::Underline),
            StyleKey::Strikethrough => self.strikethrough.map(StyleProperty::Strikethrough),
            StyleKey::Superscript => (self.script() == Some(Script::Superscript))
                .then_some(StyleProperty::Superscript),
            StyleKey::Subscript => {
                (self.script() == Some(Script::Subscript)).then_some(StyleProperty::Subscript)
            }
            StyleKey::FontSize => self
                .font
                .as_ref()
                .map(|font| StyleProperty::FontSize(font.size)),
            StyleKey::ForegroundColor => self.foreground.map(StyleProperty::ForegroundColor),
            StyleKey::BackgroundColor => self.background.map(StyleProperty::BackgroundColor),
            StyleKey::BaselineOffset => self
                .baseline_offset
                .filter(|offset| *offset != 0.0)
                .map(StyleProperty::BaselineOffset),
        }
    }

    /// Returns `true` if the style for `key` is present.
    #[inline]
    pub fn has(&self, key: StyleKey) -> bool {
        self.get(key).is_some()
    }

    /// Set a style, overwriting any previous value for the same key.
    ///
    /// Setting a trait or a font size on attributes without a font starts from the body font.
    /// Setting a script first clears any existing script so the size is only scaled once.
    pub fn insert(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::Bold => self.set_traits(SymbolicTraits::BOLD, true),
            StyleProperty::Italic => self.set_traits(SymbolicTraits::ITALIC, true),
            StyleProperty::Underline(style) => self.underline = Some(style),
            StyleProperty::Strikethrough(style) => self.strikethrough = Some(style),
            StyleProperty::Superscript => {
                self.clear_script();
                self.apply_script(Script::Superscript);
            }
            StyleProperty::Subscript => {
                self.clear_script();
                self.apply_script(Script::Subscript);
            }
            StyleProperty::FontSize(size) => self.font = Some(self.font_or_body().with_size(size)),
            StyleProperty::ForegroundColor(color) => self.foreground = Some(color),
            StyleProperty::BackgroundColor(color) => self.background = Some(color),
            StyleProperty::BaselineOffset(offset) => {
                self.baseline_offset = (offset != 0.0).then_some(offset);
            }
        }
    }

    /// Remove the style for `key`.
    ///
    /// Removing a font size resets it to [`DEFAULT_FONT_SIZE`] and keeps the family and traits.
    pub fn remove(&mut self, key: StyleKey) {
        match key {
            StyleKey::Bold => {
                if self.font.is_some() {
                    self.set_traits(SymbolicTraits::BOLD, false);
                }
            }
            StyleKey::Italic => {
                if self.font.is_some() {
                    self.set_traits(SymbolicTraits::ITALIC, false);
                }
            }
            StyleKey::Underline => self.underline = None,
            StyleKey::Strikethrough => self.strikethrough = None,
            StyleKey::Superscript | StyleKey::Subscript => {
                if self.has(key) {
                    self.clear_script();
                }
            }
            StyleKey::FontSize => {
                if let Some(font) = &mut self.font {
                    font.size = DEFAULT_FONT_SIZE;
                }
            }
            StyleKey::ForegroundColor => self.foreground = None,
            StyleKey::BackgroundColor => self.background = None,
            StyleKey::BaselineOffset => self.baseline_offset = None,
        }
    }

    /// The script implied by the baseline offset.
    pub fn script(&self) -> Option<Script> {
        self.baseline_offset.and_then(Script::from_offset)
    }

    /// The run's font, or the body font when none is set.
    pub fn font_or_body(&self) -> FontDescriptor {
        self.font
            .clone()
            .unwrap_or_else(|| FontDescriptor::body(DEFAULT_FONT_SIZE))
    }

    /// The point size text in these attributes is drawn at.
    ///
    /// Fonts store the nominal size; scripted runs are drawn at [`SCRIPT_SCALE`] of it.
    pub fn displayed_font_size(&self) -> f32 {
        let size = self.font.as_ref().map_or(DEFAULT_FONT_SIZE, |font| font.size);
        if self.script().is_some() {
            size * SCRIPT_SCALE
        } else {
            size
        }
    }

    /// Set or clear symbolic traits, applying the bold weight rule.
    pub fn set_traits(&mut self, traits: SymbolicTraits, enabled: bool) {
        self.font = Some(self.font_or_body().with_traits(traits, enabled));
    }

    /// Return scripted text to the baseline.
    ///
    /// Returns `true` if the attributes were scripted.
    pub fn clear_script(&mut self) -> bool {
        self.baseline_offset
            .take()
            .is_some_and(|offset| offset != 0.0)
    }

    /// Raise or lower baseline text.
    ///
    /// The offset is proportional to the nominal size, which is left untouched so clearing the
    /// script later restores the run exactly. Traits and weight are kept.
    pub fn apply_script(&mut self, script: Script) {
        let font = self.font_or_body();
        self.baseline_offset = Some(script.baseline_factor() * font.size);
        self.font = Some(font);
    }
}

#[cfg(test)]
mod tests {
    use super::Attributes;
    use crate::{
        DecorationStyle, FontDescriptor, FontWeight, Script, StyleKey, StyleProperty,
        SymbolicTraits,
    };

    fn body() -> Attributes {
        Attributes::with_font(FontDescriptor::body(20.0))
    }

    fn offset(attrs: &Attributes) -> f32 {
        attrs.baseline_offset.expect("scripted text has an offset")
    }

    #[test]
    fn absence_is_distinct_from_presence() {
        let mut attrs = body();
        assert_eq!(attrs.get(StyleKey::Underline), None);
        attrs.insert(StyleProperty::Underline(DecorationStyle::Single));
        assert_eq!(
            attrs.get(StyleKey::Underline),
            Some(StyleProperty::Underline(DecorationStyle::Single))
        );
        attrs.remove(StyleKey::Underline);
        assert!(!attrs.has(StyleKey::Underline));
    }

    #[test]
    fn bold_lives_on_the_font() {
        let mut attrs = body();
        attrs.insert(StyleProperty::Bold);
        let font = attrs.font.as_ref().unwrap();
        assert!(font.contains(SymbolicTraits::BOLD));
        assert_eq!(font.weight, FontWeight::BOLD);
        attrs.remove(StyleKey::Bold);
        assert_eq!(attrs, body());
    }

    #[test]
    fn removing_bold_without_font_is_noop() {
        let mut attrs = Attributes::default();
        attrs.remove(StyleKey::Bold);
        assert_eq!(attrs, Attributes::default());
    }

    #[test]
    fn script_scales_size_and_offsets_baseline() {
        let mut attrs = body();
        attrs.insert(StyleProperty::Superscript);
        assert_eq!(attrs.script(), Some(Script::Superscript));
        assert_eq!(attrs.font.as_ref().unwrap().size, 20.0);
        assert!((offset(&attrs) - 8.0).abs() < 1e-4);
        assert_eq!(attrs.displayed_font_size(), 15.0);

        // Switching script does not shrink twice.
        attrs.insert(StyleProperty::Subscript);
        assert_eq!(attrs.script(), Some(Script::Subscript));
        assert_eq!(attrs.displayed_font_size(), 15.0);
        assert!((offset(&attrs) + 6.0).abs() < 1e-4);
        assert!(attrs.has(StyleKey::Subscript));
        assert!(!attrs.has(StyleKey::Superscript));

        // Removing the other script leaves this one alone.
        attrs.remove(StyleKey::Superscript);
        assert!(attrs.has(StyleKey::Subscript));

        attrs.remove(StyleKey::Subscript);
        assert_eq!(attrs, body());
    }

    #[test]
    fn script_keeps_bold_and_italic() {
        let mut attrs = body();
        attrs.insert(StyleProperty::Bold);
        attrs.insert(StyleProperty::Italic);
        attrs.apply_script(Script::Superscript);
        let font = attrs.font.as_ref().unwrap();
        assert!(font.is_bold() && font.is_italic());
        assert_eq!(font.weight, FontWeight::BOLD);
    }

    #[test]
    fn script_round_trip_is_exact_for_fractional_sizes() {
        for tenths in 80_u16..800 {
            let plain = Attributes::with_font(FontDescriptor::body(f32::from(tenths) / 10.0));
            let mut attrs = plain.clone();
            attrs.insert(StyleProperty::Superscript);
            attrs.remove(StyleKey::Superscript);
            assert_eq!(attrs, plain, "superscript at {tenths} tenths");
            attrs.insert(StyleProperty::Subscript);
            attrs.remove(StyleKey::Subscript);
            assert_eq!(attrs, plain, "subscript at {tenths} tenths");
        }
    }

    #[test]
    fn font_size_without_font_starts_from_body() {
        let mut attrs = Attributes::default();
        attrs.insert(StyleProperty::FontSize(30.0));
        assert_eq!(attrs.font, Some(FontDescriptor::body(30.0)));
        attrs.remove(StyleKey::FontSize);
        assert_eq!(attrs.font, Some(FontDescriptor::body(17.0)));
    }
}
