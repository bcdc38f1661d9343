// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use rich_text::{Attributes, DecorationStyle, FontDescriptor, Script, SCRIPT_SCALE};

/// The style that text typed at a caret will carry.
///
/// Caret toggles change only this record; the document is untouched until text is inserted.
/// The font holds the nominal size. While a script is active the displayed size is
/// [`SCRIPT_SCALE`] of it, and the baseline offset is proportional to it.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTypingStyle {
    /// Font with traits and the nominal (unscripted) size.
    pub font: FontDescriptor,
    /// Underline is on.
    pub underline: bool,
    /// Strikethrough is on.
    pub strikethrough: bool,
    /// Active script. Superscript and subscript exclude each other.
    pub script: Option<Script>,
    /// Text color.
    pub foreground: Color,
    /// Background color.
    pub background: Color,
    default_foreground: Color,
    default_background: Color,
}

impl PendingTypingStyle {
    /// A plain style in `font` with the given default colors.
    pub fn new(font: FontDescriptor, foreground: Color, background: Color) -> Self {
        Self {
            font,
            underline: false,
            strikethrough: false,
            script: None,
            foreground,
            background,
            default_foreground: foreground,
            default_background: background,
        }
    }

    /// Re-seed from the attributes of existing text.
    ///
    /// Absent fields fall back to `self`'s font and default colors.
    #[must_use]
    pub fn continuing(&self, attrs: &Attributes) -> Self {
        Self {
            font: attrs.font.clone().unwrap_or_else(|| self.font.clone()),
            underline: attrs.underline.is_some(),
            strikethrough: attrs.strikethrough.is_some(),
            script: attrs.script(),
            foreground: attrs.foreground.unwrap_or(self.default_foreground),
            background: attrs.background.unwrap_or(self.default_background),
            default_foreground: self.default_foreground,
            default_background: self.default_background,
        }
    }

    /// The point size typed text is drawn at.
    pub fn displayed_font_size(&self) -> f32 {
        if self.script.is_some() {
            self.font.size * SCRIPT_SCALE
        } else {
            self.font.size
        }
    }

    /// The baseline offset typed text is drawn with, in points.
    pub fn baseline_offset(&self) -> f32 {
        self.script
            .map_or(0.0, |script| script.baseline_factor() * self.font.size)
    }

    /// Flip a script. Turning one on turns the other off.
    pub fn toggle_script(&mut self, script: Script) {
        self.script = if self.script == Some(script) {
            None
        } else {
            Some(script)
        };
    }

    /// Set the text color, or reset it to the default if it is already `color`.
    pub fn toggle_foreground(&mut self, color: Color) {
        self.foreground = if self.foreground == color {
            self.default_foreground
        } else {
            color
        };
    }

    /// Set the background color, or reset it to the default if it is already `color`.
    pub fn toggle_background(&mut self, color: Color) {
        self.background = if self.background == color {
            self.default_background
        } else {
            color
        };
    }

    /// The run attributes for text typed with this style.
    ///
    /// Default colors are left absent so typed text merges with unstyled neighbors.
    pub fn to_attributes(&self) -> Attributes {
        Attributes {
            font: Some(self.font.clone()),
            underline: self.underline.then_some(DecorationStyle::Single),
            strikethrough: self.strikethrough.then_some(DecorationStyle::Single),
            baseline_offset: self.script.map(|_| self.baseline_offset()),
            foreground: (self.foreground != self.default_foreground).then_some(self.foreground),
            background: (self.background != self.default_background).then_some(self.background),
            attachment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use rich_text::{
        Attributes, DecorationStyle, FontDescriptor, Script, StyleKey, StyleProperty,
        CLEAR_COLOR, LABEL_COLOR,
    };

    use super::PendingTypingStyle;

    fn plain() -> PendingTypingStyle {
        PendingTypingStyle::new(FontDescriptor::body(20.0), LABEL_COLOR, CLEAR_COLOR)
    }

    #[test]
    fn plain_style_only_sets_font() {
        assert_eq!(
            plain().to_attributes(),
            Attributes::with_font(FontDescriptor::body(20.0))
        );
    }

    #[test]
    fn scripts_exclude_each_other() {
        let mut style = plain();
        style.toggle_script(Script::Subscript);
        assert!(style.baseline_offset() < 0.0);
        style.toggle_script(Script::Superscript);
        assert_eq!(style.script, Some(Script::Superscript));
        assert!(style.baseline_offset() > 0.0);
        assert_eq!(style.displayed_font_size(), 15.0);
        assert_eq!(style.font.size, 20.0);
        style.toggle_script(Script::Superscript);
        assert_eq!(style.script, None);
        assert_eq!(style.baseline_offset(), 0.0);
    }

    #[test]
    fn color_toggle_resets_to_default() {
        let mut style = plain();
        style.toggle_foreground(css::RED);
        assert_eq!(style.foreground, css::RED);
        assert_eq!(style.to_attributes().foreground, Some(css::RED));
        style.toggle_foreground(css::RED);
        assert_eq!(style.foreground, LABEL_COLOR);
        assert_eq!(style.to_attributes().foreground, None);
    }

    #[test]
    fn continuing_keeps_nominal_size() {
        let mut attrs = Attributes::with_font(FontDescriptor::body(20.0));
        attrs.insert(StyleProperty::Subscript);
        attrs.insert(StyleProperty::Underline(DecorationStyle::Double));
        attrs.insert(StyleProperty::BackgroundColor(css::BLUE));
        let style = plain().continuing(&attrs);
        assert_eq!(style.font.size, 20.0);
        assert_eq!(style.script, Some(Script::Subscript));
        assert!(style.underline);
        assert_eq!(style.background, css::BLUE);
        assert_eq!(style.foreground, LABEL_COLOR);

        let typed = style.to_attributes();
        assert!(typed.has(StyleKey::Subscript));
        assert_eq!(typed.font.as_ref().map(|font| font.size), Some(20.0));
        assert_eq!(typed.displayed_font_size(), 15.0);
    }
}
