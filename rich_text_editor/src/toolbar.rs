// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use rich_text::{Alignment, Attributes, DecorationStyle, Script};

use crate::{EditorConfig, PendingTypingStyle};

/// Background luminance below which the host should switch to a light caret.
pub const LIGHT_CARET_THRESHOLD: f32 = 0.55;

/// What the toolbar should show for the current selection.
///
/// This is always derived, never stored: from the pending typing style at a caret, and from
/// the covered runs (later runs winning) for a range.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolbarState {
    /// Bold is on.
    pub bold: bool,
    /// Italic is on.
    pub italic: bool,
    /// A single underline is on.
    pub underline: bool,
    /// A single strikethrough is on.
    pub strikethrough: bool,
    /// Superscript is on.
    pub superscript: bool,
    /// Subscript is on.
    pub subscript: bool,
    /// Nominal font size in points.
    pub font_size: f32,
    /// Paragraph alignment.
    pub alignment: Alignment,
    /// Text color.
    pub color: Color,
    /// Background color.
    pub background: Color,
}

impl ToolbarState {
    /// State for a caret.
    pub fn from_typing_style(style: &PendingTypingStyle, alignment: Alignment) -> Self {
        Self {
            bold: style.font.is_bold(),
            italic: style.font.is_italic(),
            underline: style.underline,
            strikethrough: style.strikethrough,
            superscript: style.script == Some(Script::Superscript),
            subscript: style.script == Some(Script::Subscript),
            font_size: style.font.size,
            alignment,
            color: style.foreground,
            background: style.background,
        }
    }

    /// State for a range whose runs merge to `attrs`.
    pub fn from_attributes(
        attrs: &Attributes,
        alignment: Alignment,
        config: &EditorConfig,
    ) -> Self {
        let script = attrs.script();
        let font_size = attrs
            .font
            .as_ref()
            .map_or(config.default_font.size, |font| font.size);
        Self {
            bold: attrs.font.as_ref().is_some_and(|font| font.is_bold()),
            italic: attrs.font.as_ref().is_some_and(|font| font.is_italic()),
            underline: attrs.underline == Some(DecorationStyle::Single),
            strikethrough: attrs.strikethrough == Some(DecorationStyle::Single),
            superscript: script == Some(Script::Superscript),
            subscript: script == Some(Script::Subscript),
            font_size,
            alignment,
            color: attrs.foreground.unwrap_or(config.text_color),
            background: attrs.background.unwrap_or(config.background_color),
        }
    }

    /// Returns `true` if the background is dark enough that a dark caret would be hard to see.
    ///
    /// Translucent backgrounds are composited over white first.
    pub fn prefers_light_caret(&self) -> bool {
        let [r, g, b, a] = self.background.components;
        let luminance = 0.2126 * r + 0.7152 * g + 0.0722 * b;
        a * luminance + (1.0 - a) < LIGHT_CARET_THRESHOLD
    }

    /// The state of the button for `command`.
    pub fn button(&self, command: ToolbarCommand, config: &EditorConfig) -> ButtonState {
        let highlighted = match command {
            ToolbarCommand::Bold => self.bold,
            ToolbarCommand::Italic => self.italic,
            ToolbarCommand::Underline => self.underline,
            ToolbarCommand::Strikethrough => self.strikethrough,
            ToolbarCommand::Superscript => self.superscript,
            ToolbarCommand::Subscript => self.subscript,
            _ => false,
        };
        let enabled = match command {
            ToolbarCommand::IncreaseFontSize => self.font_size < config.max_font_size,
            ToolbarCommand::DecreaseFontSize => self.font_size > config.min_font_size,
            _ => true,
        };
        ButtonState {
            command,
            highlighted,
            enabled,
        }
    }

    /// The leading then trailing buttons, in display order.
    pub fn buttons<'a>(
        &'a self,
        config: &'a EditorConfig,
    ) -> impl Iterator<Item = ButtonState> + 'a {
        ToolbarCommand::LEADING
            .into_iter()
            .chain(ToolbarCommand::TRAILING)
            .map(move |command| self.button(command, config))
    }
}

/// An action behind a toolbar button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolbarCommand {
    /// Toggle bold.
    Bold,
    /// Toggle italic.
    Italic,
    /// Toggle underline.
    Underline,
    /// Toggle strikethrough.
    Strikethrough,
    /// Toggle superscript.
    Superscript,
    /// Toggle subscript.
    Subscript,
    /// One point larger.
    IncreaseFontSize,
    /// One point smaller.
    DecreaseFontSize,
    /// Ask the host for a text color.
    SelectColor,
    /// Ask the host for a background color.
    SelectBackground,
    /// Cycle the paragraph alignment.
    AlignText,
    /// Ask the host for an image.
    InsertImage,
    /// Ask the host to end editing.
    DismissKeyboard,
}

impl ToolbarCommand {
    /// Buttons on the leading edge of the toolbar.
    pub const LEADING: [Self; 11] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikethrough,
        Self::Superscript,
        Self::Subscript,
        Self::IncreaseFontSize,
        Self::DecreaseFontSize,
        Self::SelectColor,
        Self::SelectBackground,
        Self::AlignText,
    ];

    /// Buttons on the trailing edge of the toolbar.
    pub const TRAILING: [Self; 1] = [Self::DismissKeyboard];
}

/// How one toolbar button should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    /// The button's action.
    pub command: ToolbarCommand,
    /// The style the button toggles is on.
    pub highlighted: bool,
    /// Pressing the button would do something.
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use rich_text::{Alignment, Attributes, DecorationStyle, FontDescriptor, StyleProperty};

    use super::{ToolbarCommand, ToolbarState};
    use crate::EditorConfig;

    fn state(attrs: &Attributes) -> ToolbarState {
        ToolbarState::from_attributes(attrs, Alignment::Center, &EditorConfig::default())
    }

    #[test]
    fn only_single_underline_highlights() {
        let mut attrs = Attributes::with_font(FontDescriptor::body(17.0));
        attrs.insert(StyleProperty::Underline(DecorationStyle::Thick));
        assert!(!state(&attrs).underline);
        attrs.insert(StyleProperty::Underline(DecorationStyle::Single));
        assert!(state(&attrs).underline);
    }

    #[test]
    fn scripted_size_is_nominal() {
        let mut attrs = Attributes::with_font(FontDescriptor::body(20.0));
        attrs.insert(StyleProperty::Superscript);
        let state = state(&attrs);
        assert!(state.superscript);
        assert!(!state.subscript);
        assert_eq!(state.font_size, 20.0);
    }

    #[test]
    fn size_buttons_disable_at_bounds() {
        let config = EditorConfig::default();
        let attrs = Attributes::with_font(FontDescriptor::body(80.0));
        let state = state(&attrs);
        assert!(!state.button(ToolbarCommand::IncreaseFontSize, &config).enabled);
        assert!(state.button(ToolbarCommand::DecreaseFontSize, &config).enabled);
        assert_eq!(state.buttons(&config).count(), 12);
    }

    #[test]
    fn light_caret_on_dark_background() {
        let mut attrs = Attributes::default();
        assert!(!state(&attrs).prefers_light_caret());
        attrs.insert(StyleProperty::BackgroundColor(css::BLACK));
        assert!(state(&attrs).prefers_light_caret());
        attrs.insert(StyleProperty::BackgroundColor(css::YELLOW));
        assert!(!state(&attrs).prefers_light_caret());
    }
}
