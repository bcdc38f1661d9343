// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::color::palette::css;
use peniko::kurbo::Size;
use peniko::Color;
use rich_text::{Alignment, FontDescriptor, CLEAR_COLOR, DEFAULT_FONT_SIZE, LABEL_COLOR};

/// Smallest font size the toolbar steps down to.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Largest font size the toolbar steps up to.
pub const MAX_FONT_SIZE: f32 = 80.0;

/// Settings for one editor instance.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    /// Text shown while the document is empty and not being edited.
    pub placeholder: String,
    /// Color of the placeholder text.
    pub hint_color: Color,
    /// Font used when the document or typing style has none.
    pub default_font: FontDescriptor,
    /// Text color when none is set.
    pub text_color: Color,
    /// Background color when none is set.
    pub background_color: Color,
    /// Smallest font size reachable by stepping.
    pub min_font_size: f32,
    /// Largest font size reachable by stepping.
    pub max_font_size: f32,
    /// Box inserted images are scaled to fit.
    pub max_image_size: Size,
    /// Paragraph alignment for a new document.
    pub alignment: Alignment,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: String::from("Type ..."),
            hint_color: css::GRAY,
            default_font: FontDescriptor::body(DEFAULT_FONT_SIZE),
            text_color: LABEL_COLOR,
            background_color: CLEAR_COLOR,
            min_font_size: MIN_FONT_SIZE,
            max_font_size: MAX_FONT_SIZE,
            max_image_size: Size::new(180.0, 180.0),
            alignment: Alignment::Center,
        }
    }
}

impl EditorConfig {
    /// Sets the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the default font.
    #[must_use]
    pub fn with_default_font(mut self, font: FontDescriptor) -> Self {
        self.default_font = font;
        self
    }
}
