// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::DecorationStyle;

/// The inline styles a toolbar can query and toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// Bold trait of the run's font.
    Bold,
    /// Italic trait of the run's font.
    Italic,
    /// Underline decoration.
    Underline,
    /// Strikethrough decoration.
    Strikethrough,
    /// Raised text (positive baseline offset).
    Superscript,
    /// Lowered text (negative baseline offset).
    Subscript,
    /// Point size of the run's font.
    FontSize,
    /// Text color.
    ForegroundColor,
    /// Highlight color behind the text.
    BackgroundColor,
    /// Vertical displacement of the baseline.
    BaselineOffset,
}

impl StyleKey {
    /// Every key, in toolbar order.
    pub const ALL: [Self; 10] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikethrough,
        Self::Superscript,
        Self::Subscript,
        Self::FontSize,
        Self::ForegroundColor,
        Self::BackgroundColor,
        Self::BaselineOffset,
    ];

    /// Returns `true` for the keys that are either present or absent, with no further value.
    pub fn is_flag(self) -> bool {
        matches!(
            self,
            Self::Bold | Self::Italic | Self::Superscript | Self::Subscript
        )
    }
}

/// A style key together with its value.
///
/// Flag styles carry no payload: their presence is the value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleProperty {
    /// Bold trait.
    Bold,
    /// Italic trait.
    Italic,
    /// Underline decoration.
    Underline(DecorationStyle),
    /// Strikethrough decoration.
    Strikethrough(DecorationStyle),
    /// Superscript.
    Superscript,
    /// Subscript.
    Subscript,
    /// Nominal font size in points.
    FontSize(f32),
    /// Text color.
    ForegroundColor(Color),
    /// Background color.
    BackgroundColor(Color),
    /// Baseline offset in points.
    BaselineOffset(f32),
}

impl StyleProperty {
    /// The key this property sets.
    pub fn key(&self) -> StyleKey {
        match self {
            Self::Bold => StyleKey::Bold,
            Self::Italic => StyleKey::Italic,
            Self::Underline(_) => StyleKey::Underline,
            Self::Strikethrough(_) => StyleKey::Strikethrough,
            Self::Superscript => StyleKey::Superscript,
            Self::Subscript => StyleKey::Subscript,
            Self::FontSize(_) => StyleKey::FontSize,
            Self::ForegroundColor(_) => StyleKey::ForegroundColor,
            Self::BackgroundColor(_) => StyleKey::BackgroundColor,
            Self::BaselineOffset(_) => StyleKey::BaselineOffset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StyleKey, StyleProperty};
    use crate::DecorationStyle;

    #[test]
    fn property_keys() {
        assert_eq!(StyleProperty::Bold.key(), StyleKey::Bold);
        assert_eq!(
            StyleProperty::Underline(DecorationStyle::Double).key(),
            StyleKey::Underline
        );
        assert_eq!(StyleProperty::FontSize(12.0).key(), StyleKey::FontSize);
        let flags = StyleKey::ALL.iter().filter(|key| key.is_flag()).count();
        assert_eq!(flags, 4);
    }
}
