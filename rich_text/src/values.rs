// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::color::palette::css;
use peniko::kurbo::Size;
use peniko::Color;

/// Point size of the body font when no other size is known.
pub const DEFAULT_FONT_SIZE: f32 = 17.0;

/// Scale applied to the font size of superscript and subscript text.
pub const SCRIPT_SCALE: f32 = 0.75;

/// Default text color when a run carries no foreground color.
pub const LABEL_COLOR: Color = css::BLACK;

/// Default background when a run carries no background color.
pub const CLEAR_COLOR: Color = css::TRANSPARENT;

/// The character that stands in for an inline attachment in the text buffer.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// Line style for underline and strikethrough decorations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecorationStyle {
    /// A single thin line. This is what the toolbar applies.
    #[default]
    Single,
    /// Two thin lines.
    Double,
    /// A single thick line.
    Thick,
}

/// Vertical script position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Script {
    /// Raised text.
    Superscript,
    /// Lowered text.
    Subscript,
}

impl Script {
    /// Baseline offset as a fraction of the unscaled font size.
    pub fn baseline_factor(self) -> f32 {
        match self {
            Self::Superscript => 0.4,
            Self::Subscript => -0.3,
        }
    }

    /// The script implied by a baseline offset, if any.
    pub fn from_offset(offset: f32) -> Option<Self> {
        if offset > 0.0 {
            Some(Self::Superscript)
        } else if offset < 0.0 {
            Some(Self::Subscript)
        } else {
            None
        }
    }
}

/// Paragraph alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align to the left edge.
    Left,
    /// Center each line.
    #[default]
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch lines to both edges.
    Justified,
    /// Follow the writing direction.
    Natural,
}

impl Alignment {
    /// The alignment the toolbar button moves to next.
    ///
    /// Cycles `Left → Center → Right → Left`. `Justified` and `Natural` are not part of the
    /// cycle and enter it at `Center`.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            Self::Left | Self::Justified | Self::Natural => Self::Center,
            Self::Center => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// An inline image placed in the text as [`OBJECT_REPLACEMENT`].
///
/// The image data itself belongs to the host; the document only tracks an identifier and the
/// display size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attachment {
    /// Host identifier for the image.
    pub id: u64,
    /// Display size in points.
    pub size: Size,
}

impl Attachment {
    /// Creates an attachment whose display size fits `image` into `max`.
    ///
    /// Landscape images take the full maximum width, portrait images the full maximum height,
    /// and the other dimension keeps the aspect ratio.
    pub fn fitted(id: u64, image: Size, max: Size) -> Self {
        let size = if image.width <= 0.0 || image.height <= 0.0 {
            max
        } else {
            let ratio = image.width / image.height;
            let width = if ratio >= 1.0 {
                max.width
            } else {
                image.width * (max.height / image.height)
            };
            let height = if ratio <= 1.0 {
                max.height
            } else {
                image.height * (max.width / image.width)
            };
            Size::new(width, height)
        };
        Self { id, size }
    }
}

#[cfg(test)]
mod tests {
    use super::{Alignment, Attachment, Script};
    use peniko::kurbo::Size;

    #[test]
    fn alignment_cycle() {
        let mut alignment = Alignment::Left;
        for _ in 0..3 {
            alignment = alignment.cycled();
        }
        assert_eq!(alignment, Alignment::Left);

        let justified = Alignment::Justified;
        assert_eq!(justified.cycled(), Alignment::Center);
        assert_eq!(justified.cycled().cycled(), Alignment::Right);
        assert_eq!(justified.cycled().cycled().cycled(), Alignment::Left);
        assert_eq!(Alignment::Natural.cycled(), Alignment::Center);
    }

    #[test]
    fn script_from_offset() {
        assert_eq!(Script::from_offset(6.8), Some(Script::Superscript));
        assert_eq!(Script::from_offset(-5.1), Some(Script::Subscript));
        assert_eq!(Script::from_offset(0.0), None);
    }

    #[test]
    fn attachments_fit_the_box() {
        let max = Size::new(180.0, 180.0);
        let wide = Attachment::fitted(1, Size::new(360.0, 180.0), max);
        assert_eq!(wide.size, Size::new(180.0, 90.0));
        let tall = Attachment::fitted(2, Size::new(90.0, 360.0), max);
        assert_eq!(tall.size, Size::new(45.0, 180.0));
        let square = Attachment::fitted(3, Size::new(20.0, 20.0), max);
        assert_eq!(square.size, max);
    }
}
