// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::Arc;

use bitflags::bitflags;

/// The family name used for the platform body font.
pub const SYSTEM_FAMILY: &str = "system-ui";

/// Visual weight class of a font, on a scale from 1.0 to 1000.0.
///
/// Weight is tracked separately from the [`SymbolicTraits::BOLD`] flag because fonts from some
/// text styles (large titles, for example) are heavy without carrying the bold trait. Toggling
/// bold always rewrites the weight so the two agree.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const REGULAR: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            w if w == Self::REGULAR.0 => f.write_str("regular"),
            w if w == Self::BOLD.0 => f.write_str("bold"),
            w => write!(f, "{w}"),
        }
    }
}

bitflags! {
    /// Boolean font characteristics layered on a base font descriptor.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SymbolicTraits: u8 {
        /// Bold face.
        const BOLD = 1 << 0;
        /// Italic or oblique face.
        const ITALIC = 1 << 1;
    }
}

/// A font request: family, weight, symbolic traits, and point size.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    /// Family name.
    pub family: Arc<str>,
    /// Weight class.
    pub weight: FontWeight,
    /// Bold/italic traits.
    pub traits: SymbolicTraits,
    /// Nominal point size. Scripted text is drawn at [`SCRIPT_SCALE`](crate::SCRIPT_SCALE) of it.
    pub size: f32,
}

impl FontDescriptor {
    /// The regular system body font at `size`.
    pub fn body(size: f32) -> Self {
        Self::new(SYSTEM_FAMILY, size)
    }

    /// A regular font from `family` at `size`.
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::REGULAR,
            traits: SymbolicTraits::empty(),
            size,
        }
    }

    /// Returns `true` if every trait in `traits` is set.
    #[inline]
    pub fn contains(&self, traits: SymbolicTraits) -> bool {
        self.traits.contains(traits)
    }

    /// Returns `true` if the bold trait is set.
    #[inline]
    pub fn is_bold(&self) -> bool {
        self.contains(SymbolicTraits::BOLD)
    }

    /// Returns `true` if the italic trait is set.
    #[inline]
    pub fn is_italic(&self) -> bool {
        self.contains(SymbolicTraits::ITALIC)
    }

    /// Returns a copy with `traits` set or cleared.
    ///
    /// Weight follows the bold trait: toggling bold forces [`FontWeight::BOLD`] when enabling and
    /// [`FontWeight::REGULAR`] when disabling, whatever weight was there before. Toggling any other
    /// trait on a bold font keeps the weight at bold.
    #[must_use]
    pub fn with_traits(&self, traits: SymbolicTraits, enabled: bool) -> Self {
        let mut font = self.clone();
        font.traits.set(traits, enabled);
        if traits.contains(SymbolicTraits::BOLD) {
            font.weight = if enabled {
                FontWeight::BOLD
            } else {
                FontWeight::REGULAR
            };
        } else if font.is_bold() {
            font.weight = FontWeight::BOLD;
        }
        font
    }

    /// Returns a copy with `traits` flipped.
    #[must_use]
    pub fn toggled(&self, traits: SymbolicTraits) -> Self {
        self.with_traits(traits, !self.contains(traits))
    }

    /// Returns a copy at a different point size.
    #[must_use]
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Returns a copy whose weight agrees with its bold trait.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut font = self.clone();
        if font.is_bold() {
            font.weight = FontWeight::BOLD;
        }
        font
    }

    /// Resolve this descriptor through `resolver`, falling back to the body font.
    ///
    /// The fallback keeps the requested size and traits so a missing family never changes
    /// the visible size or style of the text.
    pub fn resolve_or_body(&self, resolver: &dyn FontResolver) -> Self {
        if resolver.resolves(self) {
            return self.clone();
        }
        log::warn!(
            "font family {:?} could not be resolved, using {SYSTEM_FAMILY}",
            self.family
        );
        Self {
            family: Arc::from(SYSTEM_FAMILY),
            ..self.clone()
        }
    }
}

/// Host font lookup.
///
/// The editor never renders glyphs itself; it only asks whether the host can produce a font for
/// a descriptor, and degrades to the body font when it can't.
pub trait FontResolver {
    /// Returns `true` if the host can render `descriptor`.
    fn resolves(&self, descriptor: &FontDescriptor) -> bool;
}

/// A resolver that accepts every descriptor.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyFont;

impl FontResolver for AnyFont {
    fn resolves(&self, _descriptor: &FontDescriptor) -> bool {
        true
    }
}

impl<F: Fn(&FontDescriptor) -> bool> FontResolver for F {
    fn resolves(&self, descriptor: &FontDescriptor) -> bool {
        self(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::{FontDescriptor, FontWeight, SymbolicTraits, SYSTEM_FAMILY};

    #[test]
    fn bold_toggle_forces_weight() {
        let heavy = FontDescriptor {
            weight: FontWeight::BLACK,
            ..FontDescriptor::body(34.0)
        };
        let bold = heavy.toggled(SymbolicTraits::BOLD);
        assert!(bold.is_bold());
        assert_eq!(bold.weight, FontWeight::BOLD);

        let regular = bold.toggled(SymbolicTraits::BOLD);
        assert!(!regular.is_bold());
        assert_eq!(regular.weight, FontWeight::REGULAR);
    }

    #[test]
    fn italic_toggle_keeps_bold_weight() {
        let bold = FontDescriptor::body(17.0).with_traits(SymbolicTraits::BOLD, true);
        let both = bold.toggled(SymbolicTraits::ITALIC);
        assert!(both.is_bold() && both.is_italic());
        assert_eq!(both.weight, FontWeight::BOLD);

        let medium = FontDescriptor {
            weight: FontWeight::MEDIUM,
            ..FontDescriptor::body(17.0)
        };
        assert_eq!(
            medium.toggled(SymbolicTraits::ITALIC).weight,
            FontWeight::MEDIUM
        );
    }

    #[test]
    fn unresolved_family_falls_back_to_body() {
        let font = FontDescriptor::new("Nonexistent Sans", 20.0)
            .with_traits(SymbolicTraits::ITALIC, true);
        let only_system = |d: &FontDescriptor| &*d.family == SYSTEM_FAMILY;
        let resolved = font.resolve_or_body(&only_system);
        assert_eq!(&*resolved.family, SYSTEM_FAMILY);
        assert_eq!(resolved.size, 20.0);
        assert!(resolved.is_italic());
    }

    #[test]
    fn weight_display() {
        assert_eq!(FontWeight::BOLD.to_string(), "bold");
        assert_eq!(FontWeight::new(550.0).to_string(), "550");
    }
}
