//! Font size classes and resolution
//!
//! The renderer works in named size classes rather than raw point sizes.
//! Resolving a class to a concrete glyph resource lives behind the
//! [`FontProvider`] trait, supplied to the renderer at construction, so the
//! drawing code stays independent of which fonts are compiled in.

use embedded_graphics::mono_font::{MonoFont, ascii};

/// Named text size classes used across the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    /// Indicator labels and the zone number
    Tiny,
    /// Status bar and setpoint text
    Small,
    Medium,
    /// Missing-sensor placeholder and the pump status word
    Large,
    /// The big per-zone temperature glyphs
    XLarge,
}

/// Resolves size classes to concrete mono fonts.
///
/// [`font`](Self::font) applies the fallback chain: the requested class,
/// then `Medium`, then a compiled-in 6x10 default that is always available.
/// Rendering never fails on a missing font.
pub trait FontProvider {
    /// Look up the font for a size class, if this provider carries one.
    fn try_font(&self, size: FontSize) -> Option<&'static MonoFont<'static>>;

    /// Resolve a size class, falling back rather than failing.
    fn font(&self, size: FontSize) -> &'static MonoFont<'static> {
        self.try_font(size)
            .or_else(|| self.try_font(FontSize::Medium))
            .unwrap_or(&ascii::FONT_6X10)
    }
}

/// Default mapping onto the embedded-graphics ASCII mono fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFonts;

impl FontProvider for DefaultFonts {
    fn try_font(&self, size: FontSize) -> Option<&'static MonoFont<'static>> {
        Some(match size {
            FontSize::Tiny => &ascii::FONT_4X6,
            FontSize::Small => &ascii::FONT_5X8,
            FontSize::Medium => &ascii::FONT_6X10,
            FontSize::Large => &ascii::FONT_7X13,
            FontSize::XLarge => &ascii::FONT_10X20,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider with no large fonts, as a host without the full set.
    struct SparseFonts;

    impl FontProvider for SparseFonts {
        fn try_font(&self, size: FontSize) -> Option<&'static MonoFont<'static>> {
            match size {
                FontSize::Medium => Some(&ascii::FONT_6X10),
                _ => None,
            }
        }
    }

    /// Provider with nothing at all.
    struct NoFonts;

    impl FontProvider for NoFonts {
        fn try_font(&self, _size: FontSize) -> Option<&'static MonoFont<'static>> {
            None
        }
    }

    #[test]
    fn default_fonts_resolve_every_class() {
        for size in [
            FontSize::Tiny,
            FontSize::Small,
            FontSize::Medium,
            FontSize::Large,
            FontSize::XLarge,
        ] {
            // Must not hit the fallback path.
            assert!(DefaultFonts.try_font(size).is_some());
        }
    }

    #[test]
    fn missing_class_falls_back_to_medium() {
        let font = SparseFonts.font(FontSize::XLarge);
        assert_eq!(font.character_size, ascii::FONT_6X10.character_size);
    }

    #[test]
    fn empty_provider_falls_back_to_builtin_default() {
        let font = NoFonts.font(FontSize::Small);
        assert_eq!(font.character_size, ascii::FONT_6X10.character_size);
    }
}
