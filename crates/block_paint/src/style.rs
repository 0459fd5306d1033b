//! Style metadata and options.
//!
//! A style declares its default preset through a [`StyleDescriptor`] — an
//! explicitly constructed, immutable value returned by [`descriptor`]. The
//! hosting gallery reads it to populate its controls; nothing here is a
//! process-wide singleton.
use std::fmt;

use crate::error::{Error, Result};

/// Authoring convention: a style defines at most this many modifiers.
pub const MAX_MODIFIERS: usize = 4;
/// Authoring convention: a style defines at most this many colors.
pub const MAX_COLORS: usize = 3;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex color string.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColor`] when the string is not exactly `#` followed by
    /// six hex digits.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| Error::InvalidColor(s.to_owned()))?;

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_owned()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Numeric and color parameters supplied per render.
///
/// `mod1`..`mod3` are conventionally in [0, 1]. `color1` is carried for
/// compositional use by hosts but not consumed by the default per-shape
/// synthesis; `background` is the canvas clear color.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleOptions {
    pub mod1: f64,
    pub mod2: f64,
    pub mod3: f64,
    pub color1: Rgb,
    pub background: Rgb,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            mod1: 0.4,
            mod2: 0.1,
            mod3: 0.4,
            color1: Rgb::new(0xff, 0xf0, 0x00),
            background: Rgb::BLACK,
        }
    }
}

/// Static style metadata consumed by a hosting gallery.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleDescriptor {
    pub name: String,
    pub description: String,
    /// Preview image URL or path.
    pub image: String,
    pub creator_name: String,
    pub options: StyleOptions,
}

/// Returns the style's declared default preset.
pub fn descriptor() -> StyleDescriptor {
    StyleDescriptor {
        name: "Scattered Rects".to_owned(),
        description: "One rectangle per transaction, placed and colored by the block hash."
            .to_owned(),
        image: String::new(),
        creator_name: String::new(),
        options: StyleOptions::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Rgb::from_hex("#fff000").unwrap(), Rgb::new(255, 240, 0));
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb::BLACK);
        assert_eq!(Rgb::from_hex("#0A1b2C").unwrap(), Rgb::new(10, 27, 44));
    }

    #[test]
    fn rejects_malformed_color_strings() {
        for s in ["fff000", "#fff00", "#fff0000", "#gggggg", "", "#"] {
            assert!(matches!(Rgb::from_hex(s), Err(Error::InvalidColor(_))), "{s}");
        }
    }

    #[test]
    fn display_round_trips() {
        let c = Rgb::new(255, 240, 0);
        assert_eq!(c.to_string(), "#fff000");
        assert_eq!(Rgb::from_hex(&c.to_string()).unwrap(), c);
    }

    #[test]
    fn descriptor_returns_fresh_immutable_preset() {
        let a = descriptor();
        let b = descriptor();
        assert_eq!(a, b);
        assert_eq!(a.options.mod1, 0.4);
        assert_eq!(a.options.mod2, 0.1);
        assert_eq!(a.options.mod3, 0.4);
        assert_eq!(a.options.color1, Rgb::from_hex("#fff000").unwrap());
        assert_eq!(a.options.background, Rgb::from_hex("#000000").unwrap());
    }
}
