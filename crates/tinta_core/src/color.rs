//! Color types and utilities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a color literal cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("color literal must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color literal has {len} hex digits, expected 3, 6 or 8: {literal:?}")]
    InvalidLength { literal: String, len: usize },
    #[error("invalid hex digit in color literal: {0:?}")]
    InvalidDigit(String),
}

/// RGBA color with 8-bit channels
///
/// Theme tokens are authored as `#RRGGBB` strings, so the channels are kept
/// as bytes and displayed back in the same form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create from a hex value in `0xRRGGBB` form
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Relative luminance (WCAG 2.x)
    pub fn luminance(&self) -> f32 {
        fn channel(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// Whether the color reads as a dark surface
    pub fn is_dark(&self) -> bool {
        self.luminance() < 0.179
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = s.trim();
        let digits = literal
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(literal.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(literal.to_string()));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ParseColorError::InvalidDigit(literal.to_string()))
        };

        match digits.len() {
            3 => {
                // #RGB expands each nibble: #3BF -> #33BBFF
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let v = c
                        .to_digit(16)
                        .ok_or_else(|| ParseColorError::InvalidDigit(literal.to_string()))?
                        as u8;
                    *slot = v << 4 | v;
                }
                Ok(Color::rgb(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            len => Err(ParseColorError::InvalidLength {
                literal: literal.to_string(),
                len,
            }),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_matches_literal() {
        let parsed: Color = "#3B82F6".parse().unwrap();
        assert_eq!(parsed, Color::from_hex(0x3B82F6));
        assert_eq!(parsed.to_string(), "#3B82F6");
    }

    #[test]
    fn test_lowercase_and_shorthand() {
        assert_eq!("#10b981".parse::<Color>().unwrap(), Color::from_hex(0x10B981));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#3BF".parse::<Color>().unwrap(), Color::from_hex(0x33BBFF));
    }

    #[test]
    fn test_alpha_literal_displays_alpha() {
        let c: Color = "#11182780".parse().unwrap();
        assert_eq!(c.a, 0x80);
        assert_eq!(c.to_string(), "#11182780");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            "3B82F6".parse::<Color>(),
            Err(ParseColorError::MissingHash(_))
        ));
        assert!(matches!(
            "#3B82F".parse::<Color>(),
            Err(ParseColorError::InvalidLength { len: 5, .. })
        ));
        assert!(matches!(
            "#GGGGGG".parse::<Color>(),
            Err(ParseColorError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::from_hex(0xF43F5E)).unwrap();
        assert_eq!(json, "\"#F43F5E\"");
        let back: Color = serde_json::from_str("\"#0EA5E9\"").unwrap();
        assert_eq!(back, Color::from_hex(0x0EA5E9));
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn test_dark_surfaces() {
        assert!(Color::from_hex(0x111827).is_dark());
        assert!(Color::from_hex(0x064E3B).is_dark());
        assert!(!Color::from_hex(0xF9FAFB).is_dark());
    }
}
