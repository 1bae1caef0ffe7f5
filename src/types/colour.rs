//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB colour, as used by image transparency keys and object
/// group tints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error returned when a colour attribute is not a hex colour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex colour: '{0}'")]
pub struct ParseColourError(String);

impl Colour {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RRGGBB` or `RRGGBB`
    /// - `#AARRGGBB` (alpha is discarded)
    pub fn from_hex(s: &str) -> Result<Self, ParseColourError> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        let rgb = match hex.len() {
            6 => Some(hex),
            8 => hex.get(2..),
            _ => None,
        }
        .ok_or_else(|| ParseColourError(s.to_string()))?;

        if !rgb.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColourError(s.to_string()));
        }

        let byte = |range: std::ops::Range<usize>| {
            rgb.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| ParseColourError(s.to_string()))
        };

        Ok(Self::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }

    /// The colour packed as `0xRRGGBB`.
    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
