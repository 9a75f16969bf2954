//! ARGB color values and hex conversion
//!
//! Colors travel through the whole pipeline as packed 32-bit ARGB integers.
//! This module only packs and unpacks channels; anything perceptual lives
//! behind [`crate::science::ColorScience`].

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HexError;

/// A 32-bit `0xAARRGGBB` color
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argb(u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Wrap a raw ARGB integer
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Pack individual channels
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Opaque color from red, green and blue
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_channels(0xFF, r, g, b)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#AARRGGBB` (the `#` is optional).
    ///
    /// The result is always opaque: an alpha pair in the 8-digit form is
    /// read past and dropped.
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.is_empty() {
            return Err(HexError::Empty);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(HexError::Digit(bad));
        }

        let (r, g, b) = match digits.len() {
            3 => {
                let nibble = |i: usize| hex_pair(&digits[i..=i].repeat(2));
                (nibble(0), nibble(1), nibble(2))
            }
            6 => (
                hex_pair(&digits[0..2]),
                hex_pair(&digits[2..4]),
                hex_pair(&digits[4..6]),
            ),
            8 => (
                hex_pair(&digits[2..4]),
                hex_pair(&digits[4..6]),
                hex_pair(&digits[6..8]),
            ),
            other => return Err(HexError::Length(other)),
        };

        Ok(Self::from_rgb(r, g, b))
    }

    /// Raw ARGB integer
    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Decompose into channels
    pub const fn rgba(self) -> Rgba {
        Rgba {
            r: self.red(),
            g: self.green(),
            b: self.blue(),
            a: self.alpha(),
        }
    }

    /// `#rrggbb`, lowercase, alpha omitted
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }
}

// Callers have already checked every char is a hex digit.
fn hex_pair(pair: &str) -> u8 {
    u8::from_str_radix(pair, 16).unwrap_or_default()
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl FromStr for Argb {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Display for Argb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Channel decomposition of an [`Argb`]; every component is `0..=255`
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba> for Argb {
    fn from(rgba: Rgba) -> Self {
        Argb::from_channels(rgba.a, rgba.r, rgba.g, rgba.b)
    }
}
