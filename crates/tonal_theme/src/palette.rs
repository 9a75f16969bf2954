//! Tonal palette assembly
//!
//! Every scheme is backed by six tonal palettes. For the token output each
//! one is sampled at a fixed set of 27 tones, giving full shade scales next
//! to the curated roles.

use std::fmt::{self, Display, Formatter};

use crate::color::Argb;
use crate::science::{DynamicScheme, TonalPalette};

const TONE_COUNT: usize = 27;
const PALETTE_COUNT: usize = 6;

/// The sampled tone steps, lightest first
pub const TONES: [Tone; TONE_COUNT] = [
    Tone(100),
    Tone(99),
    Tone(98),
    Tone(96),
    Tone(95),
    Tone(94),
    Tone(92),
    Tone(90),
    Tone(87),
    Tone(80),
    Tone(70),
    Tone(60),
    Tone(50),
    Tone(40),
    Tone(35),
    Tone(30),
    Tone(25),
    Tone(24),
    Tone(22),
    Tone(20),
    Tone(17),
    Tone(12),
    Tone(10),
    Tone(6),
    Tone(5),
    Tone(4),
    Tone(0),
];

/// A lightness step on a tonal palette, `0` (black) to `100` (white)
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Tone(u8);

impl Tone {
    /// Any tone in `0..=100`, for lookups outside the sampled set
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 100 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Tone from a literal, checked at compile time when used in a const
    pub const fn of(value: u8) -> Self {
        assert!(value <= 100, "tone out of range");
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this tone is one of the 27 sampled steps
    pub fn is_sampled(self) -> bool {
        TONES.contains(&self)
    }

    fn index(self) -> Option<usize> {
        TONES.iter().position(|t| *t == self)
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six palettes every scheme exposes
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PaletteName {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
    Error,
}

impl PaletteName {
    pub const ALL: [PaletteName; PALETTE_COUNT] = [
        PaletteName::Primary,
        PaletteName::Secondary,
        PaletteName::Tertiary,
        PaletteName::Neutral,
        PaletteName::NeutralVariant,
        PaletteName::Error,
    ];

    /// camelCase key prefix
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Neutral => "neutral",
            Self::NeutralVariant => "neutralVariant",
            Self::Error => "error",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl Display for PaletteName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Flattened key for one palette tone, e.g. `primary40`
pub fn tone_key(palette: PaletteName, tone: Tone) -> String {
    format!("{}{}", palette.key(), tone.value())
}

/// Six palettes sampled at every tone in [`TONES`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TonalGroups {
    groups: [[Argb; TONE_COUNT]; PALETTE_COUNT],
}

impl TonalGroups {
    /// Sample all six palettes of `scheme`
    pub fn assemble<D: DynamicScheme>(scheme: &D) -> Self {
        let mut groups = [[Argb::default(); TONE_COUNT]; PALETTE_COUNT];
        for name in PaletteName::ALL {
            let palette = scheme.palette(name);
            for (slot, tone) in groups[name.index()].iter_mut().zip(TONES) {
                *slot = palette.tone(tone);
            }
        }
        tracing::trace!(entries = PALETTE_COUNT * TONE_COUNT, "tonal groups assembled");
        Self { groups }
    }

    /// Color at a sampled tone; `None` for tones outside [`TONES`]
    pub fn get(&self, palette: PaletteName, tone: Tone) -> Option<Argb> {
        tone.index().map(|i| self.groups[palette.index()][i])
    }

    /// One palette's 27 samples, lightest first
    pub fn group(&self, palette: PaletteName) -> impl Iterator<Item = (Tone, Argb)> + '_ {
        TONES.into_iter().zip(self.groups[palette.index()].iter().copied())
    }

    /// Every `(palette, tone, color)` in palette-then-tone order
    pub fn iter(&self) -> impl Iterator<Item = (PaletteName, Tone, Argb)> + '_ {
        PaletteName::ALL
            .into_iter()
            .flat_map(move |name| self.group(name).map(move |(tone, argb)| (name, tone, argb)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_are_strictly_decreasing() {
        assert_eq!(TONES.len(), 27);
        assert!(TONES.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(TONES[0].value(), 100);
        assert_eq!(TONES[26].value(), 0);
    }

    #[test]
    fn tone_range_is_checked() {
        assert_eq!(Tone::new(100).map(Tone::value), Some(100));
        assert!(Tone::new(101).is_none());
        assert!(Tone::new(40).unwrap().is_sampled());
        assert!(!Tone::new(41).unwrap().is_sampled());
    }

    #[test]
    fn tone_keys_append_the_tone() {
        assert_eq!(tone_key(PaletteName::Primary, Tone(40)), "primary40");
        assert_eq!(tone_key(PaletteName::NeutralVariant, Tone(0)), "neutralVariant0");
    }

    #[test]
    fn palette_indices_follow_declaration_order() {
        for (i, name) in PaletteName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }
}
