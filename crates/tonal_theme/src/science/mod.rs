//! Capability interface to the perceptual color library
//!
//! The pipeline only ever needs a handful of operations from color science:
//! HCT construction, hue lookup, harmonization, tonal palette construction
//! and the seven dynamic-scheme algorithms. They are collected here so any
//! compliant backend can be swapped in; [`Material`] is the default one.
//!
//! All operations are associated functions. Backends carry no state and the
//! scheme constructors are usable as plain `fn` pointers, which is what
//! [`crate::variant::select`] hands out.

mod material;

pub use material::Material;

use crate::color::Argb;
use crate::palette::{PaletteName, Tone};
use crate::scheme::SchemeRole;

/// Which palette constructor to use for a custom color
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum PaletteKind {
    /// Chroma is raised to a usable floor so accents stay colorful
    #[default]
    Standard,
    /// Chroma follows the input color, preserving its vividness
    Content,
}

impl PaletteKind {
    pub fn from_content_flag(content: bool) -> Self {
        if content {
            Self::Content
        } else {
            Self::Standard
        }
    }
}

/// A hue/chroma family that can produce any tone
pub trait TonalPalette {
    fn tone(&self, tone: Tone) -> Argb;
}

/// A scheme computed for one (source, variant, contrast, dark) tuple
pub trait DynamicScheme {
    type Palette: TonalPalette;

    /// ARGB of one curated semantic role
    fn role(&self, role: SchemeRole) -> Argb;

    /// One of the six tonal palettes the scheme was built from
    fn palette(&self, name: PaletteName) -> &Self::Palette;
}

/// Perceptual color operations consumed by the pipeline
pub trait ColorScience {
    /// Backend's perceptual (hue, chroma, tone) representation
    type Hct: Clone;
    type Palette: TonalPalette;
    type Scheme: DynamicScheme<Palette = Self::Palette>;

    fn hct(argb: Argb) -> Self::Hct;

    /// Hue angle in degrees, `0.0..360.0`
    fn hue(argb: Argb) -> f64;

    /// Move `design`'s hue toward `source`'s hue
    fn harmonize(design: Argb, source: Argb) -> Argb;

    fn palette(argb: Argb, kind: PaletteKind) -> Self::Palette;

    fn monochrome(source: Self::Hct, is_dark: bool, contrast: f64) -> Self::Scheme;
    fn neutral(source: Self::Hct, is_dark: bool, contrast: f64) -> Self::Scheme;
    fn tonal_spot(source: Self::Hct, is_dark: bool, contrast: f64) -> Self::Scheme;
    fn vibrant(source: Self::Hct, is_dark: bool, contrast: f64) -> Self::Scheme;
    fn expressive(source: Self::Hct, is_dark: bool, contrast: f64) -> Self::Scheme;
    fn fidelity(source: Self::Hct, is_dark: bool, contrast: f64) -> Self::Scheme;
    fn content(source: Self::Hct, is_dark: bool, contrast: f64) -> Self::Scheme;
}

/// A seed color together with its backend HCT form
pub struct SourceColor<S: ColorScience> {
    pub argb: Argb,
    pub hct: S::Hct,
}

impl<S: ColorScience> SourceColor<S> {
    pub fn new(argb: Argb) -> Self {
        Self {
            argb,
            hct: S::hct(argb),
        }
    }
}

impl<S: ColorScience> Clone for SourceColor<S> {
    fn clone(&self) -> Self {
        Self {
            argb: self.argb,
            hct: self.hct.clone(),
        }
    }
}

/// Signed shortest rotation from `from` to `to`, in degrees (`-180..=180`)
pub fn hue_rotation(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_takes_the_short_way_round() {
        assert_eq!(hue_rotation(10.0, 50.0), 40.0);
        assert_eq!(hue_rotation(350.0, 10.0), 20.0);
        assert_eq!(hue_rotation(10.0, 350.0), -20.0);
        assert_eq!(hue_rotation(90.0, 90.0), 0.0);
    }

    #[test]
    fn content_flag_selects_palette_kind() {
        assert_eq!(PaletteKind::from_content_flag(true), PaletteKind::Content);
        assert_eq!(PaletteKind::from_content_flag(false), PaletteKind::Standard);
    }
}
