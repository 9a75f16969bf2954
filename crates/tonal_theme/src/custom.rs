//! Custom brand colors
//!
//! Each custom color gets its own light and dark family of four roles,
//! sampled from a palette built on the (optionally harmonized) custom seed.

use indexmap::IndexMap;
use serde::Serialize;

use crate::color::Argb;
use crate::error::{Result, ThemeError};
use crate::palette::Tone;
use crate::science::{hue_rotation, ColorScience, PaletteKind, SourceColor, TonalPalette};

/// Tones for (color, onColor, colorContainer, onColorContainer) in light mode
const LIGHT_TONES: [Tone; 4] = [Tone::of(40), Tone::of(100), Tone::of(90), Tone::of(10)];

/// Tones for (color, onColor, colorContainer, onColorContainer) in dark mode
const DARK_TONES: [Tone; 4] = [Tone::of(80), Tone::of(20), Tone::of(30), Tone::of(90)];

/// The four roles of a custom color family
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FamilyRole {
    Color,
    OnColor,
    ColorContainer,
    OnColorContainer,
}

impl FamilyRole {
    pub const ALL: [FamilyRole; 4] = [
        FamilyRole::Color,
        FamilyRole::OnColor,
        FamilyRole::ColorContainer,
        FamilyRole::OnColorContainer,
    ];

    /// Flattened key for this role of the named custom color
    ///
    /// `brand` → `brand`, `onBrand`, `brandContainer`, `onBrandContainer`.
    pub fn key(self, name: &str) -> String {
        match self {
            Self::Color => name.to_string(),
            Self::OnColor => format!("on{}", capitalize(name)),
            Self::ColorContainer => format!("{name}Container"),
            Self::OnColorContainer => format!("on{}Container", capitalize(name)),
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One light or dark family for a custom color
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorFamily {
    pub color: Argb,
    pub on_color: Argb,
    pub color_container: Argb,
    pub on_color_container: Argb,
}

impl ColorFamily {
    fn sample<P: TonalPalette>(palette: &P, tones: [Tone; 4]) -> Self {
        let [color, on_color, container, on_container] = tones.map(|t| palette.tone(t));
        Self {
            color,
            on_color,
            color_container: container,
            on_color_container: on_container,
        }
    }

    pub fn get(&self, role: FamilyRole) -> Argb {
        match role {
            FamilyRole::Color => self.color,
            FamilyRole::OnColor => self.on_color,
            FamilyRole::ColorContainer => self.color_container,
            FamilyRole::OnColorContainer => self.on_color_container,
        }
    }
}

/// A custom color resolved for both schemes
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CustomColor {
    /// The color as given by the caller
    pub seed: Argb,
    /// The color palettes were built from (harmonized when blending)
    pub target: Argb,
    pub light: ColorFamily,
    pub dark: ColorFamily,
}

/// Custom names become CSS custom property segments, so they must be
/// lowerCamelCase: an ASCII lowercase letter followed by ASCII letters and
/// digits.
fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric());
    if valid {
        Ok(())
    } else {
        Err(ThemeError::Configuration {
            parameter: "custom_colors",
            value: name.to_string(),
            reason: "names must be lowerCamelCase ASCII letters and digits".to_string(),
        })
    }
}

/// Resolve every custom color against the theme source
///
/// `blend` harmonizes each custom seed toward the source hue; `content`
/// picks the chroma-preserving palette constructor. Input order is kept.
pub fn blend<S: ColorScience>(
    custom_colors: &IndexMap<String, String>,
    blend: bool,
    content: bool,
    source: &SourceColor<S>,
) -> Result<IndexMap<String, CustomColor>> {
    let kind = PaletteKind::from_content_flag(content);
    let mut resolved = IndexMap::with_capacity(custom_colors.len());

    for (name, hex) in custom_colors {
        validate_name(name)?;
        let seed = Argb::from_hex(hex)
            .map_err(|e| ThemeError::invalid_color(format!("custom_colors.{name}"), hex, e))?;
        let target = if blend {
            S::harmonize(seed, source.argb)
        } else {
            seed
        };

        tracing::trace!(
            name = %name,
            seed = %seed,
            target = %target,
            hue_shift = hue_rotation(S::hue(seed), S::hue(target)),
            "custom color resolved"
        );

        let palette = S::palette(target, kind);
        resolved.insert(
            name.clone(),
            CustomColor {
                seed,
                target,
                light: ColorFamily::sample(&palette, LIGHT_TONES),
                dark: ColorFamily::sample(&palette, DARK_TONES),
            },
        );
    }

    Ok(resolved)
}
