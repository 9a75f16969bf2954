//! Theme assembly and the generation entry point

use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::Argb;
use crate::custom::{self, ColorFamily, CustomColor, FamilyRole};
use crate::error::{Result, ThemeError};
use crate::palette::{tone_key, PaletteName, TonalGroups, Tone};
use crate::scheme::{self, SchemeColors, SchemeRole};
use crate::science::{ColorScience, Material};
use crate::tokens::camel_to_kebab;
use crate::variant::Variant;

/// Light or dark side of a theme
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Toggle between light and dark
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Inputs to one theme generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeOptions {
    /// Seed color, `#RRGGBB`
    pub seed: String,
    #[serde(default)]
    pub contrast: f64,
    #[serde(default)]
    pub variant: Variant,
    /// Harmonize custom colors toward the seed hue
    #[serde(default)]
    pub blend: bool,
    /// Build custom palettes that keep the input chroma
    #[serde(default)]
    pub content: bool,
    /// Custom color name → hex
    #[serde(default)]
    pub custom_colors: IndexMap<String, String>,
}

impl ThemeOptions {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            contrast: 0.0,
            variant: Variant::default(),
            blend: false,
            content: false,
            custom_colors: IndexMap::new(),
        }
    }

    pub fn with_contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_blend(mut self, blend: bool) -> Self {
        self.blend = blend;
        self
    }

    pub fn with_content(mut self, content: bool) -> Self {
        self.content = content;
        self
    }

    pub fn with_custom_color(mut self, name: impl Into<String>, hex: impl Into<String>) -> Self {
        self.custom_colors.insert(name.into(), hex.into());
        self
    }
}

/// Typed name of one flattened theme entry
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ThemeKey<'a> {
    Role(SchemeRole),
    Tone(PaletteName, Tone),
    Custom(&'a str, FamilyRole),
}

impl Display for ThemeKey<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role(role) => f.write_str(role.key()),
            Self::Tone(palette, tone) => f.write_str(&tone_key(*palette, *tone)),
            Self::Custom(name, role) => f.write_str(&role.key(name)),
        }
    }
}

/// One side (light or dark) of a theme: roles, tonal groups and custom
/// families merged under unique camelCase keys
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeColors {
    scheme: SchemeColors,
    palettes: TonalGroups,
    custom: IndexMap<String, ColorFamily>,
    flat: IndexMap<String, Argb>,
}

impl ThemeColors {
    /// Merge the parts, failing on the first duplicate key
    pub fn merge(
        scheme: SchemeColors,
        palettes: TonalGroups,
        custom: IndexMap<String, ColorFamily>,
    ) -> Result<Self> {
        let mut colors = Self {
            scheme,
            palettes,
            custom,
            flat: IndexMap::new(),
        };

        let mut flat = IndexMap::new();
        // Keys must also stay unique once rendered as CSS variable names.
        let mut kebab = HashSet::new();
        for (key, argb) in colors.entries() {
            let key = key.to_string();
            if !kebab.insert(camel_to_kebab(&key)) {
                return Err(ThemeError::KeyCollision { key });
            }
            match flat.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(ThemeError::KeyCollision {
                        key: entry.key().clone(),
                    })
                }
                Entry::Vacant(entry) => {
                    entry.insert(argb);
                }
            }
        }
        colors.flat = flat;
        Ok(colors)
    }

    /// Visit every entry: roles, then palette tones, then custom families
    pub fn entries(&self) -> impl Iterator<Item = (ThemeKey<'_>, Argb)> + '_ {
        let roles = self.scheme.iter().map(|(role, argb)| (ThemeKey::Role(role), argb));
        let tones = self
            .palettes
            .iter()
            .map(|(name, tone, argb)| (ThemeKey::Tone(name, tone), argb));
        let custom = self.custom.iter().flat_map(|(name, family)| {
            FamilyRole::ALL
                .into_iter()
                .map(move |role| (ThemeKey::Custom(name.as_str(), role), family.get(role)))
        });
        roles.chain(tones).chain(custom)
    }

    /// Look up any flattened key (`primary`, `neutralVariant40`, `onBrand`)
    pub fn get(&self, key: &str) -> Option<Argb> {
        self.flat.get(key).copied()
    }

    pub fn role(&self, role: SchemeRole) -> Argb {
        self.scheme.get(role)
    }

    pub fn tone(&self, palette: PaletteName, tone: Tone) -> Option<Argb> {
        self.palettes.get(palette, tone)
    }

    pub fn scheme(&self) -> &SchemeColors {
        &self.scheme
    }

    pub fn palettes(&self) -> &TonalGroups {
        &self.palettes
    }

    pub fn custom(&self) -> &IndexMap<String, ColorFamily> {
        &self.custom
    }

    /// Flattened keys in output order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.flat.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }
}

/// A generated theme: one flattened color table per scheme
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    seed: Argb,
    light: ThemeColors,
    dark: ThemeColors,
}

impl Theme {
    /// Merge schemes, palettes and custom families into a theme
    pub fn assemble(
        seed: Argb,
        light_scheme: SchemeColors,
        dark_scheme: SchemeColors,
        light_palette: TonalGroups,
        dark_palette: TonalGroups,
        custom: &IndexMap<String, CustomColor>,
    ) -> Result<Self> {
        let light_custom = custom.iter().map(|(name, c)| (name.clone(), c.light)).collect();
        let dark_custom = custom.iter().map(|(name, c)| (name.clone(), c.dark)).collect();

        Ok(Self {
            seed,
            light: ThemeColors::merge(light_scheme, light_palette, light_custom)?,
            dark: ThemeColors::merge(dark_scheme, dark_palette, dark_custom)?,
        })
    }

    /// The seed color the theme was generated from
    pub fn seed(&self) -> Argb {
        self.seed
    }

    pub fn light(&self) -> &ThemeColors {
        &self.light
    }

    pub fn dark(&self) -> &ThemeColors {
        &self.dark
    }

    /// Get the colors for a specific scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &ThemeColors {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

/// Generate a theme with the default color science backend
pub fn generate(options: &ThemeOptions) -> Result<Theme> {
    generate_with::<Material>(options)
}

/// Generate a theme with a specific color science backend
pub fn generate_with<S: ColorScience>(options: &ThemeOptions) -> Result<Theme> {
    let pair = scheme::build::<S>(&options.seed, options.contrast, options.variant)?;

    let light_palette = TonalGroups::assemble(&pair.light);
    let dark_palette = TonalGroups::assemble(&pair.dark);

    let custom = custom::blend(
        &options.custom_colors,
        options.blend,
        options.content,
        &pair.source,
    )?;

    let theme = Theme::assemble(
        pair.source.argb,
        SchemeColors::from_scheme(&pair.light),
        SchemeColors::from_scheme(&pair.dark),
        light_palette,
        dark_palette,
        &custom,
    )?;

    tracing::debug!(
        seed = %theme.seed(),
        variant = %options.variant,
        custom = custom.len(),
        entries = theme.light().len(),
        "theme generated"
    );

    Ok(theme)
}
