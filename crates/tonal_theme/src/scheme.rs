//! Light/dark scheme construction and semantic roles

use std::fmt::{self, Display, Formatter};

use crate::color::Argb;
use crate::error::{Result, ThemeError};
use crate::science::{ColorScience, DynamicScheme, SourceColor};
use crate::variant::{self, Variant};

/// Curated semantic color roles, in output order
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SchemeRole {
    // Primary
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    PrimaryFixed,
    OnPrimaryFixed,
    PrimaryFixedDim,
    OnPrimaryFixedVariant,

    // Secondary
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    SecondaryFixed,
    OnSecondaryFixed,
    SecondaryFixedDim,
    OnSecondaryFixedVariant,

    // Tertiary
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    TertiaryFixed,
    OnTertiaryFixed,
    TertiaryFixedDim,
    OnTertiaryFixedVariant,

    // Error
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,

    // Outlines
    Outline,
    OutlineVariant,

    // Surfaces
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    InverseSurface,
    InverseOnSurface,
    InversePrimary,
    Shadow,
    Scrim,
    SurfaceContainerHighest,
    SurfaceContainerHigh,
    SurfaceContainer,
    SurfaceContainerLow,
    SurfaceContainerLowest,
    SurfaceBright,
    SurfaceDim,
    SurfaceTint,
}

const ROLE_COUNT: usize = 49;

impl SchemeRole {
    pub const ALL: [SchemeRole; ROLE_COUNT] = [
        SchemeRole::Primary,
        SchemeRole::OnPrimary,
        SchemeRole::PrimaryContainer,
        SchemeRole::OnPrimaryContainer,
        SchemeRole::PrimaryFixed,
        SchemeRole::OnPrimaryFixed,
        SchemeRole::PrimaryFixedDim,
        SchemeRole::OnPrimaryFixedVariant,
        SchemeRole::Secondary,
        SchemeRole::OnSecondary,
        SchemeRole::SecondaryContainer,
        SchemeRole::OnSecondaryContainer,
        SchemeRole::SecondaryFixed,
        SchemeRole::OnSecondaryFixed,
        SchemeRole::SecondaryFixedDim,
        SchemeRole::OnSecondaryFixedVariant,
        SchemeRole::Tertiary,
        SchemeRole::OnTertiary,
        SchemeRole::TertiaryContainer,
        SchemeRole::OnTertiaryContainer,
        SchemeRole::TertiaryFixed,
        SchemeRole::OnTertiaryFixed,
        SchemeRole::TertiaryFixedDim,
        SchemeRole::OnTertiaryFixedVariant,
        SchemeRole::Error,
        SchemeRole::OnError,
        SchemeRole::ErrorContainer,
        SchemeRole::OnErrorContainer,
        SchemeRole::Outline,
        SchemeRole::OutlineVariant,
        SchemeRole::Background,
        SchemeRole::OnBackground,
        SchemeRole::Surface,
        SchemeRole::OnSurface,
        SchemeRole::SurfaceVariant,
        SchemeRole::OnSurfaceVariant,
        SchemeRole::InverseSurface,
        SchemeRole::InverseOnSurface,
        SchemeRole::InversePrimary,
        SchemeRole::Shadow,
        SchemeRole::Scrim,
        SchemeRole::SurfaceContainerHighest,
        SchemeRole::SurfaceContainerHigh,
        SchemeRole::SurfaceContainer,
        SchemeRole::SurfaceContainerLow,
        SchemeRole::SurfaceContainerLowest,
        SchemeRole::SurfaceBright,
        SchemeRole::SurfaceDim,
        SchemeRole::SurfaceTint,
    ];

    /// camelCase key used in the flattened theme
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::OnPrimary => "onPrimary",
            Self::PrimaryContainer => "primaryContainer",
            Self::OnPrimaryContainer => "onPrimaryContainer",
            Self::PrimaryFixed => "primaryFixed",
            Self::OnPrimaryFixed => "onPrimaryFixed",
            Self::PrimaryFixedDim => "primaryFixedDim",
            Self::OnPrimaryFixedVariant => "onPrimaryFixedVariant",
            Self::Secondary => "secondary",
            Self::OnSecondary => "onSecondary",
            Self::SecondaryContainer => "secondaryContainer",
            Self::OnSecondaryContainer => "onSecondaryContainer",
            Self::SecondaryFixed => "secondaryFixed",
            Self::OnSecondaryFixed => "onSecondaryFixed",
            Self::SecondaryFixedDim => "secondaryFixedDim",
            Self::OnSecondaryFixedVariant => "onSecondaryFixedVariant",
            Self::Tertiary => "tertiary",
            Self::OnTertiary => "onTertiary",
            Self::TertiaryContainer => "tertiaryContainer",
            Self::OnTertiaryContainer => "onTertiaryContainer",
            Self::TertiaryFixed => "tertiaryFixed",
            Self::OnTertiaryFixed => "onTertiaryFixed",
            Self::TertiaryFixedDim => "tertiaryFixedDim",
            Self::OnTertiaryFixedVariant => "onTertiaryFixedVariant",
            Self::Error => "error",
            Self::OnError => "onError",
            Self::ErrorContainer => "errorContainer",
            Self::OnErrorContainer => "onErrorContainer",
            Self::Outline => "outline",
            Self::OutlineVariant => "outlineVariant",
            Self::Background => "background",
            Self::OnBackground => "onBackground",
            Self::Surface => "surface",
            Self::OnSurface => "onSurface",
            Self::SurfaceVariant => "surfaceVariant",
            Self::OnSurfaceVariant => "onSurfaceVariant",
            Self::InverseSurface => "inverseSurface",
            Self::InverseOnSurface => "inverseOnSurface",
            Self::InversePrimary => "inversePrimary",
            Self::Shadow => "shadow",
            Self::Scrim => "scrim",
            Self::SurfaceContainerHighest => "surfaceContainerHighest",
            Self::SurfaceContainerHigh => "surfaceContainerHigh",
            Self::SurfaceContainer => "surfaceContainer",
            Self::SurfaceContainerLow => "surfaceContainerLow",
            Self::SurfaceContainerLowest => "surfaceContainerLowest",
            Self::SurfaceBright => "surfaceBright",
            Self::SurfaceDim => "surfaceDim",
            Self::SurfaceTint => "surfaceTint",
        }
    }

    /// Look a role up by its camelCase key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl Display for SchemeRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Every role of one scheme resolved to ARGB
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemeColors {
    colors: [Argb; ROLE_COUNT],
}

impl SchemeColors {
    /// Resolve all roles of a dynamic scheme
    pub fn from_scheme<D: DynamicScheme>(scheme: &D) -> Self {
        Self::from_fn(|role| scheme.role(role))
    }

    /// Build from a per-role function
    pub fn from_fn(mut f: impl FnMut(SchemeRole) -> Argb) -> Self {
        let mut colors = [Argb::default(); ROLE_COUNT];
        for role in SchemeRole::ALL {
            colors[role.index()] = f(role);
        }
        Self { colors }
    }

    pub fn get(&self, role: SchemeRole) -> Argb {
        self.colors[role.index()]
    }

    /// `(role, color)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (SchemeRole, Argb)> + '_ {
        SchemeRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

/// A light and a dark scheme built from the same source and contrast
pub struct SchemePair<S: ColorScience> {
    pub source: SourceColor<S>,
    pub variant: Variant,
    pub contrast: f64,
    pub light: S::Scheme,
    pub dark: S::Scheme,
}

/// Build the light/dark pair for a seed hex string
pub fn build<S: ColorScience>(
    seed_hex: &str,
    contrast: f64,
    variant: Variant,
) -> Result<SchemePair<S>> {
    let seed =
        Argb::from_hex(seed_hex).map_err(|e| ThemeError::invalid_color("seed", seed_hex, e))?;
    build_from_argb(seed, contrast, variant)
}

/// Build the light/dark pair for an already-parsed seed
pub fn build_from_argb<S: ColorScience>(
    seed: Argb,
    contrast: f64,
    variant: Variant,
) -> Result<SchemePair<S>> {
    if !contrast.is_finite() {
        return Err(ThemeError::Configuration {
            parameter: "contrast",
            value: contrast.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    let source = SourceColor::<S>::new(seed);
    let construct = variant::select::<S>(variant);

    tracing::debug!(seed = %seed, ?variant, contrast, "building schemes");

    let light = construct(source.hct.clone(), false, contrast);
    let dark = construct(source.hct.clone(), true, contrast);

    Ok(SchemePair {
        source,
        variant,
        contrast,
        light,
        dark,
    })
}
