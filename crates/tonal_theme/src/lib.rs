//! Tonal Theme Generator
//!
//! Generates a complete light/dark color theme from a single seed color,
//! with optional custom brand colors, and renders it as CSS custom
//! properties or Tailwind declarations.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tonal_theme::{generate, format, OutputKind, ThemeOptions, ThemeProperties, Variant};
//!
//! let options = ThemeOptions::new("#1f6feb")
//!     .with_variant(Variant::Vibrant)
//!     .with_custom_color("brand", "#ff0000")
//!     .with_blend(true);
//!
//! let theme = generate(&options)?;
//! let props = ThemeProperties::from_colors(theme.light());
//! let css = format(&props, OutputKind::Css);
//! ```
//!
//! # Pipeline
//!
//! - [`variant`]: maps a [`Variant`] to a scheme constructor
//! - [`scheme`]: builds the light and dark dynamic schemes from the seed
//! - [`palette`]: samples six tonal palettes at 27 fixed tones
//! - [`custom`]: resolves custom colors into light/dark role families
//! - [`theme`]: merges everything into one flat table per scheme
//! - [`tokens`]: formats the tables for CSS and Tailwind consumers
//!
//! Color science (HCT, tonal palettes, dynamic schemes, harmonization) sits
//! behind the [`ColorScience`] trait; [`Material`] is the default backend.
//!
//! # Runtime
//!
//! [`ThemeState`] keeps the active theme for live scheme switching and
//! regeneration. A failed regeneration keeps the previous theme.

pub mod color;
pub mod custom;
pub mod error;
pub mod palette;
pub mod scheme;
pub mod science;
pub mod state;
pub mod theme;
pub mod tokens;
pub mod variant;

// Re-export commonly used types
pub use color::{Argb, Rgba};
pub use custom::{ColorFamily, CustomColor, FamilyRole};
pub use error::{HexError, Result, ThemeError};
pub use palette::{PaletteName, TonalGroups, Tone, TONES};
pub use scheme::{SchemeColors, SchemePair, SchemeRole};
pub use science::{ColorScience, Material, PaletteKind, SourceColor};
pub use state::ThemeState;
pub use theme::{generate, generate_with, ColorScheme, Theme, ThemeColors, ThemeKey, ThemeOptions};
pub use tokens::{
    camel_to_kebab, color_references, color_variables, format, render_stylesheet, CssProperty,
    DesignTokens, FormattedTheme, OpacityToken, OpacityTokens, OutputKind, StylesheetOptions,
    ThemeProperties, ThemeProperty, TransformedTheme,
};
pub use variant::Variant;
