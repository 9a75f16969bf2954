//! Per-color token records

use indexmap::IndexMap;
use serde::Serialize;

use super::format::css_var_name;
use crate::color::{Argb, Rgba};
use crate::theme::{Theme, ThemeColors};

/// One color leaf in every representation the formatters need
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ThemeProperty {
    pub argb: Argb,
    pub rgba: Rgba,
    pub hex: String,
}

impl ThemeProperty {
    pub fn from_argb(argb: Argb) -> Self {
        Self {
            argb,
            rgba: argb.rgba(),
            hex: argb.hex(),
        }
    }

    /// `r,g,b` as consumed by `rgba(var(--colors-x), <alpha>)`
    pub fn rgb(&self) -> String {
        format!("{},{},{}", self.rgba.r, self.rgba.g, self.rgba.b)
    }

    /// CSS-variable view of this property under `key`
    pub fn css(&self, key: &str) -> CssProperty {
        CssProperty {
            css_var: css_var_name(key),
            rgb: self.rgb(),
            hex: self.hex.clone(),
        }
    }
}

/// A property rendered for CSS variable consumers
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssProperty {
    pub css_var: String,
    pub rgb: String,
    pub hex: String,
}

/// Token records for one side of a theme, keyed by camelCase theme key
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThemeProperties(IndexMap<String, ThemeProperty>);

impl ThemeProperties {
    pub fn from_colors(colors: &ThemeColors) -> Self {
        Self(
            colors
                .entries()
                .map(|(key, argb)| (key.to_string(), ThemeProperty::from_argb(argb)))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&ThemeProperty> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeProperty)> + '_ {
        self.0.iter().map(|(key, property)| (key.as_str(), property))
    }

    /// `{cssVar, rgb, hex}` records keyed by kebab-case name
    pub fn css_properties(&self) -> IndexMap<String, CssProperty> {
        self.iter()
            .map(|(key, property)| (super::format::camel_to_kebab(key), property.css(key)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Token records for both sides of a theme
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TransformedTheme {
    pub light: ThemeProperties,
    pub dark: ThemeProperties,
}

impl TransformedTheme {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            light: ThemeProperties::from_colors(theme.light()),
            dark: ThemeProperties::from_colors(theme.dark()),
        }
    }
}
