//! Build-time design token tables
//!
//! Utility frameworks consume colors as references to runtime variables so
//! alpha modifiers keep working: `rgba(var(--colors-primary), <alpha-value>)`.

use indexmap::IndexMap;
use serde::Serialize;

use super::format::{camel_to_kebab, css_var_name};
use super::opacity::OpacityTokens;
use super::property::ThemeProperties;
use crate::theme::{Theme, ThemeColors};

/// kebab key → `rgba(var(--colors-<key>), <alpha-value>)`
pub fn color_references(colors: &ThemeColors) -> IndexMap<String, String> {
    colors
        .keys()
        .map(|key| {
            let reference = format!("rgba(var({}), <alpha-value>)", css_var_name(key));
            (camel_to_kebab(key), reference)
        })
        .collect()
}

/// `--colors-<key>` → `r,g,b` for one scheme
pub fn color_variables(properties: &ThemeProperties) -> IndexMap<String, String> {
    properties
        .iter()
        .map(|(key, property)| (css_var_name(key), property.rgb()))
        .collect()
}

/// Runtime variable values for both schemes
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SchemeVariables {
    pub light: IndexMap<String, String>,
    pub dark: IndexMap<String, String>,
}

/// Everything a utility framework config needs from one theme
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesignTokens {
    pub colors: IndexMap<String, String>,
    pub variables: SchemeVariables,
    pub opacity: IndexMap<String, f32>,
}

impl DesignTokens {
    pub fn from_theme(theme: &Theme, opacity: &OpacityTokens) -> Self {
        let light = ThemeProperties::from_colors(theme.light());
        let dark = ThemeProperties::from_colors(theme.dark());

        Self {
            colors: color_references(theme.light()),
            variables: SchemeVariables {
                light: color_variables(&light),
                dark: color_variables(&dark),
            },
            opacity: opacity
                .iter()
                .map(|(token, value)| (token.key().to_string(), value))
                .collect(),
        }
    }
}
