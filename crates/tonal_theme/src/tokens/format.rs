//! CSS custom property and Tailwind declaration formatters
//!
//! Both outputs are pure reshapes of [`ThemeProperties`]; no color value is
//! recomputed here.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::property::ThemeProperties;
use crate::error::{Result, ThemeError};

/// Prefix of every color custom property
pub const COLOR_VAR_PREFIX: &str = "--colors-";

/// `--colors-<kebab>` → `r,g,b /* #hex */`
pub type CssVariableMap = IndexMap<String, String>;

/// Which shape [`format`] produces
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Css,
    Tailwind,
}

impl OutputKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
        }
    }
}

impl Display for OutputKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for OutputKind {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "tailwind" => Ok(Self::Tailwind),
            _ => Err(ThemeError::Configuration {
                parameter: "format",
                value: s.to_string(),
                reason: "expected css or tailwind".to_string(),
            }),
        }
    }
}

/// Formatter output
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormattedTheme {
    Css(CssVariableMap),
    Tailwind(Vec<String>),
}

/// Render token records in the requested shape
pub fn format(properties: &ThemeProperties, kind: OutputKind) -> FormattedTheme {
    match kind {
        OutputKind::Css => FormattedTheme::Css(css_variables(properties)),
        OutputKind::Tailwind => FormattedTheme::Tailwind(tailwind_declarations(properties)),
    }
}

/// Custom property name → `r,g,b /* #hex */`
pub fn css_variables(properties: &ThemeProperties) -> CssVariableMap {
    properties
        .iter()
        .map(|(key, property)| {
            let value = format!("{} /* {} */", property.rgb(), property.hex);
            (css_var_name(key), value)
        })
        .collect()
}

/// `  --colors-<key>: rgba(r, g, b, a); /* #hex */`, one per property
pub fn tailwind_declarations(properties: &ThemeProperties) -> Vec<String> {
    properties
        .iter()
        .map(|(key, property)| {
            let rgba = property.rgba;
            format!(
                "  {}: rgba({}, {}, {}, {}); /* {} */",
                css_var_name(key),
                rgba.r,
                rgba.g,
                rgba.b,
                rgba.a,
                property.hex
            )
        })
        .collect()
}

/// `surfaceContainerHigh` → `--colors-surface-container-high`
pub fn css_var_name(key: &str) -> String {
    format!("{COLOR_VAR_PREFIX}{}", camel_to_kebab(key))
}

/// Insert `-` before every ASCII uppercase letter, then lowercase.
///
/// Digits stay attached: `neutralVariant40` → `neutral-variant40`.
pub fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}
