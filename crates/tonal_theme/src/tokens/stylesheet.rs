//! Runtime stylesheet rendering
//!
//! The light side is written under a root selector and the dark side under a
//! class selector, so flipping the class on the document switches schemes.

use std::fmt::Write;

use super::format::css_var_name;
use super::opacity::OpacityTokens;
use super::property::ThemeProperties;
use crate::theme::Theme;

/// Selectors and extras for [`render_stylesheet`]
#[derive(Clone, Debug, PartialEq)]
pub struct StylesheetOptions {
    pub light_selector: String,
    pub dark_selector: String,
    /// Emitted once in the light block when set
    pub opacity: Option<OpacityTokens>,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self {
            light_selector: ":root".to_string(),
            dark_selector: ".dark".to_string(),
            opacity: Some(OpacityTokens::default()),
        }
    }
}

/// Light and dark blocks for a whole theme
pub fn render_stylesheet(theme: &Theme, options: &StylesheetOptions) -> String {
    let light = ThemeProperties::from_colors(theme.light());
    let dark = ThemeProperties::from_colors(theme.dark());

    let mut css = render_block(&options.light_selector, &light, options.opacity.as_ref());
    css.push('\n');
    css.push_str(&render_block(&options.dark_selector, &dark, None));
    css
}

/// One `selector { --colors-x: r,g,b; ... }` block
pub fn render_block(
    selector: &str,
    properties: &ThemeProperties,
    opacity: Option<&OpacityTokens>,
) -> String {
    let mut css = String::with_capacity(properties.len() * 48);
    // Writing into a String cannot fail.
    let _ = writeln!(css, "{selector} {{");
    for (key, property) in properties.iter() {
        let name = css_var_name(key);
        let _ = writeln!(css, "  {}: {}; /* {} */", name, property.rgb(), property.hex);
    }
    if let Some(opacity) = opacity {
        for (token, value) in opacity.iter() {
            let _ = writeln!(css, "  {}: {value};", token.css_var());
        }
    }
    css.push_str("}\n");
    css
}
