//! Rendering a generated theme in the configured output format

use anyhow::{Context, Result};
use serde::Serialize;
use tonal_theme::tokens::render_block;
use tonal_theme::{
    format, render_stylesheet, ColorScheme, DesignTokens, FormattedTheme, OpacityTokens,
    OutputKind, StylesheetOptions, Theme, ThemeProperties,
};

use crate::config::{OutputConfig, OutputFormat, SchemeSelection};

impl SchemeSelection {
    fn schemes(self) -> &'static [ColorScheme] {
        match self {
            Self::Light => &[ColorScheme::Light],
            Self::Dark => &[ColorScheme::Dark],
            Self::Both => &[ColorScheme::Light, ColorScheme::Dark],
        }
    }
}

fn scheme_name(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Light => "light",
        ColorScheme::Dark => "dark",
    }
}

/// Render `theme` as text per the output config
pub fn render(theme: &Theme, output: &OutputConfig) -> Result<String> {
    let properties = |scheme: ColorScheme| ThemeProperties::from_colors(theme.for_scheme(scheme));

    let text = match output.format {
        OutputFormat::Css => per_scheme_json(output.scheme, |scheme| {
            format(&properties(scheme), OutputKind::Css)
        })?,
        OutputFormat::Tailwind => {
            let mut text = String::new();
            for &scheme in output.scheme.schemes() {
                let formatted = format(&properties(scheme), OutputKind::Tailwind);
                if let FormattedTheme::Tailwind(lines) = formatted {
                    text.push_str(&format!("/* {} */\n", scheme_name(scheme)));
                    text.push_str(&lines.join("\n"));
                    text.push('\n');
                }
            }
            text
        }
        OutputFormat::Stylesheet => stylesheet(theme, output),
        OutputFormat::Tokens => {
            let tokens = DesignTokens::from_theme(theme, &OpacityTokens::default());
            to_json(&tokens)?
        }
        OutputFormat::Json => per_scheme_json(output.scheme, properties)?,
    };

    Ok(text)
}

fn stylesheet(theme: &Theme, output: &OutputConfig) -> String {
    let opacity = output.opacity.then(OpacityTokens::default);
    match output.scheme {
        SchemeSelection::Both => render_stylesheet(
            theme,
            &StylesheetOptions {
                light_selector: output.light_selector.clone(),
                dark_selector: output.dark_selector.clone(),
                opacity,
            },
        ),
        // A single side always goes under the root selector.
        SchemeSelection::Light | SchemeSelection::Dark => {
            let scheme = output.scheme.schemes()[0];
            let properties = ThemeProperties::from_colors(theme.for_scheme(scheme));
            render_block(&output.light_selector, &properties, opacity.as_ref())
        }
    }
}

/// One scheme renders as its value; both render as `{light, dark}`
fn per_scheme_json<T: Serialize>(
    selection: SchemeSelection,
    mut render: impl FnMut(ColorScheme) -> T,
) -> Result<String> {
    match selection {
        SchemeSelection::Light => to_json(&render(ColorScheme::Light)),
        SchemeSelection::Dark => to_json(&render(ColorScheme::Dark)),
        SchemeSelection::Both => {
            #[derive(Serialize)]
            struct Both<T> {
                light: T,
                dark: T,
            }
            to_json(&Both {
                light: render(ColorScheme::Light),
                dark: render(ColorScheme::Dark),
            })
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    text.push('\n');
    Ok(text)
}
