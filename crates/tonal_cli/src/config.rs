//! Tonal configuration file handling

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tonal_theme::ThemeOptions;

pub const CONFIG_FILE: &str = "tonal.toml";

/// Top-level Tonal configuration (tonal.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct TonalConfig {
    pub theme: ThemeOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

/// What to render and where
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub scheme: SchemeSelection,
    /// Output file; stdout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default = "default_light_selector")]
    pub light_selector: String,
    #[serde(default = "default_dark_selector")]
    pub dark_selector: String,
    /// Emit state-layer opacity variables in stylesheets
    #[serde(default = "default_true")]
    pub opacity: bool,
}

fn default_light_selector() -> String {
    ":root".to_string()
}

fn default_dark_selector() -> String {
    ".dark".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            scheme: SchemeSelection::default(),
            path: None,
            light_selector: default_light_selector(),
            dark_selector: default_dark_selector(),
            opacity: true,
        }
    }
}

/// Output shapes the CLI can write
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `--colors-*` → `r,g,b /* #hex */` as JSON
    Css,
    /// Tailwind `rgba()` declarations
    Tailwind,
    /// `:root` / `.dark` stylesheet
    #[default]
    Stylesheet,
    /// Variable references and values for a utility framework config
    Tokens,
    /// Per-color `{argb, rgba, hex}` records
    Json,
}

/// Which sides of the theme to render
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemeSelection {
    Light,
    Dark,
    #[default]
    Both,
}

impl TonalConfig {
    /// Load configuration from a directory (looks for tonal.toml) or file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found in {}. Run `tonal init` to create one.",
                CONFIG_FILE,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: TonalConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Create a new configuration with the given seed
    pub fn new(seed: &str) -> Self {
        Self {
            theme: ThemeOptions::new(seed),
            output: OutputConfig::default(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
