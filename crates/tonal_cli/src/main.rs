//! Tonal - color theme generator
//!
//! Generates a light/dark color theme from a seed color and writes it as a
//! stylesheet, CSS variable map, Tailwind declarations or design tokens.

mod config;
mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tonal_theme::{generate, Variant};
use tracing_subscriber::EnvFilter;

use crate::config::{OutputFormat, SchemeSelection, TonalConfig, CONFIG_FILE};

/// Generate color themes from a seed color
#[derive(Parser, Debug)]
#[command(name = "tonal")]
#[command(about = "Generate light/dark color themes from a seed color")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a theme
    Generate(GenerateArgs),

    /// Create a tonal.toml in a directory
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Seed color for the new config
        #[arg(long, default_value = "#6750a4")]
        seed: String,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// List scheme variants
    Variants,
}

/// Flags override values from the config file
#[derive(Args, Debug)]
struct GenerateArgs {
    /// Config file or directory containing tonal.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed color (#RRGGBB)
    #[arg(short, long)]
    seed: Option<String>,

    /// Scheme variant (name or 0-6)
    #[arg(long, value_parser = parse_variant)]
    variant: Option<Variant>,

    /// Contrast level, -1.0 to 1.0
    #[arg(long, allow_negative_numbers = true)]
    contrast: Option<f64>,

    /// Harmonize custom colors toward the seed
    #[arg(long, overrides_with = "no_blend")]
    blend: bool,

    /// Leave custom colors unharmonized
    #[arg(long, overrides_with = "blend")]
    no_blend: bool,

    /// Keep custom color chroma
    #[arg(long, overrides_with = "no_content")]
    content: bool,

    /// Use the standard custom color palette
    #[arg(long, overrides_with = "content")]
    no_content: bool,

    /// Custom color, NAME=HEX (repeatable)
    #[arg(long = "custom", value_parser = parse_custom)]
    custom: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Which schemes to render
    #[arg(long, value_enum)]
    scheme: Option<SchemeSelection>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_variant(value: &str) -> Result<Variant, tonal_theme::ThemeError> {
    value.parse()
}

/// `--flag` / `--no-flag` pair; `None` keeps the config value
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn parse_custom(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((name, hex)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), hex.trim().to_string()))
        }
        _ => Err(format!("expected NAME=HEX, got `{value}`")),
    }
}

impl GenerateArgs {
    /// Resolve the config: explicit path, then ./tonal.toml, then flags alone
    fn load_config(&self) -> Result<TonalConfig> {
        if let Some(path) = &self.config {
            return TonalConfig::load_from_dir(path);
        }
        if Path::new(CONFIG_FILE).is_file() {
            return TonalConfig::load_from_dir(Path::new("."));
        }
        match &self.seed {
            Some(seed) => Ok(TonalConfig::new(seed)),
            None => anyhow::bail!(
                "No seed color. Pass --seed or run `tonal init` to create {}.",
                CONFIG_FILE
            ),
        }
    }

    fn apply(self, config: &mut TonalConfig) {
        let theme = &mut config.theme;
        if let Some(seed) = self.seed {
            theme.seed = seed;
        }
        if let Some(variant) = self.variant {
            theme.variant = variant;
        }
        if let Some(contrast) = self.contrast {
            theme.contrast = contrast;
        }
        if let Some(blend) = switch(self.blend, self.no_blend) {
            theme.blend = blend;
        }
        if let Some(content) = switch(self.content, self.no_content) {
            theme.content = content;
        }
        theme.custom_colors.extend(self.custom);

        let output = &mut config.output;
        if let Some(format) = self.format {
            output.format = format;
        }
        if let Some(scheme) = self.scheme {
            output.scheme = scheme;
        }
        if self.output.is_some() {
            output.path = self.output;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => cmd_generate(args),
        Commands::Init { dir, seed, force } => cmd_init(&dir, &seed, force),
        Commands::Variants => {
            cmd_variants();
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let mut config = args.load_config()?;
    args.apply(&mut config);

    let theme = generate(&config.theme).context("Failed to generate theme")?;
    let text = render::render(&theme, &config.output)?;

    match &config.output.path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                "Wrote {} theme for {} to {}",
                config.theme.variant.id(),
                theme.seed(),
                path.display()
            );
        }
        None => print!("{text}"),
    }

    Ok(())
}

fn cmd_init(dir: &Path, seed: &str, force: bool) -> Result<()> {
    // Reject a bad seed before writing anything.
    tonal_theme::Argb::from_hex(seed).with_context(|| format!("Invalid seed color `{seed}`"))?;

    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists. Use --force to overwrite.", path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, TonalConfig::new(seed).to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Created {}", path.display());
    Ok(())
}

fn cmd_variants() {
    for (index, variant) in Variant::all().iter().enumerate() {
        println!("{index}  {:<12} {}", variant.id(), variant.description());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn custom_flag_splits_on_first_equals() {
        assert_eq!(
            parse_custom("brand=#ff0000").unwrap(),
            ("brand".to_string(), "#ff0000".to_string())
        );
        assert!(parse_custom("brand").is_err());
        assert!(parse_custom("=#ff0000").is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "tonal",
            "generate",
            "--seed",
            "#1a3048",
            "--variant",
            "fidelity",
            "--contrast",
            "-0.5",
            "--custom",
            "brand=#ff0000",
            "--format",
            "tailwind",
            "--scheme",
            "light",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };

        let mut config = TonalConfig::new("#6750a4");
        config.theme.custom_colors.insert("accent".into(), "#00aa55".into());
        args.apply(&mut config);

        assert_eq!(config.theme.seed, "#1a3048");
        assert_eq!(config.theme.variant, Variant::Fidelity);
        assert_eq!(config.theme.contrast, -0.5);
        assert!(!config.theme.blend);
        let names: Vec<&str> = config.theme.custom_colors.keys().map(String::as_str).collect();
        assert_eq!(names, ["accent", "brand"]);
        assert_eq!(config.output.format, OutputFormat::Tailwind);
        assert_eq!(config.output.scheme, SchemeSelection::Light);
        assert_eq!(config.output.path, None);
    }

    fn generate_args(flags: &[&str]) -> GenerateArgs {
        let mut argv = vec!["tonal", "generate"];
        argv.extend_from_slice(flags);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Generate(args) => args,
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn negated_flags_turn_config_switches_off() {
        let mut config = TonalConfig::new("#6750a4");
        config.theme.blend = true;
        config.theme.content = true;
        generate_args(&["--no-blend", "--no-content"]).apply(&mut config);
        assert!(!config.theme.blend);
        assert!(!config.theme.content);

        generate_args(&["--blend"]).apply(&mut config);
        assert!(config.theme.blend);
        assert!(!config.theme.content);

        // Without either flag the config value stands.
        generate_args(&[]).apply(&mut config);
        assert!(config.theme.blend);

        // The last of a pair wins.
        generate_args(&["--blend", "--no-blend"]).apply(&mut config);
        assert!(!config.theme.blend);
    }

    #[test]
    fn unknown_variant_flag_is_a_usage_error() {
        let err = Cli::try_parse_from(["tonal", "generate", "--variant", "rainbow"]).unwrap_err();
        assert!(err.to_string().contains("rainbow"), "{err}");
    }

    #[test]
    fn init_writes_a_loadable_config() {
        let dir = std::env::temp_dir().join(format!("tonal-init-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        cmd_init(&dir, "#1f6feb", false).unwrap();
        let config = TonalConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config.theme.seed, "#1f6feb");

        assert!(cmd_init(&dir, "#1f6feb", false).is_err());
        cmd_init(&dir, "#b33b15", true).unwrap();
        assert_eq!(TonalConfig::load_from_dir(&dir).unwrap().theme.seed, "#b33b15");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn init_rejects_bad_seed() {
        let dir = std::env::temp_dir().join("tonal-init-bad-seed");
        assert!(cmd_init(&dir, "#xyz", false).is_err());
        assert!(!dir.join(CONFIG_FILE).exists());
    }
}
