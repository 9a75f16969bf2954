use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use tonal_theme::custom::blend;
use tonal_theme::science::hue_rotation;
use tonal_theme::{
    format, generate, Argb, ColorScience, DesignTokens, FormattedTheme, Material, OpacityTokens,
    OutputKind, PaletteName, SchemeRole, SourceColor, ThemeError, ThemeOptions, ThemeProperties,
    Tone, Variant, TONES,
};

const ROLE_COUNT: usize = 49;
const TONE_ENTRIES: usize = 6 * 27;

#[test]
fn every_variant_yields_the_same_key_set() {
    let reference: Vec<String> = generate(&ThemeOptions::new("#1f6feb"))
        .unwrap()
        .light()
        .keys()
        .map(str::to_string)
        .collect();
    assert_eq!(reference.len(), ROLE_COUNT + TONE_ENTRIES);

    for &variant in Variant::all() {
        let theme = generate(&ThemeOptions::new("#1f6feb").with_variant(variant)).unwrap();
        for side in [theme.light(), theme.dark()] {
            let keys: Vec<&str> = side.keys().collect();
            assert_eq!(keys, reference, "variant {variant:?}");
        }
    }
}

#[test]
fn palettes_are_sampled_at_every_fixed_tone() {
    let theme = generate(&ThemeOptions::new("#6750a4")).unwrap();
    for palette in PaletteName::ALL {
        assert_eq!(theme.light().palettes().group(palette).count(), TONES.len());
        // Tone 0 and 100 are black and white in every palette.
        assert_eq!(theme.light().tone(palette, Tone::of(0)), Some(Argb::BLACK));
        assert_eq!(theme.light().tone(palette, Tone::of(100)), Some(Argb::WHITE));
    }
    assert_eq!(
        theme.light().get("neutralVariant40"),
        theme.light().tone(PaletteName::NeutralVariant, Tone::of(40))
    );
    assert_eq!(theme.light().tone(PaletteName::Primary, Tone::of(45)), None);
}

#[test]
fn light_and_dark_sides_differ() {
    let theme = generate(&ThemeOptions::new("#1a3048")).unwrap();
    let roles = [
        SchemeRole::Background,
        SchemeRole::Surface,
        SchemeRole::Primary,
        SchemeRole::OnSurface,
    ];
    for role in roles {
        assert_ne!(theme.light().role(role), theme.dark().role(role), "{role}");
    }
}

#[test]
fn contrast_changes_the_scheme() {
    let base = generate(&ThemeOptions::new("#1a3048")).unwrap();
    let high = generate(&ThemeOptions::new("#1a3048").with_contrast(1.0)).unwrap();
    assert_ne!(base.light().scheme(), high.light().scheme());
}

#[test]
fn css_output_matches_theme_colors() {
    let theme = generate(&ThemeOptions::new("#1a3048")).unwrap();
    let primary = theme.light().role(SchemeRole::Primary);
    let rgba = primary.rgba();

    let props = ThemeProperties::from_colors(theme.light());
    let FormattedTheme::Css(vars) = format(&props, OutputKind::Css) else {
        panic!("expected css output");
    };

    assert_eq!(vars.len(), ROLE_COUNT + TONE_ENTRIES);
    assert_eq!(
        vars["--colors-primary"],
        format!("{},{},{} /* {} */", rgba.r, rgba.g, rgba.b, primary.hex())
    );
    assert!(vars.contains_key("--colors-neutral-variant40"));
    assert!(vars.contains_key("--colors-on-primary-container"));
    assert_eq!(vars.keys().next().map(String::as_str), Some("--colors-primary"));
}

#[test]
fn tailwind_output_carries_alpha_byte() {
    let theme = generate(&ThemeOptions::new("#1a3048")).unwrap();
    let props = ThemeProperties::from_colors(theme.dark());
    let FormattedTheme::Tailwind(lines) = format(&props, OutputKind::Tailwind) else {
        panic!("expected tailwind output");
    };

    assert_eq!(lines.len(), ROLE_COUNT + TONE_ENTRIES);
    let surface = theme.dark().role(SchemeRole::Surface).rgba();
    let expected = format!(
        "  --colors-surface: rgba({}, {}, {}, 255); /* {} */",
        surface.r,
        surface.g,
        surface.b,
        theme.dark().role(SchemeRole::Surface).hex()
    );
    assert!(lines.contains(&expected), "{expected}");
}

#[test]
fn blended_custom_color_moves_toward_source_hue() {
    let source = SourceColor::<Material>::new(Argb::from_hex("#1f6feb").unwrap());
    let mut custom = IndexMap::new();
    custom.insert("brand".to_string(), "#ff0000".to_string());

    let resolved = blend(&custom, true, false, &source).unwrap();
    let brand = &resolved["brand"];

    assert_eq!(brand.seed, Argb::from_hex("#ff0000").unwrap());
    assert_ne!(brand.target, brand.seed);
    assert_ne!(brand.light.color, brand.seed);

    let seed_hue = Material::hue(brand.seed);
    let toward_source = hue_rotation(seed_hue, Material::hue(source.argb));
    let moved = hue_rotation(seed_hue, Material::hue(brand.target));
    assert_eq!(moved.signum(), toward_source.signum());
    assert!(moved.abs() <= 15.5, "rotated {moved}");
    assert_ne!(brand.light.color, brand.dark.color);
}

#[test]
fn unblended_custom_color_keeps_its_seed() {
    let source = SourceColor::<Material>::new(Argb::from_hex("#1f6feb").unwrap());
    let mut custom = IndexMap::new();
    custom.insert("brand".to_string(), "#ff0000".to_string());
    custom.insert("accent".to_string(), "#00aa55".to_string());

    let resolved = blend(&custom, false, false, &source).unwrap();
    let names: Vec<&str> = resolved.keys().map(String::as_str).collect();
    assert_eq!(names, ["brand", "accent"]);
    for color in resolved.values() {
        assert_eq!(color.target, color.seed);
    }
}

#[test]
fn content_palette_keeps_low_chroma() {
    let source = SourceColor::<Material>::new(Argb::from_hex("#1f6feb").unwrap());
    let mut custom = IndexMap::new();
    custom.insert("ink".to_string(), "#777777".to_string());

    let spread = |c: Argb| {
        let channels = [c.red(), c.green(), c.blue()];
        channels.iter().max().unwrap() - channels.iter().min().unwrap()
    };

    let content = blend(&custom, false, true, &source).unwrap();
    let standard = blend(&custom, false, false, &source).unwrap();
    assert!(spread(content["ink"].light.color) < spread(standard["ink"].light.color));
}

#[test]
fn custom_families_are_merged_into_both_sides() {
    let options = ThemeOptions::new("#1f6feb")
        .with_custom_color("brand", "#ff0000")
        .with_blend(true);
    let theme = generate(&options).unwrap();

    assert_eq!(theme.light().len(), ROLE_COUNT + TONE_ENTRIES + 4);
    let family = theme.light().custom()["brand"];
    assert_eq!(theme.light().get("brand"), Some(family.color));
    assert_eq!(theme.light().get("onBrandContainer"), Some(family.on_color_container));
    assert_eq!(theme.dark().get("brand"), Some(theme.dark().custom()["brand"].color));

    let keys: Vec<&str> = theme.light().keys().skip(ROLE_COUNT + TONE_ENTRIES).collect();
    assert_eq!(keys, ["brand", "onBrand", "brandContainer", "onBrandContainer"]);
}

#[test]
fn design_tokens_reference_runtime_variables() {
    let theme = generate(&ThemeOptions::new("#1f6feb")).unwrap();
    let tokens = DesignTokens::from_theme(&theme, &OpacityTokens::default());

    assert_eq!(tokens.colors["primary"], "rgba(var(--colors-primary), <alpha-value>)");
    assert_eq!(
        tokens.colors["neutral-variant40"],
        "rgba(var(--colors-neutral-variant40), <alpha-value>)"
    );

    let primary = theme.light().role(SchemeRole::Primary).rgba();
    assert_eq!(
        tokens.variables.light["--colors-primary"],
        format!("{},{},{}", primary.r, primary.g, primary.b)
    );
    assert_eq!(tokens.variables.dark.len(), tokens.colors.len());
    assert_eq!(tokens.opacity["hovered"], 0.075);
}

#[test]
fn malformed_seed_is_rejected() {
    for seed in ["", "#12345", "#gggggg", "blue"] {
        let err = generate(&ThemeOptions::new(seed)).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { .. }), "{seed}: {err}");
        assert_eq!(err.parameter(), Some("seed"));
    }
}

#[test]
fn malformed_custom_color_names_its_entry() {
    let options = ThemeOptions::new("#1f6feb").with_custom_color("brand", "#ff00");
    let err = generate(&options).unwrap_err();
    assert_eq!(err.parameter(), Some("custom_colors.brand"));
}

#[test]
fn custom_color_shadowing_a_role_is_rejected() {
    let options = ThemeOptions::new("#1f6feb").with_custom_color("primary", "#ff0000");
    let err = generate(&options).unwrap_err();
    assert_eq!(err, ThemeError::KeyCollision { key: "primary".to_string() });
}

#[test]
fn unknown_variant_is_rejected_before_generation() {
    let err = "rainbow".parse::<Variant>().unwrap_err();
    assert_eq!(err.parameter(), Some("variant"));

    let err = toml::from_str::<ThemeOptions>("seed = \"#1f6feb\"\nvariant = 9").unwrap_err();
    assert!(err.to_string().contains("variant"), "{err}");
}

#[test]
fn non_finite_contrast_is_rejected() {
    let err = generate(&ThemeOptions::new("#1f6feb").with_contrast(f64::NAN)).unwrap_err();
    assert_eq!(err.parameter(), Some("contrast"));
}

#[test]
fn custom_names_outside_lower_camel_case_are_rejected() {
    for name in ["", "my brand", "surface-tint", "Primary"] {
        let options = ThemeOptions::new("#1f6feb").with_custom_color(name, "#ff0000");
        let err = generate(&options).unwrap_err();
        assert!(matches!(err, ThemeError::Configuration { .. }), "{name:?}: {err}");
        assert_eq!(err.parameter(), Some("custom_colors"), "{name:?}");
    }
}

#[test]
fn css_variable_names_stay_unique() {
    let options = ThemeOptions::new("#1f6feb")
        .with_custom_color("brand", "#ff0000")
        .with_custom_color("brandAccent", "#00aa55");
    let theme = generate(&options).unwrap();
    let props = ThemeProperties::from_colors(theme.light());
    let FormattedTheme::Css(vars) = format(&props, OutputKind::Css) else {
        panic!("expected css output");
    };
    assert_eq!(vars.len(), theme.light().len());
}
