//! `material-colors` backend

use material_colors::blend::harmonize;
use material_colors::color::Argb as MaterialArgb;
use material_colors::dynamic_color::DynamicScheme as MaterialScheme;
use material_colors::hct::Hct;
use material_colors::palette::TonalPalette as MaterialPalette;
use material_colors::scheme::variant::{
    SchemeContent, SchemeExpressive, SchemeFidelity, SchemeMonochrome, SchemeNeutral,
    SchemeTonalSpot, SchemeVibrant,
};

use super::{ColorScience, DynamicScheme, PaletteKind, TonalPalette};
use crate::color::Argb;
use crate::palette::{PaletteName, Tone};
use crate::scheme::SchemeRole;

/// Chroma floor applied to standard (non-content) custom palettes
const STANDARD_MIN_CHROMA: f64 = 48.0;

/// Material Color Utilities, via the `material-colors` crate
#[derive(Clone, Copy, Debug, Default)]
pub struct Material;

fn to_material(color: Argb) -> MaterialArgb {
    MaterialArgb::new(color.alpha(), color.red(), color.green(), color.blue())
}

fn from_material(color: MaterialArgb) -> Argb {
    Argb::from_channels(color.alpha, color.red, color.green, color.blue)
}

impl ColorScience for Material {
    type Hct = Hct;
    type Palette = MaterialPalette;
    type Scheme = MaterialScheme;

    fn hct(argb: Argb) -> Hct {
        Hct::new(to_material(argb))
    }

    fn hue(argb: Argb) -> f64 {
        Self::hct(argb).get_hue()
    }

    fn harmonize(design: Argb, source: Argb) -> Argb {
        from_material(harmonize(to_material(design), to_material(source)))
    }

    fn palette(argb: Argb, kind: PaletteKind) -> MaterialPalette {
        let hct = Self::hct(argb);
        let chroma = match kind {
            PaletteKind::Standard => hct.get_chroma().max(STANDARD_MIN_CHROMA),
            PaletteKind::Content => hct.get_chroma(),
        };
        MaterialPalette::of(hct.get_hue(), chroma)
    }

    fn monochrome(source: Hct, is_dark: bool, contrast: f64) -> MaterialScheme {
        SchemeMonochrome::new(source, is_dark, Some(contrast)).scheme
    }

    fn neutral(source: Hct, is_dark: bool, contrast: f64) -> MaterialScheme {
        SchemeNeutral::new(source, is_dark, Some(contrast)).scheme
    }

    fn tonal_spot(source: Hct, is_dark: bool, contrast: f64) -> MaterialScheme {
        SchemeTonalSpot::new(source, is_dark, Some(contrast)).scheme
    }

    fn vibrant(source: Hct, is_dark: bool, contrast: f64) -> MaterialScheme {
        SchemeVibrant::new(source, is_dark, Some(contrast)).scheme
    }

    fn expressive(source: Hct, is_dark: bool, contrast: f64) -> MaterialScheme {
        SchemeExpressive::new(source, is_dark, Some(contrast)).scheme
    }

    fn fidelity(source: Hct, is_dark: bool, contrast: f64) -> MaterialScheme {
        SchemeFidelity::new(source, is_dark, Some(contrast)).scheme
    }

    fn content(source: Hct, is_dark: bool, contrast: f64) -> MaterialScheme {
        SchemeContent::new(source, is_dark, Some(contrast)).scheme
    }
}

impl TonalPalette for MaterialPalette {
    fn tone(&self, tone: Tone) -> Argb {
        from_material(MaterialPalette::tone(self, i32::from(tone.value())))
    }
}

impl DynamicScheme for MaterialScheme {
    type Palette = MaterialPalette;

    fn role(&self, role: SchemeRole) -> Argb {
        let color = match role {
            SchemeRole::Primary => self.primary(),
            SchemeRole::OnPrimary => self.on_primary(),
            SchemeRole::PrimaryContainer => self.primary_container(),
            SchemeRole::OnPrimaryContainer => self.on_primary_container(),
            SchemeRole::PrimaryFixed => self.primary_fixed(),
            SchemeRole::OnPrimaryFixed => self.on_primary_fixed(),
            SchemeRole::PrimaryFixedDim => self.primary_fixed_dim(),
            SchemeRole::OnPrimaryFixedVariant => self.on_primary_fixed_variant(),
            SchemeRole::Secondary => self.secondary(),
            SchemeRole::OnSecondary => self.on_secondary(),
            SchemeRole::SecondaryContainer => self.secondary_container(),
            SchemeRole::OnSecondaryContainer => self.on_secondary_container(),
            SchemeRole::SecondaryFixed => self.secondary_fixed(),
            SchemeRole::OnSecondaryFixed => self.on_secondary_fixed(),
            SchemeRole::SecondaryFixedDim => self.secondary_fixed_dim(),
            SchemeRole::OnSecondaryFixedVariant => self.on_secondary_fixed_variant(),
            SchemeRole::Tertiary => self.tertiary(),
            SchemeRole::OnTertiary => self.on_tertiary(),
            SchemeRole::TertiaryContainer => self.tertiary_container(),
            SchemeRole::OnTertiaryContainer => self.on_tertiary_container(),
            SchemeRole::TertiaryFixed => self.tertiary_fixed(),
            SchemeRole::OnTertiaryFixed => self.on_tertiary_fixed(),
            SchemeRole::TertiaryFixedDim => self.tertiary_fixed_dim(),
            SchemeRole::OnTertiaryFixedVariant => self.on_tertiary_fixed_variant(),
            SchemeRole::Error => self.error(),
            SchemeRole::OnError => self.on_error(),
            SchemeRole::ErrorContainer => self.error_container(),
            SchemeRole::OnErrorContainer => self.on_error_container(),
            SchemeRole::Outline => self.outline(),
            SchemeRole::OutlineVariant => self.outline_variant(),
            SchemeRole::Background => self.background(),
            SchemeRole::OnBackground => self.on_background(),
            SchemeRole::Surface => self.surface(),
            SchemeRole::OnSurface => self.on_surface(),
            SchemeRole::SurfaceVariant => self.surface_variant(),
            SchemeRole::OnSurfaceVariant => self.on_surface_variant(),
            SchemeRole::InverseSurface => self.inverse_surface(),
            SchemeRole::InverseOnSurface => self.inverse_on_surface(),
            SchemeRole::InversePrimary => self.inverse_primary(),
            SchemeRole::Shadow => self.shadow(),
            SchemeRole::Scrim => self.scrim(),
            SchemeRole::SurfaceContainerHighest => self.surface_container_highest(),
            SchemeRole::SurfaceContainerHigh => self.surface_container_high(),
            SchemeRole::SurfaceContainer => self.surface_container(),
            SchemeRole::SurfaceContainerLow => self.surface_container_low(),
            SchemeRole::SurfaceContainerLowest => self.surface_container_lowest(),
            SchemeRole::SurfaceBright => self.surface_bright(),
            SchemeRole::SurfaceDim => self.surface_dim(),
            SchemeRole::SurfaceTint => self.surface_tint(),
        };
        from_material(color)
    }

    fn palette(&self, name: PaletteName) -> &MaterialPalette {
        match name {
            PaletteName::Primary => &self.primary_palette,
            PaletteName::Secondary => &self.secondary_palette,
            PaletteName::Tertiary => &self.tertiary_palette,
            PaletteName::Neutral => &self.neutral_palette,
            PaletteName::NeutralVariant => &self.neutral_variant_palette,
            PaletteName::Error => &self.error_palette,
        }
    }
}
