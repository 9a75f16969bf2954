//! Scheme variants and strategy dispatch

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::science::ColorScience;

/// How palettes are distributed in hue/chroma space from the seed
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VariantRepr", into = "String")]
pub enum Variant {
    /// Grayscale palette.
    Monochrome,
    /// Near-grayscale palette.
    Neutral,
    /// Low to medium colorfulness, tertiary hue related to the source.
    #[default]
    TonalSpot,
    /// Maxes out colorfulness at each opportunity.
    Vibrant,
    /// High colorfulness, intentionally detached from the source hue.
    Expressive,
    /// Primary keeps the source chroma; containers track the seed closely.
    Fidelity,
    /// Like fidelity, with the tertiary as the source's complement.
    Content,
}

impl Variant {
    /// Every variant, in legacy id order
    pub fn all() -> &'static [Variant] {
        const VARIANTS: [Variant; 7] = [
            Variant::Monochrome,
            Variant::Neutral,
            Variant::TonalSpot,
            Variant::Vibrant,
            Variant::Expressive,
            Variant::Fidelity,
            Variant::Content,
        ];
        &VARIANTS
    }

    /// Stable id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::Neutral => "neutral",
            Self::TonalSpot => "tonal-spot",
            Self::Vibrant => "vibrant",
            Self::Expressive => "expressive",
            Self::Fidelity => "fidelity",
            Self::Content => "content",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Monochrome => "Monochrome",
            Self::Neutral => "Neutral",
            Self::TonalSpot => "Tonal Spot",
            Self::Vibrant => "Vibrant",
            Self::Expressive => "Expressive",
            Self::Fidelity => "Fidelity",
            Self::Content => "Content",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Monochrome => "A grayscale palette",
            Self::Neutral => "A palette of colors that are near grayscale",
            Self::TonalSpot => "Low to medium colorfulness with a tertiary hue related to the seed",
            Self::Vibrant => "Maxes out colorfulness at each opportunity",
            Self::Expressive => "High colorfulness, intentionally detached from the seed hue",
            Self::Fidelity => "Primary and containers stay faithful to the seed color",
            Self::Content => "Faithful primary with a tertiary complementary to the seed",
        }
    }

    /// Legacy numeric id (0 = monochrome … 6 = content)
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

fn unknown_variant(value: impl Into<String>) -> ThemeError {
    let expected: Vec<&str> = Variant::all().iter().map(|v| v.id()).collect();
    ThemeError::Configuration {
        parameter: "variant",
        value: value.into(),
        reason: format!("expected one of {} (or 0-6)", expected.join(", ")),
    }
}

impl FromStr for Variant {
    type Err = ThemeError;

    /// Accepts ids and names in any case, ignoring `-`, `_` and spaces
    /// (`tonal-spot`, `TONAL_SPOT`, `TonalSpot`), or a legacy id `0`-`6`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<i64>() {
            return Variant::try_from(index).map_err(|_| unknown_variant(s));
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Variant::all()
            .iter()
            .copied()
            .find(|v| v.id().replace('-', "") == normalized)
            .ok_or_else(|| unknown_variant(s))
    }
}

impl TryFrom<i64> for Variant {
    type Error = ThemeError;

    fn try_from(index: i64) -> Result<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Variant::all().get(i).copied())
            .ok_or_else(|| unknown_variant(index.to_string()))
    }
}

impl From<Variant> for String {
    fn from(variant: Variant) -> Self {
        variant.id().to_string()
    }
}

/// Config files may name a variant or use its legacy id
#[derive(Deserialize)]
#[serde(untagged)]
enum VariantRepr {
    Index(i64),
    Name(String),
}

impl TryFrom<VariantRepr> for Variant {
    type Error = ThemeError;

    fn try_from(repr: VariantRepr) -> Result<Self> {
        match repr {
            VariantRepr::Index(index) => Variant::try_from(index),
            VariantRepr::Name(name) => name.parse(),
        }
    }
}

/// Builds one scheme from (source, is_dark, contrast)
pub type SchemeConstructor<S> =
    fn(<S as ColorScience>::Hct, bool, f64) -> <S as ColorScience>::Scheme;

/// Resolve the scheme algorithm for a variant
pub fn select<S: ColorScience>(variant: Variant) -> SchemeConstructor<S> {
    match variant {
        Variant::Monochrome => S::monochrome,
        Variant::Neutral => S::neutral,
        Variant::TonalSpot => S::tonal_spot,
        Variant::Vibrant => S::vibrant,
        Variant::Expressive => S::expressive,
        Variant::Fidelity => S::fidelity,
        Variant::Content => S::content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_tonal_spot() {
        assert_eq!(Variant::default(), Variant::TonalSpot);
    }

    #[test]
    fn parses_ids_names_and_legacy_indices() {
        assert_eq!("tonal-spot".parse::<Variant>().unwrap(), Variant::TonalSpot);
        assert_eq!("TONAL_SPOT".parse::<Variant>().unwrap(), Variant::TonalSpot);
        assert_eq!("TonalSpot".parse::<Variant>().unwrap(), Variant::TonalSpot);
        assert_eq!(" Fidelity ".parse::<Variant>().unwrap(), Variant::Fidelity);
        assert_eq!("0".parse::<Variant>().unwrap(), Variant::Monochrome);
        assert_eq!("6".parse::<Variant>().unwrap(), Variant::Content);
    }

    #[test]
    fn unknown_variant_names_the_value() {
        for bad in ["rainbow", "7", "-1", ""] {
            let err = bad.parse::<Variant>().unwrap_err();
            match &err {
                ThemeError::Configuration { parameter, value, .. } => {
                    assert_eq!(*parameter, "variant");
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error {other:?}"),
            }
            assert!(err.to_string().contains(&format!("`{bad}`")));
        }
    }

    #[test]
    fn index_round_trips() {
        for variant in Variant::all() {
            assert_eq!(Variant::try_from(i64::from(variant.index())).unwrap(), *variant);
        }
        assert!(Variant::try_from(7).is_err());
    }

    #[test]
    fn every_id_parses_back() {
        for variant in Variant::all() {
            assert_eq!(variant.id().parse::<Variant>().unwrap(), *variant);
            assert_eq!(variant.display_name().parse::<Variant>().unwrap(), *variant);
        }
    }

    #[test]
    fn serde_accepts_names_and_indices() {
        #[derive(Deserialize)]
        struct Holder {
            variant: Variant,
        }

        let named: Holder = serde_json::from_str(r#"{"variant": "vibrant"}"#).unwrap();
        assert_eq!(named.variant, Variant::Vibrant);

        let indexed: Holder = serde_json::from_str(r#"{"variant": 4}"#).unwrap();
        assert_eq!(indexed.variant, Variant::Expressive);

        let err = serde_json::from_str::<Holder>(r#"{"variant": "plaid"}"#)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains("plaid"), "{err}");

        assert_eq!(serde_json::to_string(&Variant::TonalSpot).unwrap(), r#""tonal-spot""#);
    }
}
