//! Theme generation error types

use thiserror::Error;

/// Why a hex string could not be read as a color
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Nothing left after stripping whitespace and the leading `#`
    #[error("empty color string")]
    Empty,

    /// Digit count other than 3, 6 or 8
    #[error("expected 3, 6 or 8 hex digits, found {0}")]
    Length(usize),

    /// A character outside `0-9a-fA-F`
    #[error("invalid hex digit {0:?}")]
    Digit(char),
}

/// Theme generation errors
///
/// Generation is all-or-nothing: any of these aborts the whole pipeline and
/// no partial theme is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// Malformed color input (seed or custom color)
    #[error("invalid color for {parameter}: {input:?} ({source})")]
    InvalidColor {
        parameter: String,
        input: String,
        #[source]
        source: HexError,
    },

    /// Unknown or unsupported parameter value (e.g. variant)
    #[error("invalid {parameter} `{value}`: {reason}")]
    Configuration {
        parameter: &'static str,
        value: String,
        reason: String,
    },

    /// Two sources tried to write the same flattened theme key
    #[error("theme key `{key}` is defined more than once")]
    KeyCollision { key: String },
}

impl ThemeError {
    pub(crate) fn invalid_color(
        parameter: impl Into<String>,
        input: &str,
        source: HexError,
    ) -> Self {
        Self::InvalidColor {
            parameter: parameter.into(),
            input: input.to_string(),
            source,
        }
    }

    /// Name of the input parameter that caused the error, if any
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::InvalidColor { parameter, .. } => Some(parameter),
            Self::Configuration { parameter, .. } => Some(parameter),
            Self::KeyCollision { .. } => None,
        }
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
