//! State-layer opacity tokens

use serde::{Deserialize, Serialize};

/// Semantic opacity token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    Hovered,
    Pressed,
    Focused,
    Selected,
    Disabled,
}

impl OpacityToken {
    pub const ALL: [OpacityToken; 5] = [
        OpacityToken::Hovered,
        OpacityToken::Pressed,
        OpacityToken::Focused,
        OpacityToken::Selected,
        OpacityToken::Disabled,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Hovered => "hovered",
            Self::Pressed => "pressed",
            Self::Focused => "focused",
            Self::Selected => "selected",
            Self::Disabled => "disabled",
        }
    }

    /// `--opacity-<key>`
    pub fn css_var(self) -> String {
        format!("--opacity-{}", self.key())
    }
}

/// Complete set of opacity tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpacityTokens {
    pub hovered: f32,
    pub pressed: f32,
    pub focused: f32,
    pub selected: f32,
    pub disabled: f32,
}

impl OpacityTokens {
    /// Get opacity value by token key
    pub fn get(&self, token: OpacityToken) -> f32 {
        match token {
            OpacityToken::Hovered => self.hovered,
            OpacityToken::Pressed => self.pressed,
            OpacityToken::Focused => self.focused,
            OpacityToken::Selected => self.selected,
            OpacityToken::Disabled => self.disabled,
        }
    }

    /// `(token, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (OpacityToken, f32)> + '_ {
        OpacityToken::ALL.into_iter().map(move |token| (token, self.get(token)))
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            hovered: 0.075,
            pressed: 0.1,
            focused: 0.15,
            selected: 0.15,
            disabled: 0.38,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_state_layers() {
        let tokens = OpacityTokens::default();
        assert_eq!(tokens.get(OpacityToken::Hovered), 0.075);
        assert_eq!(tokens.get(OpacityToken::Disabled), 0.38);
        assert_eq!(OpacityToken::Focused.css_var(), "--opacity-focused");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let tokens: OpacityTokens = toml::from_str("disabled = 0.5").unwrap();
        assert_eq!(tokens.disabled, 0.5);
        assert_eq!(tokens.pressed, 0.1);
    }
}
