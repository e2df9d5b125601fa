use serde::{Deserialize, Serialize};

use super::PresetTip;

/// How the tip percentage was chosen.
///
/// A preset and a custom entry cannot both be active; the enum makes that
/// unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipChoice {
    #[default]
    None,
    Preset(PresetTip),
    /// Digits as kept by the custom tip field, e.g. `"18"` or `"007"`.
    Custom(String),
}

impl TipChoice {
    pub fn active_preset(&self) -> Option<PresetTip> {
        match self {
            Self::Preset(preset) => Some(*preset),
            _ => None,
        }
    }

    /// Text held by the custom tip field; empty unless a custom tip is active.
    pub fn custom_text(&self) -> &str {
        match self {
            Self::Custom(text) => text,
            _ => "",
        }
    }
}
