use serde::{Deserialize, Serialize};

/// One of the fixed tip percentages offered as buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetTip {
    Five,
    Ten,
    Fifteen,
    TwentyFive,
    Fifty,
}

impl PresetTip {
    /// All presets in display order.
    pub fn all() -> &'static [PresetTip] {
        &[
            PresetTip::Five,
            PresetTip::Ten,
            PresetTip::Fifteen,
            PresetTip::TwentyFive,
            PresetTip::Fifty,
        ]
    }

    pub fn percent(&self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Five => "5%",
            Self::Ten => "10%",
            Self::Fifteen => "15%",
            Self::TwentyFive => "25%",
            Self::Fifty => "50%",
        }
    }

    pub fn from_percent(percent: u32) -> Option<Self> {
        match percent {
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            15 => Some(Self::Fifteen),
            25 => Some(Self::TwentyFive),
            50 => Some(Self::Fifty),
            _ => None,
        }
    }

    /// Parses `"10"` or `"10%"`, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s.strip_suffix('%').unwrap_or(s);
        digits.parse().ok().and_then(Self::from_percent)
    }
}
