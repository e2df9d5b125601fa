use serde::{Deserialize, Serialize};

/// The three input groups on the form, each with its own focus flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldGroup {
    Bill,
    Tip,
    People,
}

impl FieldGroup {
    pub fn all() -> &'static [FieldGroup] {
        &[FieldGroup::Bill, FieldGroup::Tip, FieldGroup::People]
    }

    /// Element id of the group's text input.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bill => "bill",
            Self::Tip => "tip",
            Self::People => "numOfPeople",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bill => "Bill",
            Self::Tip => "Select Tip %",
            Self::People => "Number of People",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Bill => "0.00",
            Self::Tip => "Custom...",
            Self::People => "0",
        }
    }

    /// Accepts the element id or a short name (`bill`, `tip`, `people`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bill" => Some(Self::Bill),
            "tip" | "custom" => Some(Self::Tip),
            "people" | "numofpeople" => Some(Self::People),
            _ => None,
        }
    }
}
