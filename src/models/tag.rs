use serde::{Deserialize, Serialize};

/// A colored label attached to a task.
///
/// `color` is kept as free text: stored boards may carry tokens outside the
/// palette (older builds wrote hex codes), and those are displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub color: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Trimmed, case-folded name used for uniqueness checks.
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
    Orange,
    Gray,
    Pink,
    Teal,
    Brown,
}

impl TagColor {
    pub const PALETTE: [TagColor; 10] = [
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
        Self::Gray,
        Self::Pink,
        Self::Teal,
        Self::Brown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Gray => "gray",
            Self::Pink => "pink",
            Self::Teal => "teal",
            Self::Brown => "brown",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Self::Blue => "#1976d2",
            Self::Green => "#388e3c",
            Self::Red => "#d32f2f",
            Self::Yellow => "#fbc02d",
            Self::Purple => "#7b1fa2",
            Self::Orange => "#f57c00",
            Self::Gray => "#455a64",
            Self::Pink => "#c2185b",
            Self::Teal => "#0097a7",
            Self::Brown => "#5d4037",
        }
    }

    /// Look up a palette entry by name (any case) or by its hex code.
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::PALETTE
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s) || c.hex().eq_ignore_ascii_case(s))
    }
}

impl Default for TagColor {
    fn default() -> Self {
        Self::PALETTE[0]
    }
}
