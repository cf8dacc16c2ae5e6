//! Risk labels attached to company records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk label from the closed display set.
///
/// Upstream labels outside the set are kept verbatim in [`Risk::Unknown`] so
/// they round-trip and render with the neutral fallback color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Risk {
    /// "Low"
    Low,
    /// "Medium"
    Medium,
    /// "Medium-High"
    MediumHigh,
    /// "High"
    High,
    /// "Very High"
    VeryHigh,
    /// Any other label; an absent label decodes as `Unknown("")`.
    Unknown(String),
}

impl Default for Risk {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl Risk {
    /// Hex color used by the dashboard risk badge.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Low => "#4CAF50",
            Self::Medium => "#FFC107",
            Self::MediumHigh => "#FF9800",
            Self::High => "#F44336",
            Self::VeryHigh => "#B71C1C",
            Self::Unknown(_) => "#9E9E9E",
        }
    }

    /// Canonical label as served by the record source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Unknown(s) => s,
        }
    }

    /// Whether the label belongs to the closed display set.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for Risk {
    fn from(s: &str) -> Self {
        match s {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "Medium-High" => Self::MediumHigh,
            "High" => Self::High,
            "Very High" => Self::VeryHigh,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Risk {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Risk> for String {
    fn from(r: Risk) -> Self {
        match r {
            Risk::Unknown(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
