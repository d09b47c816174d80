//! Light/dark theme flag
//!
//! The theme lives beside the calculator engine, never inside it: toggling
//! it does not touch [`crate::core::CalculatorState`].

use serde::{Deserialize, Serialize};

/// Visual theme variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background, light text
    #[default]
    Dark,
    /// Light background, dark text
    Light,
}

impl Theme {
    /// Returns the other variant
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns true for the dark variant
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Lowercase name, as used on the command line and in config files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
