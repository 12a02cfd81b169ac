//! Build mode switch

use serde::{Deserialize, Serialize};

/// Selects between development logging and the silent production build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Console output plus a per-session log file
    Development,
    /// Every log call is a no-op
    Production,
}

impl BuildMode {
    /// Mode matching how this crate was compiled
    ///
    /// Builds with debug assertions are `Development`, everything else is
    /// `Production`.
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, BuildMode::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::from_build()
    }
}
