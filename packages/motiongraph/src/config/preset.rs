//! Preset configurations
//!
//! Presets provide complete default build configurations.

use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Radius-sum threshold as-is, 5 interpolation samples per frame-pair
    Strict,

    /// Threshold widened by 10%, 8 interpolation samples per frame-pair
    ///
    /// Used by the search tool, where missing a glancing contact costs
    /// more than reporting a near miss.
    Tolerant,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "tolerant" => Ok(Self::Tolerant),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: strict, tolerant",
                s
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Tolerant => "tolerant",
        }
    }

    pub fn collision_scale(&self) -> f64 {
        match self {
            Self::Strict => 1.0,
            Self::Tolerant => 1.1,
        }
    }

    pub fn interp_steps(&self) -> usize {
        match self {
            Self::Strict => 5,
            Self::Tolerant => 8,
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Strict
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
