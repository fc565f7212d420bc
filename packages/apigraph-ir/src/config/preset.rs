//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Default run
    ///
    /// - Case-insensitive name fallback
    /// - Facades upgraded in place when the real definition arrives
    /// - Projection enabled
    Standard,

    /// Historical behaviour
    ///
    /// - Facades are never upgraded: a later definition gets a new node and
    ///   earlier references keep the facade
    /// - Everything else as Standard
    Legacy,

    /// Exact-name resolution
    ///
    /// - No case-insensitive fallback
    /// - A malformed document aborts the run
    Strict,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "legacy" => Ok(Self::Legacy),
            "strict" => Ok(Self::Strict),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: standard, legacy, strict",
                s
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Legacy => "legacy",
            Self::Strict => "strict",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Standard
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!(Preset::from_str("standard").unwrap(), Preset::Standard);
        assert_eq!(Preset::from_str("LEGACY").unwrap(), Preset::Legacy);
        assert_eq!(Preset::from_str("strict").unwrap(), Preset::Strict);
        assert!(Preset::from_str("fast").is_err());
    }

    #[test]
    fn test_preset_display() {
        assert_eq!(Preset::Standard.to_string(), "standard");
        assert_eq!(Preset::Legacy.to_string(), "legacy");
        assert_eq!(Preset::Strict.to_string(), "strict");
    }

    #[test]
    fn test_default_preset() {
        assert_eq!(Preset::default(), Preset::Standard);
    }
}
