//! Configuration validation
//!
//! Every config section implements [`Validatable`]; `GraphConfig::validate`
//! walks them in order and stops at the first error.

use super::error::ConfigResult;

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

#[cfg(test)]
mod tests {
    use super::super::graph_config::{ParserConfig, ProjectionConfig, RegistryConfig};
    use super::*;

    #[test]
    fn test_config_names() {
        assert_eq!(ParserConfig::default().config_name(), "ParserConfig");
        assert_eq!(RegistryConfig::default().config_name(), "RegistryConfig");
        assert_eq!(ProjectionConfig::default().config_name(), "ProjectionConfig");
    }
}
