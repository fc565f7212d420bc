//! Configuration I/O (YAML/JSON loading)
//!
//! File schema v1:
//!
//! ```yaml
//! version: 1
//! preset: legacy
//! overrides:
//!   registry:
//!     case_insensitive_fallback: false
//!     upgrade_facades: false
//!     recognize_primitives: true
//! ```

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::graph_config::{GraphConfig, ParserConfig, ProjectionConfig, RegistryConfig};
use super::preset::Preset;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// File schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    /// Section overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParserConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<RegistryConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<ProjectionConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_malformed: Option<bool>,
}

impl ConfigFileV1 {
    fn into_config(self) -> ConfigResult<GraphConfig> {
        let version = self.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&self.preset)
            .map_err(|_| ConfigError::UnknownPreset(self.preset.clone()))?;
        let mut config = GraphConfig::preset(preset);

        if let Some(overrides) = self.overrides {
            if let Some(parser) = overrides.parser {
                config.parser = parser;
            }
            if let Some(registry) = overrides.registry {
                config.registry = registry;
            }
            if let Some(projection) = overrides.projection {
                config.projection = projection;
            }
            if let Some(fail) = overrides.fail_on_malformed {
                config.fail_on_malformed = fail;
            }
        }

        config.validate()?;
        Ok(config)
    }
}

impl GraphConfig {
    /// Load a v1 YAML file
    pub fn from_yaml(path: impl AsRef<std::path::Path>) -> ConfigResult<GraphConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<GraphConfig> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;
        file.into_config()
    }

    pub fn from_json_str(content: &str) -> ConfigResult<GraphConfig> {
        let file: ConfigFileV1 = serde_json::from_str(content)?;
        file.into_config()
    }

    fn to_file(&self) -> ConfigFileV1 {
        ConfigFileV1 {
            version: Some(1),
            preset: self.get_preset().to_string(),
            overrides: Some(ConfigOverrides {
                parser: Some(self.parser.clone()),
                registry: Some(self.registry.clone()),
                projection: Some(self.projection.clone()),
                fail_on_malformed: Some(self.fail_on_malformed),
            }),
        }
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(&self.to_file()).map_err(ConfigError::Yaml)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(&self.to_file()).map_err(ConfigError::Json)
    }
}
