//! Graph build configuration
//!
//! One section per pipeline stage that has knobs. Each section is built
//! from the preset and can be adjusted with a closure:
//!
//! ```rust,ignore
//! let config = GraphConfig::preset(Preset::Standard)
//!     .projection(|c| c.enabled(false));
//! ```

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;

/// Declaration parser settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Additional annotation markers stripped before grammar matching
    #[serde(default)]
    pub extra_annotation_tokens: Vec<String>,
}

impl ParserConfig {
    pub fn from_preset(_preset: Preset) -> Self {
        Self::default()
    }

    pub fn annotation_token(mut self, token: impl Into<String>) -> Self {
        self.extra_annotation_tokens.push(token.into());
        self
    }
}

impl Validatable for ParserConfig {
    fn validate(&self) -> ConfigResult<()> {
        for token in &self.extra_annotation_tokens {
            if token.is_empty() {
                return Err(ConfigError::invalid_with_hint(
                    "parser.extra_annotation_tokens",
                    "''",
                    "Annotation tokens must be non-empty.",
                ));
            }
            if token.chars().any(char::is_whitespace) {
                return Err(ConfigError::invalid_with_hint(
                    "parser.extra_annotation_tokens",
                    format!("'{}'", token),
                    "Annotation tokens cannot contain whitespace.",
                ));
            }
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ParserConfig"
    }
}

/// Type registry settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Retry a missed managed lookup with the lowercased name
    pub case_insensitive_fallback: bool,

    /// Overwrite a facade in place when its real definition is interned later
    pub upgrade_facades: bool,

    /// Resolve built-in names (`int`, `System.String`, ...) to primitive nodes
    pub recognize_primitives: bool,
}

impl RegistryConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Standard => Self {
                case_insensitive_fallback: true,
                upgrade_facades: true,
                recognize_primitives: true,
            },
            Preset::Legacy => Self {
                case_insensitive_fallback: true,
                upgrade_facades: false,
                recognize_primitives: true,
            },
            Preset::Strict => Self {
                case_insensitive_fallback: false,
                upgrade_facades: true,
                recognize_primitives: true,
            },
        }
    }

    pub fn case_insensitive_fallback(mut self, enabled: bool) -> Self {
        self.case_insensitive_fallback = enabled;
        self
    }

    pub fn upgrade_facades(mut self, enabled: bool) -> Self {
        self.upgrade_facades = enabled;
        self
    }

    pub fn recognize_primitives(mut self, enabled: bool) -> Self {
        self.recognize_primitives = enabled;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl Validatable for RegistryConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "RegistryConfig"
    }
}

/// Projection merger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectionConfig {
    /// Build the projected universe at all
    pub enabled: bool,

    /// Copy interface member docs from the native side when missing
    pub copy_member_docs: bool,

    /// Copy parameter docs of matching methods/constructors
    pub copy_parameter_docs: bool,

    /// Copy enum values and field lists wholesale when the managed side has no docs
    pub copy_enum_values: bool,
}

impl ProjectionConfig {
    pub fn from_preset(_preset: Preset) -> Self {
        Self {
            enabled: true,
            copy_member_docs: true,
            copy_parameter_docs: true,
            copy_enum_values: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn copy_member_docs(mut self, enabled: bool) -> Self {
        self.copy_member_docs = enabled;
        self
    }

    pub fn copy_parameter_docs(mut self, enabled: bool) -> Self {
        self.copy_parameter_docs = enabled;
        self
    }

    pub fn copy_enum_values(mut self, enabled: bool) -> Self {
        self.copy_enum_values = enabled;
        self
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl Validatable for ProjectionConfig {
    // Copy switches are ignored while projection is off.
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ProjectionConfig"
    }
}

/// Complete configuration for one graph build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    pub(crate) preset: Preset,
    pub parser: ParserConfig,
    pub registry: RegistryConfig,
    pub projection: ProjectionConfig,
    /// Abort the whole run on the first malformed document
    pub fail_on_malformed: bool,
}

impl GraphConfig {
    /// Level 1: start from a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            parser: ParserConfig::from_preset(preset),
            registry: RegistryConfig::from_preset(preset),
            projection: ProjectionConfig::from_preset(preset),
            fail_on_malformed: matches!(preset, Preset::Strict),
        }
    }

    pub fn get_preset(&self) -> Preset {
        self.preset
    }

    /// Level 2: adjust the parser section
    pub fn parser<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ParserConfig) -> ParserConfig,
    {
        self.parser = f(self.parser);
        self
    }

    /// Level 2: adjust the registry section
    pub fn registry<F>(mut self, f: F) -> Self
    where
        F: FnOnce(RegistryConfig) -> RegistryConfig,
    {
        self.registry = f(self.registry);
        self
    }

    /// Level 2: adjust the projection section
    pub fn projection<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ProjectionConfig) -> ProjectionConfig,
    {
        self.projection = f(self.projection);
        self
    }

    pub fn fail_on_malformed(mut self, enabled: bool) -> Self {
        self.fail_on_malformed = enabled;
        self
    }

    /// Validate every section
    pub fn validate(&self) -> ConfigResult<()> {
        self.parser.validate()?;
        self.registry.validate()?;
        self.projection.validate()?;
        Ok(())
    }

    /// Human-readable one-line description
    pub fn describe(&self) -> String {
        format!(
            "preset={} case_fallback={} upgrade_facades={} primitives={} projection={} fail_on_malformed={}",
            self.preset,
            self.registry.case_insensitive_fallback,
            self.registry.upgrade_facades,
            self.registry.recognize_primitives,
            self.projection.enabled,
            self.fail_on_malformed,
        )
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}
