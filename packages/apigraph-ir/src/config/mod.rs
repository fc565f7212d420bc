//! Configuration
//!
//! Two tiers, following the same progressive-disclosure idea everywhere:
//! - Level 1: Preset - `GraphConfig::preset(Preset::Legacy)`
//! - Level 2: Section override via closures or a versioned YAML/JSON file
//!
//! # Examples
//!
//! ```rust,ignore
//! use apigraph_ir::config::{GraphConfig, Preset};
//!
//! let config = GraphConfig::preset(Preset::Standard)
//!     .registry(|c| c.case_insensitive_fallback(false))
//!     .parser(|c| c.annotation_token("_Frees_ptr_"));
//! config.validate()?;
//!
//! let config = GraphConfig::from_yaml("apigraph.yaml")?;
//! ```

pub mod error;
pub mod graph_config;
pub mod io;
pub mod preset;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use graph_config::{GraphConfig, ParserConfig, ProjectionConfig, RegistryConfig};
pub use io::{ConfigFileV1, ConfigOverrides};
pub use preset::Preset;
pub use validation::Validatable;
