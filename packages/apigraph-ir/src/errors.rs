//! Error types for apigraph-ir
//!
//! Only structural problems are errors. Recoverable anomalies (unparseable
//! declarations, unknown names) travel through
//! [`crate::shared::diagnostics::Diagnostics`] instead.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for apigraph-ir operations
#[derive(Debug, Error)]
pub enum ApiGraphError {
    /// A source document is missing a required structural element
    #[error("Malformed input in '{source_id}': {reason}")]
    MalformedInput { source_id: String, reason: String },

    /// Not a single compound could be built from the input set
    #[error("Empty universe: no compounds were built from the supplied documents")]
    EmptyUniverse,

    /// A semantic query was made against a node that cannot answer it
    #[error("Invalid access: '{query}' is unknown for facade type '{full_name}'")]
    InvalidAccess { full_name: String, query: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ApiGraphError {
    /// Create a malformed-input error for one source document
    pub fn malformed(source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        ApiGraphError::MalformedInput {
            source_id: source_id.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-access error
    pub fn invalid_access(full_name: impl Into<String>, query: impl Into<String>) -> Self {
        ApiGraphError::InvalidAccess {
            full_name: full_name.into(),
            query: query.into(),
        }
    }

    /// True when the error only concerns a single document and the run may continue
    pub fn is_document_local(&self) -> bool {
        matches!(self, ApiGraphError::MalformedInput { .. })
    }
}

/// Result type alias for apigraph operations
pub type Result<T> = std::result::Result<T, ApiGraphError>;
