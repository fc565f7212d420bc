//! Shared models and utilities
//!
//! - `diagnostics`: the non-fatal anomaly channel used by every phase
//! - `models`: documentation content and qualified-name helpers

pub mod diagnostics;
pub mod models;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use models::{Content, DocRun, DocText, Paragraph};
