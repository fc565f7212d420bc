//! Diagnostics channel
//!
//! Recoverable anomalies are collected here instead of being raised:
//! a declaration that did not match the grammar, a name that never got a
//! definition, a query made against a facade, a document that could not be
//! built. Every push is mirrored to `tracing` so a subscriber sees them live.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Anomaly category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Declaration text did not match the grammar; the raw text became the name
    ParseAmbiguity,
    /// A referenced name had no definition and was replaced by a facade
    UnknownReference,
    /// A semantic query hit a facade node
    InvalidAccess,
    /// A document lacked a required element and was skipped
    MalformedInput,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::ParseAmbiguity => "parse_ambiguity",
            DiagnosticKind::UnknownReference => "unknown_reference",
            DiagnosticKind::InvalidAccess => "invalid_access",
            DiagnosticKind::MalformedInput => "malformed_input",
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded anomaly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The name, declaration or document id the anomaly is about
    pub subject: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.subject, self.message)
    }
}

/// Append-only diagnostic collector
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and mirror it to the log
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.kind {
            DiagnosticKind::MalformedInput | DiagnosticKind::ParseAmbiguity => {
                warn!(kind = %diagnostic.kind, subject = %diagnostic.subject, "{}", diagnostic.message);
            }
            DiagnosticKind::UnknownReference | DiagnosticKind::InvalidAccess => {
                debug!(kind = %diagnostic.kind, subject = %diagnostic.subject, "{}", diagnostic.message);
            }
        }
        self.entries.push(diagnostic);
    }

    pub fn report(
        &mut self,
        kind: DiagnosticKind,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.push(Diagnostic::new(kind, subject, message));
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.kind == kind)
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.of_kind(kind).count()
    }

    /// True if some diagnostic of `kind` mentions `subject`
    pub fn mentions(&self, kind: DiagnosticKind, subject: &str) -> bool {
        self.of_kind(kind).any(|d| d.subject == subject)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
