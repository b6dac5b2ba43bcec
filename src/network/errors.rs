//! Structured diagnostics for network documents.
//!
//! Each diagnostic carries a stable machine-readable [`ErrorCode`], a JSON
//! pointer to the offending field, a human-readable message, and an optional
//! remediation hint. Diagnostics serialize to JSON alongside the
//! [`ValidationReport`](super::validation::ValidationReport) they appear in.

use serde::Serialize;
use thiserror::Error;

/// Stable machine-readable code identifying a class of diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A link endpoint names a page that was never declared.
    UnknownPage,
    /// The damping factor is outside the open interval (0, 1).
    InvalidDamping,
    /// The tolerance is zero or negative, so the solver may never terminate.
    DegenerateTolerance,
    /// The same page identifier is declared more than once.
    DuplicatePage,
    /// A field not recognized by the schema.
    UnknownField,
    /// Generic validation failure raised by custom rules.
    ValidationFailed,
}

/// A single diagnostic attached to a network document.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{path}: {message}")]
pub struct NetworkSpecError {
    /// Machine-readable code.
    pub code: ErrorCode,
    /// JSON pointer to the offending field (e.g., `/links/2/to`).
    pub path: String,
    /// Human-readable description.
    pub message: String,
    /// Optional remediation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl NetworkSpecError {
    /// Create a diagnostic with no hint.
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
