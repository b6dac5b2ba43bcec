//! Validation engine for network documents.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`NetworkSpec`](super::spec::NetworkSpec) and collects every diagnostic
//! into a [`ValidationReport`] — it never short-circuits on the first error,
//! so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use webrank::network::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::errors::{ErrorCode, NetworkSpecError};
use super::spec::NetworkSpec;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding — an error or warning attached to a
/// [`NetworkSpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: NetworkSpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: NetworkSpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: NetworkSpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &NetworkSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &NetworkSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`NetworkSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads (e.g., in a long-lived validation engine).
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"link_endpoints"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &NetworkSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`NetworkSpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(LinkEndpointsRule));
        engine.add_rule(Box::new(RankParamsRule));
        engine.add_rule(Box::new(DuplicatePagesRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &NetworkSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Link endpoints must name declared pages ─────────────────────────────

struct LinkEndpointsRule;

impl ValidationRule for LinkEndpointsRule {
    fn name(&self) -> &str {
        "link_endpoints"
    }

    fn validate(&self, spec: &NetworkSpec) -> Vec<ValidationDiagnostic> {
        let declared: FxHashSet<&str> = spec.pages.iter().map(String::as_str).collect();

        let mut out = Vec::new();
        for (i, link) in spec.links.iter().enumerate() {
            for (field, page) in [("from", &link.from), ("to", &link.to)] {
                if !declared.contains(page.as_str()) {
                    out.push(ValidationDiagnostic::error(
                        NetworkSpecError::new(
                            ErrorCode::UnknownPage,
                            format!("/links/{i}/{field}"),
                            format!("link references undeclared page \"{page}\""),
                        )
                        .with_hint(format!("Declare \"{page}\" in pages, or remove the link")),
                    ));
                }
            }
        }
        out
    }
}

// ─── 2. Rank parameters must be usable ──────────────────────────────────────

struct RankParamsRule;

impl ValidationRule for RankParamsRule {
    fn name(&self) -> &str {
        "rank_params"
    }

    fn validate(&self, spec: &NetworkSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        let damping = spec.rank.damping;
        if !(damping > 0.0 && damping < 1.0) {
            out.push(ValidationDiagnostic::error(
                NetworkSpecError::new(
                    ErrorCode::InvalidDamping,
                    "/rank/damping",
                    format!("damping must lie in (0, 1), got {damping}"),
                )
                .with_hint("The conventional value is 0.85"),
            ));
        }

        // Non-positive tolerance is accepted by the solver but may never
        // terminate; surface it as a warning, not an error.
        if spec.rank.tolerance <= 0.0 {
            out.push(ValidationDiagnostic::warning(
                NetworkSpecError::new(
                    ErrorCode::DegenerateTolerance,
                    "/rank/tolerance",
                    format!(
                        "tolerance {} may never be satisfied; the solver could loop forever",
                        spec.rank.tolerance
                    ),
                )
                .with_hint("Use a small positive value such as 0.0001"),
            ));
        }

        out
    }
}

// ─── 3. Duplicate page declarations ─────────────────────────────────────────

struct DuplicatePagesRule;

impl ValidationRule for DuplicatePagesRule {
    fn name(&self) -> &str {
        "duplicate_pages"
    }

    fn validate(&self, spec: &NetworkSpec) -> Vec<ValidationDiagnostic> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();

        let mut out = Vec::new();
        for (i, page) in spec.pages.iter().enumerate() {
            if !seen.insert(page.as_str()) {
                // Registration is idempotent, so this is only a warning.
                out.push(ValidationDiagnostic::warning(
                    NetworkSpecError::new(
                        ErrorCode::DuplicatePage,
                        format!("/pages/{i}"),
                        format!("page \"{page}\" is declared more than once"),
                    )
                    .with_hint("Remove the duplicate declaration"),
                ));
            }
        }
        out
    }
}

// ─── 4. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &std::collections::HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        unknowns
            .keys()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    NetworkSpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &NetworkSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/rank",
            &spec.rank.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
