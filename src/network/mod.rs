//! Declarative network documents.
//!
//! This module lets a link network and its solver settings be described as
//! data: a JSON [`NetworkSpec`] is checked by the rule-based
//! [`ValidationEngine`] and then materialized into a
//! [`Graph`](crate::graph::Graph) plus a configured
//! [`PageRank`](crate::pagerank::PageRank) solver.

pub mod errors;
pub mod spec;
pub mod validation;

pub use errors::{ErrorCode, NetworkSpecError};
pub use spec::{LinkSpec, NetworkSpec, RankParams};
pub use validation::{
    Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule,
};
