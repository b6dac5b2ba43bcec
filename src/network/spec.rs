//! Network document types.
//!
//! A [`NetworkSpec`] describes a set of pages, the directed links between
//! them, and the solver parameters to use. These types are the input to the
//! [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "pages": ["A", "B", "C"],
//!   "links": [
//!     { "from": "A", "to": "B" },
//!     { "from": "B", "to": "A" }
//!   ],
//!   "rank": { "damping": 0.85, "tolerance": 0.0001 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::pagerank::PageRank;

/// Top-level network document (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Document version (currently `1`).
    pub v: u32,

    /// Declared page identifiers, in display order.
    #[serde(default)]
    pub pages: Vec<String>,

    /// Directed links between pages.
    #[serde(default)]
    pub links: Vec<LinkSpec>,

    /// Solver parameters. Omitted fields take the solver defaults.
    #[serde(default)]
    pub rank: RankParams,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// One directed link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSpec {
    pub from: String,
    pub to: String,
}

/// Solver parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankParams {
    /// Damping factor.
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Convergence tolerance.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_damping() -> f64 {
    0.85
}

fn default_tolerance() -> f64 {
    1e-4
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            tolerance: default_tolerance(),
            unknown_fields: HashMap::new(),
        }
    }
}

impl NetworkSpec {
    /// Materialize the declared pages and links into a [`Graph`].
    ///
    /// Pages are registered in declaration order. Link endpoints that were
    /// never declared are registered on the fly, so building never fails;
    /// run the [`ValidationEngine`](super::validation::ValidationEngine)
    /// first to reject such documents instead.
    pub fn build(&self) -> Graph {
        let mut graph = Graph::with_capacity(self.pages.len());

        for page in &self.pages {
            graph.add_node(page);
        }

        for link in &self.links {
            let from = graph.add_node(&link.from);
            let to = graph.add_node(&link.to);
            graph.add_edge(from, to);
        }

        graph
    }

    /// A solver configured from the document's rank parameters.
    pub fn solver(&self) -> PageRank {
        PageRank::new()
            .with_damping(self.rank.damping)
            .with_tolerance(self.rank.tolerance)
    }
}
