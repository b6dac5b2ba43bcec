//! webrank — iterative PageRank for small in-memory link networks.
//!
//! The crate is organized around three modules:
//!
//! - [`graph`]: an index-based arena of nodes with directed, deduplicated
//!   edges and per-node incoming/outgoing adjacency.
//! - [`pagerank`]: the damped power-iteration solver that runs a graph to
//!   convergence and writes scores back into its nodes.
//! - [`network`]: declarative JSON network documents with rule-based
//!   validation, for describing a graph and solver settings as data.
//!
//! # Quick start
//!
//! ```rust
//! use webrank::{Graph, PageRank};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! graph.add_edge(a, b);
//! graph.add_edge(b, a);
//!
//! let report = PageRank::new().solve(&mut graph);
//! assert!((graph.score(a) - 0.5).abs() < 0.01);
//! assert!(report.sweeps > 0);
//! ```

pub mod graph;
pub mod network;
pub mod pagerank;

pub use graph::{Graph, Node, NodeId};
pub use pagerank::{PageRank, SolveReport};
