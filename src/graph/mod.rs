//! Link graph construction and storage.
//!
//! [`Graph`] is an index-based arena: it owns all nodes in one ordered `Vec`
//! and uses an `FxHashMap` for O(1) identifier-to-index lookups during
//! construction. Adjacency lists hold [`NodeId`] indices rather than
//! references, so mutually-linked nodes never form an ownership cycle.

pub mod node;

pub use node::{Node, NodeId};

use rustc_hash::FxHashMap;

/// An ordered, deduplicated collection of nodes and the directed links
/// between them.
///
/// The graph maintains one invariant across all mutation: for every edge
/// (u → v), `v` appears in `u`'s outgoing list iff `u` appears in `v`'s
/// incoming list. [`add_edge`](Graph::add_edge) establishes both sides
/// atomically and no other operation touches adjacency.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Maps page identifier -> node index.
    ids: FxHashMap<String, NodeId>,
    /// Node storage, in registration order.
    nodes: Vec<Node>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity.
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            ids: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Register a node for the given identifier, returning its id.
    ///
    /// Registering an identifier that is already present is a no-op that
    /// returns the existing id, so re-adding is always safe.
    pub fn add_node(&mut self, id: &str) -> NodeId {
        if let Some(&existing) = self.ids.get(id) {
            return existing;
        }

        let node_id = NodeId::from_index(self.nodes.len());
        self.ids.insert(id.to_string(), node_id);
        self.nodes.push(Node::new(id));
        node_id
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// Updates both adjacency lists in one step: `to` joins `from`'s outgoing
    /// list and `from` joins `to`'s incoming list. If the edge already exists
    /// the call is a silent no-op, so duplicate links are never stored.
    /// Self-loops are allowed.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        if self.nodes[from.index()].links_to(to) {
            return;
        }

        self.nodes[from.index()].push_outgoing(to);
        self.nodes[to.index()].push_incoming(from);
    }

    /// Look up a node id by page identifier.
    pub fn get(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// The current score of a node.
    pub fn score(&self, id: NodeId) -> f64 {
        self.nodes[id.index()].score()
    }

    /// Number of outgoing links of a node.
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.nodes[id.index()].out_degree()
    }

    /// Nodes linking to the given node.
    pub fn incoming(&self, id: NodeId) -> &[NodeId] {
        self.nodes[id.index()].incoming()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::out_degree).sum()
    }

    /// Iterate over all nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::from_index(i), n))
    }

    /// Get the top N nodes by current score, highest first.
    pub fn top_n(&self, n: usize) -> Vec<(NodeId, f64)> {
        let mut ranked: Vec<_> = self.nodes().map(|(id, node)| (id, node.score())).collect();
        // Scores are produced by finite arithmetic and are never NaN.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        ranked.truncate(n);
        ranked
    }

    pub(crate) fn set_score(&mut self, id: NodeId, score: f64) {
        self.nodes[id.index()].set_score(score);
    }

    pub(crate) fn reset_scores(&mut self, value: f64) {
        for node in &mut self.nodes {
            node.set_score(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = Graph::new();

        let a = graph.add_node("A1");
        let b = graph.add_node("B1");
        let a_again = graph.add_node("A1");

        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_add_edge_updates_both_sides() {
        let mut graph = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");

        graph.add_edge(a, b);

        assert_eq!(graph.node(a).outgoing(), &[b]);
        assert_eq!(graph.node(b).incoming(), &[a]);
        assert!(graph.node(a).incoming().is_empty());
        assert!(graph.node(b).outgoing().is_empty());
    }

    #[test]
    fn test_duplicate_edge_is_noop() {
        let mut graph = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");

        graph.add_edge(a, b);
        graph.add_edge(a, b);

        assert_eq!(graph.node(a).outgoing().len(), 1);
        assert_eq!(graph.node(b).incoming().len(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_stored_once() {
        let mut graph = Graph::new();
        let a = graph.add_node("A");

        graph.add_edge(a, a);
        graph.add_edge(a, a);

        assert_eq!(graph.node(a).outgoing(), &[a]);
        assert_eq!(graph.node(a).incoming(), &[a]);
    }

    #[test]
    fn test_adjacency_invariant_after_edge_sequence() {
        let mut graph = Graph::new();
        let ids: Vec<_> = ["A", "B", "C", "D"]
            .iter()
            .map(|s| graph.add_node(s))
            .collect();

        graph.add_edge(ids[0], ids[1]);
        graph.add_edge(ids[1], ids[0]);
        graph.add_edge(ids[1], ids[2]);
        graph.add_edge(ids[2], ids[0]);
        graph.add_edge(ids[2], ids[0]); // duplicate
        graph.add_edge(ids[3], ids[3]); // self-loop

        for (u, node) in graph.nodes() {
            for &v in node.outgoing() {
                assert!(graph.node(v).incoming().contains(&u));
            }
            for &q in node.incoming() {
                assert!(graph.node(q).outgoing().contains(&u));
            }
        }
    }

    #[test]
    fn test_get_by_identifier() {
        let mut graph = Graph::new();
        let a = graph.add_node("A");

        assert_eq!(graph.get("A"), Some(a));
        assert_eq!(graph.get("missing"), None);
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut graph = Graph::new();
        graph.add_node("C");
        graph.add_node("A");
        graph.add_node("B");

        let order: Vec<_> = graph.nodes().map(|(_, n)| n.id().to_string()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_top_n_orders_by_score() {
        let mut graph = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        graph.set_score(a, 0.2);
        graph.set_score(b, 0.5);
        graph.set_score(c, 0.3);

        let top = graph.top_n(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, b);
        assert_eq!(top[1].0, c);
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.top_n(5).is_empty());
    }
}
