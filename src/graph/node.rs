//! Graph vertices.
//!
//! A [`Node`] holds its page identifier, its current PageRank estimate, and
//! two adjacency lists of [`NodeId`] indices into the owning
//! [`Graph`](super::Graph) arena. Index-based adjacency means two nodes can
//! reference each other without owning each other.

/// Index of a node inside its [`Graph`](super::Graph) arena.
///
/// Ids are issued by [`Graph::add_node`](super::Graph::add_node) and are only
/// meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of this node in the graph's node ordering.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single vertex: identifier, score, and adjacency.
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    score: f64,
    outgoing: Vec<NodeId>,
    incoming: Vec<NodeId>,
}

impl Node {
    /// Create a node with score 1.0 and empty adjacency.
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            score: 1.0,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// The externally-supplied identifier. Used for identity and display only,
    /// never for ranking.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The current PageRank estimate.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Nodes this node links to, in insertion order.
    pub fn outgoing(&self) -> &[NodeId] {
        &self.outgoing
    }

    /// Nodes linking to this node, in insertion order. Maintained by edge
    /// insertion; never mutated directly.
    pub fn incoming(&self) -> &[NodeId] {
        &self.incoming
    }

    /// Number of outgoing links.
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub(crate) fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    pub(crate) fn links_to(&self, target: NodeId) -> bool {
        self.outgoing.contains(&target)
    }

    pub(crate) fn push_outgoing(&mut self, target: NodeId) {
        self.outgoing.push(target);
    }

    pub(crate) fn push_incoming(&mut self, source: NodeId) {
        self.incoming.push(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_defaults() {
        let node = Node::new("A1");
        assert_eq!(node.id(), "A1");
        assert_eq!(node.score(), 1.0);
        assert!(node.outgoing().is_empty());
        assert!(node.incoming().is_empty());
        assert_eq!(node.out_degree(), 0);
    }

    #[test]
    fn test_node_id_index_round_trip() {
        let id = NodeId::from_index(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id, NodeId::from_index(7));
        assert_ne!(id, NodeId::from_index(8));
    }

    #[test]
    fn test_links_to_checks_outgoing_only() {
        let mut node = Node::new("A");
        node.push_incoming(NodeId::from_index(3));
        assert!(!node.links_to(NodeId::from_index(3)));

        node.push_outgoing(NodeId::from_index(3));
        assert!(node.links_to(NodeId::from_index(3)));
    }
}
