//! Edge implementation
//!
//! Edges are stored with a direction (source cites target) but every traversal in the query
//! engine treats them as undirected. Endpoint handling lives here so callers never branch on
//! direction themselves.

use super::types::{EdgeType, NodeId};
use serde::{Deserialize, Serialize};

/// A typed edge between two nodes
///
/// Several edges may connect the same pair of nodes; each one is a distinct edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source node as stored in the snapshot
    pub source: NodeId,

    /// Target node as stored in the snapshot
    pub target: NodeId,

    /// Type of relationship
    pub edge_type: EdgeType,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, edge_type: EdgeType) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            edge_type,
        }
    }

    /// Both endpoints, with no meaning attached to their order
    pub fn endpoints(&self) -> (&NodeId, &NodeId) {
        (&self.source, &self.target)
    }

    /// The endpoint opposite `node`, or `None` if the edge does not touch it
    pub fn other_end(&self, node: &NodeId) -> Option<&NodeId> {
        if &self.source == node {
            Some(&self.target)
        } else if &self.target == node {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Check if this edge touches a node at either end
    pub fn touches(&self, node: &NodeId) -> bool {
        &self.source == node || &self.target == node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_helpers() {
        let edge = Edge::new("form:individual:1040", "section:61", EdgeType::CitesSection);
        let form = NodeId::new("form:individual:1040");
        let section = NodeId::new("section:61");
        let other = NodeId::new("section:62");

        assert_eq!(edge.other_end(&form), Some(&section));
        assert_eq!(edge.other_end(&section), Some(&form));
        assert_eq!(edge.other_end(&other), None);

        assert!(edge.touches(&section));
        assert!(!edge.touches(&other));
    }

    #[test]
    fn test_parallel_edges_are_distinct() {
        let cites = Edge::new("a", "b", EdgeType::CitesForm);
        let line = Edge::new("a", "b", EdgeType::FormLine);

        assert_ne!(cites, line);
        assert_eq!(cites.endpoints(), line.endpoints());
    }

    #[test]
    fn test_self_loop() {
        let edge = Edge::new("index:basis", "index:basis", EdgeType::IndexEntry);
        let node = NodeId::new("index:basis");

        assert!(edge.touches(&node));
        assert_eq!(edge.other_end(&node), Some(&node));
    }
}
