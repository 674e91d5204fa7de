//! Result of a network query

use crate::graph::{Edge, Node, NodeId};
use serde::{Deserialize, Serialize};

/// A bounded subgraph ready for rendering
///
/// `nodes` holds no duplicates and every edge has both endpoints in `nodes`. `matched_count`
/// is the connected candidate count before the node budget was applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub truncated: bool,
    pub matched_count: usize,
}

impl Network {
    /// The "no matches" result
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_ids(&self) -> Vec<&NodeId> {
        self.nodes.iter().map(|n| &n.id).collect()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id.as_str() == id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
