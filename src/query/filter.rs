//! Attribute allow-lists
//!
//! Every allow-list here is block-all when empty: no node types means no node passes, no
//! categories means no categorized node passes, no edge types means no edge is traversable or
//! kept. This is the opposite of the usual "empty means unrestricted" reading, so callers go
//! through the named predicates below instead of testing set membership themselves.

use crate::graph::{Category, EdgeType, GraphIndex, Node, NodeType};
use std::collections::BTreeSet;
use taxnet_graph_algorithms::VertexIdx;

/// Node type and category allow-lists
#[derive(Debug, Clone, Copy)]
pub struct AttributeFilter<'q> {
    types: &'q BTreeSet<NodeType>,
    categories: &'q BTreeSet<Category>,
}

impl<'q> AttributeFilter<'q> {
    pub fn new(types: &'q BTreeSet<NodeType>, categories: &'q BTreeSet<Category>) -> Self {
        AttributeFilter { types, categories }
    }

    /// Empty allow-list: nothing passes
    pub fn type_allowed(&self, node_type: NodeType) -> bool {
        self.types.contains(&node_type)
    }

    /// Empty allow-list: nothing passes
    pub fn category_allowed(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Type must be allowed; category-agnostic kinds skip the category check.
    pub fn passes(&self, node: &Node) -> bool {
        self.type_allowed(node.node_type())
            && match node.category() {
                None => true,
                Some(category) => self.category_allowed(category),
            }
    }

    /// Keep the vertices whose node passes, preserving order. Vertices without a node record
    /// never pass.
    pub(crate) fn filter_vertices(&self, index: &GraphIndex, vertices: &[VertexIdx]) -> Vec<VertexIdx> {
        vertices
            .iter()
            .copied()
            .filter(|&idx| index.node_at(idx).is_some_and(|node| self.passes(node)))
            .collect()
    }
}

/// Empty allow-list: no edge type is allowed
pub fn edge_type_allowed(allowed: &BTreeSet<EdgeType>, edge_type: EdgeType) -> bool {
    allowed.contains(&edge_type)
}
