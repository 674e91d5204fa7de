//! Immutable adjacency index over one graph snapshot
//!
//! The index assigns every node a dense vertex number in snapshot order and lays the edges out
//! as an undirected CSR view, so neighbor lookup is a slice read. Ids that only appear as edge
//! endpoints (no node record) still get a vertex so that the adjacency stays complete; they are
//! numbered after all real nodes and never resolve to a `Node`.

use super::edge::Edge;
use super::node::Node;
use super::types::{EdgeType, NodeId, NodeType};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use std::collections::BTreeMap;
use taxnet_graph_algorithms::{AdjacencyView, VertexIdx};
use tracing::{info, warn};

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Summary counts for a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_type: BTreeMap<NodeType, usize>,
    pub edges_by_type: BTreeMap<EdgeType, usize>,
    /// Edge endpoint ids with no node record
    pub dangling_ids: usize,
}

/// Read-only adjacency structure built once per snapshot
///
/// `GraphIndex` has no mutating methods; a new snapshot means a new index. It is `Send + Sync`
/// and is meant to be shared behind an `Arc`.
#[derive(Debug)]
pub struct GraphIndex {
    /// Node records, position = vertex number
    nodes: Vec<Node>,

    /// Vertex numbering: node ids first, then dangling endpoint ids
    vertices: FxIndexSet<NodeId>,

    /// Edges in snapshot order
    edges: Vec<Edge>,

    /// Vertex numbers of each edge's (source, target), aligned with `edges`
    endpoints: Vec<(VertexIdx, VertexIdx)>,

    /// Undirected neighbor rows tagged with edge type
    adjacency: AdjacencyView<EdgeType>,
}

impl GraphIndex {
    /// Build the index from a snapshot. O(N + E).
    ///
    /// When two node records share an id, the first one wins.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut vertices = FxIndexSet::with_capacity_and_hasher(nodes.len(), FxBuildHasher);
        let mut kept = Vec::with_capacity(nodes.len());

        for node in nodes {
            if vertices.insert(node.id.clone()) {
                kept.push(node);
            } else {
                warn!("Duplicate node id {} in snapshot, keeping first record", node.id);
            }
        }

        let node_count = kept.len();
        let mut endpoints = Vec::with_capacity(edges.len());
        let mut arcs = Vec::with_capacity(edges.len());
        for edge in &edges {
            let (source, _) = vertices.insert_full(edge.source.clone());
            let (target, _) = vertices.insert_full(edge.target.clone());
            endpoints.push((source, target));
            arcs.push((source, target, edge.edge_type));
        }

        let dangling = vertices.len() - node_count;
        if dangling > 0 {
            warn!("{} edge endpoints have no node record and will never appear in results", dangling);
        }

        let adjacency = AdjacencyView::from_edges(vertices.len(), &arcs);

        info!(
            "Built graph index: {} nodes, {} edges, {} arcs",
            node_count,
            edges.len(),
            adjacency.arc_count()
        );

        GraphIndex {
            nodes: kept,
            vertices,
            edges,
            endpoints,
            adjacency,
        }
    }

    /// Neighbors of a node with the type of the connecting edge, both directions.
    ///
    /// Unknown ids have no neighbors. Parallel edges yield the neighbor once per edge.
    pub fn neighbors_of(&self, id: &str) -> Vec<(&NodeId, EdgeType)> {
        match self.vertex_of(id) {
            Some(idx) => self
                .adjacency
                .neighbors(idx)
                .filter_map(|(n, edge_type)| self.vertices.get_index(n).map(|id| (id, edge_type)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Global degree: the length of the node's neighbor list
    pub fn degree(&self, id: &str) -> usize {
        self.vertex_of(id).map_or(0, |idx| self.adjacency.degree(idx))
    }

    /// Get a node record by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.vertex_of(id).and_then(|idx| self.nodes.get(idx))
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// All node records in snapshot order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in snapshot order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Counts per node type and edge type
    pub fn stats(&self) -> GraphStatistics {
        let mut stats = GraphStatistics {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            dangling_ids: self.vertices.len() - self.nodes.len(),
            ..Default::default()
        };
        for node in &self.nodes {
            *stats.nodes_by_type.entry(node.node_type()).or_insert(0) += 1;
        }
        for edge in &self.edges {
            *stats.edges_by_type.entry(edge.edge_type).or_insert(0) += 1;
        }
        stats
    }

    // Vertex-level access for the query engine

    pub(crate) fn vertex_of(&self, id: &str) -> Option<VertexIdx> {
        self.vertices.get_index_of(id)
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether a vertex has a node record (as opposed to a dangling endpoint)
    pub(crate) fn is_materialized(&self, idx: VertexIdx) -> bool {
        idx < self.nodes.len()
    }

    pub(crate) fn node_at(&self, idx: VertexIdx) -> Option<&Node> {
        self.nodes.get(idx)
    }

    pub(crate) fn adjacency(&self) -> &AdjacencyView<EdgeType> {
        &self.adjacency
    }

    pub(crate) fn edge_endpoints(&self) -> &[(VertexIdx, VertexIdx)] {
        &self.endpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Category;

    fn sample() -> GraphIndex {
        let nodes = vec![
            Node::index("A"),
            Node::form(Category::Individual, "B"),
            Node::form(Category::Corporation, "C"),
        ];
        let edges = vec![
            Edge::new("index:A", "form:individual:B", EdgeType::CitesSection),
            Edge::new("index:A", "form:corporation:C", EdgeType::CitesSection),
        ];
        GraphIndex::new(nodes, edges)
    }

    #[test]
    fn test_neighbors_both_directions() {
        let index = sample();

        let from_a: Vec<_> = index
            .neighbors_of("index:A")
            .into_iter()
            .map(|(id, t)| (id.as_str().to_string(), t))
            .collect();
        assert_eq!(
            from_a,
            vec![
                ("form:individual:B".to_string(), EdgeType::CitesSection),
                ("form:corporation:C".to_string(), EdgeType::CitesSection),
            ]
        );

        let from_b = index.neighbors_of("form:individual:B");
        assert_eq!(from_b.len(), 1);
        assert_eq!(from_b[0].0.as_str(), "index:A");
    }

    #[test]
    fn test_unknown_id_has_no_neighbors() {
        let index = sample();
        assert!(index.neighbors_of("index:Z").is_empty());
        assert_eq!(index.degree("index:Z"), 0);
        assert!(index.node("index:Z").is_none());
    }

    #[test]
    fn test_global_degree() {
        let index = sample();
        assert_eq!(index.degree("index:A"), 2);
        assert_eq!(index.degree("form:individual:B"), 1);
        assert_eq!(index.degree("form:corporation:C"), 1);
    }

    #[test]
    fn test_dangling_endpoints_are_indexed_but_not_nodes() {
        let nodes = vec![Node::section("61")];
        let edges = vec![Edge::new("section:61", "regulation:1.61-1", EdgeType::CitesRegulation)];
        let index = GraphIndex::new(nodes, edges);

        assert_eq!(index.node_count(), 1);
        assert_eq!(index.vertex_count(), 2);
        assert_eq!(index.degree("regulation:1.61-1"), 1);
        assert!(!index.contains_node("regulation:1.61-1"));
        assert!(!index.is_materialized(1));
        assert_eq!(index.stats().dangling_ids, 1);
    }

    #[test]
    fn test_duplicate_node_ids_keep_first() {
        let nodes = vec![
            Node::section("61").with_full_name("Gross income defined"),
            Node::section("61").with_full_name("duplicate"),
        ];
        let index = GraphIndex::new(nodes, Vec::new());

        assert_eq!(index.node_count(), 1);
        assert_eq!(
            index.node("section:61").unwrap().field(crate::graph::FieldName::FullName),
            Some("Gross income defined")
        );
    }

    #[test]
    fn test_parallel_edges_preserved() {
        let nodes = vec![Node::form(Category::Individual, "1040"), Node::form(Category::Individual, "W-2")];
        let edges = vec![
            Edge::new("form:individual:1040", "form:individual:W-2", EdgeType::CitesForm),
            Edge::new("form:individual:W-2", "form:individual:1040", EdgeType::CitesForm),
        ];
        let index = GraphIndex::new(nodes, edges);

        assert_eq!(index.edge_count(), 2);
        assert_eq!(index.degree("form:individual:1040"), 2);
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.nodes_by_type[&NodeType::Form], 2);
        assert_eq!(stats.nodes_by_type[&NodeType::Index], 1);
        assert_eq!(stats.edges_by_type[&EdgeType::CitesSection], 2);
        assert_eq!(stats.dangling_ids, 0);
    }
}
