//! Network query engine
//!
//! Turns a declarative `NetworkQuery` into a bounded, connected subgraph of one snapshot:
//! keyword match → expansion → seed filtering → edge materialization → isolate removal →
//! degree truncation.

pub mod expander;
pub mod filter;
pub mod matcher;
pub mod network;
pub mod request;
pub mod truncate;

// Re-export main types
pub use filter::{edge_type_allowed, AttributeFilter};
pub use network::Network;
pub use request::{MatchLogic, NetworkQuery, QueryError, QueryRequest, QueryResult, RankingMode};

use crate::graph::{Category, Edge, EdgeType, FieldName, GraphIndex, NodeId, NodeType};
use std::collections::BTreeSet;
use taxnet_graph_algorithms::VertexIdx;
use tracing::debug;

/// Query engine over one snapshot
///
/// Holds nothing but a borrow of the index, so it is cheap to create per call and any number
/// of engines may run against the same index from different threads.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'g> {
    index: &'g GraphIndex,
}

impl<'g> QueryEngine<'g> {
    pub fn new(index: &'g GraphIndex) -> Self {
        QueryEngine { index }
    }

    pub fn index(&self) -> &'g GraphIndex {
        self.index
    }

    /// Build the result subgraph for `query`.
    ///
    /// Never fails: "no matches" is an empty `Network`. The output depends only on the snapshot
    /// and the query, down to node and edge order.
    pub fn build_network(&self, query: &NetworkQuery) -> Network {
        let index = self.index;
        let vertex_count = index.vertex_count();

        let candidates: Vec<VertexIdx> = if query.search_requested() {
            let seeds = matcher::search_nodes(
                index,
                &query.search_terms,
                &query.search_fields,
                query.match_logic,
            );
            if seeds.is_empty() {
                debug!("No nodes matched {:?}", query.search_terms);
                return Network::empty();
            }

            let mut candidates = expander::expand(
                index,
                &seeds,
                query.expansion_depth,
                query.max_neighbors_per_step,
                &query.allowed_edge_types,
            );

            // Only seeds are attribute-filtered; nodes reached by expansion stay regardless of type
            let filter = AttributeFilter::new(&query.allowed_node_types, &query.allowed_categories);
            let filtered_seeds = filter.filter_vertices(index, &seeds);
            if filtered_seeds.is_empty() {
                debug!("All {} seeds rejected by type/category filters", seeds.len());
                return Network::empty();
            }

            if filtered_seeds.len() < seeds.len() {
                let mut rejected = vec![false; vertex_count];
                for &seed in &seeds {
                    rejected[seed] = true;
                }
                for &seed in &filtered_seeds {
                    rejected[seed] = false;
                }
                candidates.retain(|&idx| !rejected[idx]);
            }

            debug!(
                "{} seeds, {} after filtering, {} candidates",
                seeds.len(),
                filtered_seeds.len(),
                candidates.len()
            );
            candidates
        } else {
            (0..index.node_count()).collect()
        };

        let mut in_candidates = vec![false; vertex_count];
        for &idx in &candidates {
            in_candidates[idx] = true;
        }

        let candidate_edges: Vec<usize> = if query.allowed_edge_types.is_empty() {
            Vec::new()
        } else {
            index
                .edges()
                .iter()
                .zip(index.edge_endpoints())
                .enumerate()
                .filter(|(_, (edge, &(s, t)))| {
                    edge_type_allowed(&query.allowed_edge_types, edge.edge_type)
                        && in_candidates[s]
                        && in_candidates[t]
                })
                .map(|(pos, _)| pos)
                .collect()
        };
        let candidate_endpoints: Vec<(VertexIdx, VertexIdx)> = candidate_edges
            .iter()
            .map(|&pos| index.edge_endpoints()[pos])
            .collect();

        let connected: Vec<VertexIdx> =
            if query.allowed_edge_types.is_empty() && query.expansion_depth == 0 {
                // Matched terms only, shown without edges
                candidates
            } else {
                let mut touched = vec![false; vertex_count];
                for &(s, t) in &candidate_endpoints {
                    touched[s] = true;
                    touched[t] = true;
                }
                candidates.into_iter().filter(|&idx| touched[idx]).collect()
            };

        let matched_count = connected.len();
        let truncated = matched_count > query.max_total_nodes;

        let final_ids: Vec<VertexIdx> = if truncated {
            let selected = truncate::truncate(
                index,
                &connected,
                &candidate_endpoints,
                query.max_total_nodes,
                query.ranking,
            );
            let mut keep = vec![false; vertex_count];
            for idx in selected {
                keep[idx] = true;
            }
            connected.into_iter().filter(|&idx| keep[idx]).collect()
        } else {
            connected
        };

        let mut in_final = vec![false; vertex_count];
        for &idx in &final_ids {
            in_final[idx] = true;
        }

        let edges: Vec<Edge> = candidate_edges
            .iter()
            .zip(&candidate_endpoints)
            .filter(|(_, &(s, t))| in_final[s] && in_final[t])
            .map(|(&pos, _)| index.edges()[pos].clone())
            .collect();

        let nodes = final_ids
            .iter()
            .filter_map(|&idx| index.node_at(idx).cloned())
            .collect();

        debug!(
            "Built network: {} matched, {} nodes, {} edges, truncated={}",
            matched_count,
            final_ids.len(),
            edges.len(),
            truncated
        );

        Network {
            nodes,
            edges,
            truncated,
            matched_count,
        }
    }

    /// Ids of nodes matching a keyword search, in snapshot order
    pub fn search_nodes(
        &self,
        terms: &BTreeSet<String>,
        fields: &BTreeSet<FieldName>,
        logic: MatchLogic,
    ) -> Vec<NodeId> {
        self.ids(&matcher::search_nodes(self.index, terms, fields, logic))
    }

    /// The ids whose node passes the type/category allow-lists, in input order.
    /// Ids without a node record are dropped.
    pub fn filter_ids(
        &self,
        ids: &[NodeId],
        allowed_types: &BTreeSet<NodeType>,
        allowed_categories: &BTreeSet<Category>,
    ) -> Vec<NodeId> {
        let filter = AttributeFilter::new(allowed_types, allowed_categories);
        let vertices = filter.filter_vertices(self.index, &self.vertices(ids));
        self.ids(&vertices)
    }

    /// Seeds plus everything reached by bounded expansion, in BFS admission order
    pub fn expand(
        &self,
        seeds: &[NodeId],
        depth: usize,
        max_neighbors_per_step: usize,
        allowed_edge_types: &BTreeSet<EdgeType>,
    ) -> Vec<NodeId> {
        let seeds: Vec<VertexIdx> = self
            .vertices(seeds)
            .into_iter()
            .filter(|&idx| self.index.is_materialized(idx))
            .collect();
        let reached = expander::expand(
            self.index,
            &seeds,
            depth,
            max_neighbors_per_step,
            allowed_edge_types,
        );
        self.ids(&reached)
    }

    /// Rank `connected` by degree and keep the top `max_total_nodes`, in rank order.
    ///
    /// Callers normally only invoke this when `connected` exceeds the budget.
    pub fn truncate(
        &self,
        connected: &[NodeId],
        candidate_edges: &[Edge],
        max_total_nodes: usize,
        mode: RankingMode,
    ) -> Vec<NodeId> {
        let endpoints: Vec<(VertexIdx, VertexIdx)> = candidate_edges
            .iter()
            .filter_map(|edge| {
                let (source, target) = edge.endpoints();
                Some((self.index.vertex_of(source.as_str())?, self.index.vertex_of(target.as_str())?))
            })
            .collect();
        let selected = truncate::truncate(
            self.index,
            &self.vertices(connected),
            &endpoints,
            max_total_nodes,
            mode,
        );
        self.ids(&selected)
    }

    /// Unknown ids are skipped
    fn vertices(&self, ids: &[NodeId]) -> Vec<VertexIdx> {
        ids.iter()
            .filter_map(|id| self.index.vertex_of(id.as_str()))
            .collect()
    }

    fn ids(&self, vertices: &[VertexIdx]) -> Vec<NodeId> {
        vertices
            .iter()
            .filter_map(|&idx| self.index.node_at(idx).map(|n| n.id.clone()))
            .collect()
    }
}
