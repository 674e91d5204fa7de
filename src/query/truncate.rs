//! Budget enforcement by degree ranking

use super::request::RankingMode;
use crate::graph::GraphIndex;
use taxnet_graph_algorithms::{local_degrees, top_k_by_degree, VertexIdx};
use tracing::debug;

/// Pick `max_total_nodes` survivors from `connected`.
///
/// `candidate_edges` are the (source, target) vertices of the query's kept edges; they only
/// matter in subgraph mode. Ties keep the order of `connected`. The result is in rank order.
pub(crate) fn truncate(
    index: &GraphIndex,
    connected: &[VertexIdx],
    candidate_edges: &[(VertexIdx, VertexIdx)],
    max_total_nodes: usize,
    mode: RankingMode,
) -> Vec<VertexIdx> {
    let selected = match mode {
        RankingMode::Global => {
            let adjacency = index.adjacency();
            top_k_by_degree(connected, max_total_nodes, |idx| adjacency.degree(idx))
        }
        RankingMode::Subgraph => {
            let degrees = local_degrees(index.vertex_count(), candidate_edges);
            top_k_by_degree(connected, max_total_nodes, |idx| degrees[idx])
        }
    };

    debug!(
        "Truncated {} connected nodes to {} by {} degree",
        connected.len(),
        selected.len(),
        mode
    );
    selected
}
