//! Seed expansion along allowed edge types

use super::filter::edge_type_allowed;
use crate::graph::{EdgeType, GraphIndex};
use std::collections::BTreeSet;
use taxnet_graph_algorithms::{bounded_expand, ExpansionLimits, VertexIdx};
use tracing::debug;

/// Grow `seeds` for `depth` BFS layers over edges whose type is allowed.
///
/// The result starts with the seeds and continues in admission order. Each frontier node
/// contributes at most `max_neighbors_per_step` of its allowed neighbors per layer. With no
/// allowed edge types nothing is added. Dangling endpoint ids are never entered: they take no
/// per-step slot and nodes reachable only through them are not reached.
pub(crate) fn expand(
    index: &GraphIndex,
    seeds: &[VertexIdx],
    depth: usize,
    max_neighbors_per_step: usize,
    allowed_edge_types: &BTreeSet<EdgeType>,
) -> Vec<VertexIdx> {
    if depth == 0 || allowed_edge_types.is_empty() {
        return seeds.to_vec();
    }

    let limits = ExpansionLimits {
        depth,
        max_neighbors_per_step,
    };
    let reached = bounded_expand(index.adjacency(), seeds, limits, |neighbor, edge_type| {
        index.is_materialized(neighbor) && edge_type_allowed(allowed_edge_types, edge_type)
    });

    debug!(
        "Expanded {} seeds to {} nodes (depth {}, cap {})",
        seeds.len(),
        reached.len(),
        depth,
        max_neighbors_per_step
    );
    reached
}
