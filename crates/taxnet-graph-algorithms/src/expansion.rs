//! Bounded breadth-first expansion
//!
//! Grows a seed set layer by layer along arcs accepted by a label predicate, capping how many
//! neighbors each frontier vertex may contribute per layer.

use super::common::{AdjacencyView, VertexIdx};

/// Depth and fan-out limits for [`bounded_expand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimits {
    /// Number of BFS layers to grow (0 = seeds only)
    pub depth: usize,
    /// Maximum accepted arcs taken from a single frontier vertex in one layer
    pub max_neighbors_per_step: usize,
}

/// Expand `seeds` breadth-first.
///
/// For every frontier vertex, arcs are filtered by `traversable(neighbor, label)` and the
/// filtered row is cut to its first `max_neighbors_per_step` entries *before* the visited
/// check, so a vertex never admits more than that many neighbors in one layer. Vertices seen in any earlier layer are
/// not admitted again. Expansion stops after `depth` layers or when a layer admits nothing.
///
/// Returns the seeds (deduplicated, in input order) followed by admitted vertices in admission
/// order. Seeds outside the view are kept but contribute no arcs.
pub fn bounded_expand<L, F>(
    view: &AdjacencyView<L>,
    seeds: &[VertexIdx],
    limits: ExpansionLimits,
    mut traversable: F,
) -> Vec<VertexIdx>
where
    L: Copy,
    F: FnMut(VertexIdx, L) -> bool,
{
    let mut visited = vec![false; view.vertex_count];
    let mut order = Vec::with_capacity(seeds.len());

    for &seed in seeds {
        let fresh = match visited.get_mut(seed) {
            Some(seen) => !std::mem::replace(seen, true),
            None => !order.contains(&seed),
        };
        if fresh {
            order.push(seed);
        }
    }

    let mut frontier: Vec<VertexIdx> = order.clone();
    for _ in 0..limits.depth {
        let mut next = Vec::new();
        for &current in &frontier {
            let admitted = view
                .neighbors(current)
                .filter(|&(neighbor, label)| traversable(neighbor, label))
                .take(limits.max_neighbors_per_step)
                .map(|(neighbor, _)| neighbor)
                .collect::<Vec<_>>();

            for neighbor in admitted {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    next.push(neighbor);
                }
            }
        }

        if next.is_empty() {
            break;
        }
        order.extend_from_slice(&next);
        frontier = next;
    }

    order
}
