//! Degree ranking
//!
//! Deterministic top-k selection by degree, used to cut an oversized result down to a budget.

use super::common::VertexIdx;
use std::cmp::Reverse;

/// Count, for every vertex, the edges of `edges` that touch it.
///
/// Both endpoints are credited, so a self-loop counts twice. Endpoints outside
/// `0..vertex_count` are ignored.
pub fn local_degrees(vertex_count: usize, edges: &[(VertexIdx, VertexIdx)]) -> Vec<usize> {
    let mut degrees = vec![0usize; vertex_count];
    for &(u, v) in edges {
        if let Some(d) = degrees.get_mut(u) {
            *d += 1;
        }
        if let Some(d) = degrees.get_mut(v) {
            *d += 1;
        }
    }
    degrees
}

/// Select the `k` candidates with the highest degree.
///
/// The sort is stable: candidates with equal degree keep their relative input order. The
/// returned vector is in rank order (highest degree first).
pub fn top_k_by_degree<F>(candidates: &[VertexIdx], k: usize, degree: F) -> Vec<VertexIdx>
where
    F: Fn(VertexIdx) -> usize,
{
    let mut ranked: Vec<(VertexIdx, usize)> =
        candidates.iter().map(|&idx| (idx, degree(idx))).collect();
    ranked.sort_by_key(|&(_, d)| Reverse(d));
    ranked.truncate(k);
    ranked.into_iter().map(|(idx, _)| idx).collect()
}
