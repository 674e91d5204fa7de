//! Shared utilities for graph algorithms
//!
//! Provides a read-only, undirected, labeled view of the graph topology in Compressed Sparse
//! Row (CSR) format.

/// Dense vertex index (0..vertex_count)
pub type VertexIdx = usize;

/// An undirected adjacency view where every arc carries a label (typically an edge type).
///
/// Each stored edge `(u, v, label)` contributes the arc `u -> v` to `u`'s row and `v -> u` to
/// `v`'s row, so traversal works in both directions. Within a row, arcs keep the order in
/// which their edges were supplied. A self-loop appears twice in its row.
#[derive(Debug, Clone)]
pub struct AdjacencyView<L> {
    /// Number of vertices
    pub vertex_count: usize,
    /// Offsets into `targets`/`labels`. Size = vertex_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub targets: Vec<VertexIdx>,
    /// Arc labels, aligned with `targets`
    pub labels: Vec<L>,
}

impl<L: Copy> AdjacencyView<L> {
    /// Build the view from an edge list.
    ///
    /// Edges whose endpoints fall outside `0..vertex_count` are skipped.
    pub fn from_edges(vertex_count: usize, edges: &[(VertexIdx, VertexIdx, L)]) -> Self {
        let in_range = |&&(u, v, _): &&(VertexIdx, VertexIdx, L)| u < vertex_count && v < vertex_count;

        // Pass 1: row lengths
        let mut offsets = vec![0usize; vertex_count + 1];
        for &(u, v, _) in edges.iter().filter(in_range) {
            offsets[u + 1] += 1;
            offsets[v + 1] += 1;
        }
        for i in 0..vertex_count {
            offsets[i + 1] += offsets[i];
        }

        // Pass 2: fill rows, preserving edge order within each row
        let total = offsets[vertex_count];
        let mut cursor = offsets.clone();
        let mut targets = vec![0usize; total];
        let mut labels: Vec<Option<L>> = vec![None; total];
        for &(u, v, label) in edges.iter().filter(in_range) {
            targets[cursor[u]] = v;
            labels[cursor[u]] = Some(label);
            cursor[u] += 1;

            targets[cursor[v]] = u;
            labels[cursor[v]] = Some(label);
            cursor[v] += 1;
        }

        AdjacencyView {
            vertex_count,
            offsets,
            targets,
            labels: labels.into_iter().flatten().collect(),
        }
    }

    /// Number of arcs incident to a vertex (both directions)
    pub fn degree(&self, idx: VertexIdx) -> usize {
        if idx >= self.vertex_count {
            return 0;
        }
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Neighbors of a vertex with the label of the connecting arc
    pub fn neighbors(&self, idx: VertexIdx) -> impl Iterator<Item = (VertexIdx, L)> + '_ {
        let (start, end) = if idx < self.vertex_count {
            (self.offsets[idx], self.offsets[idx + 1])
        } else {
            (0, 0)
        };
        self.targets[start..end]
            .iter()
            .copied()
            .zip(self.labels[start..end].iter().copied())
    }

    /// Total number of stored arcs (twice the edge count)
    pub fn arc_count(&self) -> usize {
        self.targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_both_directions() {
        // 0-1 (a), 0-2 (b), 1-2 (a)
        let view = AdjacencyView::from_edges(3, &[(0, 1, 'a'), (0, 2, 'b'), (1, 2, 'a')]);

        assert_eq!(view.neighbors(0).collect::<Vec<_>>(), vec![(1, 'a'), (2, 'b')]);
        assert_eq!(view.neighbors(1).collect::<Vec<_>>(), vec![(0, 'a'), (2, 'a')]);
        assert_eq!(view.neighbors(2).collect::<Vec<_>>(), vec![(0, 'b'), (1, 'a')]);
        assert_eq!(view.arc_count(), 6);
    }

    #[test]
    fn test_parallel_edges_and_self_loops() {
        let view = AdjacencyView::from_edges(2, &[(0, 1, 1u8), (0, 1, 2u8), (1, 1, 3u8)]);

        assert_eq!(view.degree(0), 2);
        // two parallel arcs back to 0 plus the self-loop counted from both ends
        assert_eq!(view.degree(1), 4);
    }

    #[test]
    fn test_out_of_range_vertices() {
        let view = AdjacencyView::from_edges(2, &[(0, 5, ()), (0, 1, ())]);

        assert_eq!(view.degree(0), 1);
        assert_eq!(view.degree(7), 0);
        assert_eq!(view.neighbors(7).count(), 0);
    }
}
