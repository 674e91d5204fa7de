//! Topology algorithms used by the taxnet query engine.
//!
//! Everything here works on dense vertex indices (`0..vertex_count`) and knows nothing about
//! node records, names or categories. The root crate maps its string ids onto these indices.

pub mod common;
pub mod expansion;
pub mod ranking;

pub use common::{AdjacencyView, VertexIdx};
pub use expansion::{bounded_expand, ExpansionLimits};
pub use ranking::{local_degrees, top_k_by_degree};
