//! Taxnet
//!
//! Query engine for exploring a labeled tax-form network: forms, line items, code sections,
//! regulations and index terms, connected by typed citation edges.
//!
//! # Architecture
//!
//! - `graph`: the immutable snapshot (`Node`, `Edge`) and its adjacency index (`GraphIndex`)
//! - `query`: `QueryEngine::build_network`, which turns a `NetworkQuery` into a bounded,
//!   connected `Network`
//! - `session`: publishes snapshots and swaps them atomically on reload
//! - `config`: defaults and limits for untyped query requests
//!
//! Topology work (CSR adjacency, bounded BFS, degree ranking) lives in the
//! `taxnet-graph-algorithms` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use taxnet::graph::{Category, Edge, EdgeType, FieldName, GraphIndex, Node};
//! use taxnet::query::{NetworkQuery, QueryEngine};
//!
//! let index = GraphIndex::new(
//!     vec![
//!         Node::form(Category::Individual, "1040"),
//!         Node::section("61").with_full_name("Gross income defined"),
//!     ],
//!     vec![Edge::new("form:individual:1040", "section:61", EdgeType::CitesSection)],
//! );
//!
//! let query = NetworkQuery::new()
//!     .search(["gross income"])
//!     .fields([FieldName::FullName])
//!     .depth(1);
//!
//! let network = QueryEngine::new(&index).build_network(&query);
//! assert_eq!(network.nodes.len(), 2);
//! assert_eq!(network.edges.len(), 1);
//! assert!(!network.truncated);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod query;
pub mod session;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, EngineConfig};

pub use graph::{
    Category, Edge, EdgeType, FieldName, GraphError, GraphIndex, GraphResult, GraphStatistics,
    Node, NodeId, NodeKind, NodeType, PropertyMap, PropertyValue,
};

pub use query::{
    MatchLogic, Network, NetworkQuery, QueryEngine, QueryError, QueryRequest, QueryResult,
    RankingMode,
};

pub use session::GraphSession;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
