//! Tax-form network data model
//!
//! This module holds the immutable snapshot the query engine runs against:
//! - Nodes as a tagged union keyed by node type
//! - Typed edges, stored directed but traversed undirected
//! - Multiple edges between the same nodes are kept distinct
//! - `GraphIndex`, the per-snapshot adjacency structure

pub mod edge;
pub mod index;
pub mod node;
pub mod property;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use index::{GraphIndex, GraphStatistics};
pub use node::{Node, NodeKind};
pub use property::{PropertyMap, PropertyValue};
pub use types::{Category, EdgeType, FieldName, GraphError, GraphResult, NodeId, NodeType};
