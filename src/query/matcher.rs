//! Keyword matching over node text fields
//!
//! Case-insensitive substring containment: "tax" matches "taxpayer". No tokenization.

use super::request::MatchLogic;
use crate::graph::{FieldName, GraphIndex, Node};
use rayon::prelude::*;
use std::collections::BTreeSet;
use taxnet_graph_algorithms::VertexIdx;

/// Vertices of every node matching the search, in snapshot order.
///
/// Empty `terms` or empty `fields` match nothing. Fields a node does not have are skipped; a
/// node with no value in any requested field cannot match.
pub(crate) fn search_nodes(
    index: &GraphIndex,
    terms: &BTreeSet<String>,
    fields: &BTreeSet<FieldName>,
    logic: MatchLogic,
) -> Vec<VertexIdx> {
    if terms.is_empty() || fields.is_empty() {
        return Vec::new();
    }

    let terms: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();

    index
        .nodes()
        .par_iter()
        .enumerate()
        .filter(|(_, node)| node_matches(node, &terms, fields, logic))
        .map(|(idx, _)| idx)
        .collect()
}

/// `terms` must already be lower-cased
fn node_matches(node: &Node, terms: &[String], fields: &BTreeSet<FieldName>, logic: MatchLogic) -> bool {
    let values: Vec<String> = fields
        .iter()
        .filter_map(|&field| node.field(field))
        .map(str::to_lowercase)
        .collect();

    if values.is_empty() {
        return false;
    }

    let term_hits = |term: &String| values.iter().any(|value| value.contains(term.as_str()));

    match logic {
        MatchLogic::Or => terms.iter().any(term_hits),
        MatchLogic::And => terms.iter().all(term_hits),
    }
}
