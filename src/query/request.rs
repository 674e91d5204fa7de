//! Query value objects
//!
//! `NetworkQuery` is the typed input to one `build_network` call. `QueryRequest` is the untyped
//! shape a UI sends (plain strings); `validate` turns it into a `NetworkQuery` and rejects
//! anything outside the closed enumerations.

use crate::config::EngineConfig;
use crate::graph::{Category, EdgeType, FieldName, GraphError, NodeType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while turning external input into a `NetworkQuery`
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid query value: {0}")]
    InvalidValue(#[from] GraphError),

    #[error("Unknown match logic: {0} (expected \"and\" or \"or\")")]
    UnknownMatchLogic(String),

    #[error("Unknown ranking mode: {0} (expected \"global\" or \"subgraph\")")]
    UnknownRanking(String),

    #[error("Expansion depth {requested} exceeds the configured limit of {limit}")]
    DepthLimitExceeded { requested: usize, limit: usize },

    #[error("Malformed query JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type QueryResult<T> = Result<T, QueryError>;

/// How multiple search terms combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLogic {
    /// Every term must match some field value
    And,
    /// Any term matching any field value is enough
    #[default]
    Or,
}

impl FromStr for MatchLogic {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Ok(MatchLogic::And),
            "or" => Ok(MatchLogic::Or),
            _ => Err(QueryError::UnknownMatchLogic(s.to_string())),
        }
    }
}

impl fmt::Display for MatchLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchLogic::And => write!(f, "and"),
            MatchLogic::Or => write!(f, "or"),
        }
    }
}

/// Which degree decides the survivors when a result is over budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Neighbor count in the whole base graph, ignoring the query's filters
    #[default]
    Global,
    /// Edge count within the query's own candidate edge set
    Subgraph,
}

impl FromStr for RankingMode {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(RankingMode::Global),
            "subgraph" => Ok(RankingMode::Subgraph),
            _ => Err(QueryError::UnknownRanking(s.to_string())),
        }
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingMode::Global => write!(f, "global"),
            RankingMode::Subgraph => write!(f, "subgraph"),
        }
    }
}

/// Declarative description of the subgraph to build
///
/// Allow-lists use block-all semantics: an empty set lets nothing of that dimension through.
/// `NetworkQuery::new()` starts from the default `EngineConfig`, which allows every type and
/// category; clear a set explicitly to block a dimension.
///
/// Callers holding a typed query cannot pass unknown enum values; untyped input must go through
/// [`QueryRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkQuery {
    pub search_terms: BTreeSet<String>,
    pub search_fields: BTreeSet<FieldName>,
    pub match_logic: MatchLogic,
    pub allowed_node_types: BTreeSet<NodeType>,
    pub allowed_edge_types: BTreeSet<EdgeType>,
    pub allowed_categories: BTreeSet<Category>,
    pub expansion_depth: usize,
    pub max_neighbors_per_step: usize,
    pub max_total_nodes: usize,
    pub ranking: RankingMode,
}

impl NetworkQuery {
    pub fn new() -> Self {
        EngineConfig::default().base_query()
    }

    /// Parse a typed query from JSON
    pub fn from_json(json: &str) -> QueryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// A keyword search runs only when both terms and fields are given
    pub fn search_requested(&self) -> bool {
        !self.search_terms.is_empty() && !self.search_fields.is_empty()
    }

    pub fn search<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldName>) -> Self {
        self.search_fields = fields.into_iter().collect();
        self
    }

    pub fn logic(mut self, logic: MatchLogic) -> Self {
        self.match_logic = logic;
        self
    }

    pub fn node_types(mut self, types: impl IntoIterator<Item = NodeType>) -> Self {
        self.allowed_node_types = types.into_iter().collect();
        self
    }

    pub fn edge_types(mut self, types: impl IntoIterator<Item = EdgeType>) -> Self {
        self.allowed_edge_types = types.into_iter().collect();
        self
    }

    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.allowed_categories = categories.into_iter().collect();
        self
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.expansion_depth = depth;
        self
    }

    pub fn max_neighbors_per_step(mut self, max: usize) -> Self {
        self.max_neighbors_per_step = max;
        self
    }

    pub fn max_total_nodes(mut self, max: usize) -> Self {
        self.max_total_nodes = max;
        self
    }

    pub fn ranking(mut self, mode: RankingMode) -> Self {
        self.ranking = mode;
        self
    }
}

impl Default for NetworkQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Untyped query as collected by a UI
///
/// List fields distinguish "absent" (`None`: use the configured default) from "present but
/// empty" (`Some([])`: block-all).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryRequest {
    pub search_terms: Vec<String>,
    pub search_fields: Option<Vec<String>>,
    pub match_logic: Option<String>,
    pub node_types: Option<Vec<String>>,
    pub edge_types: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub expansion_depth: Option<usize>,
    pub max_neighbors_per_step: Option<usize>,
    pub max_total_nodes: Option<usize>,
    pub ranking: Option<String>,
}

impl QueryRequest {
    pub fn from_json(json: &str) -> QueryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate against the closed enumerations and fill gaps from `config`.
    ///
    /// Search terms are trimmed and blank terms dropped. Any unknown type, category, field,
    /// match logic or ranking name rejects the whole request.
    pub fn validate(&self, config: &EngineConfig) -> QueryResult<NetworkQuery> {
        let mut query = config.base_query();

        query.search_terms = self
            .search_terms
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        if let Some(fields) = &self.search_fields {
            query.search_fields = parse_all(fields)?;
        }
        if let Some(types) = &self.node_types {
            query.allowed_node_types = parse_all(types)?;
        }
        if let Some(types) = &self.edge_types {
            query.allowed_edge_types = parse_all(types)?;
        }
        if let Some(categories) = &self.categories {
            query.allowed_categories = parse_all(categories)?;
        }
        if let Some(logic) = &self.match_logic {
            query.match_logic = logic.parse()?;
        }
        if let Some(mode) = &self.ranking {
            query.ranking = mode.parse()?;
        }

        if let Some(depth) = self.expansion_depth {
            if depth > config.max_expansion_depth {
                return Err(QueryError::DepthLimitExceeded {
                    requested: depth,
                    limit: config.max_expansion_depth,
                });
            }
            query.expansion_depth = depth;
        }
        if let Some(max) = self.max_neighbors_per_step {
            query.max_neighbors_per_step = max;
        }
        if let Some(max) = self.max_total_nodes {
            query.max_total_nodes = max;
        }

        Ok(query)
    }
}

fn parse_all<T>(values: &[String]) -> QueryResult<BTreeSet<T>>
where
    T: FromStr<Err = GraphError> + Ord,
{
    values
        .iter()
        .map(|v| v.parse::<T>().map_err(QueryError::from))
        .collect()
}
