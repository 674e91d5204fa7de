//! Engine configuration
//!
//! Defaults for the query knobs a UI leaves unset, plus the upper bound on expansion depth.
//! Loaded from YAML; every field is optional in the file.

use crate::graph::{Category, EdgeType, FieldName, NodeType};
use crate::query::{MatchLogic, NetworkQuery, RankingMode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Node budget for a result
    pub max_total_nodes: usize,
    /// Per-node, per-layer neighbor cap during expansion
    pub max_neighbors_per_step: usize,
    /// Depth used when a request does not specify one
    pub expansion_depth: usize,
    /// Largest depth a request may ask for
    pub max_expansion_depth: usize,
    pub match_logic: MatchLogic,
    pub ranking: RankingMode,
    /// Fields searched when a request does not name any
    pub search_fields: Vec<FieldName>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_total_nodes: 500,
            max_neighbors_per_step: 25,
            expansion_depth: 1,
            max_expansion_depth: 4,
            match_logic: MatchLogic::Or,
            ranking: RankingMode::Global,
            search_fields: vec![FieldName::Name, FieldName::FullName],
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        info!("Loaded engine config from {:?}", path);
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> ConfigResult<()> {
        if self.expansion_depth > self.max_expansion_depth {
            return Err(ConfigError::Invalid(format!(
                "expansion_depth {} exceeds max_expansion_depth {}",
                self.expansion_depth, self.max_expansion_depth
            )));
        }
        Ok(())
    }

    /// A query with no search terms, every type and category allowed, and this config's knobs
    pub fn base_query(&self) -> NetworkQuery {
        NetworkQuery {
            search_terms: Default::default(),
            search_fields: self.search_fields.iter().copied().collect(),
            match_logic: self.match_logic,
            allowed_node_types: NodeType::ALL.iter().copied().collect(),
            allowed_edge_types: EdgeType::ALL.iter().copied().collect(),
            allowed_categories: Category::ALL.iter().copied().collect(),
            expansion_depth: self.expansion_depth,
            max_neighbors_per_step: self.max_neighbors_per_step,
            max_total_nodes: self.max_total_nodes,
            ranking: self.ranking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = EngineConfig::from_yaml_str("max_total_nodes: 50\nranking: subgraph\n").unwrap();

        assert_eq!(config.max_total_nodes, 50);
        assert_eq!(config.ranking, RankingMode::Subgraph);
        assert_eq!(config.max_neighbors_per_step, EngineConfig::default().max_neighbors_per_step);
    }

    #[test]
    fn test_unknown_enum_in_yaml() {
        let err = EngineConfig::from_yaml_str("search_fields: [name, title]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_depth_above_limit() {
        let err = EngineConfig::from_yaml_str("expansion_depth: 9\nmax_expansion_depth: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "expansion_depth: 2").unwrap();
        writeln!(file, "search_fields: [definition]").unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.expansion_depth, 2);
        assert_eq!(config.search_fields, vec![FieldName::Definition]);

        let query = config.base_query();
        assert_eq!(query.expansion_depth, 2);
        assert!(query.search_fields.contains(&FieldName::Definition));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/nonexistent/taxnet.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
