//! Core type definitions for the tax-form graph
//!
//! Node types, categories, edge types and searchable field names are closed enumerations.
//! Their string forms (snake_case) are what node ids and untyped query requests use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when turning strings into graph identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown edge type: {0}")]
    UnknownEdgeType(String),

    #[error("Unknown search field: {0}")]
    UnknownField(String),

    #[error("Malformed node id: {0}")]
    MalformedNodeId(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Generates the string table, `Display` and `FromStr` for a closed enumeration.
macro_rules! closed_enum {
    ($name:ident, $err:ident, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// Every member, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = GraphError;

            fn from_str(s: &str) -> GraphResult<Self> {
                let key = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(key))
                    .ok_or_else(|| GraphError::$err(s.to_string()))
            }
        }
    };
}

/// Kind of node in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Form,
    LineItem,
    Section,
    Regulation,
    Index,
}

closed_enum!(NodeType, UnknownNodeType, {
    Form => "form",
    LineItem => "line_item",
    Section => "section",
    Regulation => "regulation",
    Index => "index",
});

impl NodeType {
    /// Whether nodes of this type never carry a taxpayer category
    pub fn is_category_agnostic(&self) -> bool {
        matches!(self, NodeType::Section | NodeType::Regulation | NodeType::Index)
    }
}

/// Taxpayer category a form or line item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Individual,
    Corporation,
    Partnership,
    SCorporation,
}

closed_enum!(Category, UnknownCategory, {
    Individual => "individual",
    Corporation => "corporation",
    Partnership => "partnership",
    SCorporation => "s_corporation",
});

/// Relationship type (e.g., a form citing a code section)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    FormLine,
    CitesSection,
    CitesRegulation,
    CitesForm,
    IndexEntry,
}

closed_enum!(EdgeType, UnknownEdgeType, {
    FormLine => "form_line",
    CitesSection => "cites_section",
    CitesRegulation => "cites_regulation",
    CitesForm => "cites_form",
    IndexEntry => "index_entry",
});

/// Searchable text field of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    FullName,
    Definition,
    Text,
}

closed_enum!(FieldName, UnknownField, {
    Name => "name",
    FullName => "full_name",
    Definition => "definition",
    Text => "text",
});

/// Globally unique node identifier of the form `{type}:{category?}:{name}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// Build the canonical id for a node. The category is dropped for category-agnostic types.
    pub fn compose(node_type: NodeType, category: Option<Category>, name: &str) -> Self {
        match category {
            Some(category) if !node_type.is_category_agnostic() => {
                NodeId(format!("{}:{}:{}", node_type, category, name))
            }
            _ => NodeId(format!("{}:{}", node_type, name)),
        }
    }

    /// Split a canonical id back into type, category and name.
    ///
    /// The name is everything after the last structural separator, so names may contain `:`.
    pub fn parts(&self) -> GraphResult<(NodeType, Option<Category>, &str)> {
        let malformed = || GraphError::MalformedNodeId(self.0.clone());

        let (type_str, rest) = self.0.split_once(':').ok_or_else(malformed)?;
        let node_type: NodeType = type_str.parse()?;

        if node_type.is_category_agnostic() {
            return Ok((node_type, None, rest));
        }

        let (category_str, name) = rest.split_once(':').ok_or_else(malformed)?;
        let category: Category = category_str.parse()?;
        Ok((node_type, Some(category), name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl std::borrow::Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
