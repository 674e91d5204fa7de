//! Node records
//!
//! A node is a common core (id, display name, metadata) plus a payload keyed by node type.
//! Categorized types (forms, line items) carry their taxpayer category inside the payload;
//! category-agnostic types have no category slot at all.

use super::property::{PropertyMap, PropertyValue};
use super::types::{Category, FieldName, NodeId, NodeType};
use serde::{Deserialize, Serialize};

/// Type-specific part of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// A tax form, e.g. Form 1040
    Form {
        category: Category,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        full_name: Option<String>,
    },
    /// A numbered line on a form
    LineItem {
        category: Category,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        full_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// A section of the tax code
    Section {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        full_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// A Treasury regulation
    Regulation {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        full_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// A subject index term
    Index {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        definition: Option<String>,
    },
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Form { .. } => NodeType::Form,
            NodeKind::LineItem { .. } => NodeType::LineItem,
            NodeKind::Section { .. } => NodeType::Section,
            NodeKind::Regulation { .. } => NodeType::Regulation,
            NodeKind::Index { .. } => NodeType::Index,
        }
    }

    /// Category of a categorized node, `None` for category-agnostic kinds
    pub fn category(&self) -> Option<Category> {
        match self {
            NodeKind::Form { category, .. } | NodeKind::LineItem { category, .. } => Some(*category),
            NodeKind::Section { .. } | NodeKind::Regulation { .. } | NodeKind::Index { .. } => None,
        }
    }
}

/// A node in the tax-form network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Short display name, e.g. "1040" or "Line 1a"
    pub name: String,

    #[serde(flatten)]
    pub kind: NodeKind,

    /// Opaque display metadata (amounts, counts)
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub metadata: PropertyMap,
}

impl Node {
    /// Create a node whose id is derived from its kind and name
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        let name = name.into();
        let id = NodeId::compose(kind.node_type(), kind.category(), &name);
        Node {
            id,
            name,
            kind,
            metadata: PropertyMap::new(),
        }
    }

    pub fn form(category: Category, name: impl Into<String>) -> Self {
        Node::new(name, NodeKind::Form { category, full_name: None })
    }

    pub fn line_item(category: Category, name: impl Into<String>) -> Self {
        Node::new(name, NodeKind::LineItem { category, full_name: None, text: None })
    }

    pub fn section(name: impl Into<String>) -> Self {
        Node::new(name, NodeKind::Section { full_name: None, text: None })
    }

    pub fn regulation(name: impl Into<String>) -> Self {
        Node::new(name, NodeKind::Regulation { full_name: None, text: None })
    }

    pub fn index(name: impl Into<String>) -> Self {
        Node::new(name, NodeKind::Index { definition: None })
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set the full name on kinds that have one; other kinds are returned unchanged
    pub fn with_full_name(mut self, value: impl Into<String>) -> Self {
        match &mut self.kind {
            NodeKind::Form { full_name, .. }
            | NodeKind::LineItem { full_name, .. }
            | NodeKind::Section { full_name, .. }
            | NodeKind::Regulation { full_name, .. } => *full_name = Some(value.into()),
            NodeKind::Index { .. } => {}
        }
        self
    }

    /// Set the free text on kinds that have one; other kinds are returned unchanged
    pub fn with_text(mut self, value: impl Into<String>) -> Self {
        match &mut self.kind {
            NodeKind::LineItem { text, .. }
            | NodeKind::Section { text, .. }
            | NodeKind::Regulation { text, .. } => *text = Some(value.into()),
            NodeKind::Form { .. } | NodeKind::Index { .. } => {}
        }
        self
    }

    /// Set the definition of an index term; other kinds are returned unchanged
    pub fn with_definition(mut self, value: impl Into<String>) -> Self {
        if let NodeKind::Index { definition } = &mut self.kind {
            *definition = Some(value.into());
        }
        self
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    pub fn category(&self) -> Option<Category> {
        self.kind.category()
    }

    /// Value of a searchable field, `None` when this kind has no such field or it is unset
    pub fn field(&self, field: FieldName) -> Option<&str> {
        match (field, &self.kind) {
            (FieldName::Name, _) => Some(self.name.as_str()),
            (
                FieldName::FullName,
                NodeKind::Form { full_name, .. }
                | NodeKind::LineItem { full_name, .. }
                | NodeKind::Section { full_name, .. }
                | NodeKind::Regulation { full_name, .. },
            ) => full_name.as_deref(),
            (FieldName::Definition, NodeKind::Index { definition }) => definition.as_deref(),
            (
                FieldName::Text,
                NodeKind::LineItem { text, .. }
                | NodeKind::Section { text, .. }
                | NodeKind::Regulation { text, .. },
            ) => text.as_deref(),
            _ => None,
        }
    }

    /// Get a metadata value
    pub fn get_metadata(&self, key: &str) -> Option<&PropertyValue> {
        self.metadata.get(key)
    }
}
