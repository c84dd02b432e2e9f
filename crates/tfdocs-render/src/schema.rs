//! Schema and function signature data model.
//!
//! These types mirror the JSON emitted for provider schemas. The renderer only
//! reads a handful of fields itself (descriptions, the variadic parameter); the
//! rest is handed through untouched to the Markdown collaborators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The schema of a provider, resource or data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub block: SchemaBlock,
}

/// A block of attributes and nested blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaBlock {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, SchemaAttribute>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub block_types: BTreeMap<String, SchemaBlockType>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_kind: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

/// A single attribute of a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaAttribute {
    /// Type expression, kept in its JSON form (`"string"`, `["list","number"]`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<serde_json::Value>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_kind: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub deprecated: bool,
}

/// A nested block type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaBlockType {
    pub nesting_mode: String,
    #[serde(default)]
    pub block: SchemaBlock,
    #[serde(default)]
    pub min_items: u64,
    #[serde(default)]
    pub max_items: u64,
}

/// Signature of a provider-defined function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionSignature {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<serde_json::Value>,
    #[serde(default)]
    pub parameters: Vec<FunctionParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variadic_parameter: Option<FunctionParameter>,
}

impl FunctionSignature {
    pub fn has_variadic(&self) -> bool {
        self.variadic_parameter.is_some()
    }
}

/// A positional or variadic parameter of a function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionParameter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<serde_json::Value>,
    #[serde(default)]
    pub is_nullable: bool,
}
