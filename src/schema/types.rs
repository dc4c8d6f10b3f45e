//! Typed schema tree
//!
//! Supported types:
//! - object, string, integer, number, boolean, array, null
//!
//! Property order follows the parsed JSON object's key order.

use std::fmt;

use serde_json::{Number, Value};

use crate::reql::TypeTag;

/// The `type` keyword's closed set of names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl SchemaType {
    /// Parses a `type` name; `None` when the name is not recognized
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "array" => Some(SchemaType::Array),
            "boolean" => Some(SchemaType::Boolean),
            "integer" => Some(SchemaType::Integer),
            "null" => Some(SchemaType::Null),
            "number" => Some(SchemaType::Number),
            "object" => Some(SchemaType::Object),
            "string" => Some(SchemaType::String),
            _ => None,
        }
    }

    /// Returns the type name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            SchemaType::Array => "array",
            SchemaType::Boolean => "boolean",
            SchemaType::Integer => "integer",
            SchemaType::Null => "null",
            SchemaType::Number => "number",
            SchemaType::Object => "object",
            SchemaType::String => "string",
        }
    }

    /// Engine type tag reported by `type_of()` for values of this type.
    /// Integers share the NUMBER tag; integrality is checked separately.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            SchemaType::Array => TypeTag::Array,
            SchemaType::Boolean => TypeTag::Bool,
            SchemaType::Integer => TypeTag::Number,
            SchemaType::Null => TypeTag::Null,
            SchemaType::Number => TypeTag::Number,
            SchemaType::Object => TypeTag::Object,
            SchemaType::String => TypeTag::String,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Property names leading from the root schema to a nested node
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SchemaPath(Vec<String>);

impl SchemaPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns a new path one property deeper
    pub fn child(&self, property: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(property.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$root")?;
        for segment in &self.0 {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}

/// One node of a parsed schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    /// Name used in failure messages
    pub title: Option<String>,
    pub schema_type: Option<SchemaType>,
    /// Fields that must be present
    pub required: Vec<String>,
    pub enum_values: Option<Vec<Value>>,
    pub minimum: Option<Number>,
    pub maximum: Option<Number>,
    /// Positive integer divisor
    pub multiple_of: Option<u64>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub min_properties: Option<u64>,
    pub max_properties: Option<u64>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    /// Nested schemas, checked only when the field is present
    pub properties: Vec<(String, SchemaNode)>,
}

impl SchemaNode {
    /// Creates a node constraining only the type
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    /// Looks up a nested property schema by name
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties
            .iter()
            .find(|(prop, _)| prop == name)
            .map(|(_, node)| node)
    }

    /// Counts this node and every nested property node
    pub fn node_count(&self) -> usize {
        1 + self
            .properties
            .iter()
            .map(|(_, node)| node.node_count())
            .sum::<usize>()
    }
}

/// Returns the JSON Schema type name of a value for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
