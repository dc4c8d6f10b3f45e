//! Engine type tags as reported by `type_of()`

use std::fmt;

use serde_json::Value;

use super::term::Term;

/// Type tags returned by the query engine's `type_of` term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Array,
    Bool,
    Null,
    Number,
    Object,
    String,
}

impl TypeTag {
    /// Returns the tag string exactly as the engine reports it
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Array => "ARRAY",
            TypeTag::Bool => "BOOL",
            TypeTag::Null => "NULL",
            TypeTag::Number => "NUMBER",
            TypeTag::Object => "OBJECT",
            TypeTag::String => "STRING",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<TypeTag> for Term {
    fn from(tag: TypeTag) -> Self {
        Term::Datum(Value::String(tag.as_str().to_string()))
    }
}
