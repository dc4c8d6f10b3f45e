//! JSON Schema model
//!
//! Schemas arrive as `serde_json::Value` and are parsed once into a typed
//! `SchemaNode` tree. All structural checks happen during parsing:
//!
//! - Every schema node is a JSON object
//! - `type` names one of the supported types
//! - `required` entries are strings
//! - Numeric keywords carry numbers of the right range
//! - `pattern` is a valid regular expression

mod errors;
mod parser;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use types::{SchemaNode, SchemaPath, SchemaType};
