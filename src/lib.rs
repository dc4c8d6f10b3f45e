//! reql-schema - compile JSON Schema documents into ReQL validation functions
//!
//! ```ignore
//! use reql_schema::compiler::{CompileOptions, Validator};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "title": "Person",
//!     "type": "object",
//!     "required": ["firstName", "lastName"],
//!     "properties": {
//!         "firstName": {"type": "string"},
//!         "lastName": {"type": "string"},
//!         "age": {"type": "integer", "minimum": 0}
//!     }
//! });
//!
//! let validator = Validator::compile(&schema, &CompileOptions::default())?;
//! println!("{}", validator);
//! ```

pub mod cli;
pub mod compiler;
pub mod observability;
pub mod reql;
pub mod schema;
