//! JSON Schema to ReQL compiler
//!
//! ```ignore
//! use reql_schema::compiler::{CompileOptions, Validator};
//!
//! let validator = Validator::compile(&schema, &CompileOptions::default())?;
//! println!("{}", validator);
//! ```
//!
//! # Keyword table
//!
//! | Keyword | Test |
//! |---|---|
//! | `required` | `is(OBJECT) & v.has_fields(f1, ..)` |
//! | `type` | `v.type_of() == TAG` (integers also `v.floor() == v`) |
//! | `enum` | `r.expr([..]).contains(v)` |
//! | `minimum` / `maximum` | `v > m` / `v < m` |
//! | `multipleOf` | `is(NUMBER) & (v.floor() == v) & ((v % n) == 0)` |
//! | `minLength` / `maxLength` | `is(STRING) & (v.count() >= n)` / `<= n` |
//! | `pattern` | `is(STRING) & (v.match(p) != None)` |
//! | `minProperties` / `maxProperties` | `is(OBJECT) & (v.count() >= n)` / `<= n` |
//! | `minItems` / `maxItems` | `is(ARRAY) & (v.count() >= n)` / `<= n` |
//! | `properties` | `r.branch(is(OBJECT) & v.has_fields(p), <sub>, True)` |
//!
//! `is(TAG)` stands for `(v.type_of() == TAG)`. Type-specific terms only run
//! after it, so a document of the wrong type yields `false` or the keyword's
//! error, never an engine error.

#[allow(clippy::module_inception)]
mod compiler;
mod options;
mod validator;

pub use compiler::{Compiler, Keyword};
pub use options::{CompileOptions, ValidationMode};
pub use validator::Validator;

use serde_json::Value;

use crate::reql::Term;
use crate::schema::{SchemaNode, SchemaResult};

/// Parses `schema` and compiles it against `variable` in raise mode.
///
/// # Errors
///
/// Returns `SchemaError` if the schema is malformed.
pub fn compile(schema: &Value, variable: Term, title: &str) -> SchemaResult<Term> {
    let node = SchemaNode::parse(schema)?;
    Ok(Compiler::default().compile(&node, variable, title))
}
