//! Single-argument validator functions

use std::fmt;

use serde_json::Value;

use crate::observability::Logger;
use crate::reql::{r, Term, VarId};
use crate::schema::{SchemaNode, SchemaResult};

use super::compiler::Compiler;
use super::options::CompileOptions;

/// A compiled schema: `lambda var_1: <checks on var_1>`
///
/// Hand it to the query engine as a filter, or apply it to a document term
/// with [`Validator::call`].
#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    func: Term,
}

impl Validator {
    /// Compiles an already parsed schema
    pub fn from_node(schema: &SchemaNode, options: &CompileOptions) -> Self {
        let compiler = Compiler::new(options.mode);
        let body = compiler.compile(schema, r::var(VarId::ROOT), &options.root_title);

        Logger::info(
            "SCHEMA_COMPILED",
            &[
                ("mode", options.mode.as_str()),
                ("nodes", &schema.node_count().to_string()),
                ("title", schema.title.as_deref().unwrap_or(&options.root_title)),
            ],
        );

        Self {
            func: r::func(vec![VarId::ROOT], body),
        }
    }

    /// Parses and compiles a JSON schema document
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the schema is malformed. Nothing is built in
    /// that case.
    pub fn compile(schema: &Value, options: &CompileOptions) -> SchemaResult<Self> {
        let node = SchemaNode::parse(schema)?;
        Ok(Self::from_node(&node, options))
    }

    /// The function term
    pub fn as_term(&self) -> &Term {
        &self.func
    }

    pub fn into_term(self) -> Term {
        self.func
    }

    /// The compiled checks, with `var_1` bound to the candidate document
    pub fn body(&self) -> &Term {
        match &self.func {
            Term::Func(_, body) => body,
            other => other,
        }
    }

    /// `r.do(document, validator)`
    pub fn call(&self, document: impl Into<Term>) -> Term {
        r::do_(vec![document.into()], self.func.clone())
    }

    /// Wire encoding of the function term
    pub fn to_wire(&self) -> Value {
        self.func.to_wire()
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.func)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::ValidationMode;
    use serde_json::json;

    #[test]
    fn test_validator_is_single_argument_function() {
        let validator = Validator::compile(&json!({"type": "string"}), &CompileOptions::default())
            .unwrap();

        match validator.as_term() {
            Term::Func(params, _) => assert_eq!(params, &vec![VarId::ROOT]),
            other => panic!("expected a function, got {:?}", other),
        }
        assert_eq!(
            validator.to_string(),
            "lambda var_1: r.branch((var_1.type_of() == 'STRING'), True, \
             r.error('root must be of type string'))"
        );
    }

    #[test]
    fn test_body_strips_function() {
        let options = CompileOptions::default().with_mode(ValidationMode::Boolean);
        let validator = Validator::compile(&json!({"type": "null"}), &options).unwrap();
        assert_eq!(validator.body().to_string(), "(var_1.type_of() == 'NULL')");
    }

    #[test]
    fn test_call_wraps_in_do() {
        let options = CompileOptions::default().with_mode(ValidationMode::Boolean);
        let validator = Validator::compile(&json!({}), &options).unwrap();
        assert_eq!(validator.call(json!(5)).to_string(), "r.do(5, lambda var_1: True)");
    }

    #[test]
    fn test_root_title_option() {
        let options = CompileOptions::default().with_root_title("Document");
        let validator = Validator::compile(&json!({"type": "object"}), &options).unwrap();
        assert!(validator
            .to_string()
            .contains("Document must be of type object"));
    }

    #[test]
    fn test_malformed_schema_builds_nothing() {
        let result = Validator::compile(&json!({"type": "decimal"}), &CompileOptions::default());
        assert_eq!(result.unwrap_err().code(), "SCHEMA_UNKNOWN_TYPE");
    }

    #[test]
    fn test_wire_is_func_term() {
        let validator = Validator::compile(&json!({}), &CompileOptions::default()).unwrap();
        assert_eq!(validator.to_wire(), json!([69, [[2, [1]], true]]));
    }
}
