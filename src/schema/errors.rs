//! Schema compile errors
//!
//! Error codes:
//! - SCHEMA_NOT_AN_OBJECT
//! - SCHEMA_UNKNOWN_TYPE
//! - SCHEMA_REQUIRED_NOT_STRING
//! - SCHEMA_INVALID_KEYWORD
//! - SCHEMA_INVALID_PATTERN
//!
//! Every error carries the path of the offending node. Compilation stops at
//! the first error; no partial term is ever returned.

use thiserror::Error;

use super::types::SchemaPath;

/// Result type for schema parsing and compilation
pub type SchemaResult<T> = Result<T, SchemaError>;

/// A structurally invalid schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("schema at {path} must be an object, found {found}")]
    NotAnObject { path: SchemaPath, found: &'static str },

    #[error("schema at {path} has unrecognized type '{name}'")]
    UnknownType { path: SchemaPath, name: String },

    #[error("'required' entry {index} at {path} must be a string, found {found}")]
    RequiredNotString {
        path: SchemaPath,
        index: usize,
        found: &'static str,
    },

    #[error("keyword '{keyword}' at {path} must be {expected}, found {found}")]
    InvalidKeyword {
        path: SchemaPath,
        keyword: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("pattern '{pattern}' at {path} is not a valid regular expression: {reason}")]
    InvalidPattern {
        path: SchemaPath,
        pattern: String,
        reason: String,
    },
}

impl SchemaError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::NotAnObject { .. } => "SCHEMA_NOT_AN_OBJECT",
            SchemaError::UnknownType { .. } => "SCHEMA_UNKNOWN_TYPE",
            SchemaError::RequiredNotString { .. } => "SCHEMA_REQUIRED_NOT_STRING",
            SchemaError::InvalidKeyword { .. } => "SCHEMA_INVALID_KEYWORD",
            SchemaError::InvalidPattern { .. } => "SCHEMA_INVALID_PATTERN",
        }
    }

    /// Returns the path of the node that failed
    pub fn path(&self) -> &SchemaPath {
        match self {
            SchemaError::NotAnObject { path, .. }
            | SchemaError::UnknownType { path, .. }
            | SchemaError::RequiredNotString { path, .. }
            | SchemaError::InvalidKeyword { path, .. }
            | SchemaError::InvalidPattern { path, .. } => path,
        }
    }
}
