//! Observability for the schema compiler
//!
//! - Structured logging (JSON lines on stderr)
//! - Begin/complete scopes around CLI operations
//!
//! ```ignore
//! use reql_schema::observability::{Logger, ObservationScope, Severity};
//!
//! Logger::set_level(Severity::Trace);
//! Logger::trace("SCHEMA_KEYWORD_IGNORED", &[("keyword", "anyOf"), ("path", "$root")]);
//! ```

mod logger;
mod scope;

pub use logger::{Logger, Severity};
pub use scope::ObservationScope;
