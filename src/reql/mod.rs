//! ReQL expression builder
//!
//! The compiler only ever builds terms through this module. It never
//! evaluates them; evaluation is the query engine's job.
//!
//! A term can be:
//! - rendered as text in the Python driver's style (`Display`)
//! - encoded in the engine's JSON wire format (`Term::to_wire`)

mod display;
pub mod r;
mod tag;
mod term;
mod wire;

pub(crate) use display::Literal;
pub use tag::TypeTag;
pub use term::{Comparison, Term, VarId};
pub use wire::TermType;
