//! Top-level term constructors, named after the driver's `r` namespace
//!
//! ```ignore
//! use reql_schema::reql::r;
//!
//! let check = r::branch(r::var(VarId::ROOT).has_fields(["name"]), true, r::error("missing name"));
//! ```

use serde_json::Value;

use super::term::{Term, VarId};

/// Wraps a JSON value as a literal term
pub fn expr(value: impl Into<Value>) -> Term {
    Term::Datum(value.into())
}

pub fn var(id: VarId) -> Term {
    Term::Var(id)
}

/// `r.branch(test, then, otherwise)`
pub fn branch(test: impl Into<Term>, then: impl Into<Term>, otherwise: impl Into<Term>) -> Term {
    Term::Branch(
        Box::new(test.into()),
        Box::new(then.into()),
        Box::new(otherwise.into()),
    )
}

/// `r.error(message)`; aborts evaluation with a user error
pub fn error(message: impl Into<String>) -> Term {
    Term::Error(message.into())
}

/// A function term binding `params` inside `body`
pub fn func(params: Vec<VarId>, body: Term) -> Term {
    Term::Func(params, Box::new(body))
}

/// `r.do(args..., f)`: applies `f` to `args`
pub fn do_(args: Vec<Term>, f: Term) -> Term {
    Term::FunCall(Box::new(f), args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_branch_boxes_arguments() {
        let term = branch(true, expr(1), error("boom"));
        assert_eq!(
            term,
            Term::Branch(
                Box::new(Term::Datum(json!(true))),
                Box::new(Term::Datum(json!(1))),
                Box::new(Term::Error("boom".into())),
            )
        );
    }

    #[test]
    fn test_do_puts_function_first() {
        let f = func(vec![VarId::ROOT], var(VarId::ROOT));
        let call = do_(vec![expr(json!({"a": 1}))], f.clone());
        assert_eq!(call, Term::FunCall(Box::new(f), vec![Term::Datum(json!({"a": 1}))]));
    }
}
