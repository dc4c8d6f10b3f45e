//! ReQL term tree
//!
//! Terms are immutable values. Every builder method consumes its receiver
//! and returns a new, larger term; nothing is shared or mutated in place.

use serde_json::Value;

/// Identifier of a function parameter (`var_1`, `var_2`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub u64);

impl VarId {
    /// The parameter bound to the candidate document
    pub const ROOT: VarId = VarId(1);
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Comparison {
    /// Returns the operator symbol used in the text rendering
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Eq => "==",
            Comparison::Ne => "!=",
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
        }
    }
}

/// A node of a ReQL expression
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Literal JSON value
    Datum(Value),
    /// Reference to a bound function parameter
    Var(VarId),
    /// `t[name]`
    GetField(Box<Term>, String),
    /// `t.has_fields(names...)`
    HasFields(Box<Term>, Vec<String>),
    /// `t.type_of()`
    TypeOf(Box<Term>),
    /// Binary comparison
    Compare(Comparison, Box<Term>, Box<Term>),
    /// Logical AND
    And(Box<Term>, Box<Term>),
    /// `r.branch(test, then, else)`
    Branch(Box<Term>, Box<Term>, Box<Term>),
    /// `r.error(message)`
    Error(String),
    /// `t.count()`
    Count(Box<Term>),
    /// `t.match(pattern)`
    Match(Box<Term>, String),
    /// `sequence.contains(value)`
    Contains(Box<Term>, Box<Term>),
    /// `t % divisor`
    Mod(Box<Term>, Box<Term>),
    /// `t.floor()`
    Floor(Box<Term>),
    /// One-or-more parameter function
    Func(Vec<VarId>, Box<Term>),
    /// `r.do(args..., func)`
    FunCall(Box<Term>, Vec<Term>),
}

impl Term {
    /// `self[name]`
    pub fn get_field(self, name: impl Into<String>) -> Term {
        Term::GetField(Box::new(self), name.into())
    }

    /// `self.has_fields(names...)`
    pub fn has_fields<I, S>(self, names: I) -> Term
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Term::HasFields(Box::new(self), names.into_iter().map(Into::into).collect())
    }

    pub fn type_of(self) -> Term {
        Term::TypeOf(Box::new(self))
    }

    pub fn eq(self, other: impl Into<Term>) -> Term {
        self.compare(Comparison::Eq, other)
    }

    pub fn ne(self, other: impl Into<Term>) -> Term {
        self.compare(Comparison::Ne, other)
    }

    pub fn lt(self, other: impl Into<Term>) -> Term {
        self.compare(Comparison::Lt, other)
    }

    pub fn le(self, other: impl Into<Term>) -> Term {
        self.compare(Comparison::Le, other)
    }

    pub fn gt(self, other: impl Into<Term>) -> Term {
        self.compare(Comparison::Gt, other)
    }

    pub fn ge(self, other: impl Into<Term>) -> Term {
        self.compare(Comparison::Ge, other)
    }

    fn compare(self, op: Comparison, other: impl Into<Term>) -> Term {
        Term::Compare(op, Box::new(self), Box::new(other.into()))
    }

    /// `self & other`
    pub fn and(self, other: impl Into<Term>) -> Term {
        Term::And(Box::new(self), Box::new(other.into()))
    }

    pub fn count(self) -> Term {
        Term::Count(Box::new(self))
    }

    /// `self.match(pattern)`; the engine returns null when nothing matches
    pub fn match_regex(self, pattern: impl Into<String>) -> Term {
        Term::Match(Box::new(self), pattern.into())
    }

    /// `self.contains(value)` where `self` is a sequence
    pub fn contains(self, value: impl Into<Term>) -> Term {
        Term::Contains(Box::new(self), Box::new(value.into()))
    }

    /// `self % divisor`
    pub fn modulo(self, divisor: impl Into<Term>) -> Term {
        Term::Mod(Box::new(self), Box::new(divisor.into()))
    }

    pub fn floor(self) -> Term {
        Term::Floor(Box::new(self))
    }

    /// Returns true if this term is the literal `true`
    pub fn is_true_datum(&self) -> bool {
        matches!(self, Term::Datum(Value::Bool(true)))
    }
}

impl From<Value> for Term {
    fn from(value: Value) -> Self {
        Term::Datum(value)
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::Datum(Value::Bool(value))
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Datum(Value::from(value))
    }
}

impl From<u64> for Term {
    fn from(value: u64) -> Self {
        Term::Datum(Value::from(value))
    }
}

impl From<serde_json::Number> for Term {
    fn from(value: serde_json::Number) -> Self {
        Term::Datum(Value::Number(value))
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Datum(Value::String(value.to_string()))
    }
}
