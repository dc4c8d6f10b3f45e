//! JSON wire encoding of terms
//!
//! A compound term is `[TERM_TYPE, [args...]]`. Arrays inside datums are
//! rewritten as `MAKE_ARRAY` terms because a bare JSON array on the wire
//! would be read as a term.

use serde_json::{json, Map, Value};

use super::term::{Comparison, Term, VarId};

/// Term type codes understood by the query engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermType {
    MakeArray,
    Var,
    Error,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Mod,
    GetField,
    HasFields,
    Count,
    TypeOf,
    FunCall,
    Branch,
    And,
    Func,
    Contains,
    Match,
    Floor,
}

impl TermType {
    /// Returns the numeric code of this term type
    pub fn code(&self) -> u64 {
        match self {
            TermType::MakeArray => 2,
            TermType::Var => 10,
            TermType::Error => 12,
            TermType::Eq => 17,
            TermType::Ne => 18,
            TermType::Lt => 19,
            TermType::Le => 20,
            TermType::Gt => 21,
            TermType::Ge => 22,
            TermType::Mod => 28,
            TermType::GetField => 31,
            TermType::HasFields => 32,
            TermType::Count => 43,
            TermType::TypeOf => 52,
            TermType::FunCall => 64,
            TermType::Branch => 65,
            TermType::And => 67,
            TermType::Func => 69,
            TermType::Contains => 93,
            TermType::Match => 97,
            TermType::Floor => 183,
        }
    }
}

impl From<Comparison> for TermType {
    fn from(op: Comparison) -> Self {
        match op {
            Comparison::Eq => TermType::Eq,
            Comparison::Ne => TermType::Ne,
            Comparison::Lt => TermType::Lt,
            Comparison::Le => TermType::Le,
            Comparison::Gt => TermType::Gt,
            Comparison::Ge => TermType::Ge,
        }
    }
}

impl Term {
    /// Encodes this term in the engine's JSON wire format
    pub fn to_wire(&self) -> Value {
        match self {
            Term::Datum(value) => encode_datum(value),
            Term::Var(id) => compound(TermType::Var, vec![var_id(*id)]),
            Term::GetField(target, name) => {
                compound(TermType::GetField, vec![target.to_wire(), json!(name)])
            }
            Term::HasFields(target, names) => {
                let mut args = Vec::with_capacity(names.len() + 1);
                args.push(target.to_wire());
                args.extend(names.iter().map(|n| json!(n)));
                compound(TermType::HasFields, args)
            }
            Term::TypeOf(target) => compound(TermType::TypeOf, vec![target.to_wire()]),
            Term::Compare(op, lhs, rhs) => {
                compound(TermType::from(*op), vec![lhs.to_wire(), rhs.to_wire()])
            }
            Term::And(lhs, rhs) => compound(TermType::And, vec![lhs.to_wire(), rhs.to_wire()]),
            Term::Branch(test, then, otherwise) => compound(
                TermType::Branch,
                vec![test.to_wire(), then.to_wire(), otherwise.to_wire()],
            ),
            Term::Error(message) => compound(TermType::Error, vec![json!(message)]),
            Term::Count(target) => compound(TermType::Count, vec![target.to_wire()]),
            Term::Match(target, pattern) => {
                compound(TermType::Match, vec![target.to_wire(), json!(pattern)])
            }
            Term::Contains(sequence, value) => {
                compound(TermType::Contains, vec![sequence.to_wire(), value.to_wire()])
            }
            Term::Mod(lhs, rhs) => compound(TermType::Mod, vec![lhs.to_wire(), rhs.to_wire()]),
            Term::Floor(target) => compound(TermType::Floor, vec![target.to_wire()]),
            Term::Func(params, body) => {
                let ids = compound(
                    TermType::MakeArray,
                    params.iter().map(|id| var_id(*id)).collect(),
                );
                compound(TermType::Func, vec![ids, body.to_wire()])
            }
            Term::FunCall(func, args) => {
                let mut encoded = Vec::with_capacity(args.len() + 1);
                encoded.push(func.to_wire());
                encoded.extend(args.iter().map(Term::to_wire));
                compound(TermType::FunCall, encoded)
            }
        }
    }
}

fn compound(term_type: TermType, args: Vec<Value>) -> Value {
    json!([term_type.code(), args])
}

fn var_id(id: VarId) -> Value {
    json!(id.0)
}

fn encode_datum(value: &Value) -> Value {
    match value {
        Value::Array(items) => compound(
            TermType::MakeArray,
            items.iter().map(encode_datum).collect(),
        ),
        Value::Object(map) => {
            let encoded: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), encode_datum(v)))
                .collect();
            Value::Object(encoded)
        }
        scalar => scalar.clone(),
    }
}
