//! Reference interpreter for compiled terms
//!
//! Stands in for the query engine in integration tests. Only the terms the
//! compiler emits are supported, with the engine's observable semantics:
//! - `has_fields` is false for null-valued fields
//! - `and` and `branch` short-circuit
//! - `r.error` aborts with a user error carrying its message
//! - `%` accepts integral operands only
//! - values of different types are ordered by type name

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;

use regex::Regex;
use reql_schema::compiler::{CompileOptions, ValidationMode, Validator};
use reql_schema::reql::{r, Comparison, Term, VarId};
use serde_json::{json, Value};

/// Evaluation failure
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Raised by `r.error`
    User(String),
    /// Raised by the engine itself (bad argument types, missing fields)
    Engine(String),
}

type Env = HashMap<VarId, Value>;

/// Evaluates a closed term
pub fn run(term: &Term) -> Result<Value, EvalError> {
    eval(term, &Env::new())
}

/// Evaluates `validator` with `document` bound to its parameter
pub fn check(validator: &Validator, document: Value) -> Result<Value, EvalError> {
    run(&validator.call(r::expr(document)))
}

pub fn compile(schema: Value, mode: ValidationMode) -> Validator {
    let options = CompileOptions::default().with_mode(mode);
    Validator::compile(&schema, &options).unwrap()
}

/// Asserts the document passes in both modes and yields exactly `true`
pub fn assert_valid(schema: Value, document: Value) {
    for mode in [ValidationMode::Raise, ValidationMode::Boolean] {
        let validator = compile(schema.clone(), mode);
        assert_eq!(
            check(&validator, document.clone()),
            Ok(json!(true)),
            "mode {:?}, document {}",
            mode,
            document
        );
    }
}

/// Asserts the document yields `false` in boolean mode and raises a user
/// error containing `fragment` in raise mode
pub fn assert_invalid(schema: Value, document: Value, fragment: &str) {
    let boolean = compile(schema.clone(), ValidationMode::Boolean);
    assert_eq!(
        check(&boolean, document.clone()),
        Ok(json!(false)),
        "boolean mode, document {}",
        document
    );

    let raise = compile(schema, ValidationMode::Raise);
    match check(&raise, document.clone()) {
        Err(EvalError::User(message)) => assert!(
            message.contains(fragment),
            "message {:?} lacks {:?}",
            message,
            fragment
        ),
        other => panic!("expected user error for {}, got {:?}", document, other),
    }
}

fn eval(term: &Term, env: &Env) -> Result<Value, EvalError> {
    match term {
        Term::Datum(value) => Ok(value.clone()),
        Term::Var(id) => env
            .get(id)
            .cloned()
            .ok_or_else(|| engine(format!("unbound variable var_{}", id.0))),
        Term::GetField(target, name) => {
            let value = eval(target, env)?;
            let obj = value
                .as_object()
                .ok_or_else(|| engine(format!("cannot get field of {}", value)))?;
            obj.get(name)
                .cloned()
                .ok_or_else(|| engine(format!("No attribute `{}`", name)))
        }
        Term::HasFields(target, names) => {
            let value = eval(target, env)?;
            let obj = value
                .as_object()
                .ok_or_else(|| engine(format!("cannot call has_fields on {}", value)))?;
            Ok(Value::Bool(names.iter().all(|name| {
                obj.get(name).map_or(false, |field| !field.is_null())
            })))
        }
        Term::TypeOf(target) => Ok(json!(type_tag(&eval(target, env)?))),
        Term::Compare(op, lhs, rhs) => {
            let lhs = eval(lhs, env)?;
            let rhs = eval(rhs, env)?;
            compare(*op, &lhs, &rhs).map(Value::Bool)
        }
        Term::And(lhs, rhs) => {
            if !truthy(&eval(lhs, env)?) {
                return Ok(Value::Bool(false));
            }
            eval(rhs, env)
        }
        Term::Branch(test, then, otherwise) => {
            if truthy(&eval(test, env)?) {
                eval(then, env)
            } else {
                eval(otherwise, env)
            }
        }
        Term::Error(message) => Err(EvalError::User(message.clone())),
        Term::Count(target) => match eval(target, env)? {
            Value::String(s) => Ok(json!(s.chars().count())),
            Value::Array(items) => Ok(json!(items.len())),
            Value::Object(map) => Ok(json!(map.len())),
            other => Err(engine(format!("cannot count {}", other))),
        },
        Term::Match(target, pattern) => {
            let value = eval(target, env)?;
            let s = value
                .as_str()
                .ok_or_else(|| engine(format!("cannot match on {}", value)))?;
            let re = Regex::new(pattern).map_err(|e| engine(e.to_string()))?;
            Ok(match re.find(s) {
                Some(m) => json!({"str": m.as_str(), "start": m.start(), "end": m.end()}),
                None => Value::Null,
            })
        }
        Term::Contains(sequence, value) => {
            let sequence = eval(sequence, env)?;
            let value = eval(value, env)?;
            let items = sequence
                .as_array()
                .ok_or_else(|| engine(format!("cannot call contains on {}", sequence)))?;
            Ok(Value::Bool(items.iter().any(|item| values_equal(item, &value))))
        }
        Term::Mod(lhs, rhs) => {
            let a = integer(&eval(lhs, env)?)?;
            let b = integer(&eval(rhs, env)?)?;
            if b == 0 {
                return Err(engine("cannot divide by zero".to_string()));
            }
            Ok(json!(a % b))
        }
        Term::Floor(target) => Ok(json!(number(&eval(target, env)?)?.floor())),
        Term::Func(..) => Err(engine("cannot evaluate a bare function".to_string())),
        Term::FunCall(func, args) => {
            let (params, body) = match func.as_ref() {
                Term::Func(params, body) => (params, body),
                other => return Err(engine(format!("not a function: {}", other))),
            };
            if params.len() != args.len() {
                return Err(engine("wrong number of arguments".to_string()));
            }
            let mut scope = env.clone();
            for (id, arg) in params.iter().zip(args) {
                scope.insert(*id, eval(arg, env)?);
            }
            eval(body, &scope)
        }
    }
}

fn engine(message: String) -> EvalError {
    EvalError::Engine(message)
}

fn truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

fn type_tag(value: &Value) -> &'static str {
    match value {
        Value::Null => "NULL",
        Value::Bool(_) => "BOOL",
        Value::Number(_) => "NUMBER",
        Value::String(_) => "STRING",
        Value::Array(_) => "ARRAY",
        Value::Object(_) => "OBJECT",
    }
}

fn number(value: &Value) -> Result<f64, EvalError> {
    value
        .as_f64()
        .ok_or_else(|| engine(format!("expected NUMBER, got {}", value)))
}

fn integer(value: &Value) -> Result<i64, EvalError> {
    let n = number(value)?;
    if n.fract() != 0.0 {
        return Err(engine(format!("number not an integer: {}", value)));
    }
    Ok(n as i64)
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

fn compare(op: Comparison, lhs: &Value, rhs: &Value) -> Result<bool, EvalError> {
    let ordering = order(lhs, rhs);
    Ok(match op {
        Comparison::Eq => values_equal(lhs, rhs),
        Comparison::Ne => !values_equal(lhs, rhs),
        Comparison::Lt => ordering.is_lt(),
        Comparison::Le => ordering.is_le(),
        Comparison::Gt => ordering.is_gt(),
        Comparison::Ge => ordering.is_ge(),
    })
}

/// Total order over values: by type tag name first
/// (ARRAY < BOOL < NULL < NUMBER < OBJECT < STRING), then by content
fn order(lhs: &Value, rhs: &Value) -> Ordering {
    let by_type = type_tag(lhs).cmp(type_tag(rhs));
    if by_type.is_ne() {
        return by_type;
    }

    match (lhs, rhs) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .zip(b.as_f64())
            .and_then(|(a, b)| a.partial_cmp(&b))
            .unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => order_sequences(a.iter(), b.iter()),
        (Value::Object(a), Value::Object(b)) => {
            // objects compare as their sorted key/value pairs
            fn pairs(map: &serde_json::Map<String, Value>) -> Vec<(&String, &Value)> {
                let mut pairs: Vec<_> = map.iter().collect();
                pairs.sort_by(|x, y| x.0.cmp(y.0));
                pairs
            }
            let (a, b) = (pairs(a), pairs(b));
            for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
                let step = ka.cmp(kb).then_with(|| order(va, vb));
                if step.is_ne() {
                    return step;
                }
            }
            a.len().cmp(&b.len())
        }
        _ => Ordering::Equal,
    }
}

fn order_sequences<'a>(
    mut a: impl Iterator<Item = &'a Value>,
    mut b: impl Iterator<Item = &'a Value>,
) -> Ordering {
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let step = order(x, y);
                if step.is_ne() {
                    return step;
                }
            }
        }
    }
}
