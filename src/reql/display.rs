//! Text rendering of terms in the Python driver's style

use std::fmt::{self, Write};

use serde_json::Value;

use super::term::{Term, VarId};

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Datum(value) => write_literal(f, value),
            Term::Var(id) => write_var(f, *id),
            Term::GetField(target, name) => {
                write_receiver(f, target)?;
                f.write_char('[')?;
                write_quoted(f, name)?;
                f.write_char(']')
            }
            Term::HasFields(target, names) => {
                write_receiver(f, target)?;
                f.write_str(".has_fields(")?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, name)?;
                }
                f.write_char(')')
            }
            Term::TypeOf(target) => {
                write_receiver(f, target)?;
                f.write_str(".type_of()")
            }
            Term::Compare(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
            Term::And(lhs, rhs) => write!(f, "({} & {})", lhs, rhs),
            Term::Branch(test, then, otherwise) => {
                write!(f, "r.branch({}, {}, {})", test, then, otherwise)
            }
            Term::Error(message) => {
                f.write_str("r.error(")?;
                write_quoted(f, message)?;
                f.write_char(')')
            }
            Term::Count(target) => {
                write_receiver(f, target)?;
                f.write_str(".count()")
            }
            Term::Match(target, pattern) => {
                write_receiver(f, target)?;
                f.write_str(".match(")?;
                write_quoted(f, pattern)?;
                f.write_char(')')
            }
            Term::Contains(sequence, value) => {
                write_receiver(f, sequence)?;
                write!(f, ".contains({})", value)
            }
            Term::Mod(lhs, rhs) => write!(f, "({} % {})", lhs, rhs),
            Term::Floor(target) => {
                write_receiver(f, target)?;
                f.write_str(".floor()")
            }
            Term::Func(params, body) => {
                f.write_str("lambda ")?;
                for (i, id) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_var(f, *id)?;
                }
                write!(f, ": {}", body)
            }
            Term::FunCall(func, args) => {
                f.write_str("r.do(")?;
                for arg in args {
                    write!(f, "{}, ", arg)?;
                }
                write!(f, "{})", func)
            }
        }
    }
}

/// A JSON value in driver literal syntax (`['a', 1, None]`)
pub(crate) struct Literal<'a>(pub &'a Value);

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_literal(f, self.0)
    }
}

fn write_var(f: &mut fmt::Formatter<'_>, id: VarId) -> fmt::Result {
    write!(f, "var_{}", id.0)
}

/// Literals cannot take method calls directly, so they get wrapped in `r.expr`.
fn write_receiver(f: &mut fmt::Formatter<'_>, target: &Term) -> fmt::Result {
    match target {
        Term::Datum(value) => {
            f.write_str("r.expr(")?;
            write_literal(f, value)?;
            f.write_char(')')
        }
        other => write!(f, "{}", other),
    }
}

fn write_literal(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("None"),
        Value::Bool(true) => f.write_str("True"),
        Value::Bool(false) => f.write_str("False"),
        Value::Number(n) => write!(f, "{}", n),
        Value::String(s) => write_quoted(f, s),
        Value::Array(items) => {
            f.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_literal(f, item)?;
            }
            f.write_char(']')
        }
        Value::Object(map) => {
            f.write_char('{')?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_quoted(f, key)?;
                f.write_str(": ")?;
                write_literal(f, item)?;
            }
            f.write_char('}')
        }
    }
}

/// Single-quoted string literal
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('\'')?;
    for c in s.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\x{:02x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('\'')
}
