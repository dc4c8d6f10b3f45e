//! Schema-to-ReQL compiler
//!
//! Each schema node is compiled by walking a fixed keyword table. Every
//! keyword present on the node yields one boolean term; the terms are ANDed
//! left to right in table order. Nothing is optimized away: a redundant
//! constraint still becomes its own branch.
//!
//! `properties` recurse with `variable[name]`, guarded by an object test
//! and `variable.has_fields(name)` so that absent optional fields pass.
//! Presence of required fields is enforced separately by `required`.
//!
//! Terms the engine only accepts for one type (`has_fields`, `count`,
//! `match`, `%`) are always ANDed after a `type_of` test.

use serde_json::Value;

use crate::reql::{r, Literal, Term, TypeTag};
use crate::schema::{SchemaNode, SchemaType};

use super::options::ValidationMode;

/// Keywords in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Required,
    Type,
    Enum,
    Minimum,
    Maximum,
    MultipleOf,
    MinLength,
    MaxLength,
    Pattern,
    MinProperties,
    MaxProperties,
    MinItems,
    MaxItems,
    Properties,
}

impl Keyword {
    /// Every keyword, in the order its term is ANDed onto a node
    pub const ORDER: [Keyword; 14] = [
        Keyword::Required,
        Keyword::Type,
        Keyword::Enum,
        Keyword::Minimum,
        Keyword::Maximum,
        Keyword::MultipleOf,
        Keyword::MinLength,
        Keyword::MaxLength,
        Keyword::Pattern,
        Keyword::MinProperties,
        Keyword::MaxProperties,
        Keyword::MinItems,
        Keyword::MaxItems,
        Keyword::Properties,
    ];

    /// Returns the JSON Schema spelling
    pub fn name(&self) -> &'static str {
        match self {
            Keyword::Required => "required",
            Keyword::Type => "type",
            Keyword::Enum => "enum",
            Keyword::Minimum => "minimum",
            Keyword::Maximum => "maximum",
            Keyword::MultipleOf => "multipleOf",
            Keyword::MinLength => "minLength",
            Keyword::MaxLength => "maxLength",
            Keyword::Pattern => "pattern",
            Keyword::MinProperties => "minProperties",
            Keyword::MaxProperties => "maxProperties",
            Keyword::MinItems => "minItems",
            Keyword::MaxItems => "maxItems",
            Keyword::Properties => "properties",
        }
    }
}

/// A test paired with the failure message shown in raise mode
struct Check {
    test: Term,
    message: String,
}

impl Check {
    fn new(test: Term, message: impl Into<String>) -> Self {
        Self {
            test,
            message: message.into(),
        }
    }
}

/// Stateless compiler; one instance can compile any number of schemas
#[derive(Debug, Clone, Copy, Default)]
pub struct Compiler {
    mode: ValidationMode,
}

impl Compiler {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Compiles `schema` against the value denoted by `variable`.
    ///
    /// `title` names the value in failure messages unless the schema
    /// carries its own `title`. A node without constraints compiles to
    /// `True`.
    pub fn compile(&self, schema: &SchemaNode, variable: Term, title: &str) -> Term {
        let title = schema.title.as_deref().unwrap_or(title);

        Keyword::ORDER
            .iter()
            .filter_map(|keyword| self.emit(*keyword, schema, &variable, title))
            .reduce(|acc, term| acc.and(term))
            .unwrap_or_else(|| r::expr(true))
    }

    /// Emits the term for one keyword, or `None` if the node lacks it
    pub fn emit(
        &self,
        keyword: Keyword,
        schema: &SchemaNode,
        variable: &Term,
        title: &str,
    ) -> Option<Term> {
        if keyword == Keyword::Properties {
            return self.properties(schema, variable, title);
        }

        let v = || variable.clone();
        let check = match keyword {
            Keyword::Required if !schema.required.is_empty() => Check::new(
                of_type(
                    TypeTag::Object,
                    variable,
                    v().has_fields(schema.required.iter().cloned()),
                ),
                format!("must have the required fields: {}", schema.required.join(",")),
            ),
            Keyword::Type => type_check(schema.schema_type?, variable),
            Keyword::Enum => {
                let values = Value::Array(schema.enum_values.clone()?);
                let message = format!("must be equal to one of {}", Literal(&values));
                Check::new(r::expr(values).contains(v()), message)
            }
            Keyword::Minimum => {
                let m = schema.minimum.as_ref()?;
                Check::new(v().gt(m.clone()), format!("must be greater than {}", m))
            }
            Keyword::Maximum => {
                let m = schema.maximum.as_ref()?;
                Check::new(v().lt(m.clone()), format!("must be less than {}", m))
            }
            Keyword::MultipleOf => {
                let n = schema.multiple_of?;
                Check::new(
                    integral(variable).and(v().modulo(n).eq(0i64)),
                    format!("must be a multiple of {}", n),
                )
            }
            Keyword::MinLength => {
                let n = schema.min_length?;
                Check::new(
                    of_type(TypeTag::String, variable, v().count().ge(n)),
                    format!("must have length at least {}", n),
                )
            }
            Keyword::MaxLength => {
                let n = schema.max_length?;
                Check::new(
                    of_type(TypeTag::String, variable, v().count().le(n)),
                    format!("must have length at most {}", n),
                )
            }
            Keyword::Pattern => {
                let pattern = schema.pattern.as_ref()?;
                Check::new(
                    of_type(
                        TypeTag::String,
                        variable,
                        v().match_regex(pattern.clone()).ne(Value::Null),
                    ),
                    format!("must match the regex \"{}\"", pattern),
                )
            }
            Keyword::MinProperties => {
                let n = schema.min_properties?;
                Check::new(
                    of_type(TypeTag::Object, variable, v().count().ge(n)),
                    format!("must have at least {} properties", n),
                )
            }
            Keyword::MaxProperties => {
                let n = schema.max_properties?;
                Check::new(
                    of_type(TypeTag::Object, variable, v().count().le(n)),
                    format!("must not have more than {} properties", n),
                )
            }
            Keyword::MinItems => {
                let n = schema.min_items?;
                Check::new(
                    of_type(TypeTag::Array, variable, v().count().ge(n)),
                    format!("must have at least {} items", n),
                )
            }
            Keyword::MaxItems => {
                let n = schema.max_items?;
                Check::new(
                    of_type(TypeTag::Array, variable, v().count().le(n)),
                    format!("must have at most {} items", n),
                )
            }
            Keyword::Required | Keyword::Properties => return None,
        };

        Some(self.requirement(check, title))
    }

    /// `r.branch(is_object & has_fields(p), compile(sub, v[p]), True)` per
    /// property, ANDed. Non-objects pass the whole group.
    fn properties(&self, schema: &SchemaNode, variable: &Term, title: &str) -> Option<Term> {
        if schema.properties.is_empty() {
            return None;
        }

        let combined = schema
            .properties
            .iter()
            .map(|(name, sub)| {
                let field = variable.clone().get_field(name.as_str());
                r::branch(
                    of_type(
                        TypeTag::Object,
                        variable,
                        variable.clone().has_fields([name.as_str()]),
                    ),
                    self.compile(sub, field, &child_title(title, name)),
                    true,
                )
            })
            .reduce(|acc, term| acc.and(term))
            .unwrap_or_else(|| r::expr(true));

        Some(combined)
    }

    fn requirement(&self, check: Check, title: &str) -> Term {
        match self.mode {
            ValidationMode::Boolean => check.test,
            ValidationMode::Raise => r::branch(
                check.test,
                true,
                r::error(failure_message(title, &check.message)),
            ),
        }
    }
}

/// `(v.type_of() == tag) & test`; the engine raises on type-specific terms
/// applied to other types, so `test` only runs once the tag matches
fn of_type(tag: TypeTag, variable: &Term, test: Term) -> Term {
    variable.clone().type_of().eq(tag).and(test)
}

/// `(v.type_of() == 'NUMBER') & (v.floor() == v)`
fn integral(variable: &Term) -> Term {
    of_type(
        TypeTag::Number,
        variable,
        variable.clone().floor().eq(variable.clone()),
    )
}

fn type_check(schema_type: SchemaType, variable: &Term) -> Check {
    match schema_type {
        SchemaType::Integer => Check::new(integral(variable), "must be an integer"),
        other => Check::new(
            variable.clone().type_of().eq(other.type_tag()),
            format!("must be of type {}", other.name()),
        ),
    }
}

/// Title for a nested property: the parent's title followed by the name.
/// Concatenated on purpose (`Person age`), so messages from deep fields
/// still name the enclosing schema.
fn child_title(parent: &str, property: &str) -> String {
    if parent.is_empty() {
        property.to_string()
    } else {
        format!("{} {}", parent, property)
    }
}

fn failure_message(title: &str, message: &str) -> String {
    if title.is_empty() {
        message.to_string()
    } else {
        format!("{} {}", title, message)
    }
}
