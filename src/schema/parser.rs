//! Parses JSON Schema documents into `SchemaNode` trees
//!
//! The interpretation is relaxed: keywords outside the supported set are
//! skipped and logged at TRACE. The shape of every supported keyword is
//! checked here, so compilation of a parsed tree cannot fail.

use regex::Regex;
use serde_json::{Map, Number, Value};

use crate::observability::Logger;

use super::errors::{SchemaError, SchemaResult};
use super::types::{json_type_name, SchemaNode, SchemaPath, SchemaType};

/// Keywords that only document the schema
const META_KEYWORDS: [&str; 4] = ["$schema", "default", "description", "examples"];

impl SchemaNode {
    /// Parses a root schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` naming the path of the first malformed node.
    pub fn parse(value: &Value) -> SchemaResult<SchemaNode> {
        parse_node(value, &SchemaPath::root())
    }
}

fn parse_node(value: &Value, path: &SchemaPath) -> SchemaResult<SchemaNode> {
    let obj = value.as_object().ok_or_else(|| SchemaError::NotAnObject {
        path: path.clone(),
        found: json_type_name(value),
    })?;

    let mut node = SchemaNode::default();

    for (keyword, arg) in obj {
        match keyword.as_str() {
            "title" => node.title = Some(expect_str(arg, "title", path)?.to_string()),
            "type" => node.schema_type = Some(parse_type(arg, path)?),
            "required" => node.required = parse_required(arg, path)?,
            "properties" => node.properties = parse_properties(arg, path)?,
            "enum" => node.enum_values = Some(expect_array(arg, "enum", path)?.clone()),
            "minimum" => node.minimum = Some(expect_number(arg, "minimum", path)?),
            "maximum" => node.maximum = Some(expect_number(arg, "maximum", path)?),
            "multipleOf" => node.multiple_of = Some(expect_divisor(arg, "multipleOf", path)?),
            "minLength" => node.min_length = Some(expect_count(arg, "minLength", path)?),
            "maxLength" => node.max_length = Some(expect_count(arg, "maxLength", path)?),
            "pattern" => node.pattern = Some(parse_pattern(arg, path)?),
            "minProperties" => {
                node.min_properties = Some(expect_count(arg, "minProperties", path)?)
            }
            "maxProperties" => {
                node.max_properties = Some(expect_count(arg, "maxProperties", path)?)
            }
            "minItems" => node.min_items = Some(expect_count(arg, "minItems", path)?),
            "maxItems" => node.max_items = Some(expect_count(arg, "maxItems", path)?),
            meta if META_KEYWORDS.contains(&meta) => {}
            other => {
                Logger::trace(
                    "SCHEMA_KEYWORD_IGNORED",
                    &[("keyword", other), ("path", &path.to_string())],
                );
            }
        }
    }

    Ok(node)
}

fn parse_type(arg: &Value, path: &SchemaPath) -> SchemaResult<SchemaType> {
    let name = expect_str(arg, "type", path)?;
    SchemaType::parse(name).ok_or_else(|| SchemaError::UnknownType {
        path: path.clone(),
        name: name.to_string(),
    })
}

fn parse_required(arg: &Value, path: &SchemaPath) -> SchemaResult<Vec<String>> {
    expect_array(arg, "required", path)?
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| SchemaError::RequiredNotString {
                    path: path.clone(),
                    index,
                    found: json_type_name(entry),
                })
        })
        .collect()
}

fn parse_properties(arg: &Value, path: &SchemaPath) -> SchemaResult<Vec<(String, SchemaNode)>> {
    let props: &Map<String, Value> = arg.as_object().ok_or_else(|| invalid(
        path,
        "properties",
        "an object",
        json_type_name(arg),
    ))?;

    props
        .iter()
        .map(|(name, sub)| Ok((name.clone(), parse_node(sub, &path.child(name))?)))
        .collect()
}

fn parse_pattern(arg: &Value, path: &SchemaPath) -> SchemaResult<String> {
    let pattern = expect_str(arg, "pattern", path)?;
    match Regex::new(pattern) {
        // only syntax matters here; the engine compiles the pattern itself
        Ok(_) | Err(regex::Error::CompiledTooBig(_)) => Ok(pattern.to_string()),
        Err(e) => Err(SchemaError::InvalidPattern {
            path: path.clone(),
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn expect_str<'v>(arg: &'v Value, keyword: &'static str, path: &SchemaPath) -> SchemaResult<&'v str> {
    arg.as_str()
        .ok_or_else(|| invalid(path, keyword, "a string", json_type_name(arg)))
}

fn expect_array<'v>(
    arg: &'v Value,
    keyword: &'static str,
    path: &SchemaPath,
) -> SchemaResult<&'v Vec<Value>> {
    arg.as_array()
        .ok_or_else(|| invalid(path, keyword, "an array", json_type_name(arg)))
}

fn expect_number(arg: &Value, keyword: &'static str, path: &SchemaPath) -> SchemaResult<Number> {
    match arg {
        Value::Number(n) => Ok(n.clone()),
        other => Err(invalid(path, keyword, "a number", json_type_name(other))),
    }
}

/// The engine's `mod` takes integer operands only
fn expect_divisor(arg: &Value, keyword: &'static str, path: &SchemaPath) -> SchemaResult<u64> {
    let n = expect_number(arg, keyword, path)?;
    match n.as_u64() {
        Some(d) if d > 0 => Ok(d),
        _ => Err(invalid(path, keyword, "a positive integer", n.to_string())),
    }
}

fn expect_count(arg: &Value, keyword: &'static str, path: &SchemaPath) -> SchemaResult<u64> {
    match arg {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| invalid(path, keyword, "a non-negative integer", n.to_string())),
        other => Err(invalid(path, keyword, "a non-negative integer", json_type_name(other))),
    }
}

fn invalid(
    path: &SchemaPath,
    keyword: &'static str,
    expected: &'static str,
    found: impl Into<String>,
) -> SchemaError {
    SchemaError::InvalidKeyword {
        path: path.clone(),
        keyword,
        expected,
        found: found.into(),
    }
}
