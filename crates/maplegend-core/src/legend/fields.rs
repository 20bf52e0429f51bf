//! Typed get-or-absent accessors over loosely-typed legend JSON.
//!
//! Missing keys and `null` values read as `None`. Scalars may arrive as JSON
//! strings or numbers; anything else is a [`ParseError`].

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::ParseError;

pub(crate) type Object = Map<String, Value>;

pub(crate) fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

pub(crate) fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Object, ParseError> {
    value.as_object().ok_or_else(|| ParseError::UnexpectedType {
        path: path.to_string(),
        expected: "object",
    })
}

fn present<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// String field; numbers are taken in their textual form.
pub(crate) fn optional_str(
    obj: &Object,
    key: &str,
    parent: &str,
) -> Result<Option<String>, ParseError> {
    match present(obj, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(ParseError::UnexpectedType {
            path: field_path(parent, key),
            expected: "string",
        }),
    }
}

/// Integer field read through its string form. A value that does not parse
/// exactly as `T` is an error, never a default.
pub(crate) fn optional_int<T: FromStr>(
    obj: &Object,
    key: &str,
    parent: &str,
) -> Result<Option<T>, ParseError> {
    let Some(raw) = optional_str(obj, key, parent)? else {
        return Ok(None);
    };
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| ParseError::InvalidInteger {
            path: field_path(parent, key),
            value: raw,
        })
}

pub(crate) fn optional_array<'a>(
    obj: &'a Object,
    key: &str,
    parent: &str,
) -> Result<Option<&'a Vec<Value>>, ParseError> {
    match present(obj, key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(_) => Err(ParseError::UnexpectedType {
            path: field_path(parent, key),
            expected: "array",
        }),
    }
}
