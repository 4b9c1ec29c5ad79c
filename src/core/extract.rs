//! Fallible lookups over a parsed JSON document.
//!
//! Each helper fails on the first missing link with the path of that link, so a chain
//! like `types[0].type.name` reads as a sequence of `?`s.

use crate::utils::error::{PokedexError, Result};
use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// Parses text that must hold a JSON object. Any other JSON value is a parse failure.
pub fn parse_object(json: &str) -> Result<Object> {
    Ok(serde_json::from_str::<Object>(json)?)
}

// absent and explicit null are the same thing to every caller
fn present<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

pub fn required_str(obj: &Object, key: &str, path: &str) -> Result<String> {
    present(obj, key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| PokedexError::missing(path))
}

pub fn required_i64(obj: &Object, key: &str, path: &str) -> Result<i64> {
    present(obj, key)
        .and_then(Value::as_i64)
        .ok_or_else(|| PokedexError::missing(path))
}

pub fn required_object<'a>(obj: &'a Object, key: &str, path: &str) -> Result<&'a Object> {
    present(obj, key)
        .and_then(Value::as_object)
        .ok_or_else(|| PokedexError::missing(path))
}

/// First element of the list under `key`, which must be an object.
pub fn first_object<'a>(obj: &'a Object, key: &str) -> Result<&'a Object> {
    let items = present(obj, key)
        .and_then(Value::as_array)
        .ok_or_else(|| PokedexError::missing(key))?;
    let first = items.first().ok_or_else(|| PokedexError::empty(key))?;
    first
        .as_object()
        .ok_or_else(|| PokedexError::missing(format!("{}[0]", key)))
}

/// Resolves `{list_key}[0].{inner_key}.name`.
pub fn first_nested_name(obj: &Object, list_key: &str, inner_key: &str) -> Result<String> {
    let element = first_object(obj, list_key)?;
    let inner_path = format!("{}[0].{}", list_key, inner_key);
    let inner = required_object(element, inner_key, &inner_path)?;
    required_str(inner, "name", &format!("{}.name", inner_path))
}
