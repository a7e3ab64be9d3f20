//! Entry-map construction from key/value entry sequences
//!
//! This module converts a finite sequence of two-slot entries into a
//! string-keyed mapping whose iteration order reflects insertion order.
//! Entries are accepted in two shapes: a JSON array whose positions 0 and 1
//! hold the key and value, or a JSON object exposing the numeric-keyed
//! properties `"0"` and `"1"`. The second form exists for consistency with
//! map constructors that accept entry objects without requiring true
//! iterability.
//!
//! Copyright (c) 2026 Entrymap Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Build a mapping from a typed sequence of entry values.
///
/// `None` is the lenient "no input" case and yields an empty mapping rather
/// than an error. The iterator is drained eagerly before validation so that
/// error messages can carry the zero-based index of a malformed element.
///
/// On duplicate keys the later entry's value wins; the key keeps its
/// first-insertion position.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let map = entrymap::from_entries(Some(vec![
///     json!(["model", "gpt-5"]),
///     json!(["stream", true]),
/// ]))?;
/// assert_eq!(map["model"], json!("gpt-5"));
/// assert_eq!(map["stream"], json!(true));
/// # entrymap::Result::Ok(())
/// ```
pub fn from_entries<I>(source: Option<I>) -> Result<Map<String, Value>>
where
    I: IntoIterator<Item = Value>,
{
    let Some(source) = source else {
        return Ok(Map::new());
    };

    let entries: Vec<Value> = source.into_iter().collect();
    build_from_slice(&entries)
}

/// Build a mapping from a dynamic entry source.
///
/// `None` and `Value::Null` yield an empty mapping. An array is walked as an
/// entry sequence. Any other value is rejected with [`Error::NotIterable`]:
/// array-like objects without iteration capability must fail, not degrade to
/// an empty result.
pub fn from_value_entries(source: Option<&Value>) -> Result<Map<String, Value>> {
    match source {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Array(entries)) => build_from_slice(entries),
        Some(other) => Err(Error::NotIterable {
            json_type: json_type_name(other),
        }),
    }
}

/// Parse `text` as JSON and build a mapping from the resulting entry source.
pub fn from_entries_json(text: &str) -> Result<Map<String, Value>> {
    let parsed: Value = serde_json::from_str(text)?;
    from_value_entries(Some(&parsed))
}

/// Walk a materialized entry sequence in order, accumulating the result.
///
/// Any failure discards the partially built mapping; there is no partial
/// recovery.
fn build_from_slice(entries: &[Value]) -> Result<Map<String, Value>> {
    let mut map = Map::new();

    for (index, entry) in entries.iter().enumerate() {
        let (key, value) = split_entry(entry, index)?;
        map.insert(key, value);
    }

    Ok(map)
}

/// Split one entry into its key and value slots.
///
/// A null or non-composite element fails with `NotAnEntry`. A composite
/// element with a missing key slot, or a key slot holding anything other
/// than a string, fails with `NonStringKey`. A missing value slot is legal
/// and yields `Value::Null`.
fn split_entry(entry: &Value, index: usize) -> Result<(String, Value)> {
    if !matches!(entry, Value::Array(_) | Value::Object(_)) {
        return Err(Error::NotAnEntry { index });
    }

    let value = slot(entry, 1).cloned().unwrap_or(Value::Null);

    match slot(entry, 0) {
        Some(Value::String(key)) => Ok((key.clone(), value)),
        _ => Err(Error::NonStringKey),
    }
}

/// Positional slot access over both accepted entry shapes.
fn slot(entry: &Value, position: usize) -> Option<&Value> {
    match entry {
        Value::Array(items) => items.get(position),
        Value::Object(fields) => fields.get(position.to_string().as_str()),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
