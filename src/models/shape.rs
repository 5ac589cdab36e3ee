//! Shape normalization for loosely-typed JSON coming back from the search API.
//!
//! The service is not trusted to be consistent: the response body may not be
//! an array, and per-item list fields (`sizes`, `colors`) may arrive as a bare
//! scalar. Everything funnels through [`ensure_list`] so the coercion rules
//! live in one place.

use serde_json::Value;

/// Coerce a JSON value into a list.
///
/// - arrays are returned as-is
/// - `null` becomes an empty list
/// - any other value becomes a single-element list
pub fn ensure_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(values) => values,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

/// Like [`ensure_list`], but only arrays survive. Used for the response body,
/// where a non-array payload means "nothing found" rather than "one item".
pub fn ensure_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(values) => values,
        _ => Vec::new(),
    }
}

/// Render a scalar JSON value as display text.
///
/// Strings pass through, numbers and booleans are stringified, everything
/// else (null, objects, arrays) has no textual form.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Normalize a scalar-or-sequence field into its textual entries, in order.
pub fn text_list(value: Option<&Value>) -> Vec<String> {
    value
        .cloned()
        .map(ensure_list)
        .unwrap_or_default()
        .iter()
        .filter_map(as_text)
        .collect()
}
