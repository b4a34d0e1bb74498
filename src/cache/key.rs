//! Cache Key Module
//!
//! Derives stable cache keys from an operation name and its arguments.

use serde_json::{Map, Value};

/// Parameters that take part in a cache key, in the order they are appended.
pub const KEY_PARAMS: [&str; 4] = ["store", "term", "id", "language"];

/// Separator placed between key segments.
pub const KEY_DELIMITER: &str = ":";

// == Build Key ==
/// Builds the cache key for `operation` called with `params`.
///
/// Only the parameters listed in [`KEY_PARAMS`] are used, always in that
/// order, so the order of `params` and any extra fields do not matter.
/// Missing, null and empty-string values are skipped rather than rendered as
/// empty segments.
pub fn build_key(operation: &str, params: &Map<String, Value>) -> String {
    let mut parts = vec![operation.to_string()];

    parts.extend(
        KEY_PARAMS
            .iter()
            .filter_map(|name| params.get(*name).and_then(segment)),
    );

    parts.join(KEY_DELIMITER)
}

fn segment(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Nulls, empty strings, arrays and objects
        _ => None,
    }
}
