//! Lenient parsing for the string attributes host pages hand to the
//! widgets. Malformed input always degrades to an empty default; a parse
//! failure must never escape past the component boundary.

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;

/// Split a comma-joined attribute into trimmed entries. An empty or
/// whitespace-only attribute yields an empty list.
pub fn parse_comma_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|part| part.trim().to_string()).collect()
}

/// Parse a comma-joined list of 1-based indices, skipping entries that
/// are not valid integers.
pub fn parse_index_set(raw: &str) -> BTreeSet<u32> {
    parse_comma_list(raw)
        .iter()
        .filter_map(|part| part.parse().ok())
        .collect()
}

/// Parse an integer attribute, falling back to `default` on bad input.
pub fn parse_u32_or(raw: &str, default: u32) -> u32 {
    raw.trim().parse().unwrap_or(default)
}

/// Decode a JSON-encoded attribute, degrading to `T::default()` when the
/// attribute is empty or malformed. The failure is logged, not raised.
pub fn parse_json_or_default<T>(raw: &str) -> T
where
    T: DeserializeOwned + Default,
{
    if raw.trim().is_empty() {
        return T::default();
    }
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("invalid JSON attribute, using default: {err}");
            T::default()
        }
    }
}
