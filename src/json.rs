// src/json.rs

//! Small helpers over `serde_json::Value`.
//!
//! Workflow payloads are arbitrary JSON. Everything that touches them goes
//! through `Value` so any shape round-trips without loss.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Current time as ISO-8601 UTC with millisecond precision.
///
/// Example: `2024-05-01T12:30:00.123Z`
pub fn iso_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time in milliseconds since the Unix epoch.
pub fn unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Spread a value into a fresh object, modelled on `{ ...value }`.
///
/// - objects copy their entries
/// - arrays spread into index keys ("0", "1", ...)
/// - strings spread into one key per `char` (Unicode scalar value), so a
///   character outside the BMP gets one key, not two UTF-16 halves
/// - every other scalar contributes nothing
pub fn spread(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v.clone()))
            .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        _ => Map::new(),
    }
}

/// Look up `key` on an object and return it only if it is a non-empty string.
pub fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
