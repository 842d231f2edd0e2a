//! Reading JSON text and converting to and from `serde_json::Value`.
//!
//! Text is parsed by `serde_json` and then mapped onto [`JsonValue`].
//! Integers that fit in `i64` stay exact; larger integers and numbers with a
//! fraction or exponent become `f64`.

use super::types::JsonValue;
use crate::error::ReplacerResult;

/// Parse JSON bytes into a [`JsonValue`].
///
/// Malformed input (including invalid UTF-8) fails with `E100_InvalidJSON`.
pub fn parse(input: &[u8]) -> ReplacerResult<JsonValue> {
    let value: serde_json::Value = serde_json::from_slice(input)?;
    Ok(JsonValue::from(value))
}

/// Parse JSON text into a [`JsonValue`].
pub fn parse_str(input: &str) -> ReplacerResult<JsonValue> {
    parse(input.as_bytes())
}

impl From<&serde_json::Value> for JsonValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => JsonValue::Number(i),
                // u64 beyond i64::MAX and fractions
                None => JsonValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => JsonValue::String(s.clone()),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        JsonValue::from(&value)
    }
}

impl From<&JsonValue> for serde_json::Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(*b),
            JsonValue::Number(n) => serde_json::Value::from(*n),
            // NaN and infinities have no JSON form
            JsonValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            JsonValue::String(s) => serde_json::Value::String(s.clone()),
            JsonValue::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(serde_json::Value::from).collect())
            }
            JsonValue::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonValue> for serde_json::Value {
    fn from(value: JsonValue) -> Self {
        serde_json::Value::from(&value)
    }
}
