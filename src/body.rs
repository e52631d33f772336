//! Request-body decoding for create and update.
//!
//! Bodies are decoded on top of a zero-valued model, so fields left out of the
//! JSON take their `Default` value. Keys that do not match a field exactly are
//! matched case-insensitively.

use crate::errors::ApiError;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Decode `bytes` into a fresh `T`, starting from `T::default()`.
///
/// # Errors
///
/// Returns [`ApiError::InvalidBody`] if the body is not a JSON object or does
/// not deserialize into `T`.
pub fn decode_fresh<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: Serialize + DeserializeOwned + Default,
{
    overlay_onto(&T::default(), bytes)
}

/// Decode `bytes` on top of an existing record.
///
/// Only the top-level fields present in the body change. Used by
/// [`crate::UpdateMode::Merge`].
///
/// # Errors
///
/// Same as [`decode_fresh`].
pub fn decode_patch<T>(existing: &T, bytes: &[u8]) -> Result<T, ApiError>
where
    T: Serialize + DeserializeOwned,
{
    overlay_onto(existing, bytes)
}

fn overlay_onto<T>(base: &T, bytes: &[u8]) -> Result<T, ApiError>
where
    T: Serialize + DeserializeOwned,
{
    let incoming = parse_object(bytes)?;
    let mut merged = match serde_json::to_value(base) {
        Ok(Value::Object(map)) => map,
        Ok(_) => Map::new(),
        Err(err) => return Err(ApiError::invalid_body(err.to_string())),
    };

    for (key, value) in incoming {
        let target = resolve_key(&merged, key);
        merged.insert(target, value);
    }

    serde_json::from_value(Value::Object(merged))
        .map_err(|err| ApiError::invalid_body(err.to_string()))
}

fn parse_object(bytes: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::invalid_body("empty body"));
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::invalid_body("expected a JSON object")),
        Err(err) => Err(ApiError::invalid_body(err.to_string())),
    }
}

/// Pick the field name `key` should land on: exact match first, then the first
/// case-insensitive match, otherwise the key unchanged.
fn resolve_key(fields: &Map<String, Value>, key: String) -> String {
    if fields.contains_key(&key) {
        return key;
    }
    fields
        .keys()
        .find(|field| field.eq_ignore_ascii_case(&key))
        .cloned()
        .unwrap_or(key)
}
