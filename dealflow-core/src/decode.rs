//! Defensive decoding of record-source payloads.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::DealflowError;

/// Decode a JSON response body into records.
///
/// # Errors
/// Returns `Data` when the body is not valid JSON or is not a JSON array.
/// Individual elements that fail to decode are skipped, not reported.
pub fn decode_records<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, DealflowError> {
    let value: Value = serde_json::from_slice(body)?;
    decode_value(value)
}

/// Decode an already-parsed JSON value into records.
///
/// Each array element decodes independently; an element missing a required
/// field (`id`, `name`, `sector`) or carrying a mistyped one is dropped.
///
/// # Errors
/// Returns `Data` when `value` is not a JSON array.
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, DealflowError> {
    let Value::Array(items) = value else {
        return Err(DealflowError::Data(format!(
            "expected a JSON array of records, got {}",
            json_kind(&value)
        )));
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(rec) => Some(rec),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(index, error = %e, "skipping malformed record");
                #[cfg(not(feature = "tracing"))]
                let _ = (index, e);
                None
            }
        })
        .collect();

    #[cfg(feature = "tracing")]
    if records.len() < total {
        tracing::debug!(
            kept = records.len(),
            skipped = total - records.len(),
            "decoded record payload"
        );
    }
    #[cfg(not(feature = "tracing"))]
    let _ = total;

    Ok(records)
}

const fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
