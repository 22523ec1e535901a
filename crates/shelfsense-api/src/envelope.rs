// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! List response envelopes.
//!
//! The backend answers list calls either with a bare array or with an object
//! wrapping the array under `data` or `result`. Anything else is an error,
//! never an empty list.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shelfsense_core::ResourceError;

/// Extracts and decodes the record array from a list response body.
pub fn items<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ResourceError> {
    let array = match body {
        Value::Array(items) => items,
        Value::Object(mut object) => match ["data", "result"]
            .iter()
            .find_map(|key| match object.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            }) {
            Some(items) => items,
            None => {
                return Err(ResourceError::server(
                    "list response has no data or result array",
                ));
            }
        },
        other => {
            return Err(ResourceError::server(format!(
                "unexpected list response: {}",
                kind(&other)
            )));
        }
    };

    serde_json::from_value(Value::Array(array))
        .map_err(|e| ResourceError::server(format!("failed to decode list response: {e}")))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
