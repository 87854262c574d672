//! JSON decoding for collection schemas
//!
//! Accepts the shapes the silo/repository API returns:
//! - a bare array: `[{"name": "year", "type": "int"}, ...]`
//! - an object carrying the array under `metadata_fields` or `fields`
//! - `null`, meaning the collection declares no fields

use serde_json::Value;
use silo_filter_core::{validate_fields, FilterError, MetadataField};
use thiserror::Error;

/// Decode error types
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Invalid JSON syntax
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but not a schema shape
    #[error("Unexpected schema shape: {0}")]
    Shape(String),

    /// Schema decoded but failed validation
    #[error("Invalid field: {0}")]
    Field(#[from] FilterError),
}

/// Decode a collection schema into a validated field list
pub fn decode_fields(json: &str) -> Result<Vec<MetadataField>, DecodeError> {
    let value: Value = serde_json::from_str(json.trim())?;
    let fields = match value {
        Value::Null => Vec::new(),
        Value::Array(list) => serde_json::from_value(Value::Array(list))?,
        Value::Object(mut map) => {
            let list = map
                .remove("metadata_fields")
                .or_else(|| map.remove("fields"))
                .ok_or_else(|| {
                    DecodeError::Shape("object has no `metadata_fields` or `fields` key".into())
                })?;
            match list {
                Value::Null => Vec::new(),
                other => serde_json::from_value(other)?,
            }
        }
        other => {
            return Err(DecodeError::Shape(format!(
                "expected array or object, got {}",
                type_name(&other)
            )))
        }
    };
    validate_fields(&fields)?;
    Ok(fields)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
