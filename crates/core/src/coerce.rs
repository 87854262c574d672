//! Best-effort value coercion
//!
//! Raw filter input is always text. Coercion turns it into the JSON scalar
//! the declared field type calls for. Malformed numbers are not errors: the
//! original text is passed through and compares as a string downstream.

use crate::field::FieldType;
use serde_json::{Number, Value};
use tracing::debug;

/// Outcome of coercing one raw value
///
/// `coerced` is false only when a numeric parse failed and `value` holds the
/// original text.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced {
    /// Whether the declared type was honoured
    pub coerced: bool,
    /// The value to place in the filter document
    pub value: Value,
}

impl Coerced {
    fn typed(value: Value) -> Self {
        Coerced {
            coerced: true,
            value,
        }
    }

    fn passthrough(raw: &str) -> Self {
        Coerced {
            coerced: false,
            value: Value::String(raw.to_string()),
        }
    }
}

/// Coerce a trimmed, non-empty raw string into the declared type.
pub fn coerce(field_type: &FieldType, raw: &str) -> Coerced {
    match field_type {
        FieldType::Int => match raw.parse::<i64>() {
            Ok(n) => Coerced::typed(Value::from(n)),
            Err(_) => {
                debug!(raw, "int coercion failed, comparing as string");
                Coerced::passthrough(raw)
            }
        },
        FieldType::Float => match raw.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(n) => Coerced::typed(Value::Number(n)),
            None => {
                debug!(raw, "float coercion failed, comparing as string");
                Coerced::passthrough(raw)
            }
        },
        FieldType::Bool => Coerced::typed(Value::Bool(raw.trim().eq_ignore_ascii_case("true"))),
        FieldType::Str | FieldType::Date | FieldType::Other(_) => {
            Coerced::typed(Value::String(raw.to_string()))
        }
    }
}

/// Coerce and keep only the value.
pub fn coerce_value(field_type: &FieldType, raw: &str) -> Value {
    coerce(field_type, raw).value
}
