//! A single compiled filter row

use serde_json::Value;
use silo_filter_core::ComparisonOperator;

/// One active filter row, already coerced and mapped onto a dialect token
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Metadata field name
    pub field: String,
    /// Abstract operator chosen by the user
    pub operator: ComparisonOperator,
    /// Dialect token from the operator table
    pub native: &'static str,
    /// Coerced value
    pub value: Value,
}

impl Condition {
    /// Create a new condition
    pub fn new(
        field: impl Into<String>,
        operator: ComparisonOperator,
        native: &'static str,
        value: Value,
    ) -> Self {
        Condition {
            field: field.into(),
            operator,
            native,
            value,
        }
    }
}
