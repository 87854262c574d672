//! Metadata field schema
//!
//! A collection declares the typed attributes its documents carry. The
//! compiler treats this list as immutable input: it reads the declared type
//! to coerce raw values and the declaration order to order conditions.

use crate::error::{FilterError, FilterResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Declared scalar type of a metadata field
///
/// Unknown type names are preserved verbatim in [`FieldType::Other`] and
/// compile as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Integer (parsed as i64)
    Int,
    /// Floating point (parsed as f64)
    Float,
    /// Boolean ("true" is true, everything else false)
    Bool,
    /// Free text
    #[default]
    Str,
    /// Date, passed through as a string
    Date,
    /// Any type name the compiler does not recognize
    Other(String),
}

impl FieldType {
    /// Canonical type name
    pub fn name(&self) -> &str {
        match self {
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Str => "str",
            FieldType::Date => "date",
            FieldType::Other(name) => name,
        }
    }

    /// Parse from a type name (case-insensitive)
    ///
    /// Never fails: unrecognized names become [`FieldType::Other`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "int" | "integer" => FieldType::Int,
            "float" | "double" => FieldType::Float,
            "bool" | "boolean" => FieldType::Bool,
            "str" | "string" => FieldType::Str,
            "date" => FieldType::Date,
            _ => FieldType::Other(s.to_string()),
        }
    }

    /// True for types whose values are coerced into JSON numbers
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Int | FieldType::Float)
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        FieldType::parse(&s)
    }
}

impl From<&str> for FieldType {
    fn from(s: &str) -> Self {
        FieldType::parse(s)
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        t.name().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed, named attribute available for filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataField {
    /// Field name (unique within a collection)
    pub name: String,

    /// Declared scalar type
    #[serde(rename = "type", default)]
    pub field_type: FieldType,

    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MetadataField {
    /// Create a field without a description
    pub fn new(name: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        MetadataField {
            name: name.into(),
            field_type: field_type.into(),
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Check that every field has a non-empty, unique name.
pub fn validate_fields(fields: &[MetadataField]) -> FilterResult<()> {
    let mut seen = HashSet::with_capacity(fields.len());
    for field in fields {
        if field.name.trim().is_empty() {
            return Err(FilterError::EmptyFieldName);
        }
        if !seen.insert(field.name.as_str()) {
            return Err(FilterError::DuplicateField(field.name.clone()));
        }
    }
    Ok(())
}
