//! Error types for strict parsing of filter vocabulary
//!
//! Compilation itself never fails. These errors only surface from the
//! strict parsers used at the edges (config files, schema payloads, CLI input).

use thiserror::Error;

/// Errors raised by strict parsers and schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Operator token does not name a known comparison
    #[error("invalid operator: {0}")]
    InvalidOperator(String),

    /// Combinator token is neither AND nor OR
    #[error("invalid combinator: {0}")]
    InvalidCombinator(String),

    /// Two schema entries share the same field name
    #[error("duplicate metadata field: {0}")]
    DuplicateField(String),

    /// Schema entry with an empty or whitespace-only name
    #[error("metadata field name must not be empty")]
    EmptyFieldName,
}

/// Result type for core parsing operations.
pub type FilterResult<T> = std::result::Result<T, FilterError>;
