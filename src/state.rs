//! Filter state: the single input of compilation
//!
//! Holds the field schema, the per-field entries, the combinator and the
//! dialect derived from `dbType`. Operator choices are stored as the tokens
//! the user picked, so an unrecognized token survives until compile time and
//! only then drops its field.

use silo_filter_core::{BackendDialect, ComparisonOperator, LogicalCombinator, MetadataField};
use std::collections::HashMap;

/// Per-field filter row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterEntry {
    /// Raw text as typed; blank means the row is inactive
    pub raw_value: String,
    /// Operator token; `None` means the default (`eq`)
    pub operator: Option<String>,
}

impl FilterEntry {
    /// Trimmed value, or `None` when the row is inactive
    pub fn active_value(&self) -> Option<&str> {
        let trimmed = self.raw_value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Operator token to resolve, falling back to `eq`
    pub fn operator_token(&self) -> &str {
        self.operator
            .as_deref()
            .unwrap_or_else(|| ComparisonOperator::default().as_str())
    }
}

/// Complete compiler input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    fields: Vec<MetadataField>,
    db_type: Option<String>,
    dialect: BackendDialect,
    entries: HashMap<String, FilterEntry>,
    combinator: LogicalCombinator,
}

impl FilterState {
    /// Create a state for a schema and `dbType`
    pub fn new(fields: Vec<MetadataField>, db_type: Option<&str>) -> Self {
        FilterState {
            fields,
            db_type: db_type.map(str::to_string),
            dialect: BackendDialect::from_db_type(db_type),
            entries: HashMap::new(),
            combinator: LogicalCombinator::default(),
        }
    }

    // =========================================================================
    // Builder-style helpers
    // =========================================================================

    /// Set a value (builder style)
    pub fn with_value(mut self, field: &str, raw: impl Into<String>) -> Self {
        self.set_value(field, raw);
        self
    }

    /// Set an operator token (builder style)
    pub fn with_operator(mut self, field: &str, token: impl Into<String>) -> Self {
        self.set_operator(field, token);
        self
    }

    /// Set value and operator in one go (builder style)
    pub fn with_filter(self, field: &str, op: ComparisonOperator, raw: impl Into<String>) -> Self {
        self.with_value(field, raw).with_operator(field, op.as_str())
    }

    /// Set the combinator (builder style)
    pub fn with_combinator(mut self, combinator: LogicalCombinator) -> Self {
        self.combinator = combinator;
        self
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Replace the schema and `dbType`.
    ///
    /// A different field list resets entries and combinator. The dialect is
    /// always re-derived. Returns true if a reset happened.
    pub fn configure(&mut self, fields: Vec<MetadataField>, db_type: Option<&str>) -> bool {
        let changed = fields != self.fields;
        if changed {
            self.fields = fields;
            self.reset();
        }
        self.db_type = db_type.map(str::to_string);
        self.dialect = BackendDialect::from_db_type(db_type);
        changed
    }

    /// Set a row's raw text
    pub fn set_value(&mut self, field: &str, raw: impl Into<String>) {
        self.entries.entry(field.to_string()).or_default().raw_value = raw.into();
    }

    /// Set a row's operator token
    pub fn set_operator(&mut self, field: &str, token: impl Into<String>) {
        self.entries.entry(field.to_string()).or_default().operator = Some(token.into());
    }

    /// Set the combinator
    pub fn set_combinator(&mut self, combinator: LogicalCombinator) {
        self.combinator = combinator;
    }

    /// Remove a row entirely (value and operator)
    pub fn clear_field(&mut self, field: &str) -> bool {
        self.entries.remove(field).is_some()
    }

    /// Drop every row and return to AND
    pub fn reset(&mut self) {
        self.entries.clear();
        self.combinator = LogicalCombinator::default();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Declared fields, in declaration order
    pub fn fields(&self) -> &[MetadataField] {
        &self.fields
    }

    /// Raw `dbType` as configured
    pub fn db_type(&self) -> Option<&str> {
        self.db_type.as_deref()
    }

    /// Dialect derived from `dbType`
    pub fn dialect(&self) -> BackendDialect {
        self.dialect
    }

    /// Current combinator
    pub fn combinator(&self) -> LogicalCombinator {
        self.combinator
    }

    /// Row for a field, if one was ever touched
    pub fn entry(&self, field: &str) -> Option<&FilterEntry> {
        self.entries.get(field)
    }

    /// Number of rows with a non-blank value for a declared field
    pub fn active_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| {
                self.entries
                    .get(&f.name)
                    .and_then(FilterEntry::active_value)
                    .is_some()
            })
            .count()
    }
}
