//! Core types for the metadata filter compiler
//!
//! This crate defines the vocabulary shared by every other crate:
//! - [`MetadataField`] / [`FieldType`]: the collection schema a filter is written against
//! - [`ComparisonOperator`] / [`LogicalCombinator`]: what a user can pick per row and globally
//! - [`BackendDialect`]: which vector store the compiled document targets
//! - [`coerce`]: best-effort conversion of raw input into typed JSON scalars
//!
//! Nothing in here performs I/O and nothing on the compile path can fail.

#![warn(missing_docs)]

pub mod coerce;
pub mod dialect;
pub mod error;
pub mod field;
pub mod operator;

pub use coerce::{coerce, coerce_value, Coerced};
pub use dialect::BackendDialect;
pub use error::{FilterError, FilterResult};
pub use field::{validate_fields, FieldType, MetadataField};
pub use operator::{ComparisonOperator, LogicalCombinator};
