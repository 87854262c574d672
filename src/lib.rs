//! # silo-filter
//!
//! Metadata filter compiler for document silos backed by vector stores.
//!
//! Users pick `(field, operator, value)` rows and an AND/OR combinator; the
//! compiler turns them into the filter document of whichever store backs the
//! active collection:
//!
//! - **Postgres-vector**: `{"year": {"gte": 2020}}` or `{"$and": [...]}`
//! - **Qdrant**: `{"must": [{"key": "metadata.year", "range": {"gte": 2020}}]}`
//!
//! ## Quick Start
//!
//! ```
//! use silo_filter::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(None));
//! let sink = seen.clone();
//! let mut filters = FilterOrchestrator::new(move |doc: Option<&Value>| {
//!     *sink.borrow_mut() = doc.cloned();
//! });
//!
//! filters.configure(
//!     vec![MetadataField::new("year", FieldType::Int)],
//!     Some("QDRANT"),
//! );
//! filters.set_value("year", "2020");
//! filters.set_comparison("year", ComparisonOperator::Gte);
//!
//! assert_eq!(
//!     *seen.borrow(),
//!     Some(json!({"must": [{"key": "metadata.year", "range": {"gte": 2020}}]}))
//! );
//! ```
//!
//! ## Model
//!
//! The compiled document is a pure function of [`FilterState`]: see
//! [`compile`]. [`FilterOrchestrator`] owns one state, recomputes after every
//! mutation and hands the result to a consumer callback.

#![warn(missing_docs)]

mod compile;
mod config;
mod error;
mod orchestrator;
mod state;

pub mod prelude;

// Re-export main entry points
pub use compile::{active_conditions, compile};
pub use config::CompilerConfig;
pub use error::{Error, Result};
pub use orchestrator::FilterOrchestrator;
pub use state::{FilterEntry, FilterState};

// Re-export the shared vocabulary
pub use silo_filter_core::{
    BackendDialect, ComparisonOperator, FieldType, LogicalCombinator, MetadataField,
};
pub use silo_filter_dialect::Condition;
pub use silo_filter_wire::{attach_filter_metadata, SearchPayload, FILTER_METADATA_KEY};
