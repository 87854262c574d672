//! Convenient imports for silo-filter.
//!
//! ```
//! use silo_filter::prelude::*;
//!
//! let state = FilterState::new(vec![MetadataField::new("tag", FieldType::Str)], None)
//!     .with_value("tag", "news");
//! assert_eq!(compile(&state), Some(json!({"tag": {"eq": "news"}})));
//! ```

// Main entry points
pub use crate::compile::compile;
pub use crate::orchestrator::FilterOrchestrator;
pub use crate::state::{FilterEntry, FilterState};

// Configuration
pub use crate::config::CompilerConfig;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use silo_filter_core::{
    BackendDialect, ComparisonOperator, FieldType, LogicalCombinator, MetadataField,
};

// Re-export serde_json for convenience
pub use serde_json::{json, Value};
