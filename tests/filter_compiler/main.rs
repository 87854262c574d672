//! Filter Compiler Integration Test Suite
//!
//! Exercises the public facade end to end: state compilation, the reactive
//! orchestrator, config loading and search payload attachment.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test filter_compiler
//!
//! # Qdrant scenarios only
//! cargo test --test filter_compiler scenarios::qdrant
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use silo_filter::prelude::*;

// Test modules
mod config_file;
mod orchestrator;
mod payload;
mod properties;
mod scenarios;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// The two-field schema used by most scenarios
pub fn category_year_schema() -> Vec<MetadataField> {
    vec![
        MetadataField::new("category", FieldType::Str),
        MetadataField::new("year", FieldType::Int),
    ]
}

/// One field of every declared type
pub fn mixed_schema() -> Vec<MetadataField> {
    vec![
        MetadataField::new("count", FieldType::Int),
        MetadataField::new("score", FieldType::Float),
        MetadataField::new("draft", FieldType::Bool),
        MetadataField::new("title", FieldType::Str),
        MetadataField::new("published", FieldType::Date),
    ]
}

/// Every document the consumer has received, oldest first
pub type Emissions = Rc<RefCell<Vec<Option<Value>>>>;

/// Orchestrator whose consumer records every emission
pub fn recording_orchestrator() -> (FilterOrchestrator, Emissions) {
    let emissions: Emissions = Rc::new(RefCell::new(Vec::new()));
    let sink = emissions.clone();
    let orchestrator = FilterOrchestrator::new(move |doc: Option<&Value>| {
        sink.borrow_mut().push(doc.cloned());
    });
    (orchestrator, emissions)
}

/// Sorted top-level keys of a compiled document
pub fn top_keys(doc: &Value) -> Vec<String> {
    let mut keys: Vec<String> = doc
        .as_object()
        .expect("filter documents are objects")
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}
