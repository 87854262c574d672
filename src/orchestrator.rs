//! Reactive filter orchestrator
//!
//! Owns one [`FilterState`] and a consumer callback. Every mutation goes
//! through [`FilterOrchestrator::recompute`], which re-derives the document
//! with [`compile`] and hands it to the consumer before returning. Nothing is
//! cached besides the last document.

use crate::compile::compile;
use crate::config::CompilerConfig;
use crate::state::{FilterEntry, FilterState};
use serde_json::Value;
use silo_filter_core::{BackendDialect, ComparisonOperator, LogicalCombinator, MetadataField};
use std::fmt;
use tracing::debug;

type Consumer = Box<dyn FnMut(Option<&Value>)>;

/// Filter state plus change notification
///
/// ```
/// use silo_filter::prelude::*;
///
/// let mut filters = FilterOrchestrator::new(|_doc: Option<&Value>| {});
/// filters.configure(vec![MetadataField::new("lang", FieldType::Str)], None);
/// filters.set_value("lang", "en");
/// assert_eq!(filters.document(), Some(&json!({"lang": {"eq": "en"}})));
/// ```
pub struct FilterOrchestrator {
    state: FilterState,
    document: Option<Value>,
    consumer: Consumer,
}

impl FilterOrchestrator {
    /// Create an orchestrator with no schema.
    ///
    /// The consumer is called once immediately with `None`.
    pub fn new<F>(consumer: F) -> Self
    where
        F: FnMut(Option<&Value>) + 'static,
    {
        let mut orchestrator = FilterOrchestrator {
            state: FilterState::default(),
            document: None,
            consumer: Box::new(consumer),
        };
        orchestrator.recompute();
        orchestrator
    }

    /// Create an orchestrator configured from a [`CompilerConfig`]
    pub fn with_config<F>(config: &CompilerConfig, consumer: F) -> Self
    where
        F: FnMut(Option<&Value>) + 'static,
    {
        let mut orchestrator = Self::new(consumer);
        orchestrator.configure(config.fields.clone(), config.db_type.as_deref());
        orchestrator
    }

    // =========================================================================
    // Input contract
    // =========================================================================

    /// Supply the active collection's schema and `dbType`.
    ///
    /// A different field list resets every row and the combinator.
    pub fn configure(&mut self, fields: Vec<MetadataField>, db_type: Option<&str>) {
        if self.state.configure(fields, db_type) {
            debug!(
                fields = self.state.fields().len(),
                dialect = %self.state.dialect(),
                "schema changed, filter state reset"
            );
        }
        self.recompute();
    }

    // =========================================================================
    // Row and combinator edits
    // =========================================================================

    /// Change a row's text
    pub fn set_value(&mut self, field: &str, raw: impl Into<String>) {
        self.state.set_value(field, raw);
        self.recompute();
    }

    /// Change a row's operator by token, as a UI select would.
    ///
    /// Tokens outside the operator table are kept and drop the row at compile time.
    pub fn set_operator(&mut self, field: &str, token: impl Into<String>) {
        self.state.set_operator(field, token);
        self.recompute();
    }

    /// Change a row's operator
    pub fn set_comparison(&mut self, field: &str, op: ComparisonOperator) {
        self.set_operator(field, op.as_str());
    }

    /// Set the combinator
    pub fn set_combinator(&mut self, combinator: LogicalCombinator) {
        self.state.set_combinator(combinator);
        self.recompute();
    }

    /// Flip between AND and OR
    pub fn toggle_combinator(&mut self) -> LogicalCombinator {
        let next = self.state.combinator().toggled();
        self.set_combinator(next);
        next
    }

    /// Remove a row
    pub fn clear_field(&mut self, field: &str) {
        self.state.clear_field(field);
        self.recompute();
    }

    /// Remove every row and return to AND
    pub fn reset(&mut self) {
        self.state.reset();
        self.recompute();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Last compiled document
    pub fn document(&self) -> Option<&Value> {
        self.document.as_ref()
    }

    /// Underlying state
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Declared fields
    pub fn fields(&self) -> &[MetadataField] {
        self.state.fields()
    }

    /// Active dialect
    pub fn dialect(&self) -> BackendDialect {
        self.state.dialect()
    }

    /// Current combinator
    pub fn combinator(&self) -> LogicalCombinator {
        self.state.combinator()
    }

    /// Row for a field
    pub fn entry(&self, field: &str) -> Option<&FilterEntry> {
        self.state.entry(field)
    }

    fn recompute(&mut self) {
        self.document = compile(&self.state);
        (self.consumer)(self.document.as_ref());
    }
}

impl fmt::Debug for FilterOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterOrchestrator")
            .field("state", &self.state)
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}
