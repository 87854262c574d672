//! Filter document builder trait
//!
//! Defines the interface every dialect implements. Builders are stateless:
//! the same conditions and combinator always produce the same document.

use crate::condition::Condition;
use serde_json::Value;
use silo_filter_core::{BackendDialect, LogicalCombinator};

/// Trait for dialect-specific filter document assembly
pub trait FilterDocumentBuilder: Send + Sync {
    /// Dialect this builder emits
    fn dialect(&self) -> BackendDialect;

    /// Assemble the document
    ///
    /// Conditions arrive in field declaration order and carry tokens already
    /// mapped for [`Self::dialect`]. Returns `None` when nothing is active.
    fn build(&self, conditions: &[Condition], combinator: LogicalCombinator) -> Option<Value>;
}

/// Factory for dialect builders
///
/// Switching dialects never requires the orchestrator to know which builder
/// it is talking to.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuilderFactory;

impl BuilderFactory {
    /// Builder for a dialect
    pub fn for_dialect(dialect: BackendDialect) -> &'static dyn FilterDocumentBuilder {
        match dialect {
            BackendDialect::PgVector => &crate::pgvector::PgVectorBuilder,
            BackendDialect::Qdrant => &crate::qdrant::QdrantBuilder,
        }
    }
}
