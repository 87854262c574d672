//! Backend dialect selection
//!
//! The dialect is never stored. It is derived from the collection's `dbType`
//! string every time the compiler is configured.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Query dialect of the vector store behind a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BackendDialect {
    /// Postgres vector-extension style filter objects
    #[default]
    PgVector,
    /// Qdrant must/should/must_not filters
    Qdrant,
}

impl BackendDialect {
    /// Derive the dialect from a `dbType` string.
    ///
    /// Only `QDRANT` (any case) selects Qdrant.
    /// Everything else, including `None`, falls back to Postgres-vector.
    pub fn from_db_type(db_type: Option<&str>) -> Self {
        match db_type {
            Some(t) if t.eq_ignore_ascii_case("QDRANT") => BackendDialect::Qdrant,
            _ => BackendDialect::PgVector,
        }
    }

    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            BackendDialect::PgVector => "pgvector",
            BackendDialect::Qdrant => "qdrant",
        }
    }
}

impl fmt::Display for BackendDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
