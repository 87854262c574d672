//! Filter document builders
//!
//! This crate turns a list of coerced, dialect-mapped [`Condition`]s into the
//! nested filter document a vector store understands:
//!
//! | Dialect | One condition | Several conditions |
//! |---------|---------------|--------------------|
//! | Postgres-vector | `{"f": {"eq": v}}` | `{"$and": [...]}` / `{"$or": [...]}` |
//! | Qdrant | `{"must": [...]}` | `{"must" or "should": [...], "must_not": [...]}` |
//!
//! Builders are selected through [`BuilderFactory`] so callers never match on
//! the dialect themselves.

#![warn(missing_docs)]

pub mod builder;
pub mod condition;
pub mod operator_map;
pub mod pgvector;
pub mod qdrant;

pub use builder::{BuilderFactory, FilterDocumentBuilder};
pub use condition::Condition;
pub use operator_map::{native_token, resolve_operator};
pub use pgvector::PgVectorBuilder;
pub use qdrant::QdrantBuilder;
