//! Postgres-vector filter documents
//!
//! - no conditions: `None`
//! - one condition: `{"field": {"op": value}}`, never wrapped
//! - several: `{"$and": [...]}` or `{"$or": [...]}`
//!
//! The single-condition form is not an optimization. The consuming query
//! engine does not treat a one-element `$and`/`$or` the same way, so the bare
//! form must be emitted.

use crate::builder::FilterDocumentBuilder;
use crate::condition::Condition;
use serde_json::{Map, Value};
use silo_filter_core::{BackendDialect, LogicalCombinator};

/// Builder for the Postgres-vector dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct PgVectorBuilder;

impl PgVectorBuilder {
    /// Wrapper key for a combinator
    pub fn wrapper_key(combinator: LogicalCombinator) -> &'static str {
        match combinator {
            LogicalCombinator::And => "$and",
            LogicalCombinator::Or => "$or",
        }
    }

    fn clause(condition: &Condition) -> Value {
        let mut op = Map::new();
        op.insert(condition.native.to_string(), condition.value.clone());
        let mut clause = Map::new();
        clause.insert(condition.field.clone(), Value::Object(op));
        Value::Object(clause)
    }
}

impl FilterDocumentBuilder for PgVectorBuilder {
    fn dialect(&self) -> BackendDialect {
        BackendDialect::PgVector
    }

    fn build(&self, conditions: &[Condition], combinator: LogicalCombinator) -> Option<Value> {
        match conditions {
            [] => None,
            [single] => Some(Self::clause(single)),
            many => {
                let clauses = many.iter().map(Self::clause).collect();
                let mut doc = Map::new();
                doc.insert(
                    Self::wrapper_key(combinator).to_string(),
                    Value::Array(clauses),
                );
                Some(Value::Object(doc))
            }
        }
    }
}
