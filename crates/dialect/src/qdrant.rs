//! Qdrant filter documents
//!
//! Qdrant filters are three condition lists:
//! - `must`: every condition holds (AND)
//! - `should`: at least one holds (OR)
//! - `must_not`: none holds
//!
//! Negated equality always lands in `must_not`, whatever the combinator.
//! Selecting OR with a "not equals" row therefore still excludes matches
//! rather than adding an alternative.
//!
//! Condition shapes:
//! - equality: `{"key": "metadata.<field>", "match": {"value": v}}`
//! - range: `{"key": "metadata.<field>", "range": {"<op>": v}}`

use crate::builder::FilterDocumentBuilder;
use crate::condition::Condition;
use crate::operator_map::{QDRANT_MATCH, QDRANT_MUST_NOT_MATCH};
use serde_json::{json, Map, Value};
use silo_filter_core::{BackendDialect, LogicalCombinator};
use tracing::trace;

/// Payload prefix under which document metadata is stored
pub const METADATA_KEY_PREFIX: &str = "metadata.";

/// Builder for the Qdrant dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct QdrantBuilder;

impl QdrantBuilder {
    /// Payload key for a metadata field
    pub fn payload_key(field: &str) -> String {
        format!("{}{}", METADATA_KEY_PREFIX, field)
    }

    fn clause(condition: &Condition) -> Value {
        let key = Self::payload_key(&condition.field);
        match condition.native {
            QDRANT_MATCH | QDRANT_MUST_NOT_MATCH => json!({
                "key": key,
                "match": { "value": condition.value }
            }),
            range_op => {
                let mut range = Map::new();
                range.insert(range_op.to_string(), condition.value.clone());
                json!({
                    "key": key,
                    "range": Value::Object(range)
                })
            }
        }
    }
}

impl FilterDocumentBuilder for QdrantBuilder {
    fn dialect(&self) -> BackendDialect {
        BackendDialect::Qdrant
    }

    fn build(&self, conditions: &[Condition], combinator: LogicalCombinator) -> Option<Value> {
        let mut must = Vec::new();
        let mut should = Vec::new();
        let mut must_not = Vec::new();

        for condition in conditions {
            let clause = Self::clause(condition);
            if condition.native == QDRANT_MUST_NOT_MATCH {
                if combinator == LogicalCombinator::Or {
                    trace!(field = %condition.field, "negated condition kept in must_not under OR");
                }
                must_not.push(clause);
            } else {
                match combinator {
                    LogicalCombinator::And => must.push(clause),
                    LogicalCombinator::Or => should.push(clause),
                }
            }
        }

        let mut doc = Map::new();
        for (name, list) in [("must", must), ("should", should), ("must_not", must_not)] {
            if !list.is_empty() {
                doc.insert(name.to_string(), Value::Array(list));
            }
        }

        if doc.is_empty() {
            None
        } else {
            Some(Value::Object(doc))
        }
    }
}
