//! Pure compilation of a [`FilterState`] into a filter document
//!
//! Steps, in order:
//! 1. short-circuit to `None` when the schema is empty
//! 2. walk declared fields, skipping blank rows
//! 3. resolve the operator token against the dialect table (unknown → drop)
//! 4. coerce the trimmed value to the declared type
//! 5. hand the conditions to the dialect's builder

use crate::state::FilterState;
use serde_json::Value;
use silo_filter_core::coerce;
use silo_filter_dialect::{resolve_operator, BuilderFactory, Condition};
use tracing::debug;

/// Collect the active conditions of a state, in field declaration order.
pub fn active_conditions(state: &FilterState) -> Vec<Condition> {
    let dialect = state.dialect();
    let mut conditions = Vec::with_capacity(state.fields().len());

    for field in state.fields() {
        let Some(entry) = state.entry(&field.name) else {
            continue;
        };
        let Some(raw) = entry.active_value() else {
            continue;
        };
        let token = entry.operator_token();
        let Some((operator, native)) = resolve_operator(dialect, token) else {
            debug!(field = %field.name, token, "unknown operator, dropping field");
            continue;
        };
        let coerced = coerce(&field.field_type, raw);
        conditions.push(Condition::new(
            field.name.clone(),
            operator,
            native,
            coerced.value,
        ));
    }

    conditions
}

/// Compile a state into its dialect's filter document.
///
/// Returns `None` when the schema is empty or no row is active.
pub fn compile(state: &FilterState) -> Option<Value> {
    if state.fields().is_empty() {
        return None;
    }
    let conditions = active_conditions(state);
    BuilderFactory::for_dialect(state.dialect()).build(&conditions, state.combinator())
}
