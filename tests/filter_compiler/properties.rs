//! Property Tests
//!
//! Structural guarantees that must hold for any input.

use crate::top_keys;
use proptest::prelude::*;
use silo_filter::prelude::*;

fn field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        Just(FieldType::Int),
        Just(FieldType::Float),
        Just(FieldType::Bool),
        Just(FieldType::Str),
        Just(FieldType::Date),
    ]
}

fn operator() -> impl Strategy<Value = ComparisonOperator> {
    prop::sample::select(ComparisonOperator::ALL.to_vec())
}

fn combinator() -> impl Strategy<Value = LogicalCombinator> {
    prop_oneof![Just(LogicalCombinator::And), Just(LogicalCombinator::Or)]
}

/// Up to six fields with unique names, each with an optional raw value and an operator
fn filter_rows() -> impl Strategy<Value = Vec<(MetadataField, Option<String>, ComparisonOperator)>> {
    prop::collection::vec(
        (field_type(), prop::option::of("[ a-z0-9.]{0,8}"), operator()),
        0..6,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (t, v, op))| (MetadataField::new(format!("f{}", i), t), v, op))
            .collect()
    })
}

fn build_state(
    rows: &[(MetadataField, Option<String>, ComparisonOperator)],
    db_type: Option<&str>,
    combinator: LogicalCombinator,
) -> FilterState {
    let fields = rows.iter().map(|(f, _, _)| f.clone()).collect();
    let mut state = FilterState::new(fields, db_type).with_combinator(combinator);
    for (field, value, op) in rows {
        if let Some(v) = value {
            state = state.with_filter(&field.name, *op, v.clone());
        }
    }
    state
}

fn active(rows: &[(MetadataField, Option<String>, ComparisonOperator)]) -> usize {
    rows.iter()
        .filter(|(_, v, _)| v.as_deref().is_some_and(|v| !v.trim().is_empty()))
        .count()
}

proptest! {
    #[test]
    fn prop_pgvector_shape_follows_active_count(rows in filter_rows(), c in combinator()) {
        let state = build_state(&rows, Some("PGVECTOR"), c);
        let doc = compile(&state);
        match active(&rows) {
            0 => prop_assert_eq!(doc, None),
            1 => {
                let doc = doc.unwrap();
                let keys = top_keys(&doc);
                prop_assert_eq!(keys.len(), 1);
                prop_assert!(keys[0].starts_with('f'));
            }
            n => {
                let doc = doc.unwrap();
                let wrapper = match c {
                    LogicalCombinator::And => "$and",
                    LogicalCombinator::Or => "$or",
                };
                prop_assert_eq!(top_keys(&doc), vec![wrapper.to_string()]);
                prop_assert_eq!(doc[wrapper].as_array().unwrap().len(), n);
            }
        }
    }

    #[test]
    fn prop_qdrant_ne_always_in_must_not(rows in filter_rows(), c in combinator()) {
        let state = build_state(&rows, Some("QDRANT"), c);
        let doc = compile(&state);
        let negated = rows
            .iter()
            .filter(|(_, v, op)| {
                *op == ComparisonOperator::Ne && v.as_deref().is_some_and(|v| !v.trim().is_empty())
            })
            .count();
        let total = active(&rows);

        if total == 0 {
            prop_assert_eq!(doc, None);
        } else {
            let doc = doc.unwrap();
            let count = |key: &str| doc.get(key).and_then(Value::as_array).map_or(0, Vec::len);
            prop_assert_eq!(count("must_not"), negated);
            let positive = total - negated;
            match c {
                LogicalCombinator::And => {
                    prop_assert_eq!(count("must"), positive);
                    prop_assert!(doc.get("should").is_none());
                }
                LogicalCombinator::Or => {
                    prop_assert_eq!(count("should"), positive);
                    prop_assert!(doc.get("must").is_none());
                }
            }
            for list in doc.as_object().unwrap().values() {
                prop_assert!(!list.as_array().unwrap().is_empty());
                for clause in list.as_array().unwrap() {
                    prop_assert!(clause["key"].as_str().unwrap().starts_with("metadata."));
                }
            }
        }
    }

    #[test]
    fn prop_compile_is_deterministic(rows in filter_rows(), c in combinator(), qdrant in any::<bool>()) {
        let db_type = if qdrant { Some("QDRANT") } else { None };
        let a = build_state(&rows, db_type, c);
        let b = build_state(&rows, db_type, c);
        prop_assert_eq!(compile(&a), compile(&b));
    }
}
