//! Orchestrator Tests
//!
//! The consumer must see a fresh document after every mutation, and the
//! document must only depend on the current state.

use crate::{category_year_schema, recording_orchestrator};
use silo_filter::prelude::*;

#[test]
fn test_configure_twice_is_idempotent() {
    let (mut o, emissions) = recording_orchestrator();
    o.configure(category_year_schema(), Some("QDRANT"));
    o.set_value("category", "docs");

    o.configure(category_year_schema(), Some("QDRANT"));
    let first = emissions.borrow().last().cloned().unwrap();
    o.configure(category_year_schema(), Some("QDRANT"));
    let second = emissions.borrow().last().cloned().unwrap();

    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn test_document_matches_pure_compile() {
    let (mut o, _emissions) = recording_orchestrator();
    o.configure(category_year_schema(), None);
    o.set_value("category", "docs");
    o.set_comparison("year", ComparisonOperator::Gte);
    o.set_value("year", "2020");
    o.toggle_combinator();

    let expected = FilterState::new(category_year_schema(), None)
        .with_filter("category", ComparisonOperator::Eq, "docs")
        .with_filter("year", ComparisonOperator::Gte, "2020")
        .with_combinator(LogicalCombinator::Or);
    assert_eq!(o.document().cloned(), compile(&expected));
}

#[test]
fn test_operator_before_value_is_remembered() {
    let (mut o, emissions) = recording_orchestrator();
    o.configure(category_year_schema(), None);
    o.set_comparison("year", ComparisonOperator::Lt);
    assert_eq!(emissions.borrow().last().cloned().unwrap(), None);

    o.set_value("year", "1990");
    assert_eq!(o.document(), Some(&json!({"year": {"lt": 1990}})));
}

#[test]
fn test_emptying_a_value_removes_the_field_but_keeps_its_operator() {
    let (mut o, _emissions) = recording_orchestrator();
    o.configure(category_year_schema(), None);
    o.set_comparison("year", ComparisonOperator::Gt);
    o.set_value("year", "5");
    o.set_value("year", "");
    assert_eq!(o.document(), None);

    o.set_value("year", "6");
    assert_eq!(o.document(), Some(&json!({"year": {"gt": 6}})));
}

#[test]
fn test_unknown_operator_token_silently_drops_field() {
    let (mut o, _emissions) = recording_orchestrator();
    o.configure(category_year_schema(), Some("QDRANT"));
    o.set_value("year", "2020");
    o.set_operator("year", "around");
    assert_eq!(o.document(), None);

    o.set_operator("year", ">=");
    assert_eq!(
        o.document(),
        Some(&json!({"must": [{"key": "metadata.year", "range": {"gte": 2020}}]}))
    );
}

#[test]
fn test_collection_switch_resets_everything() {
    let (mut o, emissions) = recording_orchestrator();
    o.configure(category_year_schema(), None);
    o.set_value("category", "docs");
    o.set_combinator(LogicalCombinator::Or);

    o.configure(vec![MetadataField::new("lang", FieldType::Str)], Some("QDRANT"));
    assert_eq!(emissions.borrow().last().cloned().unwrap(), None);
    assert_eq!(o.combinator(), LogicalCombinator::And);
    assert_eq!(o.dialect(), BackendDialect::Qdrant);
    assert!(o.entry("category").is_none());
}

#[test]
fn test_absent_schema_short_circuits() {
    let (mut o, emissions) = recording_orchestrator();
    o.set_value("category", "docs");
    o.set_combinator(LogicalCombinator::Or);
    o.configure(Vec::new(), None);
    assert!(emissions.borrow().iter().all(Option::is_none));
}

#[test]
fn test_with_config() {
    let config = CompilerConfig::default()
        .with_fields(category_year_schema())
        .with_db_type("QDRANT");
    let mut o = FilterOrchestrator::with_config(&config, |_doc: Option<&Value>| {});
    assert_eq!(o.dialect(), BackendDialect::Qdrant);
    assert_eq!(o.fields().len(), 2);
    o.set_value("year", "1");
    assert!(o.document().is_some());
}
