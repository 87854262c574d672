//! Compilation Scenarios
//!
//! Fixed inputs with exact expected documents, per dialect.

use crate::{category_year_schema, mixed_schema, top_keys};
use silo_filter::prelude::*;

mod pgvector {
    use super::*;

    #[test]
    fn test_two_fields_and() {
        let state = FilterState::new(category_year_schema(), Some("PGVECTOR"))
            .with_filter("category", ComparisonOperator::Eq, "docs")
            .with_filter("year", ComparisonOperator::Gte, "2020");
        assert_eq!(
            compile(&state),
            Some(json!({"$and": [{"category": {"eq": "docs"}}, {"year": {"gte": 2020}}]}))
        );
    }

    #[test]
    fn test_two_fields_or() {
        let state = FilterState::new(category_year_schema(), None)
            .with_filter("category", ComparisonOperator::Ne, "draft")
            .with_filter("year", ComparisonOperator::Lt, "2000")
            .with_combinator(LogicalCombinator::Or);
        let doc = compile(&state).unwrap();
        assert_eq!(top_keys(&doc), ["$or"]);
        assert_eq!(
            doc,
            json!({"$or": [{"category": {"ne": "draft"}}, {"year": {"lt": 2000}}]})
        );
    }

    #[test]
    fn test_single_field_has_no_wrapper_under_either_combinator() {
        for combinator in [LogicalCombinator::And, LogicalCombinator::Or] {
            let state = FilterState::new(category_year_schema(), None)
                .with_value("year", "1999")
                .with_combinator(combinator);
            let doc = compile(&state).unwrap();
            assert_eq!(top_keys(&doc), ["year"]);
        }
    }

    #[test]
    fn test_every_type_coerces() {
        let state = FilterState::new(mixed_schema(), None)
            .with_value("count", "3")
            .with_value("score", "0.5")
            .with_value("draft", "True")
            .with_value("title", "Intro")
            .with_value("published", "2024-05-01");
        assert_eq!(
            compile(&state),
            Some(json!({"$and": [
                {"count": {"eq": 3}},
                {"score": {"eq": 0.5}},
                {"draft": {"eq": true}},
                {"title": {"eq": "Intro"}},
                {"published": {"eq": "2024-05-01"}}
            ]}))
        );
    }

    #[test]
    fn test_bad_number_degrades_to_string() {
        let state = FilterState::new(category_year_schema(), None)
            .with_filter("year", ComparisonOperator::Gt, "last year");
        assert_eq!(compile(&state), Some(json!({"year": {"gt": "last year"}})));
    }

    #[test]
    fn test_whitespace_value_is_absent() {
        let with_blank = FilterState::new(category_year_schema(), None)
            .with_value("category", "docs")
            .with_value("year", "   ");
        let without = FilterState::new(category_year_schema(), None).with_value("category", "docs");
        assert_eq!(compile(&with_blank), compile(&without));
    }

    #[test]
    fn test_nothing_active() {
        let state = FilterState::new(category_year_schema(), None);
        assert_eq!(compile(&state), None);
    }
}

mod qdrant {
    use super::*;

    #[test]
    fn test_two_fields_and() {
        let state = FilterState::new(category_year_schema(), Some("QDRANT"))
            .with_filter("category", ComparisonOperator::Eq, "docs")
            .with_filter("year", ComparisonOperator::Gte, "2020");
        assert_eq!(
            compile(&state),
            Some(json!({"must": [
                {"key": "metadata.category", "match": {"value": "docs"}},
                {"key": "metadata.year", "range": {"gte": 2020}}
            ]}))
        );
    }

    #[test]
    fn test_ne_with_or_goes_to_must_not_only() {
        let schema = vec![MetadataField::new("status", FieldType::Str)];
        let state = FilterState::new(schema, Some("QDRANT"))
            .with_filter("status", ComparisonOperator::Ne, "active")
            .with_combinator(LogicalCombinator::Or);
        assert_eq!(
            compile(&state),
            Some(json!({"must_not": [{"key": "metadata.status", "match": {"value": "active"}}]}))
        );
    }

    #[test]
    fn test_or_mixes_should_and_must_not() {
        let state = FilterState::new(category_year_schema(), Some("qdrant"))
            .with_filter("category", ComparisonOperator::Ne, "draft")
            .with_filter("year", ComparisonOperator::Lte, "2010")
            .with_combinator(LogicalCombinator::Or);
        assert_eq!(
            compile(&state),
            Some(json!({
                "should": [{"key": "metadata.year", "range": {"lte": 2010}}],
                "must_not": [{"key": "metadata.category", "match": {"value": "draft"}}]
            }))
        );
    }

    #[test]
    fn test_single_field_still_uses_lists() {
        let state = FilterState::new(category_year_schema(), Some("QDRANT")).with_value("year", "7");
        assert_eq!(
            compile(&state),
            Some(json!({"must": [{"key": "metadata.year", "match": {"value": 7}}]}))
        );
    }

    #[test]
    fn test_bool_match() {
        let state = FilterState::new(mixed_schema(), Some("QDRANT")).with_value("draft", "false");
        assert_eq!(
            compile(&state),
            Some(json!({"must": [{"key": "metadata.draft", "match": {"value": false}}]}))
        );
    }

    #[test]
    fn test_nothing_active() {
        let state = FilterState::new(category_year_schema(), Some("QDRANT"))
            .with_value("category", "")
            .with_value("year", "\t");
        assert_eq!(compile(&state), None);
    }
}
