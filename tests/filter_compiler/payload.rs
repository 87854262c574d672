//! Search Payload Tests
//!
//! Compiled documents travel to search endpoints under `filter_metadata`.

use crate::category_year_schema;
use silo_filter::prelude::*;
use silo_filter::{attach_filter_metadata, SearchPayload, FILTER_METADATA_KEY};

#[test]
fn test_compiled_document_attached_to_payload() {
    let state = FilterState::new(category_year_schema(), Some("QDRANT"))
        .with_filter("year", ComparisonOperator::Gt, "2001");
    let mut payload = json!({"query": "release notes", "k": 10});
    attach_filter_metadata(&mut payload, compile(&state).as_ref());
    assert_eq!(
        payload[FILTER_METADATA_KEY],
        json!({"must": [{"key": "metadata.year", "range": {"gt": 2001}}]})
    );
}

#[test]
fn test_inactive_filter_is_omitted_from_payload() {
    let state = FilterState::new(category_year_schema(), None);
    let payload = SearchPayload::new("anything").with_filter(compile(&state));
    let json = serde_json::to_value(&payload).unwrap();
    assert!(json.get(FILTER_METADATA_KEY).is_none());
}
