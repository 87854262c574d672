//! Search payloads carrying a compiled filter
//!
//! Search endpoints expect the filter document under `filter_metadata`.
//! The key is the caller's convention; the compiler never sees it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload key under which the compiled document is sent
pub const FILTER_METADATA_KEY: &str = "filter_metadata";

/// Outbound similarity search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPayload {
    /// Free-text query to embed
    pub query: String,

    /// Number of results requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<usize>,

    /// Compiled metadata filter, omitted when no filter is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_metadata: Option<Value>,
}

impl SearchPayload {
    /// Create a payload with no limit and no filter
    pub fn new(query: impl Into<String>) -> Self {
        SearchPayload {
            query: query.into(),
            k: None,
            filter_metadata: None,
        }
    }

    /// Set the result limit
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    /// Set or clear the compiled filter
    pub fn with_filter(mut self, doc: Option<Value>) -> Self {
        self.filter_metadata = doc;
        self
    }
}

/// Attach a compiled document to an arbitrary JSON payload
///
/// `None` removes any stale filter. Non-object payloads are left untouched.
pub fn attach_filter_metadata(payload: &mut Value, doc: Option<&Value>) {
    let Some(obj) = payload.as_object_mut() else {
        return;
    };
    match doc {
        Some(d) => {
            obj.insert(FILTER_METADATA_KEY.to_string(), d.clone());
        }
        None => {
            obj.remove(FILTER_METADATA_KEY);
        }
    }
}
