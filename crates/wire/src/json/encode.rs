//! JSON encoding for compiled filter documents

use serde_json::Value;

/// Encode a compiled document as compact JSON
///
/// An absent document encodes as `null`.
pub fn encode_document(doc: Option<&Value>) -> String {
    match doc {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}
