//! Output formatting.
//!
//! Human mode pretty-prints documents and numbers field lists; JSON mode is
//! compact and one value per line so it can be piped.

use serde_json::{json, Value};
use silo_filter::MetadataField;
use silo_filter_wire::encode_document;

use crate::state::Output;

/// Output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match output {
        Output::Document(doc) => format_document(doc.as_ref(), mode),
        Output::Fields(fields) => format_fields(fields, mode),
        Output::Text(text) => text.clone(),
        Output::Quit => String::new(),
    }
}

pub fn format_document(doc: Option<&Value>, mode: OutputMode) -> String {
    match (mode, doc) {
        (OutputMode::Json, _) => encode_document(doc),
        (OutputMode::Human, None) => "(no filter)".to_string(),
        (OutputMode::Human, Some(doc)) => {
            serde_json::to_string_pretty(doc).unwrap_or_else(|_| encode_document(Some(doc)))
        }
    }
}

pub fn format_fields(fields: &[MetadataField], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string(fields).unwrap_or_else(|_| "[]".to_string()),
        OutputMode::Human if fields.is_empty() => "(no fields)".to_string(),
        OutputMode::Human => fields
            .iter()
            .enumerate()
            .map(|(i, f)| match &f.description {
                Some(desc) => format!("{}) {} ({}) - {}", i + 1, f.name, f.field_type, desc),
                None => format!("{}) {} ({})", i + 1, f.name, f.field_type),
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn format_error(msg: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", msg),
        OutputMode::Json => json!({ "error": msg }).to_string(),
    }
}
