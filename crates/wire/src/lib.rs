//! Wire handling for silo-filter
//!
//! The compiler itself has no wire format. This crate covers the two JSON
//! surfaces around it:
//!
//! - **Inbound**: collection schemas as returned by the silo/repository API,
//!   decoded into [`MetadataField`](silo_filter_core::MetadataField) lists
//! - **Outbound**: search request payloads, where the compiled document
//!   travels under the `filter_metadata` key
//!
//! ## Examples
//!
//! ```
//! use silo_filter_wire::{attach_filter_metadata, decode_fields};
//! use serde_json::json;
//!
//! let fields = decode_fields(r#"[{"name":"year","type":"int"}]"#).unwrap();
//! assert_eq!(fields[0].name, "year");
//!
//! let mut payload = json!({"query": "rust"});
//! attach_filter_metadata(&mut payload, Some(&json!({"year": {"gte": 2020}})));
//! assert_eq!(payload["filter_metadata"]["year"]["gte"], 2020);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

pub use json::{
    attach_filter_metadata, decode_fields, encode_document, DecodeError, SearchPayload,
    FILTER_METADATA_KEY,
};
