//! JSON encoding and decoding for filter schemas and payloads

mod decode;
mod encode;
mod payload;

pub use decode::{decode_fields, DecodeError};
pub use encode::encode_document;
pub use payload::{attach_filter_metadata, SearchPayload, FILTER_METADATA_KEY};
