//! Compiler configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! db_type = "QDRANT"
//! log = "silo_filter=debug"
//!
//! [[fields]]
//! name = "year"
//! type = "int"
//! description = "Publication year"
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use silo_filter_core::{validate_fields, BackendDialect, MetadataField};
use std::path::Path;
use tracing::info;

/// Schema and backend for one collection, plus logging defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerConfig {
    /// Backend `dbType` string; absent selects Postgres-vector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_type: Option<String>,

    /// Default log filter directive, used when `RUST_LOG` is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,

    /// Declared metadata fields
    #[serde(default)]
    pub fields: Vec<MetadataField>,
}

impl CompilerConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: CompilerConfig = toml::from_str(s)?;
        validate_fields(&config.fields)?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            fields = config.fields.len(),
            dialect = %config.dialect(),
            "loaded filter config"
        );
        Ok(config)
    }

    /// Dialect selected by `db_type`
    pub fn dialect(&self) -> BackendDialect {
        BackendDialect::from_db_type(self.db_type.as_deref())
    }

    /// Replace the field list
    pub fn with_fields(mut self, fields: Vec<MetadataField>) -> Self {
        self.fields = fields;
        self
    }

    /// Replace the `dbType`
    pub fn with_db_type(mut self, db_type: impl Into<String>) -> Self {
        self.db_type = Some(db_type.into());
        self
    }
}
