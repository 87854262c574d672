//! Config File Tests

use silo_filter::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_and_compile() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
db_type = "QDRANT"

[[fields]]
name = "category"
type = "str"

[[fields]]
name = "year"
type = "int"
"#
    )
    .unwrap();

    let config = CompilerConfig::load(file.path()).unwrap();
    assert_eq!(config.dialect(), BackendDialect::Qdrant);

    let mut o = FilterOrchestrator::with_config(&config, |_doc: Option<&Value>| {});
    o.set_value("category", "docs");
    assert_eq!(
        o.document(),
        Some(&json!({"must": [{"key": "metadata.category", "match": {"value": "docs"}}]}))
    );
}

#[test]
fn test_load_invalid_toml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[[fields]\nname = ").unwrap();
    let err = CompilerConfig::load(file.path()).unwrap_err();
    assert!(err.is_config());
}
