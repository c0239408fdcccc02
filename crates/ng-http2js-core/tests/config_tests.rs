use indoc::indoc;
use ng_http2js_core::config::{ConfigOverrides, TransformConfig};
use ng_http2js_core::errors::TransformError;
use ng_http2js_core::file::InputFile;
use ng_http2js_core::pipeline::PipelineBuilder;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_load_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("http2js.json");
    fs::write(
        &path,
        r#"{ "moduleName": "app.templates", "stripPrefix": "src/", "prefix": "/static/" }"#,
    )
    .unwrap();

    let config = TransformConfig::from_file(&path).unwrap();
    assert_eq!(config.module_name, "app.templates");
    assert_eq!(config.effective_cache_id(), "$http");
    assert_eq!(config.strip_prefix.as_deref(), Some("src/"));
}

#[test]
fn test_load_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("http2js.yaml");
    let yaml = indoc! {r#"
        moduleName: app.templates
        cacheId: templates
        prefix: /static/
    "#};
    fs::write(&path, yaml).unwrap();

    let config = TransformConfig::from_file(&path).unwrap();
    assert_eq!(config.effective_cache_id(), "templates");
    assert_eq!(config.prefix.as_deref(), Some("/static/"));
    assert!(config.strip_prefix.is_none());
}

#[test]
fn test_missing_module_name_rejected() {
    let err = TransformConfig::from_json_str(r#"{ "cacheId": "x" }"#).unwrap_err();
    assert!(matches!(err, TransformError::Config(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = TransformConfig::from_file(&temp_dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, TransformError::Io(_)));
}

#[test]
fn test_empty_module_name_accepted() {
    let config = TransformConfig::from_json_str(r#"{ "moduleName": "" }"#).unwrap();
    let mut pipeline = PipelineBuilder::from_config(config).build();
    let artifact = pipeline.finalize().unwrap();
    assert!(artifact.contents.contains("angular.module('', [])"));
}

#[test]
fn test_overrides_drive_pipeline() {
    let mut config =
        TransformConfig::from_json_str(r#"{ "moduleName": "app", "prefix": "/old/" }"#).unwrap();
    config.merge(&ConfigOverrides {
        prefix: Some("/new/".to_string()),
        rename: Some(Arc::new(|url: &str| url.trim_end_matches(".html").to_string())),
        ..ConfigOverrides::default()
    });

    let mut pipeline = PipelineBuilder::from_config(config).build();
    pipeline.ingest(InputFile::new("a.html", "A"));
    assert_eq!(pipeline.requests()[0].uri, "/new/a");
}
