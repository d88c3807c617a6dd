//! Schema and filesystem validation of overrides.

use kiln_config::{
    ConfigError, ConfigValidator, FsValidator, ResolveOverrides, SchemaValidator, validate_fs,
    validate_schema,
};
use std::fs;
use tempfile::TempDir;

fn scaffold(dir: &TempDir) {
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::create_dir_all(dir.path().join("public")).unwrap();
    fs::write(dir.path().join("src/main.js"), "import './App';").unwrap();
    fs::write(dir.path().join("public/index.html"), "<div id=\"root\"></div>").unwrap();
}

#[test]
fn schema_validator_accepts_defaults() {
    SchemaValidator
        .validate(&ResolveOverrides::default())
        .unwrap();
}

#[test]
fn schema_errors_carry_hints() {
    let mut overrides = ResolveOverrides::default();
    overrides.dev_server.host = "  ".into();

    match validate_schema(&overrides).unwrap_err() {
        ConfigError::SchemaValidation { message, hint } => {
            assert!(message.contains("dev_server.host"));
            assert!(hint.unwrap().contains("localhost"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fs_validator_runs_schema_checks_first() {
    let dir = TempDir::new().unwrap();
    scaffold(&dir);
    let overrides = ResolveOverrides::default().with_port(0);

    let err = FsValidator::new(dir.path()).validate(&overrides).unwrap_err();
    assert!(matches!(err, ConfigError::SchemaValidation { .. }));
}

#[test]
fn scaffolded_project_validates() {
    let dir = TempDir::new().unwrap();
    scaffold(&dir);
    validate_fs(&ResolveOverrides::default(), dir.path()).unwrap();
}

#[test]
fn missing_source_dir_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.js"), "").unwrap();
    let overrides = ResolveOverrides::default().with_entry("index.js");

    let err = validate_fs(&overrides, dir.path()).unwrap_err();
    match err {
        ConfigError::SourceDirNotFound { path } => assert!(path.ends_with("src")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn explicit_template_is_checked() {
    let dir = TempDir::new().unwrap();
    scaffold(&dir);
    let mut overrides = ResolveOverrides::default();
    overrides.template = Some("public/app.html".into());

    let err = validate_fs(&overrides, dir.path()).unwrap_err();
    assert!(err.to_string().contains("app.html"));
}

#[test]
fn entry_directory_is_not_an_entry() {
    let dir = TempDir::new().unwrap();
    scaffold(&dir);
    let overrides = ResolveOverrides::default().with_entry("src");

    let err = validate_fs(&overrides, dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::EntryNotFound { .. }));
}
