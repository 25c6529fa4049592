//! Integration tests for configuration loading

use pretty_assertions::assert_eq;
use rstest::rstest;
use stagehand_fs::NormalizedPath;
use stagehand_meta::{ConfigLoader, Error, KeyRef, KeySpec, RawConfig, StageMethod};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to the shared test-fixtures directory.
fn fixture(name: &str) -> NormalizedPath {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/stagehand-meta -> ../../test-fixtures
    NormalizedPath::new(manifest_dir.join("../../test-fixtures/configs").join(name))
}

fn load(name: &str) -> stagehand_meta::Result<RawConfig> {
    ConfigLoader::new().load(&fixture(name))
}

#[rstest]
#[case("full.json")]
#[case("full.toml")]
fn test_load_project_tree(#[case] name: &str) {
    let config = load(name).unwrap();

    assert_eq!(config.projects.default.as_deref(), Some("project1"));
    assert_eq!(
        config.projects.project_dir,
        Some(NormalizedPath::new("/srv/channels"))
    );

    let project1 = config.projects.get("project1").unwrap();
    assert_eq!(project1.directory, Some(NormalizedPath::new("project1")));
    assert_eq!(project1.stage_method, Some(StageMethod::Script));

    let production = &project1.stages["production"];
    assert_eq!(production.key, Some(KeyRef::Id("a".into())));
    let script = production.script.as_ref().unwrap();
    assert_eq!(script.stage, "make stage");
    assert_eq!(script.unstage, "make unstage");

    assert_eq!(config.keys.key_dir, Some(NormalizedPath::new("/srv/keys")));
    assert_eq!(
        config.keys.get("a"),
        Some(&KeySpec {
            keyed_pkg: "a.pkg".into(),
            password: Some("password".into()),
        })
    );
}

#[test]
fn test_project_table_holds_only_projects() {
    let config = load("full.json").unwrap();

    let ids: Vec<&str> = config.projects.ids().collect();
    assert_eq!(ids, vec!["project1", "project2"]);
}

#[test]
fn test_inline_key_and_defaults() {
    let config = load("full.json").unwrap();

    let project2 = config.projects.get("project2").unwrap();
    assert_eq!(project2.default_stage.as_deref(), Some("beta"));
    assert_eq!(
        project2.key,
        Some(KeyRef::Inline(KeySpec {
            keyed_pkg: "inline.pkg".into(),
            password: Some("pw".into()),
        }))
    );
    assert_eq!(
        config.defaults.out_folder,
        Some(NormalizedPath::new("/tmp/out"))
    );
}

#[test]
fn test_empty_config_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.json");
    fs::write(&path, "{}").unwrap();

    let config = ConfigLoader::new().load(&NormalizedPath::new(&path)).unwrap();

    assert_eq!(config, RawConfig::default());
}

#[test]
fn test_parent_config_is_merged_under_child() {
    let config = load("nested/child.json").unwrap();

    // Child overrides the parent's scalar
    assert_eq!(
        config.projects.project_dir,
        Some(NormalizedPath::new("/home/dev/channels"))
    );
    // Parent-only entries survive, child entries are added
    assert!(config.projects.get("project1").is_some());
    assert!(config.projects.get("project2").is_some());
    assert!(config.keys.get("a").is_some());
}

#[test]
fn test_parent_config_cycle_is_rejected() {
    let result = load("cycle_a.json");

    match result {
        Err(Error::ParentCycle { path }) => assert!(path.ends_with("cycle_a.json")),
        other => panic!("expected ParentCycle, got {:?}", other),
    }
}

#[test]
fn test_parent_config_must_be_a_string() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");
    fs::write(&path, r#"{ "parent_config": 42 }"#).unwrap();

    let result = ConfigLoader::new().load(&NormalizedPath::new(&path));

    assert!(matches!(result, Err(Error::InvalidConfig { .. })));
}

#[test]
fn test_missing_parent_reports_parent_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");
    fs::write(&path, r#"{ "parent_config": "gone.json" }"#).unwrap();

    let result = ConfigLoader::new().load(&NormalizedPath::new(&path));

    match result {
        Err(Error::ConfigNotFound { path }) => assert!(path.ends_with("gone.json")),
        other => panic!("expected ConfigNotFound, got {:?}", other),
    }
}

#[test]
fn test_unknown_stage_method_is_invalid() {
    let result = load("bad_method.json");

    match result {
        Err(Error::InvalidConfig { message, .. }) => assert!(message.contains("git")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_missing_config_file() {
    let result = load("does-not-exist.json");
    assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
}
