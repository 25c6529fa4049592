//! End-to-end tests from a config file in test-fixtures/ to a resolved config

use pretty_assertions::assert_eq;
use stagehand_core::{ConfigError, Error, Resolver, SelectedOptions};
use stagehand_fs::NormalizedPath;
use stagehand_meta::{CommandTable, ConfigLoader, RawConfig, StageMethod};
use stagehand_test_utils::FakeFileSystem;
use std::path::PathBuf;

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/stagehand-core -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

fn load_full() -> RawConfig {
    let path = NormalizedPath::new(fixtures_dir().join("configs/full.json"));
    ConfigLoader::new().load(&path).unwrap()
}

/// The directories and files `full.json` expects on disk.
fn full_fs(cwd: &str) -> FakeFileSystem {
    FakeFileSystem::new(cwd)
        .with_dirs(["/srv/channels/project1", "/opt/project2", "/srv/keys"])
        .with_files(["/srv/keys/a.pkg", "/srv/keys/inline.pkg"])
}

#[test]
fn test_package_command_resolves_scripted_stage_and_key() {
    let config = load_full();
    let table = CommandTable::with_builtins();
    let options = SelectedOptions::working()
        .with_project("project1")
        .with_out("/tmp/out/channel.pkg")
        .for_command(table.get("package").unwrap());

    let resolved = Resolver::with_fs(&config, &options, full_fs("/home/dev"))
        .resolve()
        .unwrap();

    assert_eq!(resolved.root_dir.as_str(), "/srv/channels/project1");
    assert_eq!(resolved.project.stage_method, StageMethod::Script);
    assert_eq!(
        resolved.project.folders,
        Some(vec!["resources".to_string(), "source".to_string()])
    );
    assert_eq!(
        resolved.project.excludes,
        Some(vec!["source/tests".to_string()])
    );

    let stage = resolved.stage.unwrap();
    assert_eq!(stage.name, "production");
    assert_eq!(stage.script.unwrap().stage, "make stage");

    let key = resolved.key.unwrap();
    assert_eq!(key.keyed_pkg.as_str(), "/srv/keys/a.pkg");
    assert_eq!(key.password.as_deref(), Some("password"));

    assert_eq!(resolved.out.folder.as_str(), "/tmp/out");
    assert_eq!(resolved.out.file.as_deref(), Some("channel.pkg"));
}

#[test]
fn test_sideload_command_skips_stage() {
    let config = load_full();
    let table = CommandTable::with_builtins();
    let options = SelectedOptions::working().for_command(table.get("sideload").unwrap());

    let resolved = Resolver::with_fs(&config, &options, full_fs("/srv/channels/project1/source"))
        .resolve()
        .unwrap();

    assert_eq!(resolved.project.id.as_deref(), Some("project1"));
    assert_eq!(resolved.stage, None);
    assert_eq!(resolved.key, None);
    assert_eq!(resolved.project.excludes, None);
    // No --out: the configured default folder
    assert_eq!(resolved.out.folder.as_str(), "/tmp/out");
}

#[test]
fn test_working_directory_picks_absolute_project() {
    let config = load_full();
    let table = CommandTable::with_builtins();
    let options = SelectedOptions::working().for_command(table.get("build").unwrap());

    let resolved = Resolver::with_fs(&config, &options, full_fs("/opt/project2/components"))
        .resolve()
        .unwrap();

    assert_eq!(resolved.project.id.as_deref(), Some("project2"));
    assert_eq!(resolved.stage.unwrap().name, "beta");
    let key = resolved.key.unwrap();
    assert_eq!(key.id, None);
    assert_eq!(key.keyed_pkg.as_str(), "/srv/keys/inline.pkg");
}

#[test]
fn test_missing_key_package_on_disk() {
    let config = load_full();
    let options = SelectedOptions::working().with_project("project1").staged();
    let fs = FakeFileSystem::new("/home/dev")
        .with_dirs(["/srv/channels/project1", "/srv/keys"]);

    let result = Resolver::with_fs(&config, &options, fs).resolve();

    match result {
        Err(Error::Config(ConfigError::KeyNotFound { key, path })) => {
            assert_eq!(key, "a");
            assert_eq!(path.as_str(), "/srv/keys/a.pkg");
        }
        other => panic!("expected KeyNotFound, got {:?}", other),
    }
}

#[test]
fn test_resolved_config_serializes_to_json() {
    let config = load_full();
    let options = SelectedOptions::working().with_project("project1").staged();

    let resolved = Resolver::with_fs(&config, &options, full_fs("/home/dev"))
        .resolve()
        .unwrap();
    let json = serde_json::to_value(&resolved).unwrap();

    assert_eq!(json["root_dir"], "/srv/channels/project1");
    assert_eq!(json["project"]["stage_method"], "script");
    assert_eq!(json["key"]["keyed_pkg"], "/srv/keys/a.pkg");
    assert_eq!(json["out"]["folder"], "/tmp/out");
}

#[test]
fn test_explicit_excluding_applies_to_sideload() {
    let config = load_full();
    let table = CommandTable::with_builtins();
    let options = SelectedOptions::working()
        .with_project("project1")
        .excluding()
        .for_command(table.get("sideload").unwrap());

    let resolved = Resolver::with_fs(&config, &options, full_fs("/home/dev"))
        .resolve()
        .unwrap();

    assert_eq!(
        resolved.project.excludes,
        Some(vec!["source/tests".to_string()])
    );
}
