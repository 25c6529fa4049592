//! Integration tests for the command capability table

use stagehand_meta::{CommandCapabilities, CommandTable};

#[test]
fn test_builtins_split_by_capability() {
    let table = CommandTable::with_builtins();

    assert_eq!(
        table.source_commands(),
        vec!["build", "package", "sideload", "validate"]
    );
    assert_eq!(table.device_commands(), vec!["key", "package", "sideload"]);
    assert_eq!(table.stage_commands(), vec!["build", "key", "package"]);
    assert_eq!(table.exclude_commands(), vec!["build", "package"]);
}

#[test]
fn test_command_with_no_capabilities_is_listed_nowhere_else() {
    let mut table = CommandTable::new();
    table.register("test", CommandCapabilities::default());

    assert!(table.get("test").is_some());
    assert!(table.source_commands().is_empty());
    assert!(table.device_commands().is_empty());
    assert!(table.stage_commands().is_empty());
    assert!(table.exclude_commands().is_empty());
}

#[test]
fn test_command_with_all_capabilities() {
    let mut table = CommandTable::new();
    table.register(
        "test",
        CommandCapabilities {
            source: true,
            device: true,
            stage: true,
            exclude: true,
        },
    );

    assert_eq!(table.source_commands(), vec!["test"]);
    assert_eq!(table.device_commands(), vec!["test"]);
    assert_eq!(table.stage_commands(), vec!["test"]);
    assert_eq!(table.exclude_commands(), vec!["test"]);
}

#[test]
fn test_unknown_command_returns_none() {
    let table = CommandTable::with_builtins();
    assert!(table.get("deeplink").is_none());
}

#[test]
fn test_tables_are_independent() {
    let mut first = CommandTable::with_builtins();
    first.register("extra", CommandCapabilities::default());
    let second = CommandTable::with_builtins();

    assert!(first.get("extra").is_some());
    assert!(second.get("extra").is_none());
}
