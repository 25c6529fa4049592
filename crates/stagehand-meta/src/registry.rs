//! Command capability table
//!
//! Each command declares which parts of the configuration it needs. The
//! table is an ordinary value built by the caller; nothing here is global,
//! so resolution receives plain flags instead of consulting a registry.

use std::collections::BTreeMap;

/// What a command needs from the resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandCapabilities {
    /// Reads the project source tree.
    pub source: bool,
    /// Talks to a device.
    pub device: bool,
    /// Needs stage and key resolution.
    pub stage: bool,
    /// Drops the project's `excludes` from the source it reads.
    pub exclude: bool,
}

/// Registry mapping command names to their capabilities.
///
/// # Example
///
/// ```
/// use stagehand_meta::{CommandCapabilities, CommandTable};
///
/// let mut table = CommandTable::new();
/// table.register(
///     "package",
///     CommandCapabilities { source: true, device: true, stage: true, exclude: true },
/// );
/// assert!(table.get("package").unwrap().stage);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    commands: BTreeMap<String, CommandCapabilities>,
}

impl CommandTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Create a table with the built-in commands registered.
    ///
    /// - `validate`: source
    /// - `build`: source, stage, exclude
    /// - `sideload`: source, device
    /// - `package`: source, device, stage, exclude
    /// - `key`: device, stage
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        table.register(
            "validate",
            CommandCapabilities {
                source: true,
                ..Default::default()
            },
        );
        table.register(
            "build",
            CommandCapabilities {
                source: true,
                stage: true,
                exclude: true,
                ..Default::default()
            },
        );
        table.register(
            "sideload",
            CommandCapabilities {
                source: true,
                device: true,
                ..Default::default()
            },
        );
        table.register(
            "package",
            CommandCapabilities {
                source: true,
                device: true,
                stage: true,
                exclude: true,
            },
        );
        table.register(
            "key",
            CommandCapabilities {
                device: true,
                stage: true,
                ..Default::default()
            },
        );
        table
    }

    /// Register a command. A previous entry with the same name is replaced.
    pub fn register(&mut self, name: impl Into<String>, capabilities: CommandCapabilities) {
        self.commands.insert(name.into(), capabilities);
    }

    pub fn get(&self, name: &str) -> Option<&CommandCapabilities> {
        self.commands.get(name)
    }

    /// Registered commands in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CommandCapabilities)> {
        self.commands.iter().map(|(name, caps)| (name.as_str(), caps))
    }

    /// Commands that read the project source tree.
    pub fn source_commands(&self) -> Vec<&str> {
        self.filtered(|caps| caps.source)
    }

    /// Commands that talk to a device.
    pub fn device_commands(&self) -> Vec<&str> {
        self.filtered(|caps| caps.device)
    }

    /// Commands that need stage and key resolution.
    pub fn stage_commands(&self) -> Vec<&str> {
        self.filtered(|caps| caps.stage)
    }

    /// Commands that honor the project's exclude list.
    pub fn exclude_commands(&self) -> Vec<&str> {
        self.filtered(|caps| caps.exclude)
    }

    fn filtered(&self, predicate: impl Fn(&CommandCapabilities) -> bool) -> Vec<&str> {
        self.iter()
            .filter(|(_, caps)| predicate(caps))
            .map(|(name, _)| name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
