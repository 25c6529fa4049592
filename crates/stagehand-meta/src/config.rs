//! Raw configuration tree as authored
//!
//! These types mirror the config file one-to-one. Nothing here is validated
//! against the filesystem; that is the resolver's job. Unknown fields (device
//! entries, input mappings and the like) are ignored so the same file can
//! feed other collaborators.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stagehand_fs::NormalizedPath;

/// How a project switches its working tree into a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageMethod {
    /// Use the tree as it currently is.
    #[default]
    Current,

    /// Run the stage's `script.stage` before and `script.unstage` after.
    Script,
}

impl FromStr for StageMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "current" => Ok(StageMethod::Current),
            "script" => Ok(StageMethod::Script),
            _ => Err(format!("unknown stage method: {s}")),
        }
    }
}

impl fmt::Display for StageMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageMethod::Current => write!(f, "current"),
            StageMethod::Script => write!(f, "script"),
        }
    }
}

/// Root of the raw configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub projects: ProjectsSection,

    #[serde(default)]
    pub keys: KeysSection,

    #[serde(default)]
    pub defaults: Defaults,
}

/// The `projects` table: shared settings plus one entry per project id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsSection {
    /// Parent directory that relative project directories nest under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<NormalizedPath>,

    /// Project used in working-directory mode when nothing matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(flatten)]
    pub entries: BTreeMap<String, ProjectSpec>,
}

impl ProjectsSection {
    pub fn get(&self, id: &str) -> Option<&ProjectSpec> {
        self.entries.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A named, independently buildable unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSpec {
    /// Absolute, or relative to `projects.project_dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<NormalizedPath>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_method: Option<StageMethod>,

    #[serde(default)]
    pub stages: BTreeMap<String, StageSpec>,

    /// Stage used when none is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_stage: Option<String>,

    /// Key inherited by stages that name none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyRef>,

    /// Project-local key directory, preferred over `keys.key_dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_dir: Option<NormalizedPath>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excludes: Option<Vec<String>>,
}

/// A named deployment variant of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<ScriptSpec>,
}

/// Shell commands run around a scripted stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSpec {
    #[serde(default)]
    pub stage: String,

    #[serde(default)]
    pub unstage: String,
}

impl ScriptSpec {
    /// Both commands are present and not blank.
    pub fn is_complete(&self) -> bool {
        !self.stage.trim().is_empty() && !self.unstage.trim().is_empty()
    }
}

/// A stage's reference to a signing key.
///
/// Either the id of an entry in the `keys` table or the key inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyRef {
    Id(String),
    Inline(KeySpec),
}

/// The `keys` table: a shared key directory plus one entry per key id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeysSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_dir: Option<NormalizedPath>,

    #[serde(flatten)]
    pub entries: BTreeMap<String, KeySpec>,
}

impl KeysSection {
    pub fn get(&self, id: &str) -> Option<&KeySpec> {
        self.entries.get(id)
    }
}

/// A signing credential package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySpec {
    /// File name of the keyed package, joined onto the key directory.
    pub keyed_pkg: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Global defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Output folder used when no explicit output path is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_folder: Option<NormalizedPath>,
}
