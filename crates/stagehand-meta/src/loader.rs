//! Config file discovery and loading
//!
//! A config file may name a `parent_config`. The parent is loaded first and
//! the child is deep-merged over it, so a team can share one base file and
//! keep per-machine overrides (project roots, key directories) separate:
//!
//! ```text
//! ~/.stagehand.json          { "parent_config": "shared/base.json", ... }
//! ~/shared/base.json         { "projects": { ... }, "keys": { ... } }
//! ```

use crate::config::RawConfig;
use crate::{Error, Result};
use serde_json::Value;
use stagehand_fs::{ConfigStore, NormalizedPath};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "STAGEHAND_CONFIG";

/// File name looked up in the home directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = ".stagehand.json";

const PARENT_KEY: &str = "parent_config";

/// Loads a [`RawConfig`] from disk.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    store: ConfigStore,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            store: ConfigStore::new(),
        }
    }

    /// Pick the config file to load.
    ///
    /// Precedence: `explicit` path, then [`CONFIG_ENV_VAR`], then
    /// [`DEFAULT_CONFIG_FILE`] in the home directory.
    pub fn locate(explicit: Option<&Path>) -> Result<NormalizedPath> {
        Self::locate_with(
            explicit,
            std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from),
            dirs::home_dir(),
        )
    }

    /// [`ConfigLoader::locate`] with the environment passed in.
    pub fn locate_with(
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> Result<NormalizedPath> {
        if let Some(path) = explicit {
            return Ok(NormalizedPath::new(path));
        }
        if let Some(path) = from_env.filter(|p| !p.as_os_str().is_empty()) {
            tracing::debug!(?path, "Using config from {}", CONFIG_ENV_VAR);
            return Ok(NormalizedPath::new(path));
        }
        let home = home.ok_or(Error::NoHomeDirectory)?;
        Ok(NormalizedPath::new(home.join(DEFAULT_CONFIG_FILE)))
    }

    /// Load `path`, following its `parent_config` chain.
    pub fn load(&self, path: &NormalizedPath) -> Result<RawConfig> {
        let mut chain = Vec::new();
        let mut merged = self.load_chain(path, &mut chain)?;
        if let Value::Object(map) = &mut merged {
            map.remove(PARENT_KEY);
        }

        serde_json::from_value(merged).map_err(|e| Error::InvalidConfig {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    fn load_chain(&self, path: &NormalizedPath, chain: &mut Vec<NormalizedPath>) -> Result<Value> {
        if chain.contains(path) {
            return Err(Error::ParentCycle {
                path: path.to_native(),
            });
        }
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_native(),
            });
        }
        chain.push(path.clone());

        let child: Value = self.store.load(path)?;
        let parent = match child.get(PARENT_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(parent)) => Some(parent.clone()),
            Some(other) => {
                return Err(Error::InvalidConfig {
                    path: path.to_native(),
                    message: format!("{PARENT_KEY} must be a string, found {other}"),
                });
            }
        };

        let Some(parent) = parent else {
            return Ok(child);
        };

        let parent_path = match path.parent() {
            Some(dir) => NormalizedPath::new(&parent).absolutize(&dir),
            None => NormalizedPath::new(&parent),
        };
        tracing::debug!(child = %path, parent = %parent_path, "Following parent_config");

        let mut base = self.load_chain(&parent_path, chain)?;
        deep_merge(&mut base, &child);
        Ok(base)
    }
}

/// Deep merge two JSON values
///
/// If both values are objects, merge them recursively with `other` taking precedence.
/// Otherwise, `other` replaces `base`.
pub fn deep_merge(base: &mut Value, other: &Value) {
    match (base, other) {
        (Value::Object(base_map), Value::Object(other_map)) => {
            for (key, other_val) in other_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    deep_merge(base_val, other_val);
                } else {
                    base_map.insert(key.clone(), other_val.clone());
                }
            }
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}
