//! Configuration schema and loading for stagehand.
//!
//! This crate provides the typed raw configuration tree, the loader that
//! discovers config files and applies `parent_config` inheritance, and the
//! command capability table consulted before resolution.

pub mod config;
pub mod error;
pub mod loader;
pub mod registry;

pub use config::{
    Defaults, KeyRef, KeySpec, KeysSection, ProjectSpec, ProjectsSection, RawConfig, ScriptSpec,
    StageMethod, StageSpec,
};
pub use error::{Error, Result};
pub use loader::{CONFIG_ENV_VAR, ConfigLoader, DEFAULT_CONFIG_FILE, deep_merge};
pub use registry::{CommandCapabilities, CommandTable};
