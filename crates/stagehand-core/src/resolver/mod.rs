//! Configuration resolution pipeline
//!
//! Resolution runs four steps in a fixed order:
//!
//! 1. **Root** - an explicit input path or the working directory fixes `root_dir`
//! 2. **Project** - look up, synthesize or match the project and check its directory
//! 3. **Stage/key** - only when the command needs it; locate scripts and the key package
//! 4. **Output** - split the output path into folder and file
//!
//! The first failing step aborts the whole resolution.

mod output;
mod project;
mod root;
mod stage;

pub use output::{OutputKind, OutputSpec};

use crate::{Result, SelectedOptions};
use serde::Serialize;
use stagehand_fs::{FileSystem, NormalizedPath, OsFileSystem};
use stagehand_meta::{KeyRef, RawConfig, ScriptSpec, StageMethod, StageSpec};
use std::collections::BTreeMap;

/// The fully validated configuration handed to build and deploy steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Absolute working root.
    pub root_dir: NormalizedPath,

    pub project: ResolvedProject,

    /// Set only when staging was requested and a stage applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<ResolvedStage>,

    /// Set only when the resolved stage (or its project) references a key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<ResolvedKey>,

    pub out: OutputSpec,
}

/// A project with its directory made absolute and its stage method defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedProject {
    /// Configured id; `None` for a project synthesized from the command line.
    pub id: Option<String>,

    pub directory: NormalizedPath,

    pub stage_method: StageMethod,

    pub stages: BTreeMap<String, StageSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_stage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_dir: Option<NormalizedPath>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Only set when the command applies excludes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excludes: Option<Vec<String>>,
}

impl ResolvedProject {
    /// Name used in error messages.
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<command line>")
    }
}

/// The selected stage after inheriting project defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStage {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<ScriptSpec>,

    /// The key reference in effect, own or inherited from the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyRef>,
}

/// A signing key located on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedKey {
    /// Key table id; `None` for a key given inline.
    pub id: Option<String>,

    /// Absolute path of an existing key package.
    pub keyed_pkg: NormalizedPath,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Resolves one [`RawConfig`] against one set of [`SelectedOptions`].
///
/// Holds no state beyond its borrowed inputs; build a fresh one per call.
pub struct Resolver<'a, F: FileSystem = OsFileSystem> {
    raw: &'a RawConfig,
    options: &'a SelectedOptions,
    fs: F,
}

impl<'a> Resolver<'a> {
    /// Create a resolver that probes the real filesystem.
    pub fn new(raw: &'a RawConfig, options: &'a SelectedOptions) -> Self {
        Self::with_fs(raw, options, OsFileSystem)
    }
}

impl<'a, F: FileSystem> Resolver<'a, F> {
    /// Create a resolver with a custom filesystem probe.
    ///
    /// Tests use this to pin the working directory.
    pub fn with_fs(raw: &'a RawConfig, options: &'a SelectedOptions, fs: F) -> Self {
        Self { raw, options, fs }
    }

    /// Run the pipeline.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let cwd = self.fs.current_dir()?;

        let explicit_root = root::resolve_root(&self.options.source, &cwd);

        let mut project = project::resolve_project(
            self.raw,
            self.options,
            explicit_root.as_ref(),
            &cwd,
            &self.fs,
        )?;
        if !self.options.apply_excludes {
            project.excludes = None;
        }

        // An explicit input path wins over the project directory
        let root_dir = explicit_root.unwrap_or_else(|| project.directory.clone());
        tracing::debug!(%root_dir, project = project.label(), "Resolved project");

        let (stage, key) = if self.options.needs_stage {
            stage::resolve_stage(self.raw, &project, self.options.stage.as_deref(), &cwd, &self.fs)?
        } else {
            (None, None)
        };

        let out = output::resolve_output(
            self.options.out.as_deref(),
            self.raw.defaults.out_folder.as_ref(),
            &root_dir,
        );

        Ok(ResolvedConfig {
            root_dir,
            project,
            stage,
            key,
            out,
        })
    }
}

/// Resolve against the real filesystem.
pub fn resolve(raw: &RawConfig, options: &SelectedOptions) -> Result<ResolvedConfig> {
    Resolver::new(raw, options).resolve()
}
