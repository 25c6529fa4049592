//! Error types for stagehand-core

use stagehand_fs::NormalizedPath;

/// Result type for stagehand-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in stagehand-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration cannot be resolved for the selected options
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Filesystem error from stagehand-fs
    #[error(transparent)]
    Fs(#[from] stagehand_fs::Error),

    /// Loading error from stagehand-meta
    #[error(transparent)]
    Meta(#[from] stagehand_meta::Error),
}

/// Why a configuration could not be resolved.
///
/// Every variant names the offending id and/or path. None of these are
/// transient: the caller has to fix its input and resolve again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown project: {id}")]
    UnknownProject { id: String },

    #[error("Project {id} has no directory and no project_dir is configured")]
    MissingProjectDirectory { id: String },

    #[error("Project directory does not exist: {path} (project {id})")]
    DirectoryNotFound { id: String, path: NormalizedPath },

    #[error("No configured project matches working directory {cwd}")]
    NoMatchingProject { cwd: NormalizedPath },

    #[error("Unknown stage {stage} for project {project}")]
    UnknownStage { project: String, stage: String },

    #[error("Project {project} stages by script but {stage} has no script.stage/script.unstage commands")]
    MissingScriptCommands { project: String, stage: String },

    #[error("Unknown key: {id}")]
    UnknownKey { id: String },

    #[error("Key {key} is referenced but neither the project nor keys.key_dir sets a key directory")]
    MissingKeyDirectory { key: String },

    #[error("Key directory does not exist: {path} (key {key})")]
    KeyDirectoryNotFound { key: String, path: NormalizedPath },

    #[error("Key package does not exist: {path} (key {key})")]
    KeyNotFound { key: String, path: NormalizedPath },
}

impl ConfigError {
    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::UnknownProject { .. } => "unknown-project",
            Self::MissingProjectDirectory { .. } => "missing-directory",
            Self::DirectoryNotFound { .. } => "directory-not-found",
            Self::NoMatchingProject { .. } => "no-matching-project",
            Self::UnknownStage { .. } => "unknown-stage",
            Self::MissingScriptCommands { .. } => "missing-script-commands",
            Self::UnknownKey { .. } => "unknown-key",
            Self::MissingKeyDirectory { .. } => "missing-key-directory",
            Self::KeyDirectoryNotFound { .. } => "key-directory-not-found",
            Self::KeyNotFound { .. } => "key-not-found",
        }
    }
}
