//! Error types for stagehand-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] stagehand_fs::Error),

    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("parent_config chain loops back to {path}")]
    ParentCycle { path: PathBuf },

    #[error("Could not locate a home directory for the default config")]
    NoHomeDirectory,
}
