//! Filesystem abstraction for stagehand
//!
//! Provides normalized path handling, read-only existence probes and
//! format-agnostic configuration loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod probe;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use probe::{FileSystem, OsFileSystem};
