//! Read-only filesystem probes
//!
//! Resolution only ever asks three questions of the filesystem: where am I,
//! is this a directory, is this a file. [`FileSystem`] captures exactly that
//! so callers can pin the working directory in tests instead of mutating the
//! process-wide one.

use crate::{Error, NormalizedPath, Result};

/// Existence checks and working-directory lookup.
pub trait FileSystem {
    /// Absolute, normalized working directory.
    fn current_dir(&self) -> Result<NormalizedPath>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &NormalizedPath) -> bool;

    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &NormalizedPath) -> bool;
}

/// The real operating-system filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn current_dir(&self) -> Result<NormalizedPath> {
        let cwd = std::env::current_dir().map_err(|source| Error::WorkingDirectory { source })?;
        // Strip the `\\?\` verbatim prefix Windows hands back
        Ok(NormalizedPath::new(dunce::simplified(&cwd)))
    }

    fn is_dir(&self, path: &NormalizedPath) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &NormalizedPath) -> bool {
        path.is_file()
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn current_dir(&self) -> Result<NormalizedPath> {
        (**self).current_dir()
    }

    fn is_dir(&self, path: &NormalizedPath) -> bool {
        (**self).is_dir(path)
    }

    fn is_file(&self, path: &NormalizedPath) -> bool {
        (**self).is_file(path)
    }
}
