//! [`FakeFileSystem`] for resolver tests.
//!
//! Tests must not call `std::env::set_current_dir`: the test harness runs
//! tests on parallel threads that share one process working directory.

use stagehand_fs::{FileSystem, NormalizedPath, OsFileSystem};
use std::collections::HashSet;

/// A filesystem probe with a fixed working directory.
///
/// In-memory by default: only paths registered with [`with_dirs`] and
/// [`with_files`] exist. [`over_disk`] additionally consults the real disk,
/// which pairs well with a [`crate::TestTree`].
///
/// [`with_dirs`]: FakeFileSystem::with_dirs
/// [`with_files`]: FakeFileSystem::with_files
/// [`over_disk`]: FakeFileSystem::over_disk
#[derive(Debug, Clone)]
pub struct FakeFileSystem {
    cwd: NormalizedPath,
    dirs: HashSet<NormalizedPath>,
    files: HashSet<NormalizedPath>,
    disk: bool,
}

impl FakeFileSystem {
    /// Purely in-memory filesystem rooted at `cwd`.
    pub fn new(cwd: impl Into<NormalizedPath>) -> Self {
        Self {
            cwd: cwd.into(),
            dirs: HashSet::new(),
            files: HashSet::new(),
            disk: false,
        }
    }

    /// Real existence checks with only the working directory pinned.
    pub fn over_disk(cwd: impl Into<NormalizedPath>) -> Self {
        Self {
            disk: true,
            ..Self::new(cwd)
        }
    }

    pub fn with_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<NormalizedPath>,
    {
        self.dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<NormalizedPath>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }
}

impl FileSystem for FakeFileSystem {
    fn current_dir(&self) -> stagehand_fs::Result<NormalizedPath> {
        Ok(self.cwd.clone())
    }

    fn is_dir(&self, path: &NormalizedPath) -> bool {
        self.dirs.contains(path) || (self.disk && OsFileSystem.is_dir(path))
    }

    fn is_file(&self, path: &NormalizedPath) -> bool {
        self.files.contains(path) || (self.disk && OsFileSystem.is_file(path))
    }
}
