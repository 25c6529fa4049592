//! [`TestTree`] builder for project and key layouts on disk.

use stagehand_fs::NormalizedPath;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary directory with helpers for laying out project and key
/// directories.
///
/// # Example
///
/// ```rust,no_run
/// use stagehand_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// let project = tree.dir("projects/project1");
/// let key = tree.file("keys/a.pkg", "key");
/// assert!(project.is_dir());
/// assert!(key.is_file());
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Normalized path of the root.
    pub fn root_path(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Normalized path of `rel` below the root, without creating it.
    pub fn path(&self, rel: &str) -> NormalizedPath {
        self.root_path().join(rel)
    }

    /// Create the directory `rel` (and its parents) and return its path.
    pub fn dir(&self, rel: &str) -> NormalizedPath {
        let path = self.path(rel);
        fs::create_dir_all(path.to_native())
            .unwrap_or_else(|e| panic!("Could not create {}: {}", path, e));
        path
    }

    /// Write `content` to the file `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> NormalizedPath {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent.to_native()).unwrap();
        }
        fs::write(path.to_native(), content)
            .unwrap_or_else(|e| panic!("Could not write {}: {}", path, e));
        path
    }
}
