//! Root-directory step

use crate::Source;
use stagehand_fs::NormalizedPath;

/// Fix `root_dir` from the selection, if the selection decides it.
///
/// `None` means the project step supplies the root. Nothing is checked on
/// disk here: an explicit input path may name a file that is about to be
/// read, or nothing at all yet.
pub(crate) fn resolve_root(source: &Source, cwd: &NormalizedPath) -> Option<NormalizedPath> {
    match source {
        Source::Path(path) => Some(path.absolutize(cwd)),
        Source::Current => Some(cwd.clone()),
        Source::Working => None,
    }
}
