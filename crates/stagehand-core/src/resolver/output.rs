//! Output-path step

use serde::Serialize;
use stagehand_fs::NormalizedPath;

/// Where build artifacts go.
///
/// The folder is not checked or created here; the writer does that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpec {
    pub folder: NormalizedPath,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Advisory classification of an output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Package,
    Archive,
    Image,
    Other,
}

impl OutputSpec {
    /// Classify `file` by extension. `None` when the output is a folder.
    pub fn kind(&self) -> Option<OutputKind> {
        let file = self.file.as_deref()?;
        let extension = file.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());
        Some(match extension.as_deref() {
            Some("pkg") => OutputKind::Package,
            Some("zip") => OutputKind::Archive,
            Some("jpg" | "jpeg" | "png") => OutputKind::Image,
            _ => OutputKind::Other,
        })
    }
}

/// Split an output path into folder and file.
///
/// - no path: the configured default folder, else `root_dir`
/// - trailing separator or no extension: the whole path is a folder
/// - otherwise: the directory part (or `root_dir` when there is none) and the base name
pub(crate) fn resolve_output(
    out: Option<&str>,
    default_folder: Option<&NormalizedPath>,
    root_dir: &NormalizedPath,
) -> OutputSpec {
    let Some(raw) = out else {
        return OutputSpec {
            folder: default_folder.unwrap_or(root_dir).clone(),
            file: None,
        };
    };

    let path = NormalizedPath::new(raw);
    let trailing_separator = raw.ends_with('/') || (cfg!(windows) && raw.ends_with('\\'));
    if trailing_separator || path.extension().is_none() {
        return OutputSpec {
            folder: path,
            file: None,
        };
    }

    let file = path.file_name().map(str::to_string);
    let folder = path.parent().unwrap_or_else(|| root_dir.clone());
    OutputSpec { folder, file }
}
