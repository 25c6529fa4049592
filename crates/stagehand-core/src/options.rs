//! The caller's selections for one resolution

use stagehand_fs::NormalizedPath;
use stagehand_meta::CommandCapabilities;

/// Where the working root comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Source {
    /// An explicit input path; relative paths resolve against the working directory.
    Path(NormalizedPath),

    /// The working directory itself, with no configured project.
    Current,

    /// A configured project, named or matched against the working directory.
    #[default]
    Working,
}

/// Everything the command line decided before resolution starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectedOptions {
    pub source: Source,

    /// Named project; overrides working-directory matching.
    pub project: Option<String>,

    pub stage: Option<String>,

    /// Output path, either a folder or a file.
    pub out: Option<String>,

    /// Whether the active command needs stage and key resolution.
    pub needs_stage: bool,

    /// Whether the project's `excludes` apply to the source being read.
    pub apply_excludes: bool,
}

impl SelectedOptions {
    pub fn working() -> Self {
        Self::default()
    }

    pub fn current() -> Self {
        Self {
            source: Source::Current,
            ..Self::default()
        }
    }

    pub fn from_path(path: impl Into<NormalizedPath>) -> Self {
        Self {
            source: Source::Path(path.into()),
            ..Self::default()
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    pub fn with_out(mut self, out: impl Into<String>) -> Self {
        self.out = Some(out.into());
        self
    }

    pub fn staged(mut self) -> Self {
        self.needs_stage = true;
        self
    }

    /// Apply the project's exclude list regardless of command.
    pub fn excluding(mut self) -> Self {
        self.apply_excludes = true;
        self
    }

    /// Take `needs_stage` from a command's declared capabilities.
    ///
    /// Excludes are switched on when the command asks for them; an earlier
    /// [`SelectedOptions::excluding`] stays in effect.
    pub fn for_command(mut self, capabilities: &CommandCapabilities) -> Self {
        self.needs_stage = capabilities.stage;
        self.apply_excludes |= capabilities.exclude;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_meta::CommandTable;

    #[test]
    fn default_selection_is_working_directory() {
        let options = SelectedOptions::default();
        assert_eq!(options.source, Source::Working);
        assert!(!options.needs_stage);
    }

    #[test]
    fn for_command_copies_stage_capability() {
        let table = CommandTable::with_builtins();

        let package = SelectedOptions::working().for_command(table.get("package").unwrap());
        assert!(package.needs_stage);

        let sideload = SelectedOptions::working()
            .staged()
            .for_command(table.get("sideload").unwrap());
        assert!(!sideload.needs_stage);
    }

    #[test]
    fn for_command_switches_on_excludes() {
        let table = CommandTable::with_builtins();

        let build = SelectedOptions::working().for_command(table.get("build").unwrap());
        assert!(build.apply_excludes);

        let sideload = SelectedOptions::working().for_command(table.get("sideload").unwrap());
        assert!(!sideload.apply_excludes);

        let forced = SelectedOptions::working()
            .excluding()
            .for_command(table.get("sideload").unwrap());
        assert!(forced.apply_excludes);
    }
}
