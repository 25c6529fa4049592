//! Project step

use super::ResolvedProject;
use crate::{ConfigError, SelectedOptions, Source};
use stagehand_fs::{FileSystem, NormalizedPath};
use stagehand_meta::{ProjectSpec, ProjectsSection, RawConfig, StageMethod};
use std::collections::BTreeMap;

pub(crate) fn resolve_project<F: FileSystem>(
    raw: &RawConfig,
    options: &SelectedOptions,
    explicit_root: Option<&NormalizedPath>,
    cwd: &NormalizedPath,
    fs: &F,
) -> Result<ResolvedProject, ConfigError> {
    if let Some(id) = &options.project {
        return named(&raw.projects, id, cwd, fs);
    }

    match (&options.source, explicit_root) {
        (Source::Current, _) => Ok(synthesize(cwd.clone())),
        (Source::Path(_), Some(root)) => Ok(synthesize(root.clone())),
        _ => select_by_working_dir(&raw.projects, cwd, fs),
    }
}

/// A project made up from the command line, never checked on disk.
fn synthesize(directory: NormalizedPath) -> ResolvedProject {
    tracing::debug!(%directory, "Synthesizing project from command line");
    ResolvedProject {
        id: None,
        directory,
        stage_method: StageMethod::Current,
        stages: BTreeMap::new(),
        default_stage: None,
        key: None,
        key_dir: None,
        folders: None,
        files: None,
        excludes: None,
    }
}

fn named<F: FileSystem>(
    projects: &ProjectsSection,
    id: &str,
    cwd: &NormalizedPath,
    fs: &F,
) -> Result<ResolvedProject, ConfigError> {
    let spec = projects
        .get(id)
        .ok_or_else(|| ConfigError::UnknownProject { id: id.to_string() })?;

    let directory = candidate_dir(projects, spec, cwd)
        .ok_or_else(|| ConfigError::MissingProjectDirectory { id: id.to_string() })?;

    finish(id, spec, directory, cwd, fs)
}

/// Compute a project's absolute directory without touching the disk.
fn candidate_dir(
    projects: &ProjectsSection,
    spec: &ProjectSpec,
    cwd: &NormalizedPath,
) -> Option<NormalizedPath> {
    let parent = projects.project_dir.as_ref().map(|dir| dir.absolutize(cwd));
    match (parent, &spec.directory) {
        (Some(parent), Some(dir)) if !dir.is_absolute() => Some(parent.join(dir.as_str())),
        (Some(parent), None) => Some(parent),
        (_, Some(dir)) => Some(dir.absolutize(cwd)),
        (None, None) => None,
    }
}

/// Pick the project whose directory contains the working directory.
///
/// The deepest directory wins, so a project nested inside another is chosen
/// when working inside it. Equal directories fall back to id order.
fn select_by_working_dir<F: FileSystem>(
    projects: &ProjectsSection,
    cwd: &NormalizedPath,
    fs: &F,
) -> Result<ResolvedProject, ConfigError> {
    let mut best: Option<(&str, &ProjectSpec, NormalizedPath)> = None;
    for (id, spec) in &projects.entries {
        let Some(dir) = candidate_dir(projects, spec, cwd) else {
            continue;
        };
        if !cwd.starts_with(&dir) {
            continue;
        }
        let deeper = best
            .as_ref()
            .is_none_or(|(_, _, current)| dir.depth() > current.depth());
        if deeper {
            best = Some((id.as_str(), spec, dir));
        }
    }

    if let Some((id, spec, dir)) = best {
        tracing::debug!(project = id, %cwd, "Matched project by working directory");
        return finish(id, spec, dir, cwd, fs);
    }

    match &projects.default {
        Some(default) => {
            tracing::debug!(project = %default, %cwd, "No project matches, using default");
            named(projects, default, cwd, fs)
        }
        None => Err(ConfigError::NoMatchingProject { cwd: cwd.clone() }),
    }
}

fn finish<F: FileSystem>(
    id: &str,
    spec: &ProjectSpec,
    directory: NormalizedPath,
    cwd: &NormalizedPath,
    fs: &F,
) -> Result<ResolvedProject, ConfigError> {
    if !fs.is_dir(&directory) {
        return Err(ConfigError::DirectoryNotFound {
            id: id.to_string(),
            path: directory,
        });
    }

    Ok(ResolvedProject {
        id: Some(id.to_string()),
        directory,
        stage_method: spec.stage_method.unwrap_or_default(),
        stages: spec.stages.clone(),
        default_stage: spec.default_stage.clone(),
        key: spec.key.clone(),
        key_dir: spec.key_dir.as_ref().map(|dir| dir.absolutize(cwd)),
        folders: spec.folders.clone(),
        files: spec.files.clone(),
        excludes: spec.excludes.clone(),
    })
}
