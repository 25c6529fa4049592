//! Stage and key step

use super::{ResolvedKey, ResolvedProject, ResolvedStage};
use crate::ConfigError;
use stagehand_fs::{FileSystem, NormalizedPath};
use stagehand_meta::{KeyRef, KeySpec, RawConfig, StageMethod};

/// Stage used when neither the caller nor the project names one.
pub(crate) const FALLBACK_STAGE: &str = "production";

pub(crate) fn resolve_stage<F: FileSystem>(
    raw: &RawConfig,
    project: &ResolvedProject,
    requested: Option<&str>,
    cwd: &NormalizedPath,
    fs: &F,
) -> Result<(Option<ResolvedStage>, Option<ResolvedKey>), ConfigError> {
    let stage = select_stage(project, requested)?;

    if project.stage_method == StageMethod::Script {
        let complete = stage
            .as_ref()
            .and_then(|s| s.script.as_ref())
            .is_some_and(|script| script.is_complete());
        if !complete {
            return Err(ConfigError::MissingScriptCommands {
                project: project.label().to_string(),
                stage: stage.map_or_else(|| "<none>".to_string(), |s| s.name),
            });
        }
    }

    let key_ref = match &stage {
        Some(stage) => stage.key.as_ref(),
        None => project.key.as_ref(),
    };
    let key = key_ref
        .map(|key_ref| resolve_key(raw, project, key_ref, cwd, fs))
        .transpose()?;

    Ok((stage, key))
}

fn select_stage(
    project: &ResolvedProject,
    requested: Option<&str>,
) -> Result<Option<ResolvedStage>, ConfigError> {
    let name = match requested.or(project.default_stage.as_deref()) {
        Some(name) => name,
        None if project.stages.contains_key(FALLBACK_STAGE) => FALLBACK_STAGE,
        None => {
            tracing::debug!(project = project.label(), "No stage selected");
            return Ok(None);
        }
    };

    let Some(spec) = project.stages.get(name) else {
        if project.id.is_none() {
            tracing::warn!(stage = name, "Stage requested for a project with no stages");
        }
        return Err(ConfigError::UnknownStage {
            project: project.label().to_string(),
            stage: name.to_string(),
        });
    };

    tracing::debug!(project = project.label(), stage = name, "Resolved stage");
    Ok(Some(ResolvedStage {
        name: name.to_string(),
        script: spec.script.clone(),
        key: spec.key.clone().or_else(|| project.key.clone()),
    }))
}

fn resolve_key<F: FileSystem>(
    raw: &RawConfig,
    project: &ResolvedProject,
    key_ref: &KeyRef,
    cwd: &NormalizedPath,
    fs: &F,
) -> Result<ResolvedKey, ConfigError> {
    let (id, spec): (Option<&str>, &KeySpec) = match key_ref {
        KeyRef::Id(id) => {
            let spec = raw
                .keys
                .get(id)
                .ok_or_else(|| ConfigError::UnknownKey { id: id.clone() })?;
            (Some(id.as_str()), spec)
        }
        KeyRef::Inline(spec) => (None, spec),
    };
    let label = id.unwrap_or(spec.keyed_pkg.as_str()).to_string();

    let key_dir = project
        .key_dir
        .clone()
        .or_else(|| raw.keys.key_dir.as_ref().map(|dir| dir.absolutize(cwd)))
        .ok_or_else(|| ConfigError::MissingKeyDirectory { key: label.clone() })?;

    if !fs.is_dir(&key_dir) {
        return Err(ConfigError::KeyDirectoryNotFound {
            key: label,
            path: key_dir,
        });
    }

    // Exact file name only: no extension fallback, no globbing
    let keyed_pkg = key_dir.join(&spec.keyed_pkg);
    if !fs.is_file(&keyed_pkg) {
        return Err(ConfigError::KeyNotFound {
            key: label,
            path: keyed_pkg,
        });
    }

    tracing::debug!(key = %label, %keyed_pkg, "Resolved key package");
    Ok(ResolvedKey {
        id: id.map(str::to_string),
        keyed_pkg,
        password: spec.password.clone(),
    })
}
