//! Resolve command implementation
//!
//! Loads the config, turns the flags into [`SelectedOptions`] and prints
//! the [`ResolvedConfig`] either as a summary or as JSON.

use std::path::Path;

use colored::Colorize;
use stagehand_core::{OutputKind, ResolvedConfig, SelectedOptions, resolve};
use stagehand_meta::{CommandTable, ConfigLoader, Error as MetaError, RawConfig};

use crate::cli::ResolveArgs;
use crate::error::{CliError, Result};

/// Run the resolve command
pub fn run_resolve(config: Option<&Path>, args: &ResolveArgs) -> Result<()> {
    let table = CommandTable::with_builtins();
    let options = build_options(args, &table)?;
    let raw = load_config(config, config_required(&options))?;

    let resolved = resolve(&raw, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print_summary(&resolved);
    }
    Ok(())
}

/// Turn command-line flags into resolver selections.
pub fn build_options(args: &ResolveArgs, table: &CommandTable) -> Result<SelectedOptions> {
    let mut options = match (&args.input, args.current) {
        (Some(path), _) => SelectedOptions::from_path(path.as_path()),
        (None, true) => SelectedOptions::current(),
        (None, false) => SelectedOptions::working(),
    };

    if let Some(project) = &args.project {
        options = options.with_project(project);
    }
    if let Some(stage) = &args.stage {
        options = options.with_stage(stage);
    }
    if let Some(out) = &args.out {
        options = options.with_out(out);
    }
    if args.exclude {
        options = options.excluding();
    }

    if let Some(name) = &args.command {
        let capabilities = table.get(name).ok_or_else(|| {
            CliError::user(format!(
                "Unknown command '{}'. Run 'stagehand commands' to list them.",
                name
            ))
        })?;
        options = options.for_command(capabilities);
    } else if args.stage_required {
        options = options.staged();
    }

    Ok(options)
}

/// Whether resolution cannot proceed without a config file.
///
/// Only configured projects need one; `--current` and `--in` work on an
/// empty configuration.
fn config_required(options: &SelectedOptions) -> bool {
    options.project.is_some() || options.source == stagehand_core::Source::Working
}

fn load_config(explicit: Option<&Path>, required: bool) -> Result<RawConfig> {
    let path = ConfigLoader::locate(explicit)?;
    match ConfigLoader::new().load(&path) {
        Ok(raw) => Ok(raw),
        Err(MetaError::ConfigNotFound { path }) if !required => {
            tracing::debug!(?path, "No config file, resolving with an empty configuration");
            Ok(RawConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_summary(resolved: &ResolvedConfig) {
    println!("{} {}", "Root:".bold(), resolved.root_dir);

    let project = &resolved.project;
    println!(
        "{} {} ({})",
        "Project:".bold(),
        project.label().cyan(),
        project.stage_method
    );
    println!("  {} {}", "directory".dimmed(), project.directory);
    if let Some(excludes) = &project.excludes {
        println!("  {} {}", "excludes".dimmed(), excludes.join(", "));
    }

    if let Some(stage) = &resolved.stage {
        println!("{} {}", "Stage:".bold(), stage.name.cyan());
        if let Some(script) = &stage.script {
            println!("  {} {}", "stage".dimmed(), script.stage);
            println!("  {} {}", "unstage".dimmed(), script.unstage);
        }
    }

    if let Some(key) = &resolved.key {
        let id = key.id.as_deref().unwrap_or("inline");
        println!("{} {} {}", "Key:".bold(), id.cyan(), key.keyed_pkg);
    }

    let out = &resolved.out;
    match (&out.file, out.kind()) {
        (Some(file), Some(kind)) => println!(
            "{} {} in {} [{}]",
            "Output:".bold(),
            file.green(),
            out.folder,
            kind_label(kind)
        ),
        _ => println!("{} {}", "Output:".bold(), out.folder),
    }
}

fn kind_label(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Package => "package",
        OutputKind::Archive => "archive",
        OutputKind::Image => "image",
        OutputKind::Other => "file",
    }
}
