//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// stagehand - Resolve channel build and deploy configuration
#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ~/.stagehand.json)
    #[arg(long, global = true, env = "STAGEHAND_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve and print the configuration a command would run with
    ///
    /// Examples:
    ///   stagehand resolve                          # Project matching the working directory
    ///   stagehand resolve -P project1 --command package
    ///   stagehand resolve --current -o dist/app.zip --json
    Resolve(ResolveArgs),

    /// List known commands and the configuration they need
    Commands,

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   stagehand completions bash > ~/.local/share/bash-completion/completions/stagehand
    ///   stagehand completions zsh > ~/.zfunc/_stagehand
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Selections for `stagehand resolve`
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolveArgs {
    /// Use this path as the root instead of a configured project
    #[arg(long = "in", value_name = "PATH", conflicts_with_all = ["current", "working"])]
    pub input: Option<PathBuf>,

    /// Use the working directory as an unconfigured project
    #[arg(short, long, conflicts_with = "working")]
    pub current: bool,

    /// Use the configured project containing the working directory (default)
    #[arg(short, long)]
    pub working: bool,

    /// Configured project to use
    #[arg(short = 'P', long)]
    pub project: Option<String>,

    /// Stage to resolve
    #[arg(short = 'S', long)]
    pub stage: Option<String>,

    /// Output folder or file
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    /// Resolve for this command's needs (see `stagehand commands`)
    #[arg(long, value_name = "NAME")]
    pub command: Option<String>,

    /// Resolve stage and key regardless of command
    #[arg(long, conflicts_with = "command")]
    pub stage_required: bool,

    /// Apply the project's exclude list even if the command does not
    #[arg(short = 'x', long)]
    pub exclude: bool,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_command() {
        let cli = Cli::parse_from(["stagehand"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_resolve_defaults() {
        let cli = Cli::parse_from(["stagehand", "resolve"]);
        assert_eq!(
            cli.command,
            Some(Commands::Resolve(ResolveArgs::default()))
        );
    }

    #[test]
    fn parse_resolve_with_selections() {
        let cli = Cli::parse_from([
            "stagehand",
            "resolve",
            "-P",
            "project1",
            "-S",
            "production",
            "-o",
            "/home/user/file.pkg",
            "--command",
            "package",
            "--json",
        ]);
        match cli.command {
            Some(Commands::Resolve(args)) => {
                assert_eq!(args.project.as_deref(), Some("project1"));
                assert_eq!(args.stage.as_deref(), Some("production"));
                assert_eq!(args.out.as_deref(), Some("/home/user/file.pkg"));
                assert_eq!(args.command.as_deref(), Some("package"));
                assert!(args.json);
            }
            other => panic!("expected resolve, got {:?}", other),
        }
    }

    #[test]
    fn source_flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["stagehand", "resolve", "--current", "--working"]).is_err());
        assert!(Cli::try_parse_from(["stagehand", "resolve", "--in", "x", "--current"]).is_err());
    }

    #[test]
    fn command_and_stage_required_conflict() {
        let result = Cli::try_parse_from([
            "stagehand",
            "resolve",
            "--command",
            "build",
            "--stage-required",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_exclude_flag() {
        let cli = Cli::parse_from(["stagehand", "resolve", "--command", "sideload", "-x"]);
        match cli.command {
            Some(Commands::Resolve(args)) => assert!(args.exclude),
            other => panic!("expected resolve, got {:?}", other),
        }
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["stagehand", "resolve", "--config", "/etc/stagehand.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/stagehand.toml")));
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["stagehand", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}
