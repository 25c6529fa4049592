//! stagehand CLI
//!
//! Resolves channel build and deploy configuration from the command line.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Resolve(args)) => commands::run_resolve(cli.config.as_deref(), &args),
        Some(Commands::Commands) => commands::run_list_commands(),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "stagehand", &mut std::io::stdout());
            Ok(())
        }
        None => {
            println!("{} Channel configuration resolver", "stagehand".green().bold());
            println!();
            println!("Run {} for available commands.", "stagehand --help".cyan());
            Ok(())
        }
    }
}

/// Log to stderr so JSON on stdout stays clean.
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, defaulting to warnings.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
    tracing::debug!(verbose, "Tracing initialized");
}
