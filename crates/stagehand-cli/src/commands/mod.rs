//! Command implementations for stagehand-cli

pub mod list;
pub mod resolve;

pub use list::run_list_commands;
pub use resolve::run_resolve;
