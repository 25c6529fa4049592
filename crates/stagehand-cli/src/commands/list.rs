//! List the command capability table

use colored::Colorize;
use stagehand_meta::CommandTable;

use crate::error::Result;

/// Run the commands command
pub fn run_list_commands() -> Result<()> {
    let table = CommandTable::with_builtins();

    println!("{}", "Known Commands".bold());
    println!();

    for (name, caps) in table.iter() {
        let mut needs = Vec::new();
        if caps.source {
            needs.push("source");
        }
        if caps.device {
            needs.push("device");
        }
        if caps.stage {
            needs.push("stage");
        }
        if caps.exclude {
            needs.push("exclude");
        }
        println!("  {:<10} {}", name.green(), needs.join(", ").dimmed());
    }

    println!();
    println!(
        "{} {} commands. Use {} to resolve for one.",
        "Total:".dimmed(),
        table.len(),
        "stagehand resolve --command <name>".cyan()
    );

    Ok(())
}
