use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for entry in registry.list() {
        output::info(format!("  {:<18} {}", entry.name.to_uppercase(), entry.description));
    }
    output::info("Use `help <command>` for details. Command names are case-insensitive.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name.to_uppercase()));
    output::info(format!("  Description: {}", entry.description));
    output::info(format!("  Usage: {}", entry.usage));
}
