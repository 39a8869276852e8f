use crate::cli::args::ArgCursor;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output::render_balances;
use crate::cli::registry::CommandEntry;

const SHOW_USAGE: &str = "SHOW <groupName> [userId]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "show",
        "Simplify a group's debts and list who owes whom",
        SHOW_USAGE,
        cmd_show,
    )]
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut cursor = ArgCursor::new(args, SHOW_USAGE);
    let group = cursor.next("group name")?;
    let user = cursor.optional();
    cursor.finish()?;

    let transactions = match user {
        Some(user) => context.app.simplified_balances_for_user(group, user)?,
        None => context.app.simplified_balances(group)?,
    };
    println!(
        "{}",
        render_balances(group, &transactions, context.config.group_banner)
    );
    Ok(())
}
