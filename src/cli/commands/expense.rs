use crate::cli::args::ArgCursor;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::currency::format_amount;
use crate::domain::Expense;
use crate::ledger::SplitPolicy;

const EXPENSE_USAGE: &str =
    "EXPENSE <groupName> <payer> <amount> <numUsers> <userId>... <EQUAL|EXACT|PERCENT> [value...]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "expense",
        "Record a payment split between group members",
        EXPENSE_USAGE,
        cmd_expense,
    )]
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut cursor = ArgCursor::new(args, EXPENSE_USAGE);
    let group = cursor.next("group name")?;
    let payer = cursor.next("payer")?;
    let amount = cursor.amount("amount")?;
    let count = cursor.count("user count")?;
    let participants = cursor.list("user id", count)?;
    let policy: SplitPolicy = cursor.next("split type")?.parse()?;
    let values = if policy.takes_values() {
        cursor.amounts("split value", count)?
    } else {
        Vec::new()
    };
    cursor.finish()?;

    let expense = Expense::new(payer, amount, participants, policy, values);
    context.app.post_expense(group, &expense)?;
    context.confirm(format!(
        "Recorded {} paid by `{payer}` in `{group}` ({policy}).",
        format_amount(amount)
    ));
    Ok(())
}
