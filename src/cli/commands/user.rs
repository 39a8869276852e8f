use crate::cli::args::ArgCursor;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::domain::User;

const CREATE_USER_USAGE: &str = "CREATE_USER <userId> <name> [email] [mobile]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "create_user",
        "Register a user",
        CREATE_USER_USAGE,
        cmd_create_user,
    )]
}

fn cmd_create_user(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut cursor = ArgCursor::new(args, CREATE_USER_USAGE);
    let id = cursor.next("user id")?;
    let name = cursor.next("name")?;
    let mut user = User::new(id, name);
    if let Some(email) = cursor.optional() {
        user = user.with_email(email);
    }
    if let Some(phone) = cursor.optional() {
        user = user.with_phone(phone);
    }
    cursor.finish()?;

    context.app.create_user(user)?;
    context.confirm(format!("User `{id}` created."));
    Ok(())
}
