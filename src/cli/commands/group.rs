use crate::cli::args::ArgCursor;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;

const CREATE_GROUP_USAGE: &str = "CREATE_GROUP <groupName> <numUsers> <userId>...";
const ADD_USER_USAGE: &str = "ADD_USER_TO_GROUP <groupName> <userId>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "create_group",
            "Create a group from registered users",
            CREATE_GROUP_USAGE,
            cmd_create_group,
        ),
        CommandEntry::new(
            "add_user_to_group",
            "Add a registered user to a group",
            ADD_USER_USAGE,
            cmd_add_user_to_group,
        ),
    ]
}

fn cmd_create_group(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut cursor = ArgCursor::new(args, CREATE_GROUP_USAGE);
    let name = cursor.next("group name")?;
    let count = cursor.count("user count")?;
    let members = cursor.list("user id", count)?;
    cursor.finish()?;

    context.app.create_group(name, &members)?;
    context.confirm(format!("Group `{name}` created with {count} member(s)."));
    Ok(())
}

fn cmd_add_user_to_group(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut cursor = ArgCursor::new(args, ADD_USER_USAGE);
    let group = cursor.next("group name")?;
    let user = cursor.next("user id")?;
    cursor.finish()?;

    context.app.add_user_to_group(group, user)?;
    context.confirm(format!("User `{user}` added to `{group}`."));
    Ok(())
}
