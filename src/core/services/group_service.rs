//! Group creation and membership changes.

use crate::core::registry::{GroupRegistry, UserRegistry};
use crate::domain::Group;

use super::{require_identifier, ServiceResult};

pub struct GroupService;

impl GroupService {
    /// Creates `name` with the given members, all of which must be known users.
    ///
    /// A group with the same name is replaced, together with its balances.
    pub fn create<'a>(
        groups: &'a mut GroupRegistry,
        users: &UserRegistry,
        name: &str,
        members: &[String],
    ) -> ServiceResult<&'a Group> {
        require_identifier("Group name", name)?;
        users.ensure_all(members.iter().map(String::as_str))?;
        if groups.exists(name) {
            tracing::warn!(group = name, "replacing existing group");
        }
        let group = groups.create(name, members);
        tracing::info!(group = name, members = group.members().len(), "created group");
        Ok(&*group)
    }

    /// Adds a known user to an existing group.
    pub fn add_member(
        groups: &mut GroupRegistry,
        users: &UserRegistry,
        name: &str,
        user_id: &str,
    ) -> ServiceResult<()> {
        let group = groups.get_mut(name)?;
        users.get(user_id)?;
        group.add_member(user_id)?;
        tracing::info!(group = name, user = user_id, "added member");
        Ok(())
    }
}
