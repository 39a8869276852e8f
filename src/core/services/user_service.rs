use crate::core::registry::UserRegistry;
use crate::domain::User;

use super::{require_identifier, ServiceResult};

pub struct UserService;

impl UserService {
    /// Registers `user`; an existing user with the same id is replaced.
    pub fn create(users: &mut UserRegistry, user: User) -> ServiceResult<()> {
        require_identifier("User id", &user.id)?;
        let id = user.id.clone();
        if users.insert(user).is_some() {
            tracing::warn!(user = %id, "replaced existing user");
        } else {
            tracing::info!(user = %id, "created user");
        }
        Ok(())
    }
}
