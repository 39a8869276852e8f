//! Application context owning the user and group stores.

use crate::core::registry::{GroupRegistry, UserRegistry};
use crate::core::services::{
    BalanceService, ExpenseService, GroupService, ServiceResult, UserService,
};
use crate::domain::{Expense, User};
use crate::ledger::{SettlementTransaction, Share};

/// Entry point for every command the CLI can issue.
///
/// Both registries live exactly as long as the context; nothing is shared
/// through globals.
#[derive(Debug, Default)]
pub struct SplitApp {
    users: UserRegistry,
    groups: GroupRegistry,
}

impl SplitApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registries(users: UserRegistry, groups: GroupRegistry) -> Self {
        Self { users, groups }
    }

    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    pub fn create_user(&mut self, user: User) -> ServiceResult<()> {
        UserService::create(&mut self.users, user)
    }

    pub fn create_group(&mut self, name: &str, members: &[String]) -> ServiceResult<()> {
        GroupService::create(&mut self.groups, &self.users, name, members).map(|_| ())
    }

    pub fn add_user_to_group(&mut self, group: &str, user_id: &str) -> ServiceResult<()> {
        GroupService::add_member(&mut self.groups, &self.users, group, user_id)
    }

    pub fn post_expense(&mut self, group: &str, expense: &Expense) -> ServiceResult<Vec<Share>> {
        ExpenseService::post(&mut self.groups, group, expense)
    }

    /// Net positions for `group` without compacting its ledger.
    pub fn net_positions(&self, group: &str) -> ServiceResult<Vec<(String, f64)>> {
        Ok(self.groups.get(group)?.net_positions())
    }

    pub fn simplified_balances(&mut self, group: &str) -> ServiceResult<Vec<SettlementTransaction>> {
        BalanceService::simplified(&mut self.groups, group)
    }

    pub fn simplified_balances_for_user(
        &mut self,
        group: &str,
        user_id: &str,
    ) -> ServiceResult<Vec<SettlementTransaction>> {
        BalanceService::simplified_for_user(&mut self.groups, group, user_id)
    }
}
