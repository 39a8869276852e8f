//! Settlement queries over group ledgers.

use crate::core::registry::GroupRegistry;
use crate::ledger::SettlementTransaction;

use super::ServiceResult;

pub struct BalanceService;

impl BalanceService {
    /// Simplifies the group's debts and compacts its ledger to the result.
    pub fn simplified(
        groups: &mut GroupRegistry,
        group_name: &str,
    ) -> ServiceResult<Vec<SettlementTransaction>> {
        let group = groups.get_mut(group_name)?;
        let transactions = group.simplify();
        tracing::info!(
            group = group_name,
            transactions = transactions.len(),
            "compacted group ledger"
        );
        Ok(transactions)
    }

    /// Like [`BalanceService::simplified`], keeping only transfers involving `user_id`.
    ///
    /// The whole group ledger is still compacted.
    pub fn simplified_for_user(
        groups: &mut GroupRegistry,
        group_name: &str,
        user_id: &str,
    ) -> ServiceResult<Vec<SettlementTransaction>> {
        let transactions = Self::simplified(groups, group_name)?;
        Ok(transactions
            .into_iter()
            .filter(|txn| txn.involves(user_id))
            .collect())
    }
}
