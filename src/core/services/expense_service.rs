use crate::core::registry::GroupRegistry;
use crate::domain::Expense;
use crate::ledger::Share;

use super::ServiceResult;

/// Posts expenses into group ledgers.
pub struct ExpenseService;

impl ExpenseService {
    /// Splits `expense` and posts the shares to the group's ledger.
    ///
    /// Nothing is written unless the group exists, every party is a member,
    /// and the split values are consistent with the total.
    pub fn post(
        groups: &mut GroupRegistry,
        group_name: &str,
        expense: &Expense,
    ) -> ServiceResult<Vec<Share>> {
        let group = groups.get_mut(group_name)?;
        let shares = group.record_expense(expense).map_err(|err| {
            tracing::warn!(group = group_name, payer = %expense.payer, %err, "expense rejected");
            err
        })?;
        tracing::info!(
            group = group_name,
            payer = %expense.payer,
            amount = expense.amount,
            policy = %expense.policy,
            participants = expense.participants.len(),
            "posted expense"
        );
        Ok(shares)
    }
}
