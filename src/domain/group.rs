use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{common::Identifiable, expense::Expense};
use crate::errors::SplitError;
use crate::ledger::{BalanceLedger, ExpenseSplitter, SettlementSimplifier, SettlementTransaction, Share};

/// A named set of users sharing one balance ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    members: Vec<String>,
    ledger: BalanceLedger,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Creates a group; repeated member ids keep their first position only.
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for member in members {
            let member = member.into();
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        let now = Utc::now();
        Self {
            name: name.into(),
            ledger: BalanceLedger::with_members(unique.iter().map(String::as_str)),
            members: unique,
            created_at: now,
            updated_at: now,
        }
    }

    /// Members in the order they joined.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|member| member == user_id)
    }

    pub fn ensure_member(&self, user_id: &str) -> Result<(), SplitError> {
        if self.is_member(user_id) {
            Ok(())
        } else {
            Err(SplitError::Membership {
                user: user_id.to_string(),
                group: self.name.clone(),
            })
        }
    }

    pub fn add_member(&mut self, user_id: impl Into<String>) -> Result<(), SplitError> {
        let user_id = user_id.into();
        if self.is_member(&user_id) {
            return Err(SplitError::DuplicateMember {
                user: user_id,
                group: self.name.clone(),
            });
        }
        self.ledger.register(&user_id);
        self.members.push(user_id);
        self.touch();
        Ok(())
    }

    pub fn ledger(&self) -> &BalanceLedger {
        &self.ledger
    }

    /// Validates `expense`, then posts every non-payer share to the ledger.
    ///
    /// The ledger is left untouched when any check fails.
    pub fn record_expense(&mut self, expense: &Expense) -> Result<Vec<Share>, SplitError> {
        self.ensure_member(&expense.payer)?;
        for participant in &expense.participants {
            self.ensure_member(participant)?;
        }
        let shares = ExpenseSplitter::split(
            &expense.payer,
            expense.amount,
            &expense.participants,
            expense.policy,
            &expense.split_values,
        )?;

        for share in shares.iter().filter(|share| share.participant != expense.payer) {
            self.ledger.post(&expense.payer, &share.participant, share.amount);
        }
        self.touch();
        Ok(shares)
    }

    /// Net position of every member, ordered by member id.
    pub fn net_positions(&self) -> Vec<(String, f64)> {
        self.ledger.net_positions()
    }

    /// Computes the settling transfers and compacts the ledger down to them.
    pub fn simplify(&mut self) -> Vec<SettlementTransaction> {
        let transactions = SettlementSimplifier::simplify(&mut self.ledger);
        self.touch();
        transactions
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identifiable for Group {
    fn id(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::SplitPolicy;

    fn trio() -> Group {
        Group::new("trip", ["a", "b", "c"])
    }

    #[test]
    fn new_group_collapses_duplicate_members() {
        let group = Group::new("trip", ["a", "b", "a", "c", "b"]);
        assert_eq!(group.members(), ["a", "b", "c"]);
    }

    #[test]
    fn add_member_rejects_duplicates() {
        let mut group = trio();
        group.add_member("d").unwrap();
        assert_eq!(group.members(), ["a", "b", "c", "d"]);
        assert!(group.ledger().is_registered("d"));

        let err = group.add_member("b").unwrap_err();
        assert_eq!(
            err,
            SplitError::DuplicateMember {
                user: "b".into(),
                group: "trip".into()
            }
        );
        assert_eq!(group.members().len(), 4);
    }

    #[test]
    fn expense_posts_only_non_payer_shares() {
        let mut group = trio();
        let shares = group
            .record_expense(&Expense::equal("a", 90.0, ["a", "b", "c"]))
            .unwrap();
        assert_eq!(shares.len(), 3);
        assert_eq!(group.ledger().balance("a", "b"), 30.0);
        assert_eq!(group.ledger().balance("a", "c"), 30.0);
        assert_eq!(group.ledger().balance("b", "c"), 0.0);
    }

    #[test]
    fn non_member_participant_leaves_ledger_untouched() {
        let mut group = trio();
        let err = group
            .record_expense(&Expense::equal("a", 90.0, ["a", "b", "mallory"]))
            .unwrap_err();
        assert_eq!(
            err,
            SplitError::Membership {
                user: "mallory".into(),
                group: "trip".into()
            }
        );
        assert!(group.ledger().is_settled());
    }

    #[test]
    fn non_member_payer_is_rejected() {
        // Payers must belong to the group even when they take no share.
        let mut group = trio();
        let err = group
            .record_expense(&Expense::equal("zoe", 10.0, ["a", "b"]))
            .unwrap_err();
        assert!(matches!(err, SplitError::Membership { ref user, .. } if user == "zoe"));
    }

    #[test]
    fn split_mismatch_leaves_ledger_untouched() {
        let mut group = trio();
        let expense = Expense::new("a", 10.0, ["b", "c"], SplitPolicy::Exact, vec![5.0, 5.01]);
        assert!(group.record_expense(&expense).is_err());
        assert!(group.ledger().is_settled());
    }

    #[test]
    fn simplify_touches_group() {
        let mut group = trio();
        group
            .record_expense(&Expense::equal("a", 30.0, ["b", "c"]))
            .unwrap();
        let before = group.updated_at;
        let transactions = group.simplify();
        assert_eq!(transactions.len(), 2);
        assert!(group.updated_at >= before);
    }
}
