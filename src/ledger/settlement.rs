//! Debt netting: collapses pairwise balances into the settling transfers.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::currency::{format_amount, round_two_decimals, SETTLEMENT_EPSILON};

use super::balance::BalanceLedger;

/// A single transfer that settles part of the group's debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementTransaction {
    pub debtor: String,
    pub creditor: String,
    pub amount: f64,
}

impl SettlementTransaction {
    pub fn new(debtor: impl Into<String>, creditor: impl Into<String>, amount: f64) -> Self {
        Self {
            debtor: debtor.into(),
            creditor: creditor.into(),
            amount,
        }
    }

    /// True when `member` pays or receives this transfer.
    pub fn involves(&self, member: &str) -> bool {
        self.debtor == member || self.creditor == member
    }
}

impl fmt::Display for SettlementTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} owes {}: {}",
            self.debtor,
            self.creditor,
            format_amount(self.amount)
        )
    }
}

/// Heap entry: larger magnitude first, then smaller member id.
#[derive(Debug)]
struct Position {
    member: String,
    magnitude: f64,
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude
            .total_cmp(&other.magnitude)
            .then_with(|| other.member.cmp(&self.member))
    }
}

/// Greedy largest-creditor/largest-debtor matcher.
pub struct SettlementSimplifier;

impl SettlementSimplifier {
    /// Computes the settling transfers for `nets` without touching any ledger.
    ///
    /// `nets` holds `(member, net position)` pairs; positive means the member
    /// is owed money. Positions are rounded to the cent first; those within
    /// [`SETTLEMENT_EPSILON`] of zero are treated as settled. At most
    /// `creditors + debtors - 1` transfers are produced, and each party's
    /// transfers sum to its net position.
    pub fn settle(nets: &[(String, f64)]) -> Vec<SettlementTransaction> {
        let mut creditors = BinaryHeap::new();
        let mut debtors = BinaryHeap::new();
        for (member, net) in nets {
            let net = round_two_decimals(*net);
            if net > SETTLEMENT_EPSILON {
                creditors.push(Position {
                    member: member.clone(),
                    magnitude: net,
                });
            } else if net < -SETTLEMENT_EPSILON {
                debtors.push(Position {
                    member: member.clone(),
                    magnitude: -net,
                });
            }
        }

        let mut transactions = Vec::new();
        while let (Some(mut creditor), Some(mut debtor)) = (creditors.pop(), debtors.pop()) {
            let amount = round_two_decimals(creditor.magnitude.min(debtor.magnitude));
            tracing::debug!(
                debtor = %debtor.member,
                creditor = %creditor.member,
                amount,
                "matched settlement"
            );
            creditor.magnitude = round_two_decimals(creditor.magnitude - amount);
            debtor.magnitude = round_two_decimals(debtor.magnitude - amount);
            transactions.push(SettlementTransaction::new(
                debtor.member.clone(),
                creditor.member.clone(),
                amount,
            ));

            if creditor.magnitude > SETTLEMENT_EPSILON {
                creditors.push(creditor);
            }
            if debtor.magnitude > SETTLEMENT_EPSILON {
                debtors.push(debtor);
            }
        }
        transactions
    }

    /// Settles `ledger` and compacts it down to the returned transfers.
    pub fn simplify(ledger: &mut BalanceLedger) -> Vec<SettlementTransaction> {
        let transactions = Self::settle(&ledger.net_positions());
        ledger.replace_with(&transactions);
        transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nets(values: &[(&str, f64)]) -> Vec<(String, f64)> {
        values
            .iter()
            .map(|(member, net)| (member.to_string(), *net))
            .collect()
    }

    #[test]
    fn single_pair_settles_in_one_transfer() {
        let result = SettlementSimplifier::settle(&nets(&[("a", 25.0), ("b", -25.0)]));
        assert_eq!(result, vec![SettlementTransaction::new("b", "a", 25.0)]);
    }

    #[test]
    fn largest_parties_are_matched_first() {
        let result = SettlementSimplifier::settle(&nets(&[
            ("a", 70.0),
            ("b", 10.0),
            ("c", -50.0),
            ("d", -30.0),
        ]));
        assert_eq!(
            result,
            vec![
                SettlementTransaction::new("c", "a", 50.0),
                SettlementTransaction::new("d", "a", 20.0),
                SettlementTransaction::new("d", "b", 10.0),
            ]
        );
    }

    #[test]
    fn equal_magnitudes_break_ties_by_member_id() {
        let result = SettlementSimplifier::settle(&nets(&[
            ("zed", 10.0),
            ("amy", 10.0),
            ("kim", -10.0),
            ("bob", -10.0),
        ]));
        assert_eq!(
            result,
            vec![
                SettlementTransaction::new("bob", "amy", 10.0),
                SettlementTransaction::new("kim", "zed", 10.0),
            ]
        );
    }

    #[test]
    fn near_zero_positions_are_skipped() {
        let result = SettlementSimplifier::settle(&nets(&[
            ("a", 0.0005),
            ("b", -0.0005),
            ("c", 0.0),
        ]));
        assert!(result.is_empty());
    }

    #[test]
    fn sub_cent_positions_produce_no_zero_transfers() {
        let result = SettlementSimplifier::settle(&nets(&[("a", 0.004), ("b", -0.004)]));
        assert!(result.is_empty());

        let result = SettlementSimplifier::settle(&nets(&[
            ("a", 10.004),
            ("b", 0.003),
            ("c", -10.004),
        ]));
        assert_eq!(result, vec![SettlementTransaction::new("c", "a", 10.0)]);
        assert!(result.iter().all(|txn| txn.amount > 0.0));
    }

    #[test]
    fn transfer_count_stays_below_party_count() {
        let positions = nets(&[
            ("a", 33.33),
            ("b", 33.33),
            ("c", 33.34),
            ("d", -45.0),
            ("e", -55.0),
        ]);
        let result = SettlementSimplifier::settle(&positions);
        assert!(result.len() <= 4);
        let total: f64 = result.iter().map(|txn| txn.amount).sum();
        assert_eq!(round_two_decimals(total), 100.0);
        assert!(result.iter().all(|txn| txn.amount > 0.0));
    }

    #[test]
    fn simplify_compacts_ledger_and_is_idempotent() {
        let mut ledger = BalanceLedger::with_members(["a", "b", "c"]);
        ledger.post("a", "b", 30.0);
        ledger.post("b", "c", 30.0);

        let first = SettlementSimplifier::simplify(&mut ledger);
        assert_eq!(first, vec![SettlementTransaction::new("c", "a", 30.0)]);
        assert_eq!(ledger.balance("a", "b"), 0.0);
        assert_eq!(ledger.balance("a", "c"), 30.0);

        let second = SettlementSimplifier::simplify(&mut ledger);
        assert_eq!(first, second);
    }

    #[test]
    fn display_uses_two_decimals() {
        let txn = SettlementTransaction::new("bob", "alice", 30.0);
        assert_eq!(txn.to_string(), "bob owes alice: 30.00");
    }
}
