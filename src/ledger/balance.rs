use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::currency::round_two_decimals;

use super::settlement::SettlementTransaction;

/// Pairwise balances between the members of one group.
///
/// `rows[a][b]` is the amount `b` owes `a`. Every write touches both
/// directions so `rows[a][b] == -rows[b][a]` holds for every pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceLedger {
    rows: BTreeMap<String, BTreeMap<String, f64>>,
}

impl BalanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger with a row for each member, in the given order.
    pub fn with_members<'a>(members: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ledger = Self::new();
        for member in members {
            ledger.register(member);
        }
        ledger
    }

    /// Adds `member` with zero balances against every registered member.
    /// Registering an existing member leaves its balances untouched.
    pub fn register(&mut self, member: &str) {
        if self.rows.contains_key(member) {
            return;
        }
        let existing: Vec<String> = self.rows.keys().cloned().collect();
        let mut row = BTreeMap::new();
        for other in existing {
            row.insert(other.clone(), 0.0);
            if let Some(other_row) = self.rows.get_mut(&other) {
                other_row.insert(member.to_string(), 0.0);
            }
        }
        self.rows.insert(member.to_string(), row);
    }

    pub fn is_registered(&self, member: &str) -> bool {
        self.rows.contains_key(member)
    }

    /// Records that `debtor` owes `payer` an additional `share`.
    pub fn post(&mut self, payer: &str, debtor: &str, share: f64) {
        if payer == debtor {
            return;
        }
        let credit = self.cell_mut(payer, debtor);
        *credit = round_two_decimals(*credit + share);
        let debit = self.cell_mut(debtor, payer);
        *debit = round_two_decimals(*debit - share);
        tracing::debug!(payer, debtor, share, "posted share");
    }

    /// Amount `debtor` owes `creditor`; negative when the debt runs the other way.
    pub fn balance(&self, creditor: &str, debtor: &str) -> f64 {
        self.rows
            .get(creditor)
            .and_then(|row| row.get(debtor))
            .copied()
            .unwrap_or(0.0)
    }

    /// Net position of every registered member, ordered by member id.
    pub fn net_positions(&self) -> Vec<(String, f64)> {
        self.rows
            .iter()
            .map(|(member, row)| {
                let net = row.values().sum::<f64>();
                (member.clone(), round_two_decimals(net))
            })
            .collect()
    }

    /// Drops every entry and keeps only the supplied settlement.
    pub fn replace_with(&mut self, transactions: &[SettlementTransaction]) {
        for row in self.rows.values_mut() {
            row.clear();
        }
        for txn in transactions {
            *self.cell_mut(&txn.creditor, &txn.debtor) = round_two_decimals(txn.amount);
            *self.cell_mut(&txn.debtor, &txn.creditor) = round_two_decimals(-txn.amount);
        }
    }

    /// Non-zero `(creditor, debtor, amount)` entries in member order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.rows.iter().flat_map(|(creditor, row)| {
            row.iter()
                .filter(|(_, amount)| **amount != 0.0)
                .map(move |(debtor, amount)| (creditor.as_str(), debtor.as_str(), *amount))
        })
    }

    pub fn is_settled(&self) -> bool {
        self.entries().next().is_none()
    }

    fn cell_mut(&mut self, row: &str, column: &str) -> &mut f64 {
        self.rows
            .entry(row.to_string())
            .or_default()
            .entry(column.to_string())
            .or_insert(0.0)
    }
}
