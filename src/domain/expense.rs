use serde::{Deserialize, Serialize};

use crate::ledger::SplitPolicy;

/// A payment to be divided between group members.
///
/// Only its effect on the group ledger is kept once it has been posted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub payer: String,
    pub amount: f64,
    pub participants: Vec<String>,
    pub policy: SplitPolicy,
    #[serde(default)]
    pub split_values: Vec<f64>,
}

impl Expense {
    pub fn new(
        payer: impl Into<String>,
        amount: f64,
        participants: impl IntoIterator<Item = impl Into<String>>,
        policy: SplitPolicy,
        split_values: Vec<f64>,
    ) -> Self {
        Self {
            payer: payer.into(),
            amount,
            participants: participants.into_iter().map(Into::into).collect(),
            policy,
            split_values,
        }
    }

    pub fn equal(
        payer: impl Into<String>,
        amount: f64,
        participants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(payer, amount, participants, SplitPolicy::Equal, Vec::new())
    }

    pub fn exact(
        payer: impl Into<String>,
        amount: f64,
        participants: impl IntoIterator<Item = impl Into<String>>,
        amounts: Vec<f64>,
    ) -> Self {
        Self::new(payer, amount, participants, SplitPolicy::Exact, amounts)
    }

    pub fn percent(
        payer: impl Into<String>,
        amount: f64,
        participants: impl IntoIterator<Item = impl Into<String>>,
        percentages: Vec<f64>,
    ) -> Self {
        Self::new(payer, amount, participants, SplitPolicy::Percent, percentages)
    }
}
