//! Share computation for the supported split policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::currency::{round_two_decimals, same_cents, PERCENT_TOLERANCE};
use crate::errors::SplitError;

/// How an expense total is divided between its participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitPolicy {
    /// Same share for everyone; the rounding remainder lands on the first
    /// participant who is not the payer.
    Equal,
    /// Caller supplies each participant's amount.
    Exact,
    /// Caller supplies each participant's percentage of the total.
    Percent,
}

impl SplitPolicy {
    /// Whether the policy reads one split value per participant.
    pub fn takes_values(self) -> bool {
        !matches!(self, SplitPolicy::Equal)
    }
}

impl FromStr for SplitPolicy {
    type Err = SplitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "EQUAL" => Ok(SplitPolicy::Equal),
            "EXACT" => Ok(SplitPolicy::Exact),
            "PERCENT" => Ok(SplitPolicy::Percent),
            _ => Err(SplitError::InvalidPolicy(value.to_string())),
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SplitPolicy::Equal => "EQUAL",
            SplitPolicy::Exact => "EXACT",
            SplitPolicy::Percent => "PERCENT",
        };
        f.write_str(label)
    }
}

/// The amount one participant owes for an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub participant: String,
    pub amount: f64,
}

impl Share {
    fn new(participant: &str, amount: f64) -> Self {
        Self {
            participant: participant.to_string(),
            amount,
        }
    }
}

/// Splits an expense total into per-participant shares.
pub struct ExpenseSplitter;

impl ExpenseSplitter {
    /// Returns one share per participant, in participant order.
    ///
    /// The payer's own share is included for completeness; callers post only
    /// the shares of the other participants. Nothing is returned unless every
    /// input check passes.
    pub fn split(
        payer: &str,
        total: f64,
        participants: &[String],
        policy: SplitPolicy,
        values: &[f64],
    ) -> Result<Vec<Share>, SplitError> {
        if !total.is_finite() || total < 0.0 {
            return Err(SplitError::InvalidAmount(format!(
                "expense total must be a non-negative number, got {total}"
            )));
        }
        if participants.is_empty() {
            return Err(SplitError::EmptyParticipants);
        }

        match policy {
            SplitPolicy::Equal => Ok(Self::equal(payer, total, participants)),
            SplitPolicy::Exact => Self::exact(total, participants, values),
            SplitPolicy::Percent => Self::percent(total, participants, values),
        }
    }

    fn equal(payer: &str, total: f64, participants: &[String]) -> Vec<Share> {
        let count = participants.len() as f64;
        let share = round_two_decimals(total / count);
        let diff = round_two_decimals(total - share * count);

        let mut remainder_pending = true;
        participants
            .iter()
            .map(|participant| {
                if remainder_pending && participant != payer {
                    remainder_pending = false;
                    Share::new(participant, round_two_decimals(share + diff))
                } else {
                    Share::new(participant, share)
                }
            })
            .collect()
    }

    fn exact(total: f64, participants: &[String], values: &[f64]) -> Result<Vec<Share>, SplitError> {
        Self::check_values(participants, values, "split amounts")?;
        let sum: f64 = values.iter().sum();
        if !same_cents(sum, total) {
            return Err(SplitError::SplitMismatch(format!(
                "exact amounts sum to {:.2} but the expense total is {:.2}",
                round_two_decimals(sum),
                round_two_decimals(total)
            )));
        }
        Ok(participants
            .iter()
            .zip(values)
            .map(|(participant, value)| Share::new(participant, *value))
            .collect())
    }

    fn percent(
        total: f64,
        participants: &[String],
        values: &[f64],
    ) -> Result<Vec<Share>, SplitError> {
        Self::check_values(participants, values, "percentages")?;
        let sum: f64 = values.iter().sum();
        if (sum - 100.0).abs() > PERCENT_TOLERANCE {
            return Err(SplitError::SplitMismatch(format!(
                "percentages sum to {sum} instead of 100"
            )));
        }
        Ok(participants
            .iter()
            .zip(values)
            .map(|(participant, percent)| {
                Share::new(participant, round_two_decimals(total * percent / 100.0))
            })
            .collect())
    }

    fn check_values(participants: &[String], values: &[f64], label: &str) -> Result<(), SplitError> {
        if values.len() != participants.len() {
            return Err(SplitError::SplitMismatch(format!(
                "expected {} {label} for {} participants, got {}",
                participants.len(),
                participants.len(),
                values.len()
            )));
        }
        if let Some(bad) = values.iter().find(|value| !value.is_finite()) {
            return Err(SplitError::InvalidAmount(format!(
                "{label} must be finite numbers, got {bad}"
            )));
        }
        Ok(())
    }
}
