//! Group balance bookkeeping: pairwise ledger, expense splitting, and settlement.

pub mod balance;
pub mod settlement;
pub mod split;

pub use balance::BalanceLedger;
pub use settlement::{SettlementSimplifier, SettlementTransaction};
pub use split::{ExpenseSplitter, Share, SplitPolicy};
