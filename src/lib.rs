#![doc(test(attr(deny(warnings))))]

//! Split Ledger tracks shared expenses inside groups and collapses the
//! resulting pairwise debts into a short list of settling transfers.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default directive.
pub fn init() {
    init_with_directive(config::DEFAULT_LOG_DIRECTIVE);
}

/// Initializes global tracing, honoring `RUST_LOG` before `directive`.
pub fn init_with_directive(directive: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::debug!("Split Ledger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init_with_directive("not a directive ===");
    }
}
