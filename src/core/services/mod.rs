pub mod balance_service;
pub mod expense_service;
pub mod group_service;
pub mod user_service;

pub use balance_service::BalanceService;
pub use expense_service::ExpenseService;
pub use group_service::GroupService;
pub use user_service::UserService;

use crate::errors::SplitError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error("{0}")]
    Invalid(String),
}

/// Rejects blank identifiers before they reach a registry.
pub(crate) fn require_identifier(kind: &str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        Err(ServiceError::Invalid(format!("{kind} cannot be empty")))
    } else {
        Ok(())
    }
}
