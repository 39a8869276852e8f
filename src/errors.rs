use thiserror::Error;

/// Failures raised by group, expense, and balance operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SplitError {
    #[error("User `{user}` is not a member of group `{group}`")]
    Membership { user: String, group: String },
    #[error("User `{0}` does not exist")]
    UnknownUser(String),
    #[error("Group `{0}` does not exist")]
    UnknownGroup(String),
    #[error("User `{user}` is already a member of group `{group}`")]
    DuplicateMember { user: String, group: String },
    #[error("Split mismatch: {0}")]
    SplitMismatch(String),
    #[error("Invalid split policy `{0}`; expected EQUAL, EXACT, or PERCENT")]
    InvalidPolicy(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Expense has no participants")]
    EmptyParticipants,
}

/// Failures raised while reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
