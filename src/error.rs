use thiserror::Error;

/// Errors returned by change-making operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input failed validation before any computation ran.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No combination of the given denominations sums to the amount.
    #[error("No combination of denominations forms amount {amount}")]
    NoSolution { amount: usize },
}

/// Result type for change-making operations
pub type Result<T> = std::result::Result<T, Error>;
