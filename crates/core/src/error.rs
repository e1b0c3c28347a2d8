//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both variants are final at the point they are raised: the operation that
/// produced them returned no partial value and left its inputs untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A constructing or scaling operation received a negative value or count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A subtraction could not be satisfied with the denominations held.
    #[error("could not perform deduction; insufficient change: {0}")]
    InsufficientChange(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn insufficient_change(msg: impl Into<String>) -> Self {
        Self::InsufficientChange(msg.into())
    }

    /// True for failures of either subtraction algorithm.
    pub fn is_insufficient_change(&self) -> bool {
        matches!(self, Self::InsufficientChange(_))
    }
}
