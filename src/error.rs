//! Error types for condition construction and tree collapsing

use thiserror::Error;

/// Main error type for the condition core
///
/// All variants are synchronous construction/collapse errors surfaced
/// immediately to the caller; none of them is recoverable by retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Expected a condition or a condition tree, got: {0}")]
    UnexpectedChildType(String),

    #[error("Tree has no conditions")]
    EmptyTree,

    #[error("Tree has multiple conditions, cannot collapse to one")]
    AmbiguousTree,

    #[error("Order direction not supported: {0}")]
    UnsupportedDirection(String),

    #[error("Unknown operator token: {0}")]
    UnknownOperatorToken(String),
}

/// Result type alias for the condition core
pub type Result<T> = std::result::Result<T, ConditionError>;
