//! Error types for cyclic-core.

use thiserror::Error;

/// Result type for cyclic-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or reading cyclic material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument is outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No k in [1, P) satisfies N^k ≡ 1 (mod P), i.e. N and P share a factor.
    #[error("no period found for 1/{prime} in base {base}")]
    NoPeriodFound { prime: u64, base: u32 },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
