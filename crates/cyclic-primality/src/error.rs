//! Error types for cyclic-primality.

use thiserror::Error;

/// Result type for cyclic-primality operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while classifying values.
#[derive(Debug, Error)]
pub enum Error {
    /// The factorization oracle could not be reached or refused the request.
    #[error("factorization oracle unavailable: {0}")]
    OracleUnavailable(String),

    /// A single oracle call exceeded its deadline.
    #[error("factorization oracle timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The oracle answered with a body we cannot interpret.
    #[error("malformed oracle response: {0}")]
    MalformedResponse(String),

    /// Failed to build the HTTP client.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl Error {
    /// Whether another attempt may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::OracleUnavailable(_) | Error::Timeout(_))
    }
}
