//! Error types for the explorer CLI.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for a successful run.
pub const EXIT_OK: u8 = 0;
/// Exit code for failures with no more specific code.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for malformed arguments or configuration.
pub const EXIT_INVALID_ARGUMENT: u8 = 2;
/// Exit code when the base and prime share a factor.
pub const EXIT_NO_PERIOD: u8 = 3;
/// Exit code when the factorization oracle cannot answer.
pub const EXIT_ORACLE_UNAVAILABLE: u8 = 4;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed command line or configuration value.
    #[error("invalid argument: {0}")]
    Usage(String),

    /// Cyclic number construction or indexing failed.
    #[error(transparent)]
    Core(#[from] cyclic_core::Error),

    /// Primality classification failed.
    #[error(transparent)]
    Primality(#[from] cyclic_primality::Error),

    /// The logger could not be installed.
    #[error(transparent)]
    Logging(#[from] cyclic_logging::Error),

    /// Writing the report failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        use cyclic_primality::Error as P;

        match self {
            Error::Usage(_) => EXIT_INVALID_ARGUMENT,
            Error::Core(cyclic_core::Error::InvalidArgument(_)) => EXIT_INVALID_ARGUMENT,
            Error::Core(cyclic_core::Error::NoPeriodFound { .. }) => EXIT_NO_PERIOD,
            Error::Primality(P::OracleUnavailable(_) | P::Timeout(_) | P::MalformedResponse(_)) => {
                EXIT_ORACLE_UNAVAILABLE
            }
            Error::Primality(P::Client(_)) | Error::Logging(_) | Error::Io(_) => EXIT_FAILURE,
        }
    }

    /// Whether the usage text should accompany the message.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }
}
