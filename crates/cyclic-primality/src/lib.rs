//! Cyclic Primality - Prime Filtering for Sub-Number Lists
//!
//! This crate decides which sub-numbers are prime. It is the only part of
//! the system that talks to the network.
//!
//! # Overview
//!
//! ## Local test
//!
//! Values with fewer than 200 decimal digits are checked with a strong
//! probable-prime test from `num-prime`. This is fast and, at these sizes,
//! has no known counterexample.
//!
//! ## Factorization oracle
//!
//! Larger values are looked up in an external factor database through the
//! [`FactorOracle`] capability. [`FactorDb`] is the HTTP implementation; it
//! applies a per-request timeout and a bounded, exponentially backed-off
//! retry before reporting [`Error::OracleUnavailable`].
//!
//! ## Logging
//!
//! Every confirmed prime is emitted on the `cyclic::primes` tracing target so
//! the run log doubles as an archive of generated sequence terms.
//!
//! # Example
//!
//! ```rust,no_run
//! use cyclic_primality::{Classifier, FactorDb, OracleConfig};
//! use num_bigint::BigUint;
//!
//! # async fn run() -> cyclic_primality::Result<()> {
//! let classifier = Classifier::new(FactorDb::new(OracleConfig::default())?);
//! let values: Vec<BigUint> = [2u32, 4, 71].iter().map(|&v| v.into()).collect();
//! let primes = classifier.prime_numbers_in_list(&values).await?;
//! assert_eq!(primes.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod error;
pub mod oracle;

pub use classifier::{
    decimal_digit_count, is_probable_prime, prime_indices, Classifier, ClassifierConfig,
    IndexOrigin, DEFAULT_ORACLE_THRESHOLD_DIGITS, PRIME_LOG_TARGET,
};
pub use error::{Error, Result};
pub use oracle::{FactorDb, FactorOracle, OracleConfig, FACTORDB_ENDPOINT};
