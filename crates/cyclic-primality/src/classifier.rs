//! Primality classification with a size-based split between local and remote tests.
//!
//! Values below [`ClassifierConfig::oracle_threshold_digits`] decimal digits
//! are tested locally with a strong probable-prime test. Larger values are
//! sent to a [`FactorOracle`]; a value is prime iff the oracle lists exactly
//! one factor.
//!
//! Every confirmed prime is logged at INFO under [`PRIME_LOG_TARGET`], which
//! is what ends up in the run's log file.

use std::time::Duration;

use num_bigint::BigUint;
use num_prime::nt_funcs::is_prime;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::oracle::FactorOracle;

/// Tracing target for confirmed-prime log lines.
pub const PRIME_LOG_TARGET: &str = "cyclic::primes";

/// Decimal digit count at which values go to the oracle instead of the local test.
pub const DEFAULT_ORACLE_THRESHOLD_DIGITS: usize = 200;

/// Where index numbering starts in [`prime_indices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexOrigin {
    /// 0, 1, 2, ...
    Zero,
    /// 1, 2, 3, ... (OEIS convention)
    #[default]
    One,
}

impl IndexOrigin {
    const fn offset(self) -> usize {
        match self {
            IndexOrigin::Zero => 0,
            IndexOrigin::One => 1,
        }
    }
}

/// Configuration for a classifier.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Values with at least this many decimal digits are sent to the oracle.
    pub oracle_threshold_digits: usize,

    /// Deadline for one oracle lookup, so a hung call fails instead of stalling the batch.
    pub oracle_deadline: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            oracle_threshold_digits: DEFAULT_ORACLE_THRESHOLD_DIGITS,
            oracle_deadline: Duration::from_secs(300),
        }
    }
}

/// Number of decimal digits in `value`.
pub fn decimal_digit_count(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}

/// Local probable-prime test (BPSW by default in `num-prime`).
pub fn is_probable_prime(value: &BigUint) -> bool {
    is_prime(value, None).probably()
}

/// Positions of the probable primes in `values`, counted from `origin`.
///
/// Local test only; the oracle is never consulted.
pub fn prime_indices(values: &[BigUint], origin: IndexOrigin) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| is_probable_prime(v))
        .map(|(i, _)| i + origin.offset())
        .collect()
}

/// Filters lists of big integers down to their primes.
pub struct Classifier<O> {
    oracle: O,
    config: ClassifierConfig,
}

impl<O: FactorOracle> Classifier<O> {
    /// Create a classifier with the default threshold.
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, ClassifierConfig::default())
    }

    pub fn with_config(oracle: O, config: ClassifierConfig) -> Self {
        Self { oracle, config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Whether `value` is prime, choosing the local test or the oracle by size.
    pub async fn is_prime(&self, value: &BigUint) -> Result<bool> {
        let digits = decimal_digit_count(value);
        if digits < self.config.oracle_threshold_digits {
            return Ok(is_probable_prime(value));
        }

        debug!(digits, "asking factorization oracle");
        let lookup = self.oracle.factor(value);
        let factors = tokio::time::timeout(self.config.oracle_deadline, lookup)
            .await
            .map_err(|_| Error::Timeout(self.config.oracle_deadline))??;
        Ok(factors.len() == 1)
    }

    /// The primes in `values`, in input order.
    ///
    /// Each prime is logged as it is confirmed. The first oracle failure
    /// aborts the whole batch.
    pub async fn prime_numbers_in_list(&self, values: &[BigUint]) -> Result<Vec<BigUint>> {
        let mut primes = Vec::new();
        for value in values {
            if self.is_prime(value).await? {
                info!(target: PRIME_LOG_TARGET, "{}", value);
                primes.push(value.clone());
            }
        }
        debug!(checked = values.len(), found = primes.len(), "classification done");
        Ok(primes)
    }

    /// Positions of the primes in `values`; see [`prime_indices`].
    pub fn prime_indices(&self, values: &[BigUint], origin: IndexOrigin) -> Vec<usize> {
        prime_indices(values, origin)
    }
}
