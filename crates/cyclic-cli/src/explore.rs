//! Exploration drivers.
//!
//! Each driver composes the core pieces into a report:
//!
//! ```text
//! prime + base ──► CyclicNumber ──► digits ──► SubNumbers ──► sort ──► Classifier ──► report
//! ```
//!
//! Reports are plain values; [`std::fmt::Display`] renders them the way the
//! binary prints them.

use std::fmt;

use cyclic_core::{
    list_sub_numbers, repair_by_idx_special, to_digits, Base, CyclicNumber, DigitString,
    ReptendLevel,
};
use cyclic_primality::{prime_indices, Classifier, FactorOracle, IndexOrigin};
use num_bigint::BigUint;
use tracing::debug;

use crate::error::Result;

/// What was derived from the prime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicSummary {
    pub prime: u64,
    pub base: Base,
    pub digits: String,
    pub reptend_level: ReptendLevel,
    pub period: u64,
}

impl From<&CyclicNumber> for CyclicSummary {
    fn from(cyclic: &CyclicNumber) -> Self {
        Self {
            prime: cyclic.prime(),
            base: cyclic.base(),
            digits: cyclic.digits().to_string(),
            reptend_level: cyclic.reptend_level(),
            period: cyclic.period(),
        }
    }
}

impl fmt::Display for CyclicSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "For the prime number {} in numeric system {} we got cyclic number {} that is {} reptend level",
            self.prime, self.base, self.digits, self.reptend_level
        )?;
        writeln!(f, "Period {}", self.period)
    }
}

/// A prime sub-number, in its source base and in decimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeHit {
    pub digits: String,
    pub value: BigUint,
}

/// Result of `-prime` or `-number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreReport {
    /// Present when exploring from a prime.
    pub cyclic: Option<CyclicSummary>,
    /// Prime sub-numbers in ascending value order, repeats included.
    pub primes: Vec<PrimeHit>,
}

impl fmt::Display for ExploreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(cyclic) = &self.cyclic {
            write!(f, "{cyclic}")?;
        }
        for hit in &self.primes {
            writeln!(f, "{} in decimal is {}", hit.digits, hit.value)?;
        }
        Ok(())
    }
}

/// Result of `-indices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    pub cyclic: CyclicSummary,
    /// 1-based enumeration positions of the prime sub-numbers.
    pub indices: Vec<usize>,
}

impl fmt::Display for IndexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cyclic)?;
        let joined: Vec<String> = self.indices.iter().map(ToString::to_string).collect();
        writeln!(f, "{}", joined.join(", "))
    }
}

/// One rebuilt sub-number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repaired {
    pub index: u64,
    pub digits: String,
    pub value: BigUint,
}

/// Result of `-repair`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairReport {
    pub cyclic: CyclicSummary,
    pub repaired: Vec<Repaired>,
}

impl fmt::Display for RepairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cyclic)?;
        for r in &self.repaired {
            writeln!(f, "{}: {} in decimal is {}", r.index, r.digits, r.value)?;
        }
        Ok(())
    }
}

async fn prime_sub_numbers<O: FactorOracle>(
    classifier: &Classifier<O>,
    digits: &DigitString,
    max_digits: usize,
) -> Result<Vec<PrimeHit>> {
    let mut values = list_sub_numbers(digits, 1, max_digits)?;
    values.sort();
    debug!(
        candidates = values.len(),
        "classifying sub-numbers of {} up to {} digits", digits, max_digits
    );

    let base = digits.base();
    let primes = classifier.prime_numbers_in_list(&values).await?;
    Ok(primes
        .into_iter()
        .map(|value| PrimeHit {
            digits: to_digits(&value, base),
            value,
        })
        .collect())
}

/// Explore the cyclic number of `numerator / prime` in `base`.
pub async fn explore_by_prime<O: FactorOracle>(
    classifier: &Classifier<O>,
    prime: u64,
    base: Base,
    max_digits: usize,
    numerator: u64,
) -> Result<ExploreReport> {
    let cyclic = CyclicNumber::new(prime, base, numerator)?;
    let primes = prime_sub_numbers(classifier, cyclic.digits(), max_digits).await?;
    Ok(ExploreReport {
        cyclic: Some(CyclicSummary::from(&cyclic)),
        primes,
    })
}

/// Explore a literal digit string; rotations of one block are different inputs.
pub async fn explore_by_number<O: FactorOracle>(
    classifier: &Classifier<O>,
    digits: &DigitString,
    max_digits: usize,
) -> Result<ExploreReport> {
    let primes = prime_sub_numbers(classifier, digits, max_digits).await?;
    Ok(ExploreReport {
        cyclic: None,
        primes,
    })
}

/// Enumeration indices (1-based, canonical order) of the prime sub-numbers.
///
/// Uses the local primality test only.
pub fn prime_index_listing(
    prime: u64,
    base: Base,
    max_digits: usize,
    numerator: u64,
) -> Result<IndexReport> {
    let cyclic = CyclicNumber::new(prime, base, numerator)?;
    let values = list_sub_numbers(cyclic.digits(), 1, max_digits)?;
    Ok(IndexReport {
        cyclic: CyclicSummary::from(&cyclic),
        indices: prime_indices(&values, IndexOrigin::One),
    })
}

/// Rebuild the sub-numbers named by leading-digit `indices`.
pub fn repair_listing(
    prime: u64,
    base: Base,
    numerator: u64,
    indices: &[u64],
) -> Result<RepairReport> {
    let cyclic = CyclicNumber::new(prime, base, numerator)?;
    let repaired = indices
        .iter()
        .map(|&index| {
            let digits = repair_by_idx_special(cyclic.digits(), index)?;
            let value = cyclic_core::parse_digits(&digits, base)?;
            Ok(Repaired {
                index,
                digits,
                value,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RepairReport {
        cyclic: CyclicSummary::from(&cyclic),
        repaired,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclic_primality::Error as PrimalityError;

    struct NoOracle;

    impl FactorOracle for NoOracle {
        async fn factor(&self, _value: &BigUint) -> cyclic_primality::Result<Vec<BigUint>> {
            Err(PrimalityError::OracleUnavailable("offline".into()))
        }
    }

    fn n(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[tokio::test]
    async fn seventh_with_numerator_two() {
        let classifier = Classifier::new(NoOracle);
        let report = explore_by_prime(&classifier, 7, Base::DECIMAL, 2, 2)
            .await
            .unwrap();

        let cyclic = report.cyclic.as_ref().unwrap();
        assert_eq!(cyclic.digits, "285714");
        assert_eq!(cyclic.period, 6);
        let values: Vec<_> = report.primes.iter().map(|h| h.value.clone()).collect();
        assert_eq!(values, vec![n(2), n(5), n(7), n(71)]);
    }

    #[tokio::test]
    async fn binary_number_renders_source_digits() {
        let classifier = Classifier::new(NoOracle);
        let digits = DigitString::new("0111", Base::new(2).unwrap()).unwrap();
        let report = explore_by_number(&classifier, &digits, 3).await.unwrap();

        assert_eq!(
            report.to_string(),
            "10 in decimal is 2\n\
             11 in decimal is 3\n\
             11 in decimal is 3\n\
             11 in decimal is 3\n\
             101 in decimal is 5\n\
             111 in decimal is 7\n"
        );
    }

    #[tokio::test]
    async fn oracle_failure_propagates() {
        let config = cyclic_primality::ClassifierConfig {
            oracle_threshold_digits: 1,
            ..Default::default()
        };
        let classifier = Classifier::with_config(NoOracle, config);
        let result = explore_by_prime(&classifier, 7, Base::DECIMAL, 1, 1).await;
        assert!(matches!(
            result,
            Err(crate::Error::Primality(PrimalityError::OracleUnavailable(_)))
        ));
    }

    #[tokio::test]
    async fn no_period_is_reported() {
        let classifier = Classifier::new(NoOracle);
        let result = explore_by_prime(&classifier, 5, Base::DECIMAL, 2, 1).await;
        assert_eq!(result.unwrap_err().exit_code(), crate::error::EXIT_NO_PERIOD);
    }

    #[test]
    fn index_listing_of_seventh() {
        let report = prime_index_listing(7, Base::DECIMAL, 2, 1).unwrap();
        assert_eq!(report.cyclic.digits, "142857");
        // [1, 4, 2, 8, 5, 7, 14, 42, 28, 85, 57, 71]
        assert_eq!(report.indices, vec![3, 5, 6, 12]);
        assert!(report.to_string().ends_with("3, 5, 6, 12\n"));
    }

    #[test]
    fn repair_listing_of_seventh() {
        let report = repair_listing(7, Base::DECIMAL, 1, &[2, 11]).unwrap();
        let rebuilt: Vec<_> = report.repaired.iter().map(|r| r.digits.as_str()).collect();
        assert_eq!(rebuilt, vec!["2", "71"]);
        assert_eq!(report.repaired[1].value, n(71));
        assert!(report.to_string().contains("11: 71 in decimal is 71\n"));
    }

    #[test]
    fn summary_header() {
        let cyclic = CyclicNumber::unit(13, Base::DECIMAL).unwrap();
        assert_eq!(
            CyclicSummary::from(&cyclic).to_string(),
            "For the prime number 13 in numeric system 10 we got cyclic number 076923 that is 2 reptend level\n\
             Period 6\n"
        );
    }
}
