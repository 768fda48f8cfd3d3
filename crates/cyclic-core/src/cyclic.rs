//! Cyclic numbers: the repeating block of numerator/P in base N.
//!
//! The period k of 1/P in base N is the multiplicative order of N modulo P,
//! the smallest k > 0 with N^k ≡ 1 (mod P). Multiplying by N^k shifts one
//! whole period left of the radix point, so
//!
//! ```text
//! block = floor(numerator · N^k / P)
//! ```
//!
//! written in base N and zero-padded to k digits. For P = 7, N = 10 this is
//! `142857`.
//!
//! # Reptend level
//!
//! `(P − 1) / k`. A full reptend prime has level 1. The level is kept as an
//! exact fraction because k need not divide P − 1 when P is composite.

use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;

use crate::digits::{Base, DigitString};
use crate::error::{Error, Result};

/// Multiplicative order of `base` modulo `modulus`.
///
/// The search is bounded to `[1, modulus)`; when `base` and `modulus` share
/// a factor no such order exists and [`Error::NoPeriodFound`] is returned.
pub fn multiplicative_order(base: Base, modulus: u64) -> Result<u64> {
    if modulus < 2 {
        return Err(Error::invalid(format!(
            "modulus must be at least 2, got {modulus}"
        )));
    }

    let m = modulus as u128;
    let n = base.radix() as u128 % m;
    let mut power = n;
    for k in 1..modulus {
        if power == 1 {
            return Ok(k);
        }
        power = power * n % m;
    }

    Err(Error::NoPeriodFound {
        prime: modulus,
        base: base.radix(),
    })
}

/// Exact reptend level `(P − 1) / period`, stored in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReptendLevel {
    numer: u64,
    denom: u64,
}

impl ReptendLevel {
    /// Level for a prime with the given period.
    pub fn new(prime: u64, period: u64) -> Self {
        let numer = prime - 1;
        let g = numer.gcd(&period).max(1);
        Self {
            numer: numer / g,
            denom: period / g,
        }
    }

    /// True when the period divides P − 1.
    pub const fn is_integral(&self) -> bool {
        self.denom == 1
    }

    /// The level as an integer, if it is one.
    pub const fn as_integer(&self) -> Option<u64> {
        if self.denom == 1 {
            Some(self.numer)
        } else {
            None
        }
    }

    /// The level as a float.
    pub fn as_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Numerator and denominator in lowest terms.
    pub const fn parts(&self) -> (u64, u64) {
        (self.numer, self.denom)
    }
}

impl fmt::Display for ReptendLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/// The repeating digit block of `numerator / prime` in `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CyclicNumber {
    prime: u64,
    numerator: u64,
    period: u64,
    reptend_level: ReptendLevel,
    value: BigUint,
    digits: DigitString,
}

impl CyclicNumber {
    /// Build the cyclic number of `numerator / prime` in `base`.
    ///
    /// `prime` is not checked for primality. The numerator is reduced modulo
    /// `prime` before the block is taken, so the block always has exactly
    /// `period` digits. Multiples of `prime` are rejected.
    pub fn new(prime: u64, base: Base, numerator: u64) -> Result<Self> {
        if numerator == 0 {
            return Err(Error::invalid("numerator must be positive"));
        }

        let period = multiplicative_order(base, prime)?;
        if numerator % prime == 0 {
            return Err(Error::invalid(format!(
                "numerator {numerator} is a multiple of {prime}; the block would be all zeros"
            )));
        }
        let exponent = u32::try_from(period)
            .map_err(|_| Error::invalid(format!("period {period} is too large")))?;
        let width = usize::try_from(period)
            .map_err(|_| Error::invalid(format!("period {period} is too large")))?;

        let shifted = BigUint::from(numerator % prime) * BigUint::from(base.radix()).pow(exponent);
        let value = shifted / BigUint::from(prime);
        let digits = DigitString::from_value(&value, base, width);

        Ok(Self {
            prime,
            numerator,
            period,
            reptend_level: ReptendLevel::new(prime, period),
            value,
            digits,
        })
    }

    /// Cyclic number of `1 / prime`.
    pub fn unit(prime: u64, base: Base) -> Result<Self> {
        Self::new(prime, base, 1)
    }

    pub const fn prime(&self) -> u64 {
        self.prime
    }

    pub const fn base(&self) -> Base {
        self.digits.base()
    }

    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Length of the repeating block.
    pub const fn period(&self) -> u64 {
        self.period
    }

    pub const fn reptend_level(&self) -> ReptendLevel {
        self.reptend_level
    }

    /// `floor(numerator · N^period / P)` as an integer.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The zero-padded block, exactly `period` digits long.
    pub fn digits(&self) -> &DigitString {
        &self.digits
    }

    pub fn into_digits(self) -> DigitString {
        self.digits
    }
}
