//! Base-N digit strings over arbitrary-precision integers.
//!
//! Cyclic material is handled as text, not as integers: a window such as
//! `"01"` taken out of `"...9801..."` is a different sub-number position from
//! `"1"`, even though both parse to the same value. [`DigitString`] keeps the
//! leading zeros; conversion to [`BigUint`] happens only at the edges.
//!
//! Digits above 9 use the letters `a..z` (either case on input, lowercase on
//! output), which limits bases to 2..=36.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base (`0-9` plus `a-z`).
pub const MAX_BASE: u32 = 36;

/// A validated numeric base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Base(u32);

impl Base {
    /// Base 10.
    pub const DECIMAL: Self = Self(10);

    /// Create a base, rejecting radices outside `2..=36`.
    pub fn new(radix: u32) -> Result<Self> {
        if !(MIN_BASE..=MAX_BASE).contains(&radix) {
            return Err(Error::invalid(format!(
                "base must be in {MIN_BASE}..={MAX_BASE}, got {radix}"
            )));
        }
        Ok(Self(radix))
    }

    /// Get the raw radix.
    #[inline]
    pub const fn radix(&self) -> u32 {
        self.0
    }

    /// Numeric value of a digit character in this base.
    pub fn digit_value(&self, c: char) -> Option<u32> {
        c.to_digit(self.0)
    }

    /// Character for a digit value in this base.
    pub fn digit_char(&self, digit: u32) -> Option<char> {
        std::char::from_digit(digit, self.0)
    }
}

impl TryFrom<u32> for Base {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Base> for u32 {
    fn from(value: Base) -> Self {
        value.0
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-empty base-N digit sequence whose leading zeros are significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigitString {
    text: String,
    base: Base,
}

impl DigitString {
    /// Validate `text` as digits of `base`.
    pub fn new(text: &str, base: Base) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::invalid("digit string must not be empty"));
        }
        if let Some(bad) = text.chars().find(|&c| base.digit_value(c).is_none()) {
            return Err(Error::invalid(format!(
                "'{bad}' is not a digit in base {base}"
            )));
        }
        Ok(Self {
            text: text.to_ascii_lowercase(),
            base,
        })
    }

    /// Render `value` in `base`, left-padded with zeros to at least `width`.
    pub fn from_value(value: &BigUint, base: Base, width: usize) -> Self {
        Self {
            text: to_padded_digits(value, base, width),
            base,
        }
    }

    /// The digits as text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The base the digits are written in.
    #[inline]
    pub const fn base(&self) -> Base {
        self.base
    }

    /// Number of digits, which is the period when this is a cyclic block.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Numeric value of the digit at `position`.
    pub fn digit_at(&self, position: usize) -> Option<u32> {
        self.text
            .as_bytes()
            .get(position)
            .and_then(|&b| self.base.digit_value(b as char))
    }

    /// Iterate the numeric digit values in order.
    pub fn digits(&self) -> impl Iterator<Item = u32> + '_ {
        self.text
            .chars()
            .filter_map(move |c| self.base.digit_value(c))
    }

    /// Parse the whole string as an integer.
    pub fn value(&self) -> BigUint {
        // Validated on construction, so the parse cannot fail.
        BigUint::parse_bytes(self.text.as_bytes(), self.base.radix()).unwrap_or_default()
    }

    /// The string repeated the fewest whole times to hold `min_len` characters.
    ///
    /// Always returns at least one full copy.
    pub fn repeated_to(&self, min_len: usize) -> String {
        let period = self.text.len();
        let cycles = min_len.div_ceil(period).max(1);
        self.text.repeat(cycles)
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parse base-N digit text into an integer. Leading zeros are accepted.
pub fn parse_digits(text: &str, base: Base) -> Result<BigUint> {
    DigitString::new(text, base).map(|d| d.value())
}

/// Render `value` in `base` without padding.
pub fn to_digits(value: &BigUint, base: Base) -> String {
    value.to_str_radix(base.radix())
}

/// Render `value` in `base`, left-padded with `'0'` to at least `width` digits.
pub fn to_padded_digits(value: &BigUint, base: Base, width: usize) -> String {
    let digits = to_digits(value, base);
    if digits.len() >= width {
        return digits;
    }
    let mut padded = "0".repeat(width - digits.len());
    padded.push_str(&digits);
    padded
}

/// Number of digits of `value` in `base` (zero has one digit).
pub fn digit_count(value: &BigUint, base: Base) -> usize {
    if value.is_zero() {
        return 1;
    }
    to_digits(value, base).len()
}

/// Most significant digit of `value` in `base`.
pub fn leading_digit(value: &BigUint, base: Base) -> u32 {
    to_digits(value, base)
        .chars()
        .next()
        .and_then(|c| base.digit_value(c))
        .unwrap_or(0)
}
