//! Leading-digit indexing for OEIS cross-references.
//!
//! OEIS entries store a short index instead of each full digit string. The
//! index of a sub-number is built from its digit count and the rank of its
//! leading digit among the cyclic number's single digits, sorted ascending:
//!
//! ```text
//! index = (digit_count − 1) · period + rank + 1
//! ```
//!
//! For `142857` the sorted single digits are `[1, 2, 4, 5, 7, 8]`, so `71`
//! (two digits, leading `7` at rank 4) has index `6 + 4 + 1 = 11`.
//!
//! This scheme is not the enumeration index of [`crate::SubNumberIndex`].
//!
//! # Ties
//!
//! When a digit occurs more than once in the block, its first position in the
//! sorted list wins. This keeps previously published indices stable; the
//! other positions of a repeated digit decode to the same window.

use num_bigint::BigUint;

use crate::digits::{digit_count, leading_digit, DigitString};
use crate::error::{Error, Result};
use crate::subnumbers::check_window;

/// Single digits of the block, sorted ascending.
pub fn sorted_single_digits(digits: &DigitString) -> Vec<u32> {
    let mut singles: Vec<u32> = digits.digits().collect();
    singles.sort_unstable();
    singles
}

/// Leading-digit index of `prime` against the cyclic block `digits`.
pub fn get_idx(digits: &DigitString, prime: &BigUint) -> Result<u64> {
    let base = digits.base();
    let period = digits.len() as u64;
    let singles = sorted_single_digits(digits);

    let total_digits = digit_count(prime, base) as u64;
    let first = leading_digit(prime, base);
    let rank = singles.iter().position(|&d| d == first).ok_or_else(|| {
        Error::invalid(format!(
            "leading digit of {} does not occur in {}",
            prime.to_str_radix(base.radix()),
            digits
        ))
    })? as u64;

    Ok((total_digits - 1) * period + rank + 1)
}

/// The `size`-digit window starting at the first occurrence of digit `first`.
pub fn repair_by_first_and_size(digits: &DigitString, first: u32, size: usize) -> Result<String> {
    if size == 0 {
        return Err(Error::invalid("window size must be at least 1"));
    }
    check_window(size)?;

    let base = digits.base();
    let needle = base
        .digit_char(first)
        .ok_or_else(|| Error::invalid(format!("{first} is not a digit in base {base}")))?;
    let start = digits
        .as_str()
        .find(needle)
        .ok_or_else(|| Error::invalid(format!("digit '{needle}' does not occur in {digits}")))?;

    let repeated = digits.repeated_to(digits.len() + size - 1);
    Ok(repeated[start..start + size].to_string())
}

/// Reconstruct the digit string named by a leading-digit index.
///
/// Inverse of [`get_idx`] up to leading-digit ties.
pub fn repair_by_idx_special(digits: &DigitString, idx: u64) -> Result<String> {
    if idx == 0 {
        return Err(Error::invalid("leading-digit indices start at 1"));
    }

    let period = digits.len() as u64;
    let total_digits = idx.div_ceil(period);
    let offset = match idx % period {
        0 => period,
        rem => rem,
    };

    let singles = sorted_single_digits(digits);
    let first = singles[(offset - 1) as usize];
    let size = usize::try_from(total_digits)
        .map_err(|_| Error::invalid(format!("index {idx} is too large")))?;

    repair_by_first_and_size(digits, first, size)
}
