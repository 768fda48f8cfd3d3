//! Sub-number enumeration over a cyclically repeated digit string.
//!
//! A sub-number is a window of `length` consecutive digits starting at
//! `offset` in the digit string read as an endless cycle. Windows are
//! enumerated in canonical order: length-major, offset-minor.
//!
//! ```text
//! "142857", lengths 1..=2
//!
//! index:  0  1  2  3  4  5   6  7  8  9 10 11
//! value:  1  4  2  8  5  7  14 42 28 85 57 71
//!         └── length 1 ──┘  └─── length 2 ───┘
//! ```
//!
//! Windows keep their leading zeros as text, so `"07"` and `"7"` occupy
//! different positions even though they share a value.

use num_bigint::BigUint;

use crate::digits::{Base, DigitString};
use crate::error::{Error, Result};

/// A 0-based position in the canonical enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubNumberIndex(pub u64);

impl SubNumberIndex {
    /// First position.
    pub const FIRST: Self = Self(0);

    #[inline]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Position of the window (`length`, `offset`) when lengths start at `digits_min`.
    pub const fn of(period: u64, digits_min: u64, length: u64, offset: u64) -> Self {
        Self((length - digits_min) * period + offset)
    }

    /// Window length at this position, or `None` if it does not fit in a `u64`.
    pub const fn length(&self, period: u64, digits_min: u64) -> Option<u64> {
        digits_min.checked_add(self.0 / period)
    }

    /// Window offset at this position.
    pub const fn offset(&self, period: u64) -> u64 {
        self.0 % period
    }

    /// 1-based form, as used in OEIS listings.
    pub const fn one_based(&self) -> u64 {
        self.0 + 1
    }
}

impl From<u64> for SubNumberIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SubNumberIndex> for u64 {
    fn from(value: SubNumberIndex) -> Self {
        value.0
    }
}

/// One window of the repeated digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubNumber {
    /// Number of digits in the window.
    pub length: usize,
    /// Start position within one period.
    pub offset: usize,
    /// The window text, leading zeros included.
    pub digits: String,
    /// The window parsed in the source base.
    pub value: BigUint,
}

/// Longest window any enumeration or repair will materialize.
pub const MAX_WINDOW_DIGITS: usize = 1 << 20;

/// Number of windows for lengths `digits_min..=digits_max` over `period` offsets.
#[inline]
pub const fn enumeration_len(period: usize, digits_min: usize, digits_max: usize) -> usize {
    (digits_max - digits_min + 1) * period
}

fn check_range(digits_min: usize, digits_max: usize) -> Result<()> {
    if digits_min == 0 {
        return Err(Error::invalid("minimum sub-number length must be at least 1"));
    }
    if digits_max < digits_min {
        return Err(Error::invalid(format!(
            "maximum length {digits_max} is below minimum length {digits_min}"
        )));
    }
    check_window(digits_max)
}

pub(crate) fn check_window(length: usize) -> Result<()> {
    if length > MAX_WINDOW_DIGITS {
        return Err(Error::invalid(format!(
            "sub-number length {length} exceeds the limit of {MAX_WINDOW_DIGITS} digits"
        )));
    }
    Ok(())
}

fn parse_window(window: &str, base: Base) -> BigUint {
    // Windows are cut from a validated DigitString.
    BigUint::parse_bytes(window.as_bytes(), base.radix()).unwrap_or_default()
}

/// Iterator over sub-numbers in canonical order.
pub struct SubNumbers {
    repeated: String,
    base: Base,
    period: usize,
    digits_max: usize,
    length: usize,
    offset: usize,
}

impl SubNumbers {
    /// Enumerate windows of `digits_min..=digits_max` digits.
    pub fn new(digits: &DigitString, digits_min: usize, digits_max: usize) -> Result<Self> {
        check_range(digits_min, digits_max)?;
        let period = digits.len();
        (digits_max - digits_min + 1)
            .checked_mul(period)
            .ok_or_else(|| Error::invalid("too many sub-numbers to enumerate"))?;

        Ok(Self {
            repeated: digits.repeated_to(period + digits_max - 1),
            base: digits.base(),
            period,
            digits_max,
            length: digits_min,
            offset: 0,
        })
    }

    fn remaining(&self) -> usize {
        if self.length > self.digits_max {
            return 0;
        }
        (self.digits_max - self.length + 1) * self.period - self.offset
    }
}

impl Iterator for SubNumbers {
    type Item = SubNumber;

    fn next(&mut self) -> Option<Self::Item> {
        if self.length > self.digits_max {
            return None;
        }

        let window = &self.repeated[self.offset..self.offset + self.length];
        let item = SubNumber {
            length: self.length,
            offset: self.offset,
            digits: window.to_string(),
            value: parse_window(window, self.base),
        };

        self.offset += 1;
        if self.offset == self.period {
            self.offset = 0;
            self.length += 1;
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SubNumbers {}

/// Every sub-number value of lengths `digits_min..=digits_max`, in canonical order.
///
/// The result holds `(digits_max - digits_min + 1) * period` values and is not
/// sorted.
pub fn list_sub_numbers(
    digits: &DigitString,
    digits_min: usize,
    digits_max: usize,
) -> Result<Vec<BigUint>> {
    Ok(SubNumbers::new(digits, digits_min, digits_max)?
        .map(|s| s.value)
        .collect())
}

/// The sub-number at `index` when lengths start at `digits_min`.
///
/// Every index is valid: positions past one length roll over to the next.
pub fn sub_number_at(
    digits: &DigitString,
    index: SubNumberIndex,
    digits_min: usize,
) -> Result<SubNumber> {
    check_range(digits_min, digits_min)?;
    let period = digits.len() as u64;
    let length = index
        .length(period, digits_min as u64)
        .and_then(|length| usize::try_from(length).ok())
        .ok_or_else(|| Error::invalid(format!("index {} is too large", index.0)))?;
    check_window(length)?;
    let offset = index.offset(period) as usize;

    let repeated = digits.repeated_to(offset + length);
    let window = &repeated[offset..offset + length];

    Ok(SubNumber {
        length,
        offset,
        digits: window.to_string(),
        value: parse_window(window, digits.base()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(text: &str) -> DigitString {
        DigitString::new(text, Base::DECIMAL).unwrap()
    }

    fn values(v: &[u32]) -> Vec<BigUint> {
        v.iter().map(|&x| BigUint::from(x)).collect()
    }

    #[test]
    fn seventh_lengths_one_and_two() {
        let subs = list_sub_numbers(&d("142857"), 1, 2).unwrap();
        assert_eq!(
            subs,
            values(&[1, 4, 2, 8, 5, 7, 14, 42, 28, 85, 57, 71])
        );
    }

    #[test]
    fn windows_wrap_around() {
        let subs: Vec<_> = SubNumbers::new(&d("142857"), 6, 6).unwrap().collect();
        assert_eq!(subs.len(), 6);
        assert_eq!(subs[0].digits, "142857");
        assert_eq!(subs[5].digits, "714285");
    }

    #[test]
    fn windows_longer_than_period() {
        let subs: Vec<_> = SubNumbers::new(&d("09"), 5, 5).unwrap().collect();
        assert_eq!(subs[0].digits, "09090");
        assert_eq!(subs[1].digits, "90909");
        assert_eq!(subs[0].value, BigUint::from(9090u32));
    }

    #[test]
    fn leading_zeros_parse_to_smaller_values() {
        let subs: Vec<_> = SubNumbers::new(&d("076923"), 2, 2).unwrap().collect();
        assert_eq!(subs[0].digits, "07");
        assert_eq!(subs[0].value, BigUint::from(7u32));
        assert_eq!(subs[5].digits, "30");
    }

    #[test]
    fn exact_size() {
        let mut it = SubNumbers::new(&d("142857"), 2, 4).unwrap();
        assert_eq!(it.len(), 18);
        it.next();
        assert_eq!(it.len(), 17);
        assert_eq!(it.count(), 17);
    }

    #[test]
    fn other_base() {
        let digits = DigitString::new("1f", Base::new(16).unwrap()).unwrap();
        let subs = list_sub_numbers(&digits, 1, 2).unwrap();
        assert_eq!(subs, values(&[1, 15, 0x1f, 0xf1]));
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(list_sub_numbers(&d("142857"), 0, 2).is_err());
        assert!(list_sub_numbers(&d("142857"), 3, 2).is_err());
    }

    #[test]
    fn rejects_oversized_windows() {
        let digits = d("142857");
        assert!(matches!(
            list_sub_numbers(&digits, 1, usize::MAX),
            Err(Error::InvalidArgument(_))
        ));
        assert!(SubNumbers::new(&digits, 1, MAX_WINDOW_DIGITS + 1).is_err());
        assert!(SubNumbers::new(&digits, MAX_WINDOW_DIGITS, MAX_WINDOW_DIGITS).is_ok());
    }

    #[test]
    fn index_near_u64_max() {
        assert_eq!(SubNumberIndex(u64::MAX).length(1, 1), None);
        assert!(matches!(
            sub_number_at(&d("1"), SubNumberIndex(u64::MAX), 1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(sub_number_at(&d("142857"), SubNumberIndex(u64::MAX), 1).is_err());
    }

    #[test]
    fn index_bijection() {
        let digits = d("142857");
        let all: Vec<_> = SubNumbers::new(&digits, 2, 4).unwrap().collect();
        for (i, expected) in all.iter().enumerate() {
            let idx = SubNumberIndex(i as u64);
            let got = sub_number_at(&digits, idx, 2).unwrap();
            assert_eq!(&got, expected, "position {}", i);
            assert_eq!(
                SubNumberIndex::of(6, 2, got.length as u64, got.offset as u64),
                idx
            );
        }
    }

    #[test]
    fn one_based_index() {
        assert_eq!(SubNumberIndex::FIRST.one_based(), 1);
        assert_eq!(SubNumberIndex::new(11).one_based(), 12);
    }

    proptest! {
        #[test]
        fn every_window_has_its_length(
            text in "[0-9]{1,12}",
            digits_min in 1usize..6,
            extra in 0usize..10,
        ) {
            let digits = d(&text);
            let digits_max = digits_min + extra;
            let subs: Vec<_> = SubNumbers::new(&digits, digits_min, digits_max)
                .unwrap()
                .collect();

            prop_assert_eq!(subs.len(), enumeration_len(text.len(), digits_min, digits_max));
            for (i, s) in subs.iter().enumerate() {
                prop_assert_eq!(s.digits.len(), s.length);
                prop_assert_eq!(s.length, digits_min + i / text.len());
                prop_assert_eq!(s.offset, i % text.len());
                prop_assert_eq!(&s.value, &digits_to_value(&s.digits));
            }
        }
    }

    fn digits_to_value(text: &str) -> BigUint {
        BigUint::parse_bytes(text.as_bytes(), 10).unwrap()
    }
}
